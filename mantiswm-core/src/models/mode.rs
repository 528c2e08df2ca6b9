use crate::errors::MantisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tiling layout mode of one desktop.
///
/// The numeric ids are part of the status wire format and must stay stable.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Stack,
    Monocle,
    BottomStack,
    Grid,
}

impl Mode {
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Stack => 0,
            Self::Monocle => 1,
            Self::BottomStack => 2,
            Self::Grid => 3,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stack => "Stack",
            Self::Monocle => "Monocle",
            Self::BottomStack => "BottomStack",
            Self::Grid => "Grid",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Mode {
    type Err = MantisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Stack" => Ok(Self::Stack),
            "Monocle" => Ok(Self::Monocle),
            "BottomStack" => Ok(Self::BottomStack),
            "Grid" => Ok(Self::Grid),
            _ => Err(MantisError::ParseMode(s.to_owned())),
        }
    }
}
