use serde::{Deserialize, Serialize};

/// Where a newly mapped client lands in the desktop's client list.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InsertBehavior {
    /// Most recently mapped first; the newcomer becomes the master.
    Top,
    /// Mapping order; the newcomer joins the end of the stack.
    #[default]
    Bottom,
}
