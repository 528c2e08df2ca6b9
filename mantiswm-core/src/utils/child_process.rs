//! Starts user commands detached from the manager and reaps them when they
//! exit.
use crate::errors::{MantisError, Result};
use std::collections::HashMap;
use std::process::{Child, Command, Stdio};
use std::sync::{atomic::AtomicBool, Arc};

pub type ChildID = u32;

#[derive(Debug, Default)]
pub struct Children {
    inner: HashMap<ChildID, Child>,
}

impl Children {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Insert a `Child` in the `Children`. Returns true on success.
    pub fn insert(&mut self, child: Child) -> bool {
        self.inner.insert(child.id(), child).is_none()
    }

    /// Merge another `Children` into this `Children`.
    pub fn merge(&mut self, reaper: Self) {
        self.inner.extend(reaper.inner);
    }

    /// Remove all child processes which finished.
    pub fn reap(&mut self) {
        self.inner
            .retain(|_, child| child.try_wait().map_or(true, |ret| ret.is_none()));
    }
}

impl FromIterator<Child> for Children {
    fn from_iter<T: IntoIterator<Item = Child>>(iter: T) -> Self {
        let mut children = Self::new();
        for child in iter {
            children.insert(child);
        }
        children
    }
}

/// Register the `SIGCHLD` flag so the event loop knows when to reap.
pub fn register_child_hook(flag: Arc<AtomicBool>) {
    _ = signal_hook::flag::register(signal_hook::consts::signal::SIGCHLD, flag)
        .map_err(|err| tracing::error!("Cannot register SIGCHLD signal handler: {:?}", err));
}

/// Spawn a user command, fire and forget.
/// Assumes STDIN/STDERR/STDOUT unwanted.
///
/// # Errors
///
/// Errors on an empty argv or when the program cannot be started.
pub fn spawn_command(argv: &[String], children: &mut Children) -> Result<ChildID> {
    let (program, args) = argv.split_first().ok_or(MantisError::EmptyCommandLine)?;
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    let pid = child.id();
    children.insert(child);
    Ok(pid)
}
