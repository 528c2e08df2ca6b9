use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::state::State;
use crate::utils::child_process::Children;
use std::sync::{atomic::AtomicBool, Arc};

/// Maintains current program state.
pub struct Manager<C, SERVER> {
    pub state: State,
    pub config: C,

    pub(crate) children: Children,
    pub(crate) reap_requested: Arc<AtomicBool>,
    pub(crate) exit_requested: Option<i32>,
    pub display_server: SERVER,
}

impl<C, SERVER> Manager<C, SERVER>
where
    C: Config,
    SERVER: DisplayServer,
{
    pub fn new(config: C) -> Self {
        let display_server = SERVER::new(&config);

        Self {
            state: State::new(&config),
            config,
            children: Default::default(),
            reap_requested: Default::default(),
            exit_requested: None,
            display_server,
        }
    }

    pub fn register_child_hook(&self) {
        crate::child_process::register_child_hook(self.reap_requested.clone());
    }

    /// Exit code a quit command asked for, once one arrived.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_requested
    }
}

#[cfg(test)]
impl Manager<crate::config::TestConfig, crate::display_servers::MockDisplayServer> {
    pub fn new_test() -> Self {
        Self::new(crate::config::TestConfig::default())
    }

    pub fn new_test_with(config: crate::config::TestConfig) -> Self {
        Self::new(config)
    }
}
