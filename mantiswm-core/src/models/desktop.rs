use super::{Client, Mode, WindowHandle};
use crate::config::InsertBehavior;
use serde::{Deserialize, Serialize};

/// One virtual workspace of one monitor.
///
/// A desktop owns its ordered client list together with the layout
/// parameters and focus references that travel with it through the
/// save/select protocol of [`Monitor`](super::Monitor). The list order is
/// significant: the first tileable client is the master for the stack and
/// monocle layouts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Desktop {
    pub mode: Mode,
    pub master_size: i32,
    pub growth: i32,
    pub show_panel: bool,
    pub clients: Vec<Client>,
    pub current: Option<WindowHandle>,
    pub prev_focus: Option<WindowHandle>,
}

impl Desktop {
    #[must_use]
    pub fn new(mode: Mode, show_panel: bool) -> Self {
        Self {
            mode,
            master_size: 0,
            growth: 0,
            show_panel,
            clients: Vec::new(),
            current: None,
            prev_focus: None,
        }
    }

    /// Attach a client at the head or the tail of the list.
    pub fn attach(&mut self, client: Client, behavior: InsertBehavior) {
        match behavior {
            InsertBehavior::Top => self.clients.insert(0, client),
            InsertBehavior::Bottom => self.clients.push(client),
        }
    }

    /// Splice a client out of the list, wherever it is. Returns `None` and
    /// leaves the list untouched when the client is not a member.
    pub fn detach(&mut self, handle: WindowHandle) -> Option<Client> {
        let index = self.position(handle)?;
        Some(self.clients.remove(index))
    }

    #[must_use]
    pub fn contains(&self, handle: WindowHandle) -> bool {
        self.position(handle).is_some()
    }

    #[must_use]
    pub fn position(&self, handle: WindowHandle) -> Option<usize> {
        self.clients.iter().position(|c| c.handle == handle)
    }

    #[must_use]
    pub fn client(&self, handle: WindowHandle) -> Option<&Client> {
        self.clients.iter().find(|c| c.handle == handle)
    }

    pub fn client_mut(&mut self, handle: WindowHandle) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| c.handle == handle)
    }

    #[must_use]
    pub fn head(&self) -> Option<WindowHandle> {
        self.clients.first().map(|c| c.handle)
    }

    /// The cyclically previous client, or `None` when the list holds fewer
    /// than two clients or the reference is not a member.
    #[must_use]
    pub fn prev_of(&self, handle: WindowHandle) -> Option<WindowHandle> {
        if self.clients.len() < 2 {
            return None;
        }
        let index = self.position(handle)?;
        let len = self.clients.len();
        Some(self.clients[(index + len - 1) % len].handle)
    }

    /// The cyclically next client, under the same rules as [`Self::prev_of`].
    #[must_use]
    pub fn next_of(&self, handle: WindowHandle) -> Option<WindowHandle> {
        if self.clients.len() < 2 {
            return None;
        }
        let index = self.position(handle)?;
        Some(self.clients[(index + 1) % self.clients.len()].handle)
    }

    /// Exchange a client with its cyclic successor. Exactly two list slots
    /// change; every other client keeps its position.
    pub fn swap_down(&mut self, handle: WindowHandle) -> Option<()> {
        if self.clients.len() < 2 {
            return None;
        }
        let index = self.position(handle)?;
        let next = (index + 1) % self.clients.len();
        self.clients.swap(index, next);
        Some(())
    }

    /// Exchange a client with its cyclic predecessor.
    pub fn swap_up(&mut self, handle: WindowHandle) -> Option<()> {
        if self.clients.len() < 2 {
            return None;
        }
        let index = self.position(handle)?;
        let len = self.clients.len();
        self.clients.swap(index, (index + len - 1) % len);
        Some(())
    }

    /// Move a client to the head of the list, pushing the old head into the
    /// spot the client came from.
    pub fn swap_with_head(&mut self, handle: WindowHandle) -> Option<()> {
        if self.clients.len() < 2 {
            return None;
        }
        let index = self.position(handle)?;
        if index == 0 {
            self.clients.swap(0, 1);
        } else {
            self.clients.swap(index, 0);
        }
        Some(())
    }

    pub fn reset_floating(&mut self) {
        for client in &mut self.clients {
            client.floating = false;
        }
    }

    #[must_use]
    pub fn urgent(&self) -> bool {
        self.clients.iter().any(|c| c.urgent)
    }

    #[must_use]
    pub fn tileable_count(&self) -> usize {
        self.clients.iter().filter(|c| c.is_tileable()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop_with(handles: &[u64]) -> Desktop {
        let mut desktop = Desktop::new(Mode::Stack, true);
        for &h in handles {
            desktop.attach(Client::new(WindowHandle(h), None), InsertBehavior::Bottom);
        }
        desktop
    }

    fn handles(desktop: &Desktop) -> Vec<u64> {
        desktop.clients.iter().map(|c| c.handle.0).collect()
    }

    #[test]
    fn attach_top_makes_the_newest_client_head() {
        let mut desktop = Desktop::new(Mode::Stack, true);
        desktop.attach(Client::new(WindowHandle(1), None), InsertBehavior::Top);
        desktop.attach(Client::new(WindowHandle(2), None), InsertBehavior::Top);
        assert_eq!(handles(&desktop), vec![2, 1]);
    }

    #[test]
    fn attach_bottom_keeps_mapping_order() {
        let desktop = desktop_with(&[1, 2, 3]);
        assert_eq!(handles(&desktop), vec![1, 2, 3]);
    }

    #[test]
    fn detach_of_an_absent_client_is_a_noop() {
        let mut desktop = desktop_with(&[1, 2]);
        assert!(desktop.detach(WindowHandle(9)).is_none());
        assert_eq!(handles(&desktop), vec![1, 2]);
    }

    #[test]
    fn every_client_is_visited_exactly_once_after_list_surgery() {
        let mut desktop = desktop_with(&[1, 2, 3, 4, 5]);
        desktop.detach(WindowHandle(3));
        desktop.swap_down(WindowHandle(1));
        desktop.swap_up(WindowHandle(5));
        desktop.attach(Client::new(WindowHandle(6), None), InsertBehavior::Top);
        let mut seen = handles(&desktop);
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 4, 5, 6]);
        assert!(!desktop.contains(WindowHandle(3)));
    }

    #[test]
    fn swaps_wrap_around_the_list_ends() {
        let mut desktop = desktop_with(&[1, 2, 3]);
        desktop.swap_down(WindowHandle(3));
        assert_eq!(handles(&desktop), vec![3, 2, 1]);
        let mut desktop = desktop_with(&[1, 2, 3]);
        desktop.swap_up(WindowHandle(1));
        assert_eq!(handles(&desktop), vec![3, 2, 1]);
    }

    #[test]
    fn swap_with_head_from_head_swaps_with_the_next_client() {
        let mut desktop = desktop_with(&[1, 2, 3]);
        desktop.swap_with_head(WindowHandle(1));
        assert_eq!(handles(&desktop), vec![2, 1, 3]);
        desktop.swap_with_head(WindowHandle(3));
        assert_eq!(handles(&desktop), vec![3, 1, 2]);
    }

    #[test]
    fn cyclic_neighbours_need_at_least_two_clients() {
        let desktop = desktop_with(&[7]);
        assert_eq!(desktop.prev_of(WindowHandle(7)), None);
        assert_eq!(desktop.next_of(WindowHandle(7)), None);
        let desktop = desktop_with(&[7, 8]);
        assert_eq!(desktop.prev_of(WindowHandle(7)), Some(WindowHandle(8)));
        assert_eq!(desktop.next_of(WindowHandle(8)), Some(WindowHandle(7)));
    }
}
