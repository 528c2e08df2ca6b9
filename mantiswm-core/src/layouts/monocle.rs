use crate::models::{BBox, Client, WindowHandle};

/// Every tileable client covers the whole usable rectangle; the restack
/// order decides which one shows. Covered clients stay mapped.
pub(crate) fn update(usable: BBox, clients: &[Client]) -> Vec<(WindowHandle, BBox)> {
    clients
        .iter()
        .filter(|c| c.is_tileable())
        .map(|c| (c.handle, usable))
        .collect()
}
