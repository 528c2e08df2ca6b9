use crate::models::{BBox, Client, WindowHandle};

/// Near-square grid. `cols` is the smallest integer whose square covers the
/// client count, except that five clients force two columns; that override
/// is a deliberate policy, not an accident. Later columns absorb the
/// remainder rows one by one.
pub(crate) fn update(
    usable: BBox,
    clients: &[Client],
    border_width: i32,
) -> Vec<(WindowHandle, BBox)> {
    let tileable: Vec<&Client> = clients.iter().filter(|c| c.is_tileable()).collect();
    let n = tileable.len();
    if n == 0 {
        return Vec::new();
    }

    let mut cols = 0;
    while cols <= n / 2 {
        if cols * cols >= n {
            break;
        }
        cols += 1;
    }
    if n == 5 {
        cols = 2;
    }

    let mut rows = n / cols;
    let ch = usable.height - border_width;
    let cw = (usable.width - border_width) / cols as i32;

    let mut rects = Vec::with_capacity(n);
    let mut cn = 0;
    let mut rn = 0;
    for (i, client) in tileable.iter().enumerate() {
        if i / rows + 1 > cols - n % cols {
            rows = n / cols + 1;
        }
        rects.push((
            client.handle,
            BBox {
                x: usable.x + cn * cw,
                y: usable.y + rn as i32 * ch / rows as i32,
                width: cw - border_width,
                height: ch / rows as i32 - border_width,
            },
        ));
        rn += 1;
        if rn >= rows {
            rn = 0;
            cn += 1;
        }
    }
    rects
}
