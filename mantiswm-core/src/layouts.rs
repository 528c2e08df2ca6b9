//! Pure geometry: turns a desktop's client list into move-resize commands.
mod grid;
mod monocle;
mod stack;

use crate::models::{BBox, Desktop, Mode, WindowHandle};

/// Compute the target rectangle of every tileable client of a desktop.
///
/// Clients that are fullscreen, floating or transient keep whatever
/// geometry they already have and never appear in the result. A desktop
/// with fewer than two clients is always arranged as monocle, whatever its
/// mode. The caller owns applying the rectangles; nothing here performs
/// I/O.
#[must_use]
pub fn arrange(
    usable: BBox,
    desktop: &Desktop,
    master_fraction: f32,
    border_width: i32,
) -> Vec<(WindowHandle, BBox)> {
    let mode = if desktop.clients.len() < 2 {
        Mode::Monocle
    } else {
        desktop.mode
    };
    match mode {
        Mode::Monocle => monocle::update(usable, &desktop.clients),
        Mode::Grid => grid::update(usable, &desktop.clients, border_width),
        Mode::Stack => stack::update(
            usable,
            &desktop.clients,
            desktop.master_size,
            desktop.growth,
            master_fraction,
            border_width,
            false,
        ),
        Mode::BottomStack => stack::update(
            usable,
            &desktop.clients,
            desktop.master_size,
            desktop.growth,
            master_fraction,
            border_width,
            true,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InsertBehavior;
    use crate::models::Client;

    fn usable() -> BBox {
        BBox {
            x: 0,
            y: 0,
            width: 1000,
            height: 800,
        }
    }

    fn desktop(mode: Mode, count: u64) -> Desktop {
        let mut desktop = Desktop::new(mode, true);
        for h in 1..=count {
            desktop.attach(Client::new(WindowHandle(h), None), InsertBehavior::Bottom);
        }
        desktop
    }

    #[test]
    fn a_lone_client_fills_the_usable_rectangle() {
        let desktop = desktop(Mode::Stack, 1);
        let rects = arrange(usable(), &desktop, 0.5, 2);
        assert_eq!(rects, vec![(WindowHandle(1), usable())]);
    }

    #[test]
    fn basic_stack_scenario_matches_the_pixel_math() {
        // 1000x800, border 2, master fraction 0.5 => master area 500.
        let desktop = desktop(Mode::Stack, 3);
        let rects = arrange(usable(), &desktop, 0.5, 2);
        assert_eq!(
            rects,
            vec![
                (
                    WindowHandle(1),
                    BBox {
                        x: 0,
                        y: 0,
                        width: 498,
                        height: 798
                    }
                ),
                (
                    WindowHandle(2),
                    BBox {
                        x: 500,
                        y: 0,
                        width: 248,
                        height: 798
                    }
                ),
                (
                    WindowHandle(3),
                    BBox {
                        x: 750,
                        y: 0,
                        width: 248,
                        height: 798
                    }
                ),
            ]
        );
    }

    #[test]
    fn stack_shares_always_sum_to_the_area_after_the_master() {
        // z*(n-1) + (z+d) == L - master_area, for awkward divisions too.
        for (clients, growth) in [(4, 0), (5, 7), (6, -13), (9, 100)] {
            let mut desktop = desktop(Mode::Stack, clients);
            desktop.growth = growth;
            desktop.master_size = 37;
            let rects = arrange(usable(), &desktop, 0.5, 2);
            let master_area = 500 + 37;
            let stack: Vec<_> = rects[1..].iter().collect();
            let total: i32 = stack.iter().map(|(_, r)| r.width + 2).sum();
            assert_eq!(total, 1000 - master_area, "clients={clients} growth={growth}");
            let last = stack.last().unwrap().1;
            assert_eq!(last.x + last.width + 2, 1000);
        }
    }

    #[test]
    fn a_single_stack_client_ignores_growth() {
        let mut desktop = desktop(Mode::Stack, 2);
        desktop.growth = 55;
        let rects = arrange(usable(), &desktop, 0.5, 2);
        assert_eq!(
            rects[1].1,
            BBox {
                x: 500,
                y: 0,
                width: 498,
                height: 798
            }
        );
    }

    #[test]
    fn bottom_stack_splits_along_the_height() {
        let desktop = desktop(Mode::BottomStack, 3);
        let rects = arrange(usable(), &desktop, 0.5, 2);
        // master area 400 of the 800 high rectangle, stack divides the rest
        assert_eq!(
            rects[0].1,
            BBox {
                x: 0,
                y: 0,
                width: 998,
                height: 398
            }
        );
        assert_eq!(rects[1].1.y, 400);
        assert_eq!(rects[2].1.y, 600);
        let total: i32 = rects[1..].iter().map(|(_, r)| r.height + 2).sum();
        assert_eq!(total, 400);
    }

    #[test]
    fn excluded_clients_never_receive_geometry() {
        let mut desktop = desktop(Mode::Stack, 4);
        desktop.client_mut(WindowHandle(2)).unwrap().floating = true;
        desktop.client_mut(WindowHandle(3)).unwrap().fullscreen = true;
        let rects = arrange(usable(), &desktop, 0.5, 2);
        let placed: Vec<u64> = rects.iter().map(|(h, _)| h.0).collect();
        assert_eq!(placed, vec![1, 4]);
    }

    #[test]
    fn monocle_gives_every_tileable_client_the_whole_rectangle() {
        let mut desktop = desktop(Mode::Monocle, 3);
        desktop.client_mut(WindowHandle(2)).unwrap().transient = true;
        let rects = arrange(usable(), &desktop, 0.5, 2);
        assert_eq!(
            rects,
            vec![(WindowHandle(1), usable()), (WindowHandle(3), usable())]
        );
    }

    #[test]
    fn grid_columns_obey_the_square_law_except_at_five() {
        for (n, cols) in [(1, 1), (2, 2), (3, 2), (4, 2), (5, 2), (6, 3), (9, 3), (10, 4)] {
            let desktop = desktop(Mode::Grid, n);
            let rects = arrange(usable(), &desktop, 0.5, 2);
            assert_eq!(rects.len() as u64, n);
            let mut xs: Vec<i32> = rects.iter().map(|(_, r)| r.x).collect();
            xs.sort_unstable();
            xs.dedup();
            assert_eq!(xs.len(), cols, "n={n}");
        }
    }

    #[test]
    fn grid_assigns_every_client_its_own_cell() {
        let desktop = desktop(Mode::Grid, 5);
        let rects = arrange(usable(), &desktop, 0.5, 2);
        let mut cells: Vec<(i32, i32)> = rects.iter().map(|(_, r)| (r.x, r.y)).collect();
        cells.sort_unstable();
        cells.dedup();
        assert_eq!(cells.len(), 5);
        // the n == 5 override packs two columns: two cells left, three right
        let left = rects.iter().filter(|(_, r)| r.x == 0).count();
        assert_eq!(left, 2);
    }
}
