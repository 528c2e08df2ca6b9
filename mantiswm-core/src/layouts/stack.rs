use crate::models::{BBox, Client, WindowHandle};

/// Master-and-stack split. The master takes `axis * fraction + master_size`
/// of the split axis (width, or height when `horizontal`) and the full
/// orthogonal length; the stack divides what is left of the split axis.
///
/// With more than one stack client the base share is
/// `z = (remaining - growth) / n`; the division remainder plus the growth
/// goes entirely to the first stack client, so the shares sum exactly to
/// the remaining length and the last client closes flush with the far edge.
#[allow(clippy::too_many_arguments)]
pub(crate) fn update(
    usable: BBox,
    clients: &[Client],
    master_size: i32,
    growth: i32,
    fraction: f32,
    border_width: i32,
    horizontal: bool,
) -> Vec<(WindowHandle, BBox)> {
    let tileable: Vec<&Client> = clients.iter().filter(|c| c.is_tileable()).collect();
    let Some((master, stack)) = tileable.split_first() else {
        return Vec::new();
    };

    let axis = if horizontal {
        usable.height
    } else {
        usable.width
    };

    if stack.is_empty() {
        return vec![(
            master.handle,
            BBox {
                x: usable.x,
                y: usable.y,
                width: usable.width - border_width,
                height: usable.height - border_width,
            },
        )];
    }

    let master_area = (axis as f32 * fraction) as i32 + master_size;
    let remaining = axis - master_area;
    let shares = stack_shares(remaining, growth, stack.len());

    let mut rects = Vec::with_capacity(tileable.len());
    if horizontal {
        rects.push((
            master.handle,
            BBox {
                x: usable.x,
                y: usable.y,
                width: usable.width - border_width,
                height: master_area - border_width,
            },
        ));
        let mut y = usable.y + master_area;
        for (client, share) in stack.iter().zip(shares) {
            rects.push((
                client.handle,
                BBox {
                    x: usable.x,
                    y,
                    width: usable.width - border_width,
                    height: share - border_width,
                },
            ));
            y += share;
        }
    } else {
        rects.push((
            master.handle,
            BBox {
                x: usable.x,
                y: usable.y,
                width: master_area - border_width,
                height: usable.height - border_width,
            },
        ));
        let mut x = usable.x + master_area;
        for (client, share) in stack.iter().zip(shares) {
            rects.push((
                client.handle,
                BBox {
                    x,
                    y: usable.y,
                    width: share - border_width,
                    height: usable.height - border_width,
                },
            ));
            x += share;
        }
    }
    rects
}

/// Split-axis share of each stack client, first client first.
fn stack_shares(remaining: i32, growth: i32, count: usize) -> Vec<i32> {
    // a single stack client fills the remainder, growth does not apply
    if count == 1 {
        return vec![remaining];
    }
    let count = count as i32;
    let z = (remaining - growth) / count;
    let d = (remaining - growth) % count + growth;
    let mut shares = vec![z; count as usize];
    shares[0] = z + d;
    shares
}

#[cfg(test)]
mod tests {
    use super::stack_shares;

    #[test]
    fn shares_absorb_remainder_and_growth_in_the_first_slot() {
        // 100px over 3 clients with 10px growth: 30 base, first gets 30+10
        assert_eq!(stack_shares(100, 10, 3), vec![40, 30, 30]);
        assert_eq!(stack_shares(100, 10, 3).iter().sum::<i32>(), 100);
    }

    #[test]
    fn shares_cover_the_length_exactly_for_odd_divisions() {
        for (len, growth, count) in [(101, 0, 3), (97, -5, 4), (463, 100, 8)] {
            let shares = stack_shares(len, growth, count);
            assert_eq!(shares.iter().sum::<i32>(), len);
            assert_eq!(shares.len(), count);
        }
    }
}
