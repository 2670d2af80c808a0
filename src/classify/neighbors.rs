//! 8-connected neighborhood lookup on a row-major grid.

/// Offsets `(dx, dy)` of the eight grid neighbors, row by row from the top-left.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Flat indices of the in-bounds 8-neighbors of pixel `i` on a `w × h` grid.
///
/// Offsets that leave the grid are skipped; nothing wraps across rows or
/// image edges.
#[inline]
pub fn neighbors(i: usize, w: usize, h: usize) -> impl Iterator<Item = usize> {
    let x = (i % w) as isize;
    let y = (i / w) as isize;
    let (w, h) = (w as isize, h as isize);
    NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
        let nx = x + dx;
        let ny = y + dy;
        if nx < 0 || ny < 0 || nx >= w || ny >= h {
            None
        } else {
            Some((ny * w + nx) as usize)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_pixel_has_eight_neighbors() {
        let n: Vec<usize> = neighbors(4, 3, 3).collect();
        assert_eq!(n, vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn corner_pixel_has_three_neighbors() {
        let n: Vec<usize> = neighbors(0, 3, 3).collect();
        assert_eq!(n, vec![1, 3, 4]);
    }

    #[test]
    fn row_ends_do_not_wrap() {
        // Pixel (3, 0) on a 4x2 grid must not see (0, 1).
        let n: Vec<usize> = neighbors(3, 4, 2).collect();
        assert_eq!(n, vec![2, 6, 7]);
    }

    #[test]
    fn single_row_has_only_horizontal_neighbors() {
        let n: Vec<usize> = neighbors(1, 3, 1).collect();
        assert_eq!(n, vec![0, 2]);
    }
}
