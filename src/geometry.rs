//! Computed rectangles, in whole cells.

/// A rectangle produced by layout: top-left corner plus size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub const fn area(&self) -> i32 {
        self.width * self.height
    }

    /// Whether the two regions share at least one cell.
    pub fn overlaps(&self, other: &Region) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Round a computed layout box to whole cells.
    pub(crate) fn from_layout(layout: &taffy::Layout) -> Self {
        Self {
            x: layout.location.x.round() as i32,
            y: layout.location.y.round() as i32,
            width: layout.size.width.round() as i32,
            height: layout.size.height.round() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let r = Region::new(2, 3, 10, 4);
        assert_eq!(r.right(), 12);
        assert_eq!(r.bottom(), 7);
        assert_eq!(r.area(), 40);
    }

    #[test]
    fn overlap_is_exclusive_at_edges() {
        let a = Region::new(0, 0, 10, 10);
        assert!(a.overlaps(&Region::new(9, 9, 5, 5)));
        assert!(!a.overlaps(&Region::new(10, 0, 5, 5)));
        assert!(!a.overlaps(&Region::new(0, 10, 5, 5)));
    }
}
