use super::{Expanse, Point};

/// A rectangle with a signed origin and an unsigned size. Used for widget
/// allocations, which may start at negative offsets within a parent.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Rect {
    /// Construct a rectangle from coordinates and size.
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// Construct a rectangle from an origin and a size.
    pub fn at(tl: Point, size: Expanse) -> Self {
        Self {
            tl,
            w: size.w,
            h: size.h,
        }
    }

    /// The size of this rectangle, discarding its location.
    pub fn expanse(&self) -> Expanse {
        Expanse {
            w: self.w,
            h: self.h,
        }
    }

    /// Does this rect have a zero area?
    pub fn is_zero(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Return this rectangle shifted by an offset.
    pub fn shift(&self, offset: Point) -> Self {
        Self {
            tl: self.tl + offset,
            w: self.w,
            h: self.h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift() {
        let r = Rect::new(10, 10, 5, 5);
        assert_eq!(r.shift(Point::new(-12, 3)), Rect::new(-2, 13, 5, 5));
    }

    #[test]
    fn expanse() {
        assert_eq!(Rect::new(-1, -1, 3, 4).expanse(), Expanse::new(3, 4));
        assert!(Rect::new(5, 5, 0, 9).is_zero());
    }
}
