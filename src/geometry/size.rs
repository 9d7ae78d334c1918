use super::Point;
use crate::physics::math::{Scalar, Vector};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Extent or displacement in the plane
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: Scalar,
    pub height: Scalar,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: Scalar, height: Scalar) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn coords(self) -> Vector {
        Vector::new(self.width, self.height)
    }
}

impl From<Vector> for Size {
    fn from(v: Vector) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Size> for Vector {
    fn from(q: Size) -> Self {
        q.coords()
    }
}

impl From<Point> for Size {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl Mul<Scalar> for Size {
    type Output = Size;

    fn mul(self, s: Scalar) -> Size {
        Size::new(self.width * s, self.height * s)
    }
}

impl Div<Scalar> for Size {
    type Output = Size;

    fn div(self, s: Scalar) -> Size {
        Size::new(self.width / s, self.height / s)
    }
}

impl Neg for Size {
    type Output = Size;

    fn neg(self) -> Size {
        Size::new(-self.width, -self.height)
    }
}

impl AddAssign for Size {
    fn add_assign(&mut self, rhs: Size) {
        self.width += rhs.width;
        self.height += rhs.height;
    }
}

impl SubAssign for Size {
    fn sub_assign(&mut self, rhs: Size) {
        self.width -= rhs.width;
        self.height -= rhs.height;
    }
}
