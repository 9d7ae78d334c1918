use super::Size;
use crate::physics::math::{Scalar, Vector};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Absolute position in the plane
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: Scalar,
    pub y: Scalar,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn coords(self) -> Vector {
        Vector::new(self.x, self.y)
    }
}

impl From<Vector> for Point {
    fn from(v: Vector) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vector {
    fn from(p: Point) -> Self {
        p.coords()
    }
}

impl From<Size> for Point {
    fn from(q: Size) -> Self {
        Self::new(q.width, q.height)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Size> for Point {
    type Output = Point;

    fn add(self, rhs: Size) -> Point {
        Point::new(self.x + rhs.width, self.y + rhs.height)
    }
}

impl Sub<Size> for Point {
    type Output = Point;

    fn sub(self, rhs: Size) -> Point {
        Point::new(self.x - rhs.width, self.y - rhs.height)
    }
}

impl Add<Point> for Size {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        rhs + self
    }
}

impl Mul<Scalar> for Point {
    type Output = Point;

    fn mul(self, s: Scalar) -> Point {
        Point::new(self.x * s, self.y * s)
    }
}

impl Div<Scalar> for Point {
    type Output = Point;

    fn div(self, s: Scalar) -> Point {
        Point::new(self.x / s, self.y / s)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl AddAssign<Size> for Point {
    fn add_assign(&mut self, rhs: Size) {
        self.x += rhs.width;
        self.y += rhs.height;
    }
}

impl SubAssign<Size> for Point {
    fn sub_assign(&mut self, rhs: Size) {
        self.x -= rhs.width;
        self.y -= rhs.height;
    }
}
