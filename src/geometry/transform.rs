//! Affine transforms of the plane
//!
//! A transform maps `(x, y)` to `(a x + c y + tx, b x + d y + ty)`.
//! Composition reads left to right: `(A * B)` applies `A` first, then `B`.
//! A bare scalar stands for a uniform scale and a bare point or size for a
//! translation, following the same ordering:
//!
//! ```text
//! A * s  =  A * scale(s)          s * A  =  scale(s) * A
//! A + p  =  A * translation(p)    p + A  =  translation(p) * A
//! ```
//!
//! The two scalar forms coincide only when `A` has no translation.

use super::{Point, Size};
use crate::physics::math::Scalar;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub a: Scalar,
    pub b: Scalar,
    pub c: Scalar,
    pub d: Scalar,
    pub tx: Scalar,
    pub ty: Scalar,
}

/// Rotation-scale-rotation factors of a transform's linear part
///
/// `Q = rotation(alpha) * scale_xy(p, q) * rotation(beta) + shift`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrincipalDecomposition {
    pub p: Scalar,
    pub q: Scalar,
    pub alpha: Scalar,
    pub beta: Scalar,
}

impl AffineTransform {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: Scalar, b: Scalar, c: Scalar, d: Scalar, tx: Scalar, ty: Scalar) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// Uniform scale
    pub const fn scale(s: Scalar) -> Self {
        Self::scale_xy(s, s)
    }

    pub const fn scale_xy(sx: Scalar, sy: Scalar) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Counter-clockwise rotation by `angle` radians
    pub fn rotation(angle: Scalar) -> Self {
        let (s, c) = (libm::sin(angle), libm::cos(angle));
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    pub const fn translation(x: Scalar, y: Scalar) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Translation by a point's coordinates
    pub const fn from_point(p: Point) -> Self {
        Self::translation(p.x, p.y)
    }

    /// Translation by a displacement
    pub const fn from_size(q: Size) -> Self {
        Self::translation(q.width, q.height)
    }

    /// `self` followed by `other`
    pub fn concat(self, other: Self) -> Self {
        Self::new(
            self.a * other.a + self.b * other.c,
            self.a * other.b + self.b * other.d,
            self.c * other.a + self.d * other.c,
            self.c * other.b + self.d * other.d,
            self.tx * other.a + self.ty * other.c + other.tx,
            self.tx * other.b + self.ty * other.d + other.ty,
        )
    }

    /// Uniform scale applied after `self`, in the transformed frame
    pub fn post_scale(self, s: Scalar) -> Self {
        self.concat(Self::scale(s))
    }

    /// Uniform scale applied before `self`, leaving the translation alone
    pub fn pre_scale(self, s: Scalar) -> Self {
        Self::scale(s).concat(self)
    }

    /// Translation applied before `self`
    pub fn translated_by(self, x: Scalar, y: Scalar) -> Self {
        Self::translation(x, y).concat(self)
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Linear part only; displacements ignore the translation
    pub fn apply_size(&self, q: Size) -> Size {
        Size::new(
            self.a * q.width + self.c * q.height,
            self.b * q.width + self.d * q.height,
        )
    }

    pub fn determinant(&self) -> Scalar {
        self.a * self.d - self.b * self.c
    }

    /// Inverse transform, `None` when the linear part is singular
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let (a, b, c, d) = (self.d / det, -self.b / det, -self.c / det, self.a / det);
        Some(Self::new(
            a,
            b,
            c,
            d,
            -(self.tx * a + self.ty * c),
            -(self.tx * b + self.ty * d),
        ))
    }

    /// Closed-form rotation-scale-rotation factorization of the linear part
    ///
    /// With `φ = α + β` and `ψ = α - β`:
    ///
    /// ```text
    /// φ = atan2(b - c, d + a)      p + q = (a + d) / cos φ
    /// ψ = atan2(b + c, d - a)      p - q = (a - d) / cos ψ
    /// ```
    ///
    /// The divisions degenerate as `φ` or `ψ` approaches ±π/2, where the
    /// factors become infinite or NaN; callers get the raw result.
    pub fn principal_decomposition(&self) -> PrincipalDecomposition {
        let phi = libm::atan2(self.b - self.c, self.d + self.a);
        let psi = libm::atan2(self.b + self.c, self.d - self.a);
        let u = (self.a + self.d) / libm::cos(phi);
        let v = (self.a - self.d) / libm::cos(psi);

        PrincipalDecomposition {
            p: (u + v) / 2.0,
            q: (u - v) / 2.0,
            alpha: (phi + psi) / 2.0,
            beta: (phi - psi) / 2.0,
        }
    }

    pub fn alpha(&self) -> Scalar {
        self.principal_decomposition().alpha
    }

    pub fn beta(&self) -> Scalar {
        self.principal_decomposition().beta
    }

    /// Principal scale factors `(p, q)`
    pub fn scale_factors(&self) -> Point {
        let PrincipalDecomposition { p, q, .. } = self.principal_decomposition();
        Point::new(p, q)
    }

    pub fn shift_point(&self) -> Point {
        Point::new(self.tx, self.ty)
    }

    pub fn shift_size(&self) -> Size {
        Size::new(self.tx, self.ty)
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PrincipalDecomposition {
    /// Rebuild the linear part, then translate by `shift`
    pub fn recompose(&self, shift: Point) -> AffineTransform {
        AffineTransform::rotation(self.alpha)
            * AffineTransform::scale_xy(self.p, self.q)
            * AffineTransform::rotation(self.beta)
            + shift
    }
}

impl Mul for AffineTransform {
    type Output = AffineTransform;

    fn mul(self, rhs: AffineTransform) -> AffineTransform {
        self.concat(rhs)
    }
}

impl Mul<Scalar> for AffineTransform {
    type Output = AffineTransform;

    fn mul(self, s: Scalar) -> AffineTransform {
        self.post_scale(s)
    }
}

impl Mul<AffineTransform> for Scalar {
    type Output = AffineTransform;

    fn mul(self, transform: AffineTransform) -> AffineTransform {
        transform.pre_scale(self)
    }
}

impl Add<Point> for AffineTransform {
    type Output = AffineTransform;

    fn add(self, p: Point) -> AffineTransform {
        self.concat(AffineTransform::from_point(p))
    }
}

impl Sub<Point> for AffineTransform {
    type Output = AffineTransform;

    fn sub(self, p: Point) -> AffineTransform {
        self.concat(AffineTransform::from_point(-p))
    }
}

impl Add<Size> for AffineTransform {
    type Output = AffineTransform;

    fn add(self, q: Size) -> AffineTransform {
        self.concat(AffineTransform::from_size(q))
    }
}

impl Sub<Size> for AffineTransform {
    type Output = AffineTransform;

    fn sub(self, q: Size) -> AffineTransform {
        self.concat(AffineTransform::from_size(-q))
    }
}

impl Add<AffineTransform> for Point {
    type Output = AffineTransform;

    fn add(self, transform: AffineTransform) -> AffineTransform {
        transform.translated_by(self.x, self.y)
    }
}

impl Add<AffineTransform> for Size {
    type Output = AffineTransform;

    fn add(self, transform: AffineTransform) -> AffineTransform {
        transform.translated_by(self.width, self.height)
    }
}
