//! Plane geometry for mapping simulation coordinates onto a drawing surface

pub mod point;
pub mod size;
pub mod transform;

pub use point::Point;
pub use size::Size;
pub use transform::{AffineTransform, PrincipalDecomposition};
