//! Body - a circle that moves as a unit
//!
//! No rotation and no shape other than a circle. Radius doubles as the
//! inverse-mass weight in collision response.

mod body;
mod vec2;

pub use body::Body;
pub use vec2::Vec2;
