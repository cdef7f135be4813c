pub mod body;
pub mod body_system;
pub mod particles;
pub mod physics;
