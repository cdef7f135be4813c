//! BodySystem - the active set of bouncing circles
//!
//! The set is replaced wholesale when the glyph changes. Popping only marks
//! a body; popped bodies are compacted away at the start of the next step so
//! the physics pass never sees the collection change size.

mod layout;
mod system;

pub use layout::layout_radius;
pub use system::BodySystem;
