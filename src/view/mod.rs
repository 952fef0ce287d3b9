//! Order book view
//!
//! Display state, the pure reducer that derives it from the connected flag,
//! and the text renderer.

mod reducer;
mod render;
mod state;
mod types;

pub use reducer::{reduce, MAX_DEPTH};
pub use render::render;
pub use state::BookView;
pub use types::ViewError;
