//! Common types shared between the shadergen crates.
mod backend;
mod stage;

pub use backend::*;
pub use stage::*;
