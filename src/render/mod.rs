//! Rendering module
//!
//! Pure projection of the world state into a drawing description. No GPU or
//! window handles live here; hosts draw the resulting [`Picture`].

pub mod picture;
pub mod scene;
pub mod vertex;

pub use picture::{Color, Picture};
pub use scene::{RenderSettings, render};
pub use vertex::{Vertex, tessellate};
