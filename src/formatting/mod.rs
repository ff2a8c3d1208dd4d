//! Writing entries back out in the canonical accounts file layout

pub mod formatter;
mod renderer;
mod syntax;

pub use renderer::*;
pub use syntax::*;
