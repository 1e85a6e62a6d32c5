// Render module: optional drawing collaborators working on already built phantoms
// A renderer is a pure projection of the phantom geometry; phantoms hold no canvas state

// ======================== MODULE DECLARATIONS ========================
pub mod svg;


use crate::phantom::Phantom;

/// Turns a phantom into some drawable output
pub trait PhantomRenderer {
    type Output;

    fn render(&self, phantom: &Phantom) -> Self::Output;
}

pub use svg::SvgRenderer; // struct - standalone SVG document renderer
