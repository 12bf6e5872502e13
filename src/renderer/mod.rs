//! Rendering boundary
//!
//! The simulation never draws. After each tick it hands a `RenderView` to
//! whatever backend the platform provides.

pub mod view;

pub use view::{Circle, Rect, RenderView, announcement};

/// A drawing backend
pub trait Renderer {
    /// Present one frame
    fn draw(&mut self, view: &RenderView);
}
