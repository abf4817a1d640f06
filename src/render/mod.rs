//! Render collaborator interface.
//!
//! The animation core only writes into the [`Scene`] model. Anything that
//! can draw a scene from a camera implements [`Renderer`]; a GPU or WebGL
//! backend lives outside this crate. [`HeadlessRenderer`] builds the draw
//! list without touching a GPU.

pub mod headless;

pub use headless::{DrawItem, FrameStats, HeadlessRenderer};

use crate::errors::Result;
use crate::scene::{Camera, Scene};

pub trait Renderer {
    /// Called when the viewport changes size.
    fn resize(&mut self, width: u32, height: u32);

    /// Draws one frame of `scene` as seen from `camera`.
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<()>;
}
