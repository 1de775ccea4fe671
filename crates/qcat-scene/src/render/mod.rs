//! Scene renderers.
//!
//! A [`Renderer`] consumes a finished [`Scene`]. `render()` returns once the
//! output is written, or, for renderers that hold a view open, once the user
//! dismisses it.
//!
//! | Renderer | Output |
//! |----------|--------|
//! | [`TerminalRenderer`] | orthographic character-cell projection |
//! | [`JsonRenderer`] | the scene as JSON, for an external 3D viewer |
//! | [`RecordingRenderer`] | keeps scenes in memory |

mod json;
mod terminal;

pub use json::JsonRenderer;
pub use terminal::{Camera, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH, TerminalRenderer};

use crate::error::SceneResult;
use crate::scene::Scene;

/// A sink for finished scenes.
pub trait Renderer {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Draw the scene.
    fn render(&mut self, scene: &Scene) -> SceneResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn render(&mut self, scene: &Scene) -> SceneResult<()> {
        (**self).render(scene)
    }
}

/// Keeps every rendered scene; used where no display is available.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    scenes: Vec<Scene>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scenes received so far.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// The most recent scene.
    pub fn last(&self) -> Option<&Scene> {
        self.scenes.last()
    }
}

impl Renderer for RecordingRenderer {
    fn name(&self) -> &str {
        "recording"
    }

    fn render(&mut self, scene: &Scene) -> SceneResult<()> {
        self.scenes.push(scene.clone());
        Ok(())
    }
}
