//! JSON scene export.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use super::Renderer;
use crate::error::SceneResult;
use crate::scene::Scene;

/// Serializes each scene as one JSON document.
#[derive(Debug)]
pub struct JsonRenderer<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> JsonRenderer<W> {
    /// Write to `out`, pretty-printed.
    pub fn new(out: W) -> Self {
        Self { out, pretty: true }
    }

    /// Toggle pretty printing.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl JsonRenderer<io::Stdout> {
    /// Write to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl JsonRenderer<BufWriter<File>> {
    /// Create (or truncate) `path` and write there.
    pub fn create(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        info!(path = %path.display(), "writing scene JSON");
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn name(&self) -> &str {
        "json"
    }

    fn render(&mut self, scene: &Scene) -> SceneResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, scene)?;
        } else {
            serde_json::to_writer(&mut self.out, scene)?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
