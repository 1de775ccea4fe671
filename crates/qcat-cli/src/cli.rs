//! Command-line flags.

use clap::Parser;
use std::path::PathBuf;

use qcat_scene::{DomainPolicy, PolarSource};

use crate::config::{QcatConfig, RendererKind};

/// qcat - put a cat on the Bloch sphere at the state of RY(θ)·P(φ)|0⟩
#[derive(Debug, Parser)]
#[command(name = "qcat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rotation-about-Y angle in radians [default: π/2]
    #[arg(long, allow_negative_numbers = true)]
    pub theta: Option<f64>,

    /// Phase-shift angle in radians [default: π/4]
    #[arg(long, allow_negative_numbers = true)]
    pub phi: Option<f64>,

    /// Scale of the cat [default: 0.15]
    #[arg(long)]
    pub scale: Option<f64>,

    /// Renderer (terminal, json)
    #[arg(short, long)]
    pub renderer: Option<RendererKind>,

    /// Output file for the JSON renderer (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Camera azimuth in degrees [default: -60]
    #[arg(long, allow_negative_numbers = true)]
    pub azimuth: Option<f64>,

    /// Camera elevation in degrees [default: 30]
    #[arg(long, allow_negative_numbers = true)]
    pub elevation: Option<f64>,

    /// Keep the terminal view open until Enter is pressed
    #[arg(long)]
    pub hold: bool,

    /// Disable colored terminal output
    #[arg(long)]
    pub no_color: bool,

    /// Polar angle from amplitude₀'s real part or magnitude (real-part, magnitude)
    #[arg(long)]
    pub polar_source: Option<PolarSource>,

    /// Fail instead of clamping when arccos leaves its domain
    #[arg(long)]
    pub strict_domain: bool,
}

impl Cli {
    /// Overlay flags that were given onto `config`.
    pub fn apply_to(&self, config: &mut QcatConfig) {
        if let Some(theta) = self.theta {
            config.rotation.theta = theta;
        }
        if let Some(phi) = self.phi {
            config.rotation.phi = phi;
        }
        if let Some(scale) = self.scale {
            config.solid.scale = scale;
        }
        if let Some(renderer) = self.renderer {
            config.render.renderer = renderer;
        }
        if let Some(output) = &self.output {
            config.render.output = Some(output.clone());
        }
        if let Some(azimuth) = self.azimuth {
            config.render.azimuth_deg = azimuth;
        }
        if let Some(elevation) = self.elevation {
            config.render.elevation_deg = elevation;
        }
        if self.hold {
            config.render.hold = true;
        }
        if self.no_color {
            config.render.color = false;
        }
        if let Some(source) = self.polar_source {
            config.mapper.polar_source = source;
        }
        if self.strict_domain {
            config.mapper.domain_policy = DomainPolicy::Reject;
        }
    }
}
