//! The qcat pipeline: simulate, map, build the scene, render.

use anyhow::{Context, Result};
use console::style;
use std::io::{self, Write};
use tracing::info;

use qcat_scene::bloch::spherical_angles;
use qcat_scene::geometry::generate_solid;
use qcat_scene::render::Camera;
use qcat_scene::{
    JsonRenderer, Renderer, Scene, SphereMesh, SpherePoint, SphericalAngles, TerminalRenderer,
};
use qcat_sim::{QubitState, simulate};

use crate::config::{QcatConfig, RenderConfig, RendererKind};

/// Everything computed before rendering.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub state: QubitState,
    pub angles: SphericalAngles,
    pub point: SpherePoint,
    pub scene: Scene,
}

/// Run the computation stages without rendering.
pub fn compute(config: &QcatConfig) -> Result<PipelineOutput> {
    let state = simulate(&config.rotation).context("simulation failed")?;

    let angles = spherical_angles(&state, &config.mapper).context("Bloch mapping failed")?;
    let point = angles.to_point();
    info!(
        theta = angles.theta,
        phi = angles.phi,
        point = %point,
        "mapped state onto the sphere"
    );

    let solid = generate_solid(&point, config.solid.scale);
    let mesh =
        SphereMesh::uniform(config.scene.mesh_resolution).context("sphere mesh failed")?;
    let scene = Scene::new(mesh, solid, point, &config.scene.style);
    info!(
        polygons = scene.solid.polygons.len(),
        mesh_points = scene.sphere.points().len(),
        "scene assembled"
    );

    Ok(PipelineOutput {
        state,
        angles,
        point,
        scene,
    })
}

/// Compute the scene, print the state, render, then print a completion notice.
///
/// Text goes to `out`; the renderer writes wherever it was built to write.
pub fn run<W: Write>(
    config: &QcatConfig,
    renderer: &mut dyn Renderer,
    out: &mut W,
) -> Result<PipelineOutput> {
    let output = compute(config)?;
    present(&output, renderer, out)?;
    Ok(output)
}

/// Full run for the binary: compute first, then build the configured renderer.
///
/// No output file is created when computation fails. Text goes to stdout, or
/// to stderr when the JSON scene itself goes to stdout.
pub fn execute(config: &QcatConfig) -> Result<PipelineOutput> {
    let output = compute(config)?;
    let mut renderer = make_renderer(&config.render)?;

    if renderer_uses_stdout(&config.render) {
        present(&output, renderer.as_mut(), &mut io::stderr())?;
    } else {
        present(&output, renderer.as_mut(), &mut io::stdout())?;
    }
    Ok(output)
}

fn present<W: Write>(
    output: &PipelineOutput,
    renderer: &mut dyn Renderer,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Quantum Cat State: {}", output.state)?;
    out.flush()?;

    info!(renderer = renderer.name(), "rendering");
    renderer
        .render(&output.scene)
        .with_context(|| format!("{} renderer failed", renderer.name()))?;

    writeln!(
        out,
        "{} Orange 3D cat on the Bloch sphere at {}",
        style("✓").green().bold(),
        output.point
    )?;

    Ok(())
}

/// Build the renderer selected in `config`.
pub fn make_renderer(config: &RenderConfig) -> Result<Box<dyn Renderer>> {
    match config.renderer {
        RendererKind::Terminal => {
            let camera = Camera::new(config.azimuth_deg, config.elevation_deg);
            let renderer = TerminalRenderer::stdout()
                .with_camera(camera)
                .with_size(config.width, config.height)
                .with_color(config.color)
                .with_hold(config.hold);
            Ok(Box::new(renderer))
        }
        RendererKind::Json => match &config.output {
            Some(path) => {
                let renderer = JsonRenderer::create(path)
                    .with_context(|| format!("cannot create {}", path.display()))?;
                Ok(Box::new(renderer))
            }
            None => Ok(Box::new(JsonRenderer::stdout())),
        },
    }
}

/// Whether the renderer writes to stdout, so text output must go elsewhere.
pub fn renderer_uses_stdout(config: &RenderConfig) -> bool {
    config.renderer == RendererKind::Json && config.output.is_none()
}
