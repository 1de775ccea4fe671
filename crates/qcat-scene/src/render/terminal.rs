//! Character-cell renderer.
//!
//! Projects the scene orthographically through a [`Camera`] onto a
//! `width × height` grid. Layers, lowest first:
//!
//! ```text
//!   '.'  sphere mesh, far hemisphere
//!   ':'  sphere mesh, near hemisphere
//!   '+'  coordinate axes ('x', 'y', 'z' at the positive ends)
//!   '#'  solid faces
//!   '*'  solid edges
//! ```
//!
//! A higher layer always wins a cell, so the translucent sphere never hides
//! the solid.

use console::Style;
use std::io::{self, BufRead, Write};

use tracing::debug;

use super::Renderer;
use crate::error::{SceneError, SceneResult};
use crate::scene::{Scene, SurfaceStyle};

/// Smallest grid the renderer accepts.
pub const MIN_WIDTH: usize = 16;
pub const MIN_HEIGHT: usize = 8;

/// Largest grid the renderer accepts.
pub const MAX_WIDTH: usize = 1000;
pub const MAX_HEIGHT: usize = 500;

/// View direction, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Rotation about +z, measured from +x.
    pub azimuth_deg: f64,
    /// Angle above the xy-plane.
    pub elevation_deg: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            azimuth_deg: -60.0,
            elevation_deg: 30.0,
        }
    }
}

impl Camera {
    pub fn new(azimuth_deg: f64, elevation_deg: f64) -> Self {
        Self {
            azimuth_deg,
            elevation_deg,
        }
    }

    /// Project a world point to `[screen_x, screen_y, depth]`.
    ///
    /// Larger depth is nearer the viewer.
    pub fn project(&self, p: [f64; 3]) -> [f64; 3] {
        let (sin_a, cos_a) = self.azimuth_deg.to_radians().sin_cos();
        let (sin_e, cos_e) = self.elevation_deg.to_radians().sin_cos();

        let right = [-sin_a, cos_a, 0.0];
        let up = [-sin_e * cos_a, -sin_e * sin_a, cos_e];
        let toward = [cos_e * cos_a, cos_e * sin_a, sin_e];

        let dot = |a: [f64; 3]| a[0] * p[0] + a[1] * p[1] + a[2] * p[2];
        [dot(right), dot(up), dot(toward)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Layer {
    Empty,
    MeshBack,
    MeshFront,
    Axis,
    SolidFace,
    SolidEdge,
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    ch: char,
    layer: Layer,
}

/// Fixed-size character canvas over the square `[-extent, extent]²`.
struct Canvas {
    width: usize,
    height: usize,
    extent: f64,
    cells: Vec<Cell>,
}

impl Canvas {
    fn new(width: usize, height: usize, extent: f64) -> Self {
        Self {
            width,
            height,
            extent,
            cells: vec![
                Cell {
                    ch: ' ',
                    layer: Layer::Empty,
                };
                width * height
            ],
        }
    }

    /// Fractional cell coordinates (col, row) of a screen point.
    fn to_grid(&self, sx: f64, sy: f64) -> (f64, f64) {
        let span = 2.0 * self.extent;
        let col = (sx + self.extent) / span * (self.width - 1) as f64;
        let row = (self.extent - sy) / span * (self.height - 1) as f64;
        (col, row)
    }

    fn plot(&mut self, col: f64, row: f64, ch: char, layer: Layer) {
        let (col, row) = (col.round(), row.round());
        if col < 0.0 || row < 0.0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return;
        }
        let cell = &mut self.cells[row * self.width + col];
        if layer >= cell.layer {
            *cell = Cell { ch, layer };
        }
    }

    fn point(&mut self, s: [f64; 3], ch: char, layer: Layer) {
        let (col, row) = self.to_grid(s[0], s[1]);
        self.plot(col, row, ch, layer);
    }

    /// Clip the segment to the cell rectangle (Liang-Barsky).
    ///
    /// Returns `None` when nothing of it lies on the canvas.
    fn clip(&self, p: (f64, f64), q: (f64, f64)) -> Option<((f64, f64), (f64, f64))> {
        if !(p.0.is_finite() && p.1.is_finite() && q.0.is_finite() && q.1.is_finite()) {
            return None;
        }
        let (dx, dy) = (q.0 - p.0, q.1 - p.1);
        let (x_max, y_max) = ((self.width - 1) as f64, (self.height - 1) as f64);

        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for (step, dist) in [
            (-dx, p.0),
            (dx, x_max - p.0),
            (-dy, p.1),
            (dy, y_max - p.1),
        ] {
            if step == 0.0 {
                if dist < 0.0 {
                    return None;
                }
                continue;
            }
            let t = dist / step;
            if step < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
            if t0 > t1 {
                return None;
            }
        }

        Some((
            (p.0 + dx * t0, p.1 + dy * t0),
            (p.0 + dx * t1, p.1 + dy * t1),
        ))
    }

    fn line(&mut self, a: [f64; 3], b: [f64; 3], ch: char, layer: Layer) {
        let Some(((c0, r0), (c1, r1))) =
            self.clip(self.to_grid(a[0], a[1]), self.to_grid(b[0], b[1]))
        else {
            return;
        };
        let steps = (c1 - c0).abs().max((r1 - r0).abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            self.plot(c0 + (c1 - c0) * t, r0 + (r1 - r0) * t, ch, layer);
        }
    }

    fn triangle(&mut self, a: [f64; 3], b: [f64; 3], c: [f64; 3], ch: char, layer: Layer) {
        let pa = self.to_grid(a[0], a[1]);
        let pb = self.to_grid(b[0], b[1]);
        let pc = self.to_grid(c[0], c[1]);

        let edge = |p: (f64, f64), q: (f64, f64), x: f64, y: f64| {
            (q.0 - p.0) * (y - p.1) - (q.1 - p.1) * (x - p.0)
        };
        let area = edge(pa, pb, pc.0, pc.1);
        if area.abs() < f64::EPSILON {
            return;
        }

        let min_c = pa.0.min(pb.0).min(pc.0).floor().max(0.0) as usize;
        let max_c = pa.0.max(pb.0).max(pc.0).ceil().max(0.0) as usize;
        let min_r = pa.1.min(pb.1).min(pc.1).floor().max(0.0) as usize;
        let max_r = pa.1.max(pb.1).max(pc.1).ceil().max(0.0) as usize;

        for row in min_r..=max_r.min(self.height - 1) {
            for col in min_c..=max_c.min(self.width - 1) {
                let (x, y) = (col as f64, row as f64);
                let w0 = edge(pb, pc, x, y) / area;
                let w1 = edge(pc, pa, x, y) / area;
                let w2 = edge(pa, pb, x, y) / area;
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.plot(x, y, ch, layer);
                }
            }
        }
    }
}

/// 256-color code for a named color.
fn color_code(name: &str) -> Option<u8> {
    let code = match name.to_lowercase().as_str() {
        "lightblue" => 153,
        "blue" => 33,
        "orange" => 208,
        "darkorange" => 166,
        "red" => 196,
        "green" => 40,
        "yellow" => 226,
        "purple" => 129,
        "gray" | "grey" => 245,
        "black" => 16,
        "white" => 231,
        _ => return None,
    };
    Some(code)
}

fn style_for(surface: &SurfaceStyle, edge: bool) -> Style {
    let name = if edge {
        surface.edge_color.as_deref().unwrap_or(&surface.face_color)
    } else {
        &surface.face_color
    };
    match color_code(name) {
        Some(code) => Style::new().color256(code),
        None => Style::new(),
    }
}

/// Draws scenes as text through a fixed camera.
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    camera: Camera,
    width: usize,
    height: usize,
    color: bool,
    hold: bool,
}

impl TerminalRenderer<io::Stdout> {
    /// Render to standard output with colors.
    pub fn stdout() -> Self {
        Self::new(io::stdout()).with_color(true)
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// 72×36 grid, default camera, no colors, no hold.
    pub fn new(out: W) -> Self {
        Self {
            out,
            camera: Camera::default(),
            width: 72,
            height: 36,
            color: false,
            hold: false,
        }
    }

    #[must_use]
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    /// Grid size in characters; clamped to `MIN_*..=MAX_*`.
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width.clamp(MIN_WIDTH, MAX_WIDTH);
        self.height = height.clamp(MIN_HEIGHT, MAX_HEIGHT);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Wait for Enter on stdin after drawing.
    #[must_use]
    pub fn with_hold(mut self, hold: bool) -> Self {
        self.hold = hold;
        self
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Rasterize the scene into plain text lines.
    pub fn frame(&self, scene: &Scene) -> SceneResult<Vec<String>> {
        let extent = scene
            .bounds
            .iter()
            .map(|[lo, hi]| lo.abs().max(hi.abs()))
            .fold(0.0_f64, f64::max);
        if !(extent.is_finite() && extent > 0.0) {
            return Err(SceneError::Render(format!(
                "axis bounds must be finite and non-empty, got {:?}",
                scene.bounds
            )));
        }

        let canvas = self.rasterize(scene, extent);
        let grid = self.paint(scene, &canvas);

        let mut lines: Vec<String> = scene.title.lines().map(str::to_string).collect();
        if self.color {
            lines = lines
                .into_iter()
                .map(|l| Style::new().bold().apply_to(l).to_string())
                .collect();
        }
        lines.push(String::new());
        lines.extend(grid);
        lines.push(String::new());
        lines.push(format!(
            "x: {}   y: {}   z: {}",
            scene.axis_labels[0], scene.axis_labels[1], scene.axis_labels[2]
        ));
        lines.push(format!(
            "view: azimuth {:.0}°, elevation {:.0}°   anchor {}",
            self.camera.azimuth_deg, self.camera.elevation_deg, scene.anchor
        ));
        Ok(lines)
    }

    fn rasterize(&self, scene: &Scene, extent: f64) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height, extent);
        let cam = &self.camera;

        for p in scene.sphere.points() {
            let s = cam.project(*p);
            let (ch, layer) = if s[2] >= 0.0 {
                (':', Layer::MeshFront)
            } else {
                ('.', Layer::MeshBack)
            };
            canvas.point(s, ch, layer);
        }

        for (axis, label) in ['x', 'y', 'z'].into_iter().enumerate() {
            let [lo, hi] = scene.bounds[axis];
            let mut a = [0.0; 3];
            let mut b = [0.0; 3];
            a[axis] = lo;
            b[axis] = hi;
            let (pa, pb) = (cam.project(a), cam.project(b));
            canvas.line(pa, pb, '+', Layer::Axis);
            canvas.point(pb, label, Layer::Axis);
        }

        for polygon in &scene.solid.polygons {
            let projected: Vec<[f64; 3]> = polygon.vertices.iter().map(|v| cam.project(*v)).collect();
            if let Some((first, rest)) = projected.split_first() {
                for pair in rest.windows(2) {
                    canvas.triangle(*first, pair[0], pair[1], '#', Layer::SolidFace);
                }
            }
            for (i, a) in projected.iter().enumerate() {
                let b = projected[(i + 1) % projected.len()];
                canvas.line(*a, b, '*', Layer::SolidEdge);
            }
        }

        canvas
    }

    fn paint(&self, scene: &Scene, canvas: &Canvas) -> Vec<String> {
        let mesh = style_for(&scene.sphere_style, false);
        let face = style_for(&scene.solid_style, false);
        let edge = style_for(&scene.solid_style, true);

        canvas
            .cells
            .chunks(canvas.width)
            .map(|row| {
                let line: String = row
                    .iter()
                    .map(|cell| {
                        if !self.color {
                            return cell.ch.to_string();
                        }
                        let style = match cell.layer {
                            Layer::MeshBack | Layer::MeshFront => &mesh,
                            Layer::SolidFace => &face,
                            Layer::SolidEdge => &edge,
                            Layer::Empty | Layer::Axis => return cell.ch.to_string(),
                        };
                        style.apply_to(cell.ch).to_string()
                    })
                    .collect();
                line.trim_end().to_string()
            })
            .collect()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn name(&self) -> &str {
        "terminal"
    }

    fn render(&mut self, scene: &Scene) -> SceneResult<()> {
        let lines = self.frame(scene)?;
        debug!(
            width = self.width,
            height = self.height,
            polygons = scene.solid.polygons.len(),
            "drawing scene"
        );
        for line in &lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;

        if self.hold {
            writeln!(self.out, "Press Enter to close the view.")?;
            self.out.flush()?;
            let mut buf = String::new();
            io::stdin().lock().read_line(&mut buf)?;
        }
        Ok(())
    }
}
