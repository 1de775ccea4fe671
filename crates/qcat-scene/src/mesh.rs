//! Parametric unit-sphere mesh.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use crate::error::{SceneError, SceneResult};

/// Default grid resolution along each parameter.
pub const DEFAULT_RESOLUTION: usize = 50;

/// Largest accepted resolution; one million grid points.
pub const MAX_RESOLUTION: usize = 1000;

/// A `resolution × resolution` grid over the unit sphere.
///
/// Row `i` follows the azimuth `u_i ∈ [0, 2π]`, column `j` the polar angle
/// `v_j ∈ [0, π]`, both sampled with inclusive endpoints:
///
/// ```text
///   x = cos u · sin v,   y = sin u · sin v,   z = cos v
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereMesh {
    resolution: usize,
    /// Row-major grid points.
    points: Vec<[f64; 3]>,
}

/// `n` evenly spaced samples from `start` to `end` inclusive.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(|i| start + step * i as f64).collect()
}

impl SphereMesh {
    /// Build the uniform grid.
    ///
    /// Fails for resolutions above [`MAX_RESOLUTION`].
    pub fn uniform(resolution: usize) -> SceneResult<Self> {
        let len = resolution
            .checked_mul(resolution)
            .filter(|_| resolution <= MAX_RESOLUTION)
            .ok_or(SceneError::MeshTooLarge {
                resolution,
                max: MAX_RESOLUTION,
            })?;
        Ok(Self::build(resolution, len))
    }

    fn build(resolution: usize, len: usize) -> Self {
        let us = linspace(0.0, TAU, resolution);
        let vs = linspace(0.0, PI, resolution);

        let mut points = Vec::with_capacity(len);
        for u in &us {
            let (sin_u, cos_u) = u.sin_cos();
            for v in &vs {
                let (sin_v, cos_v) = v.sin_cos();
                points.push([cos_u * sin_v, sin_u * sin_v, cos_v]);
            }
        }

        Self { resolution, points }
    }

    /// Samples along each parameter.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Number of azimuth samples.
    pub fn rows(&self) -> usize {
        self.resolution
    }

    /// Number of polar samples.
    pub fn cols(&self) -> usize {
        self.resolution
    }

    /// Grid point at (`row`, `col`).
    pub fn point(&self, row: usize, col: usize) -> Option<[f64; 3]> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        self.points.get(row * self.cols() + col).copied()
    }

    /// All grid points, row-major.
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }
}

impl Default for SphereMesh {
    fn default() -> Self {
        Self::build(DEFAULT_RESOLUTION, DEFAULT_RESOLUTION * DEFAULT_RESOLUTION)
    }
}
