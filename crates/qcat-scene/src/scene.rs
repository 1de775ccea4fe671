//! The value handed to a renderer.

use serde::{Deserialize, Serialize};

use crate::bloch::SpherePoint;
use crate::geometry::SolidGeometry;
use crate::mesh::SphereMesh;

/// Fill/edge colors and opacity of one surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceStyle {
    /// Named face color (e.g. `"orange"`).
    pub face_color: String,
    /// Named edge color; `None` draws no distinct edges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_color: Option<String>,
    /// Opacity in [0, 1].
    pub alpha: f64,
}

impl SurfaceStyle {
    /// The translucent sphere surface.
    pub fn sphere() -> Self {
        Self {
            face_color: "lightblue".to_string(),
            edge_color: None,
            alpha: 0.15,
        }
    }

    /// The opaque-ish solid.
    pub fn solid() -> Self {
        Self {
            face_color: "orange".to_string(),
            edge_color: Some("darkorange".to_string()),
            alpha: 0.9,
        }
    }
}

/// Presentation settings: everything in a [`Scene`] that is not geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneStyle {
    /// Figure title; may span several lines.
    #[serde(default = "default_title")]
    pub title: String,
    /// Labels for the x, y and z axes.
    #[serde(default = "default_axis_labels")]
    pub axis_labels: [String; 3],
    /// Every axis spans `[-axis_bound, axis_bound]`.
    #[serde(default = "default_axis_bound")]
    pub axis_bound: f64,
    /// Style of the sphere surface.
    #[serde(default = "SurfaceStyle::sphere")]
    pub sphere: SurfaceStyle,
    /// Style of the decorative solid.
    #[serde(default = "SurfaceStyle::solid")]
    pub solid: SurfaceStyle,
}

fn default_title() -> String {
    "REAL 3D QUANTUM CAT ON BLOCH SPHERE\nOrange Cat = BOTH Alive + Dead Superposition!".to_string()
}

fn default_axis_labels() -> [String; 3] {
    [
        "X (Alive ↔ Dead)".to_string(),
        "Y (Phase)".to_string(),
        "Z".to_string(),
    ]
}

fn default_axis_bound() -> f64 {
    1.5
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            title: default_title(),
            axis_labels: default_axis_labels(),
            axis_bound: default_axis_bound(),
            sphere: SurfaceStyle::sphere(),
            solid: SurfaceStyle::solid(),
        }
    }
}

/// A complete scene: sphere mesh, the solid at its anchor, axes and title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Figure title.
    pub title: String,
    /// Labels for the x, y and z axes.
    pub axis_labels: [String; 3],
    /// `[min, max]` for x, y and z.
    pub bounds: [[f64; 2]; 3],
    /// The Bloch point the solid is anchored at.
    pub anchor: SpherePoint,
    /// The unit-sphere grid.
    pub sphere: SphereMesh,
    /// How the sphere is drawn.
    pub sphere_style: SurfaceStyle,
    /// The five-part solid.
    pub solid: SolidGeometry,
    /// How the solid is drawn.
    pub solid_style: SurfaceStyle,
}

impl Scene {
    /// Assemble a scene.
    pub fn new(
        sphere: SphereMesh,
        solid: SolidGeometry,
        anchor: SpherePoint,
        style: &SceneStyle,
    ) -> Self {
        let b = style.axis_bound;
        Self {
            title: style.title.clone(),
            axis_labels: style.axis_labels.clone(),
            bounds: [[-b, b]; 3],
            anchor,
            sphere,
            sphere_style: style.sphere.clone(),
            solid,
            solid_style: style.solid.clone(),
        }
    }
}
