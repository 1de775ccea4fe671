//! The decorative solid: a five-part polygon cat anchored at a sphere point.
//!
//! Every vertex is `anchor + offset`, where each offset is a fixed multiple
//! of the scale `s`. Parts and vertex counts, in order:
//!
//! | Part      | Vertices | Placement                 |
//! |-----------|----------|---------------------------|
//! | Body      | 4        | centred on the anchor     |
//! | Head      | 4        | +x, 1.3s to 1.6s          |
//! | Left ear  | 3        | +x, -y, raised            |
//! | Right ear | 3        | mirror of the left ear    |
//! | Tail      | 3        | -x, 1.2s to 1.6s          |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bloch::SpherePoint;

/// Default solid scale.
pub const DEFAULT_SCALE: f64 = 0.15;

/// Named parts of the solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolidPart {
    /// Quadrilateral centred on the anchor.
    Body,
    /// Quadrilateral on the +x side of the body.
    Head,
    /// Triangle above the head, toward -y.
    LeftEar,
    /// Triangle above the head, toward +y.
    RightEar,
    /// Triangle trailing on the -x side.
    Tail,
}

impl SolidPart {
    /// All parts in generation order.
    pub const ALL: [SolidPart; 5] = [
        SolidPart::Body,
        SolidPart::Head,
        SolidPart::LeftEar,
        SolidPart::RightEar,
        SolidPart::Tail,
    ];
}

impl fmt::Display for SolidPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolidPart::Body => "body",
            SolidPart::Head => "head",
            SolidPart::LeftEar => "left ear",
            SolidPart::RightEar => "right ear",
            SolidPart::Tail => "tail",
        };
        f.write_str(name)
    }
}

/// One planar face of the solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Which part of the solid this face is.
    pub part: SolidPart,
    /// Corner points in drawing order, world coordinates.
    pub vertices: Vec<[f64; 3]>,
}

/// The full solid, polygons in [`SolidPart::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidGeometry {
    /// One polygon per [`SolidPart`].
    pub polygons: Vec<Polygon>,
}

impl SolidGeometry {
    /// Number of vertices in each polygon.
    pub fn vertex_counts(&self) -> Vec<usize> {
        self.polygons.iter().map(|p| p.vertices.len()).collect()
    }

    /// Find a part's polygon.
    pub fn part(&self, part: SolidPart) -> Option<&Polygon> {
        self.polygons.iter().find(|p| p.part == part)
    }

    /// Iterate over every vertex of every polygon.
    pub fn vertices(&self) -> impl Iterator<Item = &[f64; 3]> {
        self.polygons.iter().flat_map(|p| p.vertices.iter())
    }
}

/// Build the solid at `anchor` with scale `s`.
pub fn generate_solid(anchor: &SpherePoint, s: f64) -> SolidGeometry {
    let SpherePoint { x, y, z } = *anchor;
    let v = |dx: f64, dy: f64, dz: f64| [x + dx, y + dy, z + dz];

    let polygons = vec![
        Polygon {
            part: SolidPart::Body,
            vertices: vec![
                v(-s, -s / 2.0, -s / 2.0),
                v(-s, s / 2.0, -s / 2.0),
                v(s, s / 2.0, s / 2.0),
                v(s, -s / 2.0, s / 2.0),
            ],
        },
        Polygon {
            part: SolidPart::Head,
            vertices: vec![
                v(s * 1.3, -s / 3.0, -s / 3.0),
                v(s * 1.3, s / 3.0, -s / 3.0),
                v(s * 1.6, s / 3.0, s / 3.0),
                v(s * 1.6, -s / 3.0, s / 3.0),
            ],
        },
        Polygon {
            part: SolidPart::LeftEar,
            vertices: vec![
                v(s * 1.5, -s / 2.5, s / 0.8),
                v(s * 1.7, -s / 3.0, s / 1.1),
                v(s * 1.4, -s / 4.0, s / 0.9),
            ],
        },
        Polygon {
            part: SolidPart::RightEar,
            vertices: vec![
                v(s * 1.5, s / 2.5, s / 0.8),
                v(s * 1.7, s / 3.0, s / 1.1),
                v(s * 1.4, s / 4.0, s / 0.9),
            ],
        },
        Polygon {
            part: SolidPart::Tail,
            vertices: vec![
                v(-s * 1.2, s / 4.0, 0.0),
                v(-s * 1.6, s / 2.0, s / 0.3),
                v(-s * 1.4, s / 1.5, -s / 0.2),
            ],
        },
    ];

    SolidGeometry { polygons }
}
