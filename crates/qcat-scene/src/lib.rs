//! `qcat-scene`: from qubit state to renderable scene.
//!
//! - [`bloch`]: maps a [`QubitState`](qcat_sim::QubitState) to a point on the
//!   unit sphere.
//! - [`geometry`]: builds the five-part decorative solid (a cat) anchored at
//!   that point.
//! - [`mesh`]: the parametric unit-sphere grid drawn behind it.
//! - [`scene`]: bundles mesh, solid, axes and title for a renderer.
//! - [`render`]: the [`Renderer`] trait plus terminal and JSON renderers.
//!
//! # Quick start
//!
//! ```rust
//! use qcat_sim::{RotationParameters, simulate};
//! use qcat_scene::bloch::{MapperConfig, map_to_sphere};
//! use qcat_scene::geometry::generate_solid;
//!
//! let state = simulate(&RotationParameters::default()).unwrap();
//! let point = map_to_sphere(&state, &MapperConfig::default()).unwrap();
//! let solid = generate_solid(&point, 0.15);
//! assert_eq!(solid.vertex_counts(), vec![4, 4, 3, 3, 3]);
//! ```

pub mod bloch;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod render;
pub mod scene;

pub use bloch::{DomainPolicy, MapperConfig, PolarSource, SpherePoint, SphericalAngles};
pub use error::{SceneError, SceneResult};
pub use geometry::{Polygon, SolidGeometry, SolidPart};
pub use mesh::SphereMesh;
pub use render::{JsonRenderer, RecordingRenderer, Renderer, TerminalRenderer};
pub use scene::{Scene, SceneStyle, SurfaceStyle};
