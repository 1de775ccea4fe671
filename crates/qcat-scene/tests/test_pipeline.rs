//! End-to-end tests: parameters → state → sphere point → solid.

use num_complex::Complex64;
use proptest::prelude::*;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, PI};

use qcat_scene::bloch::{map_to_sphere, spherical_angles};
use qcat_scene::geometry::{DEFAULT_SCALE, generate_solid};
use qcat_scene::{MapperConfig, SolidPart, SpherePoint};
use qcat_sim::{QubitState, RotationParameters, simulate};

const TOL: f64 = 1e-9;

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

// ---------------------------------------------------------------------------
// Reference scenario: θ = π/2, φ = π/4, scale 0.15
// ---------------------------------------------------------------------------

#[test]
fn reference_scenario_end_to_end() {
    let state = simulate(&RotationParameters::new(FRAC_PI_2, FRAC_PI_4)).unwrap();
    assert!(close(state.amplitude0().re, FRAC_1_SQRT_2, TOL));
    assert!(close(state.amplitude1().re, 0.5, TOL));
    assert!(close(state.amplitude1().im, 0.5, TOL));

    let angles = spherical_angles(&state, &MapperConfig::default()).unwrap();
    assert!(close(angles.theta, FRAC_PI_4, TOL));
    assert!(close(angles.phi, FRAC_PI_4, TOL));

    let point = angles.to_point();
    assert!(close(point.x, 0.5, TOL));
    assert!(close(point.y, 0.5, TOL));
    assert!(close(point.z, FRAC_1_SQRT_2, TOL));

    let solid = generate_solid(&point, DEFAULT_SCALE);
    let body = solid.part(SolidPart::Body).unwrap();
    let first = body.vertices[0];
    assert!(close(first[0], 0.35, 1e-4));
    assert!(close(first[1], 0.425, 1e-4));
    assert!(close(first[2], 0.6321, 1e-4));
}

#[test]
fn full_flip_lands_on_equator() {
    for phi in [0.0, 0.4, FRAC_PI_2, PI, -2.5] {
        let state = simulate(&RotationParameters::new(PI, phi)).unwrap();
        assert!(state.amplitude0().norm() < TOL);
        let angles = spherical_angles(&state, &MapperConfig::default()).unwrap();
        assert!(close(angles.theta, FRAC_PI_2, TOL), "phi={phi}");
        let p = angles.to_point();
        assert!(p.z.abs() < TOL);
    }
}

#[test]
fn ground_state_maps_to_north_pole() {
    let state = simulate(&RotationParameters::new(0.0, 1.0)).unwrap();
    let p = map_to_sphere(&state, &MapperConfig::default()).unwrap();
    assert_eq!(p, SpherePoint::new(0.0, 0.0, 1.0));
}

// ---------------------------------------------------------------------------
// Geometry shape and determinism
// ---------------------------------------------------------------------------

#[test]
fn solid_shape_is_fixed() {
    let solid = generate_solid(&SpherePoint::new(0.1, 0.2, 0.3), 0.5);
    assert_eq!(solid.polygons.len(), 5);
    assert_eq!(solid.vertex_counts(), vec![4, 4, 3, 3, 3]);
}

proptest! {
    #[test]
    fn solid_is_bit_identical_on_repeat(
        x in -1.0f64..1.0,
        y in -1.0f64..1.0,
        z in -1.0f64..1.0,
        s in 0.01f64..2.0,
    ) {
        let anchor = SpherePoint::new(x, y, z);
        let a = generate_solid(&anchor, s);
        let b = generate_solid(&anchor, s);
        prop_assert_eq!(a.vertex_counts(), vec![4, 4, 3, 3, 3]);
        for (va, vb) in a.vertices().zip(b.vertices()) {
            for axis in 0..3 {
                prop_assert_eq!(va[axis].to_bits(), vb[axis].to_bits());
            }
        }
    }

    #[test]
    fn sphere_point_has_unit_norm(theta in 0.0f64..PI, phase in -PI..PI) {
        // Any normalized state with Re(amplitude₀) ∈ [-1, 1].
        let state = QubitState::from_amplitudes(
            Complex64::new((theta / 2.0).cos(), 0.0),
            Complex64::from_polar((theta / 2.0).sin(), phase),
        );
        let p = map_to_sphere(&state, &MapperConfig::default()).unwrap();
        prop_assert!((p.norm() - 1.0).abs() < TOL);
    }

    #[test]
    fn simulated_states_map_onto_sphere(theta in -30.0f64..30.0, phi in -30.0f64..30.0) {
        let state = simulate(&RotationParameters::new(theta, phi)).unwrap();
        let p = map_to_sphere(&state, &MapperConfig::default()).unwrap();
        prop_assert!((p.norm() - 1.0).abs() < TOL);
    }
}
