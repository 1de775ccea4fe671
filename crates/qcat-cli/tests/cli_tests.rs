//! CLI parsing, configuration layering and end-to-end pipeline tests.

// ============================================================================
// clap parsing
// ============================================================================

mod parse_tests {
    use clap::Parser;
    use qcat_cli::{Cli, QcatConfig, RendererKind};
    use qcat_scene::{DomainPolicy, PolarSource};

    #[test]
    fn test_no_args() {
        let cli = Cli::try_parse_from(["qcat"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.theta.is_none());
        assert!(cli.renderer.is_none());
        assert!(!cli.hold);
    }

    #[test]
    fn test_negative_angles() {
        let cli = Cli::try_parse_from(["qcat", "--theta", "-1.5", "--phi", "-0.25"]).unwrap();
        assert_eq!(cli.theta, Some(-1.5));
        assert_eq!(cli.phi, Some(-0.25));
    }

    #[test]
    fn test_full_flag_set() {
        let cli = Cli::try_parse_from([
            "qcat",
            "-vv",
            "--scale",
            "0.3",
            "-r",
            "json",
            "-o",
            "out.json",
            "--azimuth",
            "-45",
            "--elevation",
            "10",
            "--polar-source",
            "magnitude",
            "--strict-domain",
            "--no-color",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.renderer, Some(RendererKind::Json));

        let mut config = QcatConfig::default();
        cli.apply_to(&mut config);
        assert_eq!(config.solid.scale, 0.3);
        assert_eq!(config.render.azimuth_deg, -45.0);
        assert_eq!(config.render.elevation_deg, 10.0);
        assert_eq!(config.render.output.as_deref(), Some("out.json".as_ref()));
        assert!(!config.render.color);
        assert_eq!(config.mapper.polar_source, PolarSource::Magnitude);
        assert_eq!(config.mapper.domain_policy, DomainPolicy::Reject);
    }

    #[test]
    fn test_unknown_renderer_rejected() {
        assert!(Cli::try_parse_from(["qcat", "--renderer", "opengl"]).is_err());
    }

    #[test]
    fn test_non_numeric_theta_rejected() {
        assert!(Cli::try_parse_from(["qcat", "--theta", "half-pi"]).is_err());
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let cli = Cli::try_parse_from(["qcat"]).unwrap();
        let mut config = QcatConfig::default();
        config.rotation.theta = 2.0;
        config.render.color = false;
        cli.apply_to(&mut config);
        assert_eq!(config.rotation.theta, 2.0);
        assert!(!config.render.color);
    }
}

// ============================================================================
// configuration files and precedence
// ============================================================================

mod config_tests {
    use clap::Parser;
    use qcat_cli::{Cli, ConfigError, QcatConfig, RendererKind};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = yaml_file(
            "rotation:\n  theta: 3.141592653589793\n  phi: 0.0\nrender:\n  renderer: json\n",
        );
        let config = QcatConfig::from_file(file.path()).unwrap();
        assert_eq!(config.rotation.theta, std::f64::consts::PI);
        assert_eq!(config.render.renderer, RendererKind::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_override_file() {
        let file = yaml_file("rotation:\n  theta: 1.0\nsolid:\n  scale: 0.5\n");
        let mut config = QcatConfig::from_file(file.path()).unwrap();

        let cli = Cli::try_parse_from(["qcat", "--theta", "0.25"]).unwrap();
        cli.apply_to(&mut config);

        assert_eq!(config.rotation.theta, 0.25);
        assert_eq!(config.solid.scale, 0.5);
    }

    #[test]
    fn test_env_between_file_and_flags() {
        let file = yaml_file("rotation:\n  theta: 1.0\n  phi: 1.0\n");
        let mut config = QcatConfig::from_file(file.path()).unwrap();
        config.apply_overrides_from(|k| match k {
            "QCAT_THETA" => Some("2.0".to_string()),
            "QCAT_PHI" => Some("2.0".to_string()),
            _ => None,
        });

        let cli = Cli::try_parse_from(["qcat", "--phi", "3.0"]).unwrap();
        cli.apply_to(&mut config);

        assert_eq!(config.rotation.theta, 2.0);
        assert_eq!(config.rotation.phi, 3.0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = QcatConfig::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_malformed_yaml() {
        let file = yaml_file("rotation: [1, 2\n");
        let err = QcatConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_scale_from_file() {
        let file = yaml_file("solid:\n  scale: -0.1\n");
        let config = QcatConfig::from_file(file.path()).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("solid.scale"));
    }
}

// ============================================================================
// pipeline
// ============================================================================

mod pipeline_tests {
    use qcat_cli::config::RenderConfig;
    use qcat_cli::pipeline::{compute, execute, make_renderer, run};
    use qcat_cli::{QcatConfig, RendererKind};
    use qcat_scene::{DomainPolicy, JsonRenderer, RecordingRenderer, Renderer, Scene};
    use qcat_sim::RotationParameters;

    #[test]
    fn test_run_prints_state_then_notice() {
        let mut renderer = RecordingRenderer::new();
        let mut text = Vec::new();
        let out = run(&QcatConfig::default(), &mut renderer, &mut text).unwrap();

        let text = String::from_utf8(text).unwrap();
        let state_pos = text.find("Quantum Cat State: ").unwrap();
        let notice_pos = text.find("Orange 3D cat").unwrap();
        assert!(state_pos < notice_pos);

        assert_eq!(renderer.last(), Some(&out.scene));
    }

    #[test]
    fn test_full_flip_scene() {
        let config = QcatConfig {
            rotation: RotationParameters::new(std::f64::consts::PI, 0.0),
            ..QcatConfig::default()
        };
        let out = compute(&config).unwrap();
        assert!((out.angles.theta - std::f64::consts::FRAC_PI_2).abs() < 1e-7);
        assert!(out.point.z.abs() < 1e-7);
    }

    #[test]
    fn test_strict_domain_still_accepts_normal_states() {
        let mut config = QcatConfig::default();
        config.mapper.domain_policy = DomainPolicy::Reject;
        assert!(compute(&config).is_ok());
    }

    #[test]
    fn test_invalid_rotation_is_error() {
        let config = QcatConfig {
            rotation: RotationParameters::new(f64::NAN, 0.0),
            ..QcatConfig::default()
        };
        assert!(compute(&config).is_err());
    }

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn name(&self) -> &str {
            "failing"
        }

        fn render(&mut self, _scene: &Scene) -> qcat_scene::SceneResult<()> {
            Err(qcat_scene::SceneError::Render("no display".to_string()))
        }
    }

    #[test]
    fn test_render_failure_skips_notice() {
        let mut text = Vec::new();
        let err = run(&QcatConfig::default(), &mut FailingRenderer, &mut text).unwrap_err();
        assert!(format!("{err:#}").contains("no display"));

        let text = String::from_utf8(text).unwrap();
        assert!(text.contains("Quantum Cat State"));
        assert!(!text.contains("Orange 3D cat"));
    }

    #[test]
    fn test_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        let render = RenderConfig {
            renderer: RendererKind::Json,
            output: Some(path.clone()),
            ..RenderConfig::default()
        };

        let mut renderer = make_renderer(&render).unwrap();
        assert_eq!(renderer.name(), "json");
        run(&QcatConfig::default(), renderer.as_mut(), &mut Vec::new()).unwrap();
        drop(renderer);

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["solid"]["polygons"].as_array().unwrap().len(), 5);
        assert_eq!(value["bounds"][0][1], 1.5);
    }

    #[test]
    fn test_json_renderer_into_buffer() {
        let mut renderer = JsonRenderer::new(Vec::new()).with_pretty(false);
        run(&QcatConfig::default(), &mut renderer, &mut Vec::new()).unwrap();

        let bytes = renderer.into_inner();
        let scene: Scene = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(scene.solid.vertex_counts(), vec![4, 4, 3, 3, 3]);
    }

    fn json_file_config(path: std::path::PathBuf) -> QcatConfig {
        QcatConfig {
            render: RenderConfig {
                renderer: RendererKind::Json,
                output: Some(path),
                ..RenderConfig::default()
            },
            ..QcatConfig::default()
        }
    }

    #[test]
    fn test_execute_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        execute(&json_file_config(path.clone())).unwrap();

        let scene: Scene = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(scene.solid.polygons.len(), 5);
    }

    #[test]
    fn test_failed_compute_leaves_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        let mut config = json_file_config(path.clone());
        config.rotation.theta = f64::NAN;

        assert!(execute(&config).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_oversized_mesh_is_error_not_abort() {
        let mut config = QcatConfig::default();
        config.scene.mesh_resolution = 1 << 33;
        let err = compute(&config).unwrap_err();
        assert!(format!("{err:#}").contains("mesh resolution"));
    }

    #[test]
    fn test_json_output_dir_missing() {
        let dir = tempfile::tempdir().unwrap();
        let render = RenderConfig {
            renderer: RendererKind::Json,
            output: Some(dir.path().join("no/such/dir/scene.json")),
            ..RenderConfig::default()
        };
        assert!(make_renderer(&render).is_err());
    }
}
