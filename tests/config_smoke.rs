use verlet_engine::particle::Vec2;
use verlet_engine::{SimConfig, SimError, SimulationCore};

#[test]
fn partial_json_fills_defaults() {
    let core = SimulationCore::from_config_json(
        r#"{"width": 390, "height": 844, "body_count": 12, "solver": {"substeps": 4}}"#,
    )
    .expect("valid config");

    let config = core.config();
    assert_eq!(config.width, 390.0);
    assert_eq!(config.solver.substeps, 4);
    assert_eq!(config.solver.iterations, 5);
    assert_eq!(config.gravity, Vec2::new(0.0, 980.0));
    assert_eq!(core.body_count(), 12);
    assert!(!core.placement_report().exhausted);
}

#[test]
fn config_survives_json_round_trip() {
    let config = SimConfig { seed: 42, body_count: 3, ..SimConfig::default() };
    let parsed = SimConfig::from_json(&config.to_json()).expect("round trip");
    assert_eq!(parsed, config);
}

#[test]
fn out_of_range_values_are_rejected() {
    for json in [
        r#"{"width": -5}"#,
        r#"{"radius_min": 10, "radius_max": 5}"#,
        r#"{"palette": []}"#,
        r#"{"solver": {"substeps": 0}}"#,
        r#"{"solver": {"body_restitution": 1.5}}"#,
    ] {
        assert!(
            matches!(SimulationCore::from_config_json(json), Err(SimError::InvalidConfig { .. })),
            "{json} accepted"
        );
    }
}

#[test]
fn tall_viewport_steps_cleanly() {
    let mut core = SimulationCore::with_size(390.0, 844.0).expect("viewport");
    let input = core.default_input();
    for _ in 0..120 {
        core.step(1.0 / 60.0, &input).expect("step");
    }
    for body in core.bodies() {
        assert!(body.pos.is_finite());
        assert!(body.pos.y < 844.0);
    }
}
