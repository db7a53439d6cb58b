use verlet_engine::World;

#[test]
fn perf_smoke_step() {
    let Ok(mut world) = World::new(800.0, 600.0) else {
        panic!("default world");
    };
    world.enable_perf_metrics(true);
    for _ in 0..30 {
        assert!(world.step(1.0 / 60.0).is_ok());
    }
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.substeps(), 8);
    assert_eq!(stats.body_count(), world.body_count());
    assert_eq!(world.frame(), 30);
}

#[test]
fn pointer_grab_and_release() {
    let Ok(mut world) = World::from_config_json(r#"{"body_count": 0, "interior_walls": false}"#) else {
        panic!("config world");
    };
    let Ok(handle) = world.spawn(400.0, 300.0, 10.0, 1.0, 0xffffff) else {
        panic!("spawn");
    };
    assert_eq!(handle, 0);

    assert_eq!(world.pointer_down(100.0, 100.0), -1);
    assert_eq!(world.selected(), -1);
    assert_eq!(world.selected_x(), None);

    assert_eq!(world.pointer_down(405.0, 300.0), 0);
    assert_eq!(world.selected(), 0);
    assert_eq!(world.selected_x(), Some(400.0));

    world.pointer_move(500.0, 300.0);
    assert!(world.step(1.0 / 60.0).is_ok());
    let x = world.selected_x().unwrap_or_default();
    assert!(x > 480.0 && x < 500.0, "x = {x}");
    assert_eq!(world.selected_y(), Some(300.0));

    world.pointer_up();
    assert_eq!(world.selected(), -1);
}

#[test]
fn buffers_and_events_reach_the_host() {
    let Ok(mut world) = World::from_config_json(r#"{"body_count": 0}"#) else {
        panic!("config world");
    };
    assert_eq!(world.wall_count(), 8);
    assert_eq!(world.wall_buffer_len(), 8 * 5);
    assert_eq!(world.body_buffer_len(), 0);

    assert!(world.spawn_test_ball(400.0, 300.0).is_ok());
    assert_eq!(world.body_buffer_len(), 3);

    let layout = world.abi_layout();
    assert_eq!(layout.body_stride(), 3);
    assert_eq!(layout.wall_stride(), 5);
    assert_eq!(layout.bodies_len_bytes(), 12);

    let Ok(json) = world.take_events_json() else {
        panic!("events json");
    };
    let events: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    let events = events.as_array().expect("array");
    assert_eq!(events.len(), 9);
    assert_eq!(events[8]["type"], "body_spawned");
    assert_eq!(events[8]["radius"], 25.0);

    let Ok(json) = world.take_events_json() else {
        panic!("events json");
    };
    assert_eq!(json, "[]");
}

#[test]
fn paused_world_holds_still() {
    let Ok(mut world) = World::new(800.0, 600.0) else {
        panic!("default world");
    };
    world.set_paused(true);
    assert!(world.step(1.0 / 60.0).is_ok());
    assert_eq!(world.frame(), 0);

    world.set_paused(false);
    world.set_gravity(0.0, 0.0);
    assert!(world.step(1.0 / 60.0).is_ok());
    assert_eq!(world.frame(), 1);
    assert_eq!(world.input().gravity.y, 0.0);
}
