#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use verlet_engine::World;

#[wasm_bindgen_test]
fn world_steps_in_wasm() {
    let mut world = World::new(800.0, 600.0).expect("default world");
    world.step(1.0 / 60.0).expect("step");
    assert_eq!(world.frame(), 1);
    assert!(!world.extract_bodies().is_null());
}

#[wasm_bindgen_test]
fn invalid_dt_surfaces_as_js_error() {
    let mut world = World::new(800.0, 600.0).expect("default world");
    let err = world.step(f32::NAN).expect_err("nan dt");
    assert!(err.as_string().unwrap_or_default().contains("invalid frame time"));
}
