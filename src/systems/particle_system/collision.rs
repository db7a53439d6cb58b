use crate::particle::{Body, Vec2, Wall};

/// Push `body` out of `wall` and reflect its approach velocity.
///
/// Returns `true` when the body was in contact.
pub(super) fn resolve_wall(body: &mut Body, wall: &Wall, restitution: f32) -> bool {
    let t = wall.project(body.pos);
    let closest = wall.start() + wall.direction() * t;
    let offset = body.pos - closest;
    let distance = offset.length();
    let contact = wall.contact_distance(body.radius());
    if distance >= contact {
        return false;
    }

    let cap = t <= 0.0 || t >= 1.0;
    let normal = if let Some(normal) = crossing_normal(body, wall, offset, closest, cap) {
        // Put the center back on its own side. prev_pos moves with it, so the
        // correction adds no velocity.
        let correction = closest + normal * contact - body.pos;
        body.pos += correction;
        body.prev_pos += correction;
        normal
    } else if let Some(normal) = offset.try_normalize() {
        body.pos += normal * (contact - distance);
        normal
    } else {
        // Center on a zero-length wall: no direction to push along.
        return false;
    };

    let v_n = body.velocity().dot(normal);
    if v_n < 0.0 {
        // Shift prev_pos so the implicit velocity leaves with -restitution * v_n.
        let impulse = -(1.0 + restitution) * v_n;
        body.prev_pos -= normal * impulse;
    }
    true
}

/// Side normal for a center that lies on the segment, has crossed it, or
/// started the sub-step on it.
///
/// Points to the side `prev_pos` was on, or to the wall's left when `prev_pos`
/// is on the line as well. `None` when the radial push is well defined.
fn crossing_normal(body: &Body, wall: &Wall, offset: Vec2, closest: Vec2, cap: bool) -> Option<Vec2> {
    let left = wall.normal()?;
    let side_prev = (body.prev_pos - closest).dot(left);
    let came_from = if side_prev < 0.0 { -left } else { left };

    let on_line = offset == Vec2::zero();
    // Around the end caps the round push already keeps the body outside.
    let crossed = !cap && offset.dot(came_from) < 0.0;
    let started_on_line = !cap && side_prev == 0.0;
    (on_line || crossed || started_on_line).then_some(came_from)
}

/// Separate an overlapping pair and exchange a restitution impulse.
///
/// Correction is split by the *other* body's mass share, so the heavier body
/// moves less. Returns `true` when the pair was in contact.
pub(super) fn resolve_pair(a: &mut Body, b: &mut Body, restitution: f32, separate_coincident: bool) -> bool {
    let axis = a.pos - b.pos;
    let dist = axis.length();
    let target = a.radius() + b.radius();
    if dist >= target {
        return false;
    }

    let normal = if dist > 0.0 {
        axis * (1.0 / dist)
    } else if separate_coincident {
        Vec2::new(1.0, 0.0)
    } else {
        // No normal is defined for coincident centers.
        return false;
    };

    let overlap = target - dist;
    let total_mass = a.mass() + b.mass();
    let correction = normal * overlap;
    a.pos += correction * (b.mass() / total_mass);
    b.pos -= correction * (a.mass() / total_mass);

    let v_rel_n = (a.velocity() - b.velocity()).dot(normal);
    if v_rel_n < 0.0 {
        let j = -(1.0 + restitution) * v_rel_n / (a.inv_mass() + b.inv_mass());
        let impulse = normal * j;
        a.prev_pos -= impulse * a.inv_mass();
        b.prev_pos += impulse * b.inv_mass();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving(pos: Vec2, velocity: Vec2, radius: f32, mass: f32) -> Body {
        let mut body = Body::new(pos, radius, mass, 0);
        body.prev_pos = pos - velocity;
        body
    }

    #[test]
    fn head_on_equal_masses_swap_with_restitution() {
        // Barely touching so positional correction does not skew velocities.
        let mut a = moving(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 10.0, 3.0);
        let mut b = moving(Vec2::new(19.999, 0.0), Vec2::new(-1.0, 0.0), 10.0, 3.0);

        assert!(resolve_pair(&mut a, &mut b, 0.9, false));

        let va = a.velocity();
        let vb = b.velocity();
        assert!((va.x + 0.9).abs() < 1e-2, "a.v = {va:?}");
        assert!((vb.x - 0.9).abs() < 1e-2, "b.v = {vb:?}");
        assert!(va.y.abs() < 1e-6 && vb.y.abs() < 1e-6);
    }

    #[test]
    fn heavier_body_moves_less() {
        let mut light = Body::new(Vec2::new(0.0, 0.0), 5.0, 1.0, 0);
        let mut heavy = Body::new(Vec2::new(6.0, 0.0), 5.0, 3.0, 0);

        assert!(resolve_pair(&mut light, &mut heavy, 0.9, false));

        // overlap = 4, light takes 3/4 of it, heavy 1/4
        assert!((light.pos.x + 3.0).abs() < 1e-5);
        assert!((heavy.pos.x - 7.0).abs() < 1e-5);
        assert!((heavy.pos.x - light.pos.x - 10.0).abs() < 1e-5);
    }

    #[test]
    fn separating_pair_gets_no_impulse() {
        let mut a = moving(Vec2::new(0.0, 0.0), Vec2::new(-2.0, 0.0), 5.0, 1.0);
        let mut b = moving(Vec2::new(9.0, 0.0), Vec2::new(2.0, 0.0), 5.0, 1.0);
        let prev_a = a.prev_pos;
        let prev_b = b.prev_pos;

        assert!(resolve_pair(&mut a, &mut b, 0.9, false));
        assert_eq!(a.prev_pos, prev_a);
        assert_eq!(b.prev_pos, prev_b);
    }

    #[test]
    fn coincident_centers_are_skipped_unless_enabled() {
        let mut a = Body::new(Vec2::new(5.0, 5.0), 4.0, 1.0, 0);
        let mut b = Body::new(Vec2::new(5.0, 5.0), 4.0, 1.0, 0);
        assert!(!resolve_pair(&mut a, &mut b, 0.9, false));
        assert_eq!(a.pos, b.pos);

        assert!(resolve_pair(&mut a, &mut b, 0.9, true));
        assert!((a.pos.distance(b.pos) - 8.0).abs() < 1e-5);
        assert!(a.pos.x > b.pos.x);
    }

    #[test]
    fn wall_pushes_body_out_by_penetration() {
        // Horizontal floor at y = 100, thickness 10, body falling onto it.
        let wall = Wall::new(Vec2::new(0.0, 100.0), Vec2::new(200.0, 100.0), 10.0);
        let mut body = moving(Vec2::new(50.0, 88.0), Vec2::new(0.0, 2.0), 10.0, 1.0);

        assert!(resolve_wall(&mut body, &wall, 0.9));

        assert!((body.pos.y - 85.0).abs() < 1e-4);
        // Post-correction approach speed is 2 - 3 = -1, so no reflection needed.
        assert!(body.velocity().y <= 0.0);
    }

    #[test]
    fn wall_reflection_keeps_restitution_share() {
        let wall = Wall::new(Vec2::new(0.0, 100.0), Vec2::new(200.0, 100.0), 0.0);
        let mut body = moving(Vec2::new(50.0, 90.1), Vec2::new(0.0, 4.0), 10.0, 1.0);

        assert!(resolve_wall(&mut body, &wall, 0.9));

        // After the 0.1 push the body approaches at 3.9; it leaves at 0.9 * 3.9.
        let v = body.velocity();
        assert!((v.y + 0.9 * 3.9).abs() < 1e-3, "v = {v:?}");
        assert!(v.x.abs() < 1e-6);
    }

    #[test]
    fn body_clear_of_wall_is_untouched() {
        let wall = Wall::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 100.0), 10.0);
        let mut body = moving(Vec2::new(30.0, 50.0), Vec2::new(-1.0, 0.0), 10.0, 1.0);
        let before = body.clone();

        assert!(!resolve_wall(&mut body, &wall, 0.9));
        assert_eq!(body.pos, before.pos);
        assert_eq!(body.prev_pos, before.prev_pos);
    }

    #[test]
    fn center_on_segment_at_rest_uses_left_side() {
        let wall = Wall::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 2.0);
        let mut body = Body::new(Vec2::new(5.0, 0.0), 3.0, 1.0, 0);

        assert!(resolve_wall(&mut body, &wall, 0.9));
        // Left perpendicular of +x is (0, -1).
        assert!((body.pos.y + 4.0).abs() < 1e-5);
        assert!((body.pos.x - 5.0).abs() < 1e-6);
        assert_eq!(body.velocity(), Vec2::zero());
    }

    #[test]
    fn center_on_segment_returns_to_side_it_came_from() {
        // Right-side approach: the left normal (0, -1) would push it through.
        let wall = Wall::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 2.0);
        let mut body = moving(Vec2::new(5.0, 0.0), Vec2::new(0.0, -1.0), 3.0, 1.0);

        assert!(resolve_wall(&mut body, &wall, 0.9));

        assert!((body.pos.y - 4.0).abs() < 1e-5);
        // Approach speed 1 reflected with restitution, no extra speed from the push.
        assert!((body.velocity().y - 0.9).abs() < 1e-5, "v = {:?}", body.velocity());
    }

    #[test]
    fn body_leaving_the_line_gains_no_push_velocity() {
        // Spawned on a floor line, drifted 0.5 up during integration.
        let wall = Wall::new(Vec2::new(0.0, 100.0), Vec2::new(200.0, 100.0), 10.0);
        let mut body = moving(Vec2::new(50.0, 99.5), Vec2::new(0.0, -0.5), 10.0, 1.0);

        assert!(resolve_wall(&mut body, &wall, 0.9));

        assert!((body.pos.y - 85.0).abs() < 1e-4);
        assert!((body.velocity().y + 0.5).abs() < 1e-4, "v = {:?}", body.velocity());
    }

    #[test]
    fn center_past_segment_is_pulled_back() {
        let wall = Wall::new(Vec2::new(0.0, 100.0), Vec2::new(200.0, 100.0), 10.0);
        // Came from above and ended 2 units below the line.
        let mut body = moving(Vec2::new(50.0, 102.0), Vec2::new(0.0, 6.0), 10.0, 1.0);

        assert!(resolve_wall(&mut body, &wall, 0.9));

        assert!((body.pos.y - 85.0).abs() < 1e-4);
        assert!((body.velocity().y + 0.9 * 6.0).abs() < 1e-3);
    }

    #[test]
    fn zero_length_wall_with_centered_body_is_skipped() {
        let wall = Wall::new(Vec2::new(3.0, 3.0), Vec2::new(3.0, 3.0), 4.0);
        let mut body = moving(Vec2::new(3.0, 3.0), Vec2::new(1.0, 0.0), 2.0, 1.0);
        let before = body.clone();

        assert!(!resolve_wall(&mut body, &wall, 0.9));
        assert_eq!(body.pos, before.pos);
        assert_eq!(body.prev_pos, before.prev_pos);
    }

    #[test]
    fn zero_length_wall_pushes_radially() {
        let wall = Wall::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0), 0.0);
        let mut body = Body::new(Vec2::new(3.0, 0.0), 5.0, 1.0, 0);

        assert!(resolve_wall(&mut body, &wall, 0.9));
        assert!((body.pos.x - 5.0).abs() < 1e-5);
    }
}
