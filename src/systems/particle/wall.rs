use super::vec2::Vec2;

/// Static line segment with thickness. Immutable after construction.
#[derive(Clone, Debug)]
pub struct Wall {
    start: Vec2,
    end: Vec2,
    thickness: f32,
    // Cached at construction
    direction: Vec2,
    length_squared: f32,
}

impl Wall {
    /// Negative or non-finite thickness becomes 0.
    pub fn new(start: Vec2, end: Vec2, thickness: f32) -> Self {
        let direction = end - start;
        Self {
            start,
            end,
            thickness: if thickness.is_finite() { thickness.max(0.0) } else { 0.0 },
            direction,
            length_squared: direction.length_squared(),
        }
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn end(&self) -> Vec2 {
        self.end
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn length_squared(&self) -> f32 {
        self.length_squared
    }

    /// Zero-length walls behave as a single point at `start`.
    pub fn is_degenerate(&self) -> bool {
        self.length_squared <= f32::EPSILON
    }

    /// Unit normal on the left of `start -> end`, `None` for degenerate walls.
    pub fn normal(&self) -> Option<Vec2> {
        if self.is_degenerate() {
            None
        } else {
            self.direction.perp().try_normalize()
        }
    }

    /// Parameter of the projection of `point` onto the segment, clamped to `[0, 1]`.
    /// Degenerate walls always return 0.
    pub fn project(&self, point: Vec2) -> f32 {
        if self.is_degenerate() {
            0.0
        } else {
            ((point - self.start).dot(self.direction) / self.length_squared).clamp(0.0, 1.0)
        }
    }

    /// Closest point on the segment to `point` and the distance to it.
    pub fn closest_point(&self, point: Vec2) -> (Vec2, f32) {
        let closest = self.start + self.direction * self.project(point);
        (closest, point.distance(closest))
    }

    /// Center distance below which a body of `radius` touches this wall.
    #[inline]
    pub fn contact_distance(&self, radius: f32) -> f32 {
        radius + self.thickness * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_onto_interior() {
        let wall = Wall::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 2.0);
        let (p, d) = wall.closest_point(Vec2::new(4.0, 3.0));
        assert_eq!(p, Vec2::new(4.0, 0.0));
        assert_eq!(d, 3.0);
        assert_eq!(wall.length_squared(), 100.0);
        assert_eq!(wall.contact_distance(5.0), 6.0);
    }

    #[test]
    fn clamps_to_endpoints() {
        let wall = Wall::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 0.0);
        let (p, d) = wall.closest_point(Vec2::new(-3.0, 4.0));
        assert_eq!(p, Vec2::new(0.0, 0.0));
        assert_eq!(d, 5.0);

        let (p, d) = wall.closest_point(Vec2::new(13.0, -4.0));
        assert_eq!(p, Vec2::new(10.0, 0.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn projection_is_clamped() {
        let wall = Wall::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 0.0);
        assert_eq!(wall.project(Vec2::new(2.5, 7.0)), 0.25);
        assert_eq!(wall.project(Vec2::new(-4.0, 1.0)), 0.0);
        assert_eq!(wall.project(Vec2::new(40.0, 1.0)), 1.0);
    }

    #[test]
    fn degenerate_wall_is_a_point() {
        let wall = Wall::new(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0), 4.0);
        assert!(wall.is_degenerate());
        assert_eq!(wall.normal(), None);
        let (p, d) = wall.closest_point(Vec2::new(5.0, 6.0));
        assert_eq!(p, Vec2::new(2.0, 2.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn thickness_is_never_negative() {
        assert_eq!(Wall::new(Vec2::zero(), Vec2::new(1.0, 0.0), -3.0).thickness(), 0.0);
        assert_eq!(Wall::new(Vec2::zero(), Vec2::new(1.0, 0.0), f32::NAN).thickness(), 0.0);
    }
}
