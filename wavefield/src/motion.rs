//! Points bouncing around inside a box
//!
//! The state is a plain value: each tick consumes the previous state and
//! returns the next one.

use crate::error::Result;
use crate::grid::{Bounds, RandomCloud, VelocityRange};
use glam::DVec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingPoint {
    pub position: DVec3,
    pub velocity: DVec3,
}

impl MovingPoint {
    pub fn new(position: DVec3, velocity: DVec3) -> Self {
        Self { position, velocity }
    }

    /// Move by one velocity step, then reverse on every axis that ended up
    /// outside `bounds`. Positions are not clamped, so a point may sit just
    /// past a wall for one tick before heading back.
    pub fn advance(self, bounds: &Bounds) -> Self {
        let position = self.position + self.velocity;
        let outside = position.cmplt(bounds.min) | position.cmpgt(bounds.max);
        let velocity = DVec3::select(outside, -self.velocity, self.velocity);
        Self { position, velocity }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BounceState {
    pub points: Vec<MovingPoint>,
    pub bounds: Bounds,
    pub tick: u64,
}

impl BounceState {
    /// Seeded positions inside the cloud bounds with seeded velocities
    pub fn spawn(cloud: &RandomCloud, velocities: &VelocityRange) -> Result<Self> {
        let positions = cloud.generate()?;
        let velocities = velocities.generate(positions.len())?;

        let points = positions
            .into_iter()
            .zip(velocities)
            .map(|(p, v)| MovingPoint::new(p, v))
            .collect();

        Ok(Self {
            points,
            bounds: cloud.bounds,
            tick: 0,
        })
    }

    pub fn advance(self) -> Self {
        let bounds = self.bounds;
        Self {
            points: self.points.into_iter().map(|p| p.advance(&bounds)).collect(),
            bounds,
            tick: self.tick + 1,
        }
    }

    pub fn positions(&self) -> Vec<DVec3> {
        self.points.iter().map(|p| p.position).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_moves_by_velocity() {
        let bounds = Bounds::cube(0.0, 15.0);
        let p = MovingPoint::new(DVec3::new(1.0, 2.0, 3.0), DVec3::new(0.5, -0.25, 0.0));
        let next = p.advance(&bounds);
        assert_eq!(next.position, DVec3::new(1.5, 1.75, 3.0));
        assert_eq!(next.velocity, p.velocity);
    }

    #[test]
    fn only_escaping_axes_reflect() {
        let bounds = Bounds::cube(0.0, 15.0);
        let p = MovingPoint::new(DVec3::new(14.75, 0.25, 7.0), DVec3::new(0.5, -0.5, 0.5));
        let next = p.advance(&bounds);
        assert_eq!(next.position, DVec3::new(15.25, -0.25, 7.5));
        assert_eq!(next.velocity, DVec3::new(-0.5, 0.5, 0.5));

        // Comes back inside on the following tick
        let back = next.advance(&bounds);
        assert!(bounds.contains(back.position));
        assert_eq!(back.velocity, next.velocity);
    }

    #[test]
    fn points_never_stray_more_than_one_step() {
        let cloud = RandomCloud::new(Bounds::cube(0.0, 15.0), 25, 38);
        let mut state = BounceState::spawn(&cloud, &VelocityRange::new(-0.3, 0.3, 11)).unwrap();
        assert_eq!(state.points.len(), 25);

        for _ in 0..500 {
            state = state.advance();
            for p in &state.points {
                let slack = DVec3::splat(0.3 + 1e-9);
                assert!(p.position.cmpge(state.bounds.min - slack).all());
                assert!(p.position.cmple(state.bounds.max + slack).all());
            }
        }
        assert_eq!(state.tick, 500);
    }

    #[test]
    fn spawn_is_reproducible() {
        let cloud = RandomCloud::new(Bounds::cube(0.0, 15.0), 10, 38);
        let velocities = VelocityRange::new(-0.1, 0.1, 1);
        let a = BounceState::spawn(&cloud, &velocities).unwrap().advance();
        let b = BounceState::spawn(&cloud, &velocities).unwrap().advance();
        assert_eq!(a, b);
    }
}
