//! Target point resolution shared by the directional abilities.

use crate::state::Position;

/// Effective aim of a directional cast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aim {
    pub origin: Position,
    /// Requested point, pulled back onto the range circle when it lies beyond.
    pub target: Position,
    /// Unit vector from origin toward target.
    pub direction: Position,
    /// Distance from origin to `target`.
    pub distance: f64,
}

/// Clamps `requested` to `range` along the caster→target direction.
///
/// Returns `None` when the requested point coincides with the origin, since
/// no direction can be derived from it.
pub fn aim(origin: Position, requested: Position, range: f64) -> Option<Aim> {
    let offset = requested - origin;
    let direction = offset.normalized()?;
    let distance = offset.length().min(range.max(0.0));
    Some(Aim {
        origin,
        target: origin + direction.scale(distance),
        direction,
        distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_beyond_range_is_clamped() {
        let aim = aim(Position::ORIGIN, Position::new(300.0, 400.0), 100.0).unwrap();
        assert!((aim.target.x - 60.0).abs() < 1e-9);
        assert!((aim.target.y - 80.0).abs() < 1e-9);
        assert_eq!(aim.distance, 100.0);
    }

    #[test]
    fn point_within_range_is_kept() {
        let aim = aim(Position::new(10.0, 10.0), Position::new(40.0, 50.0), 100.0).unwrap();
        assert!((aim.target.x - 40.0).abs() < 1e-9);
        assert!((aim.target.y - 50.0).abs() < 1e-9);
        assert!((aim.distance - 50.0).abs() < 1e-9);
    }

    #[test]
    fn zero_distance_has_no_aim() {
        let origin = Position::new(5.0, 5.0);
        assert!(aim(origin, origin, 100.0).is_none());
    }
}
