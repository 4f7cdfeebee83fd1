use crate::env::MapOracle;
use crate::state::{Direction, Facing, Position, UnitState};

/// Moves a unit for one frame, then updates facing and cooldown.
///
/// Each axis is tested on its own, so a unit walking diagonally into a wall
/// slides along it instead of stopping.
pub fn step_unit<M>(unit: &mut UnitState, direction: Direction, delta: u32, map: &M)
where
    M: MapOracle + ?Sized,
{
    let distance = f64::from(delta) * unit.stats.speed;
    let Position { x, y } = unit.position;

    let mut dx = direction.dx;
    let mut dy = direction.dy;
    if map.is_blocked(Position::new(x + dx * distance, y)) {
        dx = 0.0;
    }
    if map.is_blocked(Position::new(x, y + dy * distance)) {
        dy = 0.0;
    }

    unit.position = Position::new(x + dx * distance, y + dy * distance);
    // facing follows the requested direction even when the move was blocked
    unit.facing = Facing::from_motion(direction.dx);
    unit.tick_cooldown(delta);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapDimensions, StaticTile, TerrainKind};
    use crate::state::{EntityId, TilePosition, UnitRole, UnitStats};

    /// 4x4 grass map with a vertical river in column 2.
    struct River;

    impl MapOracle for River {
        fn dimensions(&self) -> MapDimensions {
            MapDimensions::new(4, 4)
        }

        fn tile(&self, position: TilePosition) -> Option<StaticTile> {
            self.contains(position).then(|| {
                StaticTile::new(if position.x == 2 {
                    TerrainKind::Water
                } else {
                    TerrainKind::Grass
                })
            })
        }
    }

    fn walker(x: f64, y: f64) -> UnitState {
        let mut unit = UnitState::new(
            EntityId::PLAYER,
            "Player",
            Position::new(x, y),
            UnitStats::new(100, 10, 600, 0.25),
            UnitRole::Player,
        );
        unit.cooldown_elapsed = 0;
        unit
    }

    #[test]
    fn moves_by_speed_times_delta() {
        let mut unit = walker(36.0, 36.0);
        step_unit(&mut unit, Direction::new(1.0, 1.0), 40, &River);
        assert_eq!(unit.position, Position::new(46.0, 46.0));
        assert_eq!(unit.facing, Facing::Right);
        assert_eq!(unit.cooldown_elapsed, 40);
    }

    #[test]
    fn blocked_axis_is_dropped_and_the_other_still_applies() {
        let mut unit = walker(140.0, 100.0);
        step_unit(&mut unit, Direction::new(1.0, 1.0), 40, &River);
        assert_eq!(unit.position, Position::new(140.0, 110.0));
    }

    #[test]
    fn map_edge_blocks_movement() {
        let mut unit = walker(2.0, 2.0);
        step_unit(&mut unit, Direction::new(-1.0, -1.0), 40, &River);
        assert_eq!(unit.position, Position::new(2.0, 2.0));
        assert_eq!(unit.facing, Facing::Left);
    }
}
