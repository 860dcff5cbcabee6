use std::collections::HashSet;

use log::debug;

use crate::block::BlockKind;
use crate::coords::{BlockPos, Direction};
use crate::queue::DistanceQueue;
use crate::world::World;

/// Discovers the connected structure reachable from `seed` through blocks
/// matching `predicate`, weighted by squared distance from the seed.
///
/// The expansion pattern is a 3-block column stack: the block above, the
/// 8-neighbor ring around it when the upper block itself did not match,
/// the ring around the current block, then the block below and its ring
/// under the same condition. A matched upper or lower block expands its
/// own ring when it is visited, so the conditional skip avoids redundant
/// work without narrowing the search.
pub fn scan(world: &World, seed: BlockPos, predicate: impl Fn(BlockKind) -> bool) -> DistanceQueue {
    let mut queue = DistanceQueue::new();
    let mut visited = HashSet::new();
    check(world, seed, seed, &mut queue, &mut visited, &predicate);
    debug!(
        "scan from {:?} found a structure of {} blocks",
        seed,
        queue.len()
    );
    queue
}

fn check(
    world: &World,
    source: BlockPos,
    pos: BlockPos,
    queue: &mut DistanceQueue,
    visited: &mut HashSet<BlockPos>,
    predicate: &impl Fn(BlockKind) -> bool,
) {
    // Already expanded from another path; the grid graph has cycles.
    if visited.contains(&pos) {
        return;
    }

    // Non-matching blocks are cheap leaves of the search: not marked
    // visited, so other paths may probe them again.
    if !predicate(world.block(pos)) {
        return;
    }

    visited.insert(pos);
    queue.insert(pos, source.dist_sq(pos));

    let upper = pos.relative(Direction::Up);
    check(world, source, upper, queue, visited, predicate);
    if !visited.contains(&upper) {
        for dir in Direction::RING {
            check(world, source, upper.relative(dir), queue, visited, predicate);
        }
    }

    for dir in Direction::RING {
        check(world, source, pos.relative(dir), queue, visited, predicate);
    }

    let lower = pos.relative(Direction::Down);
    check(world, source, lower, queue, visited, predicate);
    if !visited.contains(&lower) {
        for dir in Direction::RING {
            check(world, source, lower.relative(dir), queue, visited, predicate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_world(positions: &[(i32, i32, i32)]) -> World {
        let mut w = World::new();
        for &(x, y, z) in positions {
            w.set_block(BlockPos::new(x, y, z), BlockKind::OakLog);
        }
        w
    }

    #[test]
    fn straight_trunk_is_fully_discovered() {
        let w = log_world(&[(0, 64, 0), (0, 65, 0), (0, 66, 0), (0, 67, 0)]);
        let q = scan(&w, BlockPos::new(0, 64, 0), BlockKind::is_log);
        assert_eq!(q.len(), 4);
    }

    #[test]
    fn furthest_block_comes_out_first() {
        let w = log_world(&[(0, 64, 0), (0, 65, 0), (0, 66, 0)]);
        let mut q = scan(&w, BlockPos::new(0, 64, 0), BlockKind::is_log);
        assert_eq!(q.poll_furthest(), BlockPos::new(0, 66, 0));
        assert_eq!(q.poll_furthest(), BlockPos::new(0, 65, 0));
        assert_eq!(q.poll_furthest(), BlockPos::new(0, 64, 0));
    }

    #[test]
    fn branches_through_diagonals_are_reached() {
        // Trunk with a branch attached only corner-to-corner one level up.
        let w = log_world(&[(0, 64, 0), (0, 65, 0), (1, 66, 1), (2, 66, 2)]);
        let q = scan(&w, BlockPos::new(0, 64, 0), BlockKind::is_log);
        assert_eq!(q.len(), 4);
    }

    #[test]
    fn cyclic_structure_terminates_with_each_block_once() {
        // A closed ring of logs; without the visited set the recursion
        // would chase the cycle forever.
        let w = log_world(&[
            (0, 64, 0),
            (1, 64, 0),
            (2, 64, 0),
            (2, 64, 1),
            (2, 64, 2),
            (1, 64, 2),
            (0, 64, 2),
            (0, 64, 1),
        ]);
        let q = scan(&w, BlockPos::new(0, 64, 0), BlockKind::is_log);
        assert_eq!(q.len(), 8);
    }

    #[test]
    fn disconnected_blocks_are_not_picked_up() {
        let w = log_world(&[(0, 64, 0), (5, 64, 5)]);
        let q = scan(&w, BlockPos::new(0, 64, 0), BlockKind::is_log);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn predicate_filters_other_classifications() {
        let mut w = log_world(&[(0, 64, 0), (0, 65, 0)]);
        w.set_block(BlockPos::new(0, 66, 0), BlockKind::WartBlock);
        let q = scan(&w, BlockPos::new(0, 64, 0), BlockKind::is_log);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn seed_and_six_neighbors_scenario() {
        // Five axis neighbors at weight 1 plus one diagonal at weight 2,
        // the shape used by the end-to-end session walkthrough.
        let w = log_world(&[
            (0, 64, 0),
            (1, 64, 0),
            (-1, 64, 0),
            (0, 64, 1),
            (0, 64, -1),
            (0, 65, 0),
            (1, 64, 1),
        ]);
        let mut q = scan(&w, BlockPos::new(0, 64, 0), BlockKind::is_log);
        assert_eq!(q.len(), 7);
        assert_eq!(q.poll_furthest(), BlockPos::new(1, 64, 1));
    }
}
