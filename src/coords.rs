use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn relative(self, dir: Direction) -> Self {
        let (dx, dy, dz) = dir.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Squared Euclidean distance. The square root is skipped on purpose:
    /// only relative order matters to callers, and integer weights stay exact.
    pub fn dist_sq(self, other: BlockPos) -> u64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        let dz = (self.z - other.z) as i64;
        (dx * dx + dy * dy + dz * dz) as u64
    }

    /// The chunk column this position belongs to (16x16 columns, floor division).
    pub fn chunk(self) -> (i32, i32) {
        (self.x >> 4, self.z >> 4)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// The 8 same-level neighbors, in the scan's fixed expansion order.
    pub const RING: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The 6 axis-aligned neighbors examined by the decay cascade.
    pub const AXES: [Direction; 6] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::Up => (0, 1, 0),
            Direction::Down => (0, -1, 0),
            Direction::North => (0, 0, -1),
            Direction::NorthEast => (1, 0, -1),
            Direction::East => (1, 0, 0),
            Direction::SouthEast => (1, 0, 1),
            Direction::South => (0, 0, 1),
            Direction::SouthWest => (-1, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::NorthWest => (-1, 0, -1),
        }
    }
}
