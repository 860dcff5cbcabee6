pub mod block;
pub mod config;
pub mod coords;
pub mod engine;
pub mod events;
pub mod items;
pub mod players;
pub mod queue;
pub mod scan;
pub mod sched;
pub mod session;
pub mod tools;
pub mod world;

// Re-exports for convenience in tests and integration users.
pub use block::{BlockKind, LeafProps};
pub use config::{Config, ConfigError};
pub use coords::{BlockPos, Direction};
pub use engine::{Engine, PERMISSION_FELL};
pub use events::{BreakEvent, DecayEvent, Hand, InteractAction, WorldHook};
pub use items::{ItemKind, ItemStack, ToolKind};
pub use players::{Player, PlayerId};
pub use queue::DistanceQueue;
pub use scan::scan;
pub use session::SessionTable;
pub use tools::{BlockTag, ToolTable, ToolTableError, ToolTag};
pub use world::{Effect, World};
