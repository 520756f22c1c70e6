//! Gameplay simulation
//!
//! All catch-game logic lives here, free of rendering and platform code:
//! - Spawning uses the session's seeded RNG only
//! - Entities keep spawn order
//! - Time comes in through `TickInput`

pub mod collision;
pub mod entity;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Catcher, catch_check, within_reach};
pub use entity::{EntityKind, FallingEntity, Footprints};
pub use spawn::{SpawnPolicy, SpawnRoll};
pub use state::{Difficulty, GamePhase, GameState, PlayMode, SessionConfig};
pub use tick::{TickInput, TickReport, tick};
