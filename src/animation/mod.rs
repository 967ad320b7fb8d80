//! Entrance animations for freshly mounted cards.
//!
//! The engine is optional: it is loaded once in the background and every
//! consumer must cope with it being absent.

pub mod engine;
pub mod entrance;
pub mod loader;

pub use engine::{AnimationEngine, BlockId, Transform};
pub use entrance::{Entrance, EntranceAnimator};
pub use loader::{spawn_engine_loader, EngineSlot, LoaderOptions};
