//! Static content and external services the battle core reads from.
//!
//! - [`rng`]: the random source threaded through every roll
//! - [`roster`]: the six recruitable hero archetypes and their skills
//! - [`tables`]: per-difficulty boss stat lines
pub mod rng;
pub mod roster;
pub mod tables;

pub use rng::{PcgRng, RngOracle};
pub use roster::{HeroArchetype, HeroTemplate};
pub use tables::{BossProfile, Difficulty};
