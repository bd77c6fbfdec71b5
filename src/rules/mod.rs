//! Rules of play.
//!
//! - `movement`: destination arithmetic and capture victims
//! - `engine`: the state-transition operations (roll, move, pass, reset)
//!
//! Nothing outside this module changes a `GameState` by the rules.

pub mod engine;
pub mod movement;

pub use engine::{Engine, EngineBuilder};
pub use movement::{capture_victims, destination};
