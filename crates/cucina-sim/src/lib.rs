//! Fixed-order frame simulation: actors, combat resolution, and the session
//! loop tying them to the streamed world.

pub mod actor;
pub mod combat;
pub mod game;
pub mod input;
pub mod projectile;

pub use game::{ActorView, EffectView, Game, StateTag};
pub use input::FrameInput;
