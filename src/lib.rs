pub mod content;
pub mod db;
pub mod engine;
pub mod error;
pub mod flush;
pub mod id;
pub mod model;
pub mod profile;
pub mod sim;
pub mod worldgen;

pub use engine::{Engine, EngineConfig, EvictionPolicy, RunSummary};
pub use error::EngineError;
pub use id::IdGenerator;
pub use model::{
    Assistant, Choice, ChoiceKey, Difficulty, Effect, EndReason, Event, EventKind, HiddenTrait,
    Nation, Resolution, Run, RunStatus, StabilityState,
};
pub use profile::{PlayerProfile, ProfileError, ProfileStore, ProfileSummary};
pub use worldgen::RunConfig;
