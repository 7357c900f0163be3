#[macro_use]
mod macros;

pub mod assistant;
pub mod effect;
pub mod event;
pub mod nation;
pub mod run;
pub mod traits;

pub use assistant::{Assistant, AssistantClass, AssistantEffect, AssistantEffectKind, Rarity};
pub use effect::{Effect, NetEffect};
pub use event::{Choice, ChoiceKey, Event, EventKind, RelationChange, Resolution};
pub use nation::{Demeanor, EconomyType, Nation, Race};
pub use run::{Difficulty, EndReason, Run, RunStatus, StabilityState};
pub use traits::HiddenTrait;
