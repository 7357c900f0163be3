//! Static, read-only catalogs the generators draw from.

pub mod archetypes;
pub mod assistants;
pub mod names;
pub mod quips;
pub mod templates;

pub use archetypes::{ARCHETYPES, ArchetypeDef, find_archetype};
pub use assistants::{ASSISTANTS, AssistantDef, DIPLOMAT_ID, PROPHET_ID, UnlockRule};
pub use templates::{EVENT_TEMPLATES, EventTemplate, GENERIC_PUNCHLINE, OutcomeDef, find_template};
