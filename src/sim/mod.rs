pub mod assistants;
pub mod events;
pub mod resolver;
pub mod reveal;
pub mod stability;

pub use events::generate_event;
pub use resolver::resolve_decision;
pub use reveal::reveal_random_trait;
