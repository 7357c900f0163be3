use crate::model::Difficulty;

/// Nations in a freshly generated world.
pub const DEFAULT_NATION_COUNT: usize = 8;

/// Parameters for starting a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub world_theme: String,
    /// A run ends with `turn_limit` status once `turn` exceeds this.
    pub turn_limit: u32,
    pub difficulty: Difficulty,
    /// RNG seed. `None` draws one from the process RNG; the drawn value is
    /// recorded on the run so it can be replayed.
    pub seed: Option<u64>,
    /// Clamped to `[2, ARCHETYPES.len()]` at generation time.
    pub nation_count: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            world_theme: "classic_fantasy".to_string(),
            turn_limit: 20,
            difficulty: Difficulty::Normal,
            seed: None,
            nation_count: DEFAULT_NATION_COUNT,
        }
    }
}

impl RunConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// The configured seed, or a fresh one from the process RNG.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            use rand::Rng;
            rand::rng().random()
        })
    }
}
