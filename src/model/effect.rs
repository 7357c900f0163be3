use serde::{Deserialize, Serialize};

/// One consequence of picking a choice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum Effect {
    Stability { delta: f64 },
    Score { delta: i64 },
}

/// Net deltas of an effect list, summed in order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NetEffect {
    pub stability: f64,
    pub score: i64,
}

impl NetEffect {
    pub fn sum(effects: &[Effect]) -> Self {
        effects.iter().fold(Self::default(), |mut acc, effect| {
            match *effect {
                Effect::Stability { delta } => acc.stability += delta,
                Effect::Score { delta } => acc.score += delta,
            }
            acc
        })
    }
}
