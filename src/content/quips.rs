use crate::model::StabilityState;

/// What the god mutters when the world slides into a new band.
pub fn stability_quip(state: StabilityState) -> &'static str {
    match state {
        StabilityState::GoldenAge => {
            "A golden age. Suspicious. Someone is definitely plotting something."
        }
        StabilityState::Peaceful => "Peace at last. You could almost take a nap.",
        StabilityState::Stable => "Stable enough. The mortals stopped screaming, mostly.",
        StabilityState::Tense => "Tension thickens. Even the sheep look nervous.",
        StabilityState::Chaotic => "Chaos reigns. Perhaps you should have stayed awake.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_band_has_a_distinct_quip() {
        let quips: std::collections::HashSet<_> =
            StabilityState::ALL.iter().map(|s| stability_quip(*s)).collect();
        assert_eq!(quips.len(), StabilityState::ALL.len());
    }
}
