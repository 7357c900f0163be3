use rand::Rng;
use rand::RngCore;

const PREFIXES: &[&str] = &[
    "Ar", "Bel", "Cor", "Dor", "El", "Fa", "Gal", "Har", "Iv", "Jar", "Kel", "Lor", "Mor", "Nym",
    "Or", "Quel", "Ryn", "Sol", "Thar", "Val", "Wyr", "Xan", "Yl", "Zer",
];

const SUFFIXES: &[&str] = &[
    "ia", "on", "en", "ar", "ur", "heim", "gard", "mark", "oth", "ara", "ix", "eth",
];

const EPITHETS: &[&str] = &[
    "Reach", "Dominion", "Concord", "Expanse", "Hold", "March", "Accord", "Throne",
];

/// Generate a nation name: "{Prefix}{suffix}", e.g. "Belgard".
pub fn generate_nation_name(rng: &mut dyn RngCore) -> String {
    let prefix = PREFIXES[rng.random_range(0..PREFIXES.len())];
    let suffix = SUFFIXES[rng.random_range(0..SUFFIXES.len())];
    format!("{prefix}{suffix}")
}

/// Generate a nation name not already in `taken`.
/// Falls back to appending an epithet after 5 attempts, then a numeral.
pub fn generate_unique_nation_name(taken: &[String], rng: &mut dyn RngCore) -> String {
    for _ in 0..5 {
        let name = generate_nation_name(rng);
        if !taken.contains(&name) {
            return name;
        }
    }
    let base = generate_nation_name(rng);
    let start = rng.random_range(0..EPITHETS.len());
    for offset in 0..EPITHETS.len() {
        let epithet = EPITHETS[(start + offset) % EPITHETS.len()];
        let name = format!("{base} {epithet}");
        if !taken.contains(&name) {
            return name;
        }
    }
    let mut n = 2;
    loop {
        let name = format!("{base} {n}");
        if !taken.contains(&name) {
            return name;
        }
        n += 1;
    }
}
