//! Utilities for generating default snippet names.

use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "amber", "brisk", "calm", "clever", "copper", "crimson", "dusky", "eager", "fleet", "gentle",
    "hollow", "ivory", "jade", "keen", "lively", "mellow", "nimble", "opal", "pale", "quiet",
    "rustic", "silent", "tidy", "umber", "vivid", "wry",
];

const NOUNS: &[&str] = &[
    "anchor", "basin", "cairn", "delta", "ember", "fjord", "grove", "harbor", "inlet", "juniper",
    "knoll", "lantern", "meadow", "north", "orchard", "pine", "quarry", "ridge", "summit",
    "thicket", "upland", "vale", "willow", "yard",
];

/// Generate a random adjective-noun name.
///
/// # Returns
/// A randomly composed name.
pub fn generate_name() -> String {
    let mut rng = rand::thread_rng();
    let adj = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    format!("{}-{}", adj, noun)
}

/// Generate a unique name, with collision handling.
///
/// Tries a plain adjective-noun name first, then appends a random suffix
/// until `exists_check` stops matching.
///
/// # Returns
/// A name that does not collide according to `exists_check`.
pub fn generate_unique_name<F>(exists_check: F) -> String
where
    F: Fn(&str) -> bool,
{
    for _ in 0..5 {
        let name = generate_name();
        if !exists_check(&name) {
            return name;
        }
    }

    let mut rng = rand::thread_rng();
    loop {
        let base = generate_name();
        let suffix: u32 = rng.gen_range(1000..9999);
        let name = format!("{}-{}", base, suffix);
        if !exists_check(&name) {
            return name;
        }
    }
}
