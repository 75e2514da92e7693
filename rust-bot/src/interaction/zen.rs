//! The zenism catalog and random selection.

use rand::prelude::*;

/// Name of the slash command answered with a zenism.
pub const ZEN_COMMAND: &str = "zen";

/// Fixed catalog of quotes, one of which is returned per `/zen` invocation.
pub const ZENISMS: &[&str] = &[
    "Slow is smooth, smooth is fast. -US Navy SEALs saying",
    "Play is the highest form of research. -Albert Einstein",
    "It's not what you look at that matters, it's what you see. -Henry David Thoreau",
    "You hit what you aim at and if you aim at nothing you will hit it every time. -Zig Ziglar",
    "Bad weather always looks worse through a window. -Tom Lehrer",
    "To breakthrough your performance, you've got to breakthrough your psychology. -Jensen Siaw",
];

/// Pick a uniformly random zenism from the catalog.
pub fn pick_zenism() -> &'static str {
    let mut rng = thread_rng();
    ZENISMS.choose(&mut rng).copied().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_nonempty() {
        assert_eq!(ZENISMS.len(), 6);
        assert!(ZENISMS.iter().all(|z| !z.is_empty()));
    }

    #[test]
    fn test_pick_zenism_from_catalog() {
        for _ in 0..32 {
            let zenism = pick_zenism();
            assert!(ZENISMS.contains(&zenism));
        }
    }
}
