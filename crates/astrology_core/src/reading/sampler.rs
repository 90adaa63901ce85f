//! Randomized reading attributes.
//!
//! Every function takes the random source as a parameter so callers decide
//! between OS entropy and a seeded generator.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::domain::ZodiacSign;

pub const PLANETS: [&str; 10] = [
    "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
];

pub const COLORS: [&str; 11] = [
    "Red", "Blue", "Green", "Purple", "Gold", "Silver", "White", "Black", "Orange", "Pink",
    "Turquoise",
];

/// Inclusive ranges for the three lucky numbers. They do not overlap.
pub const LUCKY_NUMBER_RANGES: [(u32, u32); 3] = [(1, 10), (11, 30), (31, 99)];

fn pick_distinct<R: Rng + ?Sized>(rng: &mut R, table: &[&str], count: usize) -> Vec<String> {
    table
        .choose_multiple(rng, count)
        .map(|item| item.to_string())
        .collect()
}

/// Three distinct planets.
pub fn planetary_influences<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    pick_distinct(rng, &PLANETS, 3)
}

/// Three distinct signs, never the subject's own.
pub fn compatible_signs<R: Rng + ?Sized>(rng: &mut R, own: ZodiacSign) -> Vec<ZodiacSign> {
    let others: Vec<ZodiacSign> = ZodiacSign::ALL
        .into_iter()
        .filter(|sign| *sign != own)
        .collect();
    others.choose_multiple(rng, 3).copied().collect()
}

/// Two distinct colors.
pub fn lucky_colors<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    pick_distinct(rng, &COLORS, 2)
}

/// One independent draw from each lucky-number range.
pub fn lucky_numbers<R: Rng + ?Sized>(rng: &mut R) -> [u32; 3] {
    LUCKY_NUMBER_RANGES.map(|(low, high)| rng.random_range(low..=high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const TRIALS: usize = 10_000;

    #[test]
    fn compatible_signs_exclude_own_sign() {
        let mut rng = StdRng::seed_from_u64(7);
        for i in 0..TRIALS {
            let own = ZodiacSign::ALL[i % 12];
            let signs = compatible_signs(&mut rng, own);
            assert_eq!(signs.len(), 3);
            assert!(!signs.contains(&own), "trial {i}: {signs:?} contains {own}");
            let distinct: HashSet<_> = signs.iter().collect();
            assert_eq!(distinct.len(), 3, "trial {i}: {signs:?}");
        }
    }

    #[test]
    fn planets_and_colors_are_distinct_table_entries() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..TRIALS {
            let planets = planetary_influences(&mut rng);
            assert_eq!(planets.iter().collect::<HashSet<_>>().len(), 3);
            assert!(planets.iter().all(|p| PLANETS.contains(&p.as_str())));

            let colors = lucky_colors(&mut rng);
            assert_eq!(colors.iter().collect::<HashSet<_>>().len(), 2);
            assert!(colors.iter().all(|c| COLORS.contains(&c.as_str())));
        }
    }

    #[test]
    fn lucky_numbers_stay_in_their_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..TRIALS {
            let [a, b, c] = lucky_numbers(&mut rng);
            assert!((1..=10).contains(&a), "{a}");
            assert!((11..=30).contains(&b), "{b}");
            assert!((31..=99).contains(&c), "{c}");
        }
    }

    #[test]
    fn every_planet_can_be_drawn() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            seen.extend(planetary_influences(&mut rng));
        }
        assert_eq!(seen.len(), PLANETS.len());
    }

    #[test]
    fn same_seed_same_samples() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(planetary_influences(&mut a), planetary_influences(&mut b));
        assert_eq!(
            compatible_signs(&mut a, ZodiacSign::Virgo),
            compatible_signs(&mut b, ZodiacSign::Virgo)
        );
        assert_eq!(lucky_numbers(&mut a), lucky_numbers(&mut b));
    }
}
