//! crates/astrology_core/src/reading/mod.rs
//!
//! The reading generator. Zodiac, house, numerology and narrative are pure
//! functions of the request; the remaining attributes are drawn from the
//! caller's random source.

pub mod narrative;
pub mod numerology;
pub mod sampler;
pub mod zodiac;

use rand::Rng;

use crate::domain::{ReadingRequest, ReadingResult};

pub use numerology::{cardinal_number, life_path_number};
pub use zodiac::{house_ruler, zodiac_sign};

/// Builds a full reading for a request.
pub fn generate_reading<R: Rng + ?Sized>(request: &ReadingRequest, rng: &mut R) -> ReadingResult {
    let sign = zodiac_sign(request.birth_date);
    let life_path = life_path_number(request.birth_date);

    ReadingResult {
        zodiac_sign: sign,
        house_ruler: house_ruler(request.birth_date).to_string(),
        planetary_influences: sampler::planetary_influences(rng),
        life_path_number: life_path,
        cardinal_number: cardinal_number(&request.name),
        prediction: narrative::prediction(sign, life_path),
        advice: narrative::advice(sign, life_path),
        compatible_signs: sampler::compatible_signs(rng, sign),
        lucky_numbers: sampler::lucky_numbers(rng),
        lucky_colors: sampler::lucky_colors(rng),
    }
}
