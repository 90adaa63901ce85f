//! Zodiac sign and house lookup by calendar date.

use chrono::{Datelike, NaiveDate};

use crate::domain::ZodiacSign;

/// House labels, indexed by calendar month (January first).
pub const HOUSES: [&str; 12] = [
    "First House (Self)",
    "Second House (Values)",
    "Third House (Communication)",
    "Fourth House (Home)",
    "Fifth House (Creativity)",
    "Sixth House (Health)",
    "Seventh House (Partnerships)",
    "Eighth House (Transformation)",
    "Ninth House (Philosophy)",
    "Tenth House (Career)",
    "Eleventh House (Community)",
    "Twelfth House (Spirituality)",
];

/// Resolves the tropical zodiac sign for a birth date.
pub fn zodiac_sign(date: NaiveDate) -> ZodiacSign {
    match (date.month(), date.day()) {
        (3, 21..=31) | (4, 1..=19) => ZodiacSign::Aries,
        (4, 20..=30) | (5, 1..=20) => ZodiacSign::Taurus,
        (5, 21..=31) | (6, 1..=20) => ZodiacSign::Gemini,
        (6, 21..=30) | (7, 1..=22) => ZodiacSign::Cancer,
        (7, 23..=31) | (8, 1..=22) => ZodiacSign::Leo,
        (8, 23..=31) | (9, 1..=22) => ZodiacSign::Virgo,
        (9, 23..=30) | (10, 1..=22) => ZodiacSign::Libra,
        (10, 23..=31) | (11, 1..=21) => ZodiacSign::Scorpio,
        (11, 22..=30) | (12, 1..=21) => ZodiacSign::Sagittarius,
        (12, 22..=31) | (1, 1..=19) => ZodiacSign::Capricorn,
        (1, 20..=31) | (2, 1..=18) => ZodiacSign::Aquarius,
        _ => ZodiacSign::Pisces,
    }
}

/// Returns the house ruler for a birth date.
///
/// The house is picked by calendar month alone, not by the sign's cusp, so a
/// Capricorn born on December 25th and one born on January 5th get different
/// houses. This is a known quirk of the reading scheme and is kept as is.
pub fn house_ruler(date: NaiveDate) -> &'static str {
    HOUSES[date.month0() as usize]
}
