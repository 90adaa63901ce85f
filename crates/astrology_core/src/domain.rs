//! crates/astrology_core/src/domain.rs
//!
//! Defines the core data structures for the application.
//! Serialization is derived where the structure crosses the session-store or
//! HTTP boundary; nothing here knows about files or sockets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve tropical zodiac signs, in calendar order starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The birth details a user submits to get a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRequest {
    pub name: String,
    pub birth_date: NaiveDate,
    pub birth_time: String,
    pub birth_location: String,
    #[serde(default)]
    pub question: Option<String>,
}

/// A generated reading. Produced once and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingResult {
    pub zodiac_sign: ZodiacSign,
    pub house_ruler: String,
    pub planetary_influences: Vec<String>,
    pub life_path_number: u32,
    pub cardinal_number: u32,
    pub prediction: String,
    pub advice: String,
    pub compatible_signs: Vec<ZodiacSign>,
    pub lucky_numbers: [u32; 3],
    pub lucky_colors: Vec<String>,
}

/// Represents an account as seen by the rest of the app and by the session store.
///
/// This is the shape persisted under the session key, so it must never carry
/// the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub email: String,
    pub name: String,
    pub requests_remaining: u32,
}

// Only used inside the account repository - contains the plaintext password.
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub id: String,
    pub email: String,
    pub name: String,
    pub password: String,
    pub requests_remaining: u32,
}

impl AccountRecord {
    /// Strips the password before the account leaves the repository.
    pub fn to_account(&self) -> Account {
        Account {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            requests_remaining: self.requests_remaining,
        }
    }
}
