// Rust guideline compliant 2026-10-18

//! Domain codes used as lookup keys by the formatting helpers.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language of a bot user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    /// Russian phrasing. Also the fallback for unknown codes.
    #[default]
    Ru,
    /// Uzbek (Latin script) phrasing.
    Uz,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 2] = [Language::Ru, Language::Uz];

    /// Returns the two-letter upper-case code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ru => "RU",
            Language::Uz => "UZ",
        }
    }

    /// Resolves a language code, falling back to Russian for anything unknown.
    ///
    /// # Arguments
    ///
    /// * `code` - Two-letter language code
    ///
    /// # Returns
    ///
    /// The matching language, or `Language::Ru`.
    #[must_use]
    pub fn resolve(code: &str) -> Self {
        code.parse().unwrap_or_else(|_| {
            tracing::debug!(code, "unknown language code, using RU");
            Language::Ru
        })
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "RU" => Ok(Language::Ru),
            "UZ" => Ok(Language::Uz),
            _ => Err(Error::UnknownLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Citizenship of a bot user, independent of their display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Citizenship {
    /// Uzbekistan.
    Uz,
    /// Russia.
    Ru,
    /// Kazakhstan.
    Kz,
    /// Kyrgyzstan.
    Kg,
}

impl Citizenship {
    /// All supported citizenships in menu order.
    pub const ALL: [Citizenship; 4] = [
        Citizenship::Uz,
        Citizenship::Ru,
        Citizenship::Kz,
        Citizenship::Kg,
    ];

    /// Returns the two-letter upper-case code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Citizenship::Uz => "UZ",
            Citizenship::Ru => "RU",
            Citizenship::Kz => "KZ",
            Citizenship::Kg => "KG",
        }
    }

    /// Returns the flag emoji for the country.
    #[must_use]
    pub fn flag(&self) -> &'static str {
        match self {
            Citizenship::Uz => "🇺🇿",
            Citizenship::Ru => "🇷🇺",
            Citizenship::Kz => "🇰🇿",
            Citizenship::Kg => "🇰🇬",
        }
    }

    /// Returns the country name in the given language.
    #[must_use]
    pub fn name(&self, language: Language) -> &'static str {
        match (language, self) {
            (Language::Ru, Citizenship::Uz) => "Узбекистан",
            (Language::Ru, Citizenship::Ru) => "Россия",
            (Language::Ru, Citizenship::Kz) => "Казахстан",
            (Language::Ru, Citizenship::Kg) => "Киргизия",
            (Language::Uz, Citizenship::Uz) => "O'zbekiston",
            (Language::Uz, Citizenship::Ru) => "Rossiya",
            (Language::Uz, Citizenship::Kz) => "Qozog'iston",
            (Language::Uz, Citizenship::Kg) => "Qirg'iziston",
        }
    }
}

impl FromStr for Citizenship {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "UZ" => Ok(Citizenship::Uz),
            "RU" => Ok(Citizenship::Ru),
            "KZ" => Ok(Citizenship::Kz),
            "KG" => Ok(Citizenship::Kg),
            _ => Err(Error::UnknownCitizenship(s.to_string())),
        }
    }
}

impl fmt::Display for Citizenship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
