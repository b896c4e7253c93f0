use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Country partition used by the address and phone generators.
///
/// Parsing never fails: anything unrecognized falls back to `Us`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum CountryCode {
    #[default]
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "CA")]
    Ca,
    #[serde(rename = "AU")]
    Au,
}

impl CountryCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountryCode::Us => "US",
            CountryCode::Ca => "CA",
            CountryCode::Au => "AU",
        }
    }
}

impl FromStr for CountryCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_uppercase().as_str() {
            "CA" | "CAN" | "CANADA" => CountryCode::Ca,
            "AU" | "AUS" | "AUSTRALIA" => CountryCode::Au,
            _ => CountryCode::Us,
        })
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub line1: String,
    pub city: String,
    pub region: String,
    pub postcode: String,
    pub country: CountryCode,
}

/// A full fake identity. The email is always derived from `person`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    #[serde(flatten)]
    pub person: Person,
    pub email: String,
    pub phone: String,
    pub address: Address,
}
