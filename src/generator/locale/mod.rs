pub mod au;
pub mod ca;
pub mod en;
pub mod us;

use crate::types::CountryCode;

/// Region codes valid for `country`.
pub fn regions(country: CountryCode) -> &'static [&'static str] {
    match country {
        CountryCode::Us => us::STATES,
        CountryCode::Ca => ca::PROVINCES,
        CountryCode::Au => au::STATES,
    }
}
