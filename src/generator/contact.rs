use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::generator::locale::{self, ca, en, us};
use crate::random::{int_between, pick_one};
use crate::types::{Address, CountryCode};

pub const SENTINEL_LINE1: &str = "0000 Example St";
pub const SENTINEL_CITY: &str = "Nowhere";
pub const SENTINEL_POSTCODE: &str = "00000";

static NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("static slug pattern"));

/// Lowercase, collapse every run outside `[a-z0-9]` into one `.`, trim dots.
///
/// May return an empty string (e.g. for a name made only of punctuation).
pub fn slug(s: &str) -> String {
    let lowered = s.to_lowercase();
    NON_ALNUM_RUN
        .replace_all(&lowered, ".")
        .trim_matches('.')
        .to_string()
}

/// `first.last@domain` where both parts are slugified.
pub fn email<R: Rng + ?Sized>(rng: &mut R, first: &str, last: &str) -> String {
    let domain = pick_one(rng, en::EMAIL_DOMAINS);
    format!("{}.{}@{}", slug(first), slug(last), domain)
}

pub fn phone_number<R: Rng + ?Sized>(rng: &mut R, country: CountryCode) -> String {
    match country {
        CountryCode::Au => au_mobile(rng),
        CountryCode::Us | CountryCode::Ca => nanp_phone(rng),
    }
}

/// `(AAA) NXX-XXXX`; the exchange never starts with 0 or 1.
fn nanp_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    let area = pick_one(rng, us::AREA_CODES);
    let exchange = int_between(rng, 200, 999);
    let subscriber = int_between(rng, 0, 9999);
    format!("({}) {}-{:04}", area, exchange, subscriber)
}

/// `04XX XXX XXX`
fn au_mobile<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "04{} {:03} {:03}",
        int_between(rng, 10, 99),
        int_between(rng, 0, 999),
        int_between(rng, 0, 999),
    )
}

pub fn street_line<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number = int_between(rng, 10, 9999);
    let street = pick_one(rng, en::STREET_NAMES);
    let suffix = pick_one(rng, en::STREET_SUFFIXES);
    format!("{} {} {}", number, street, suffix)
}

pub fn city<R: Rng + ?Sized>(rng: &mut R) -> String {
    let prefix = pick_one(rng, en::CITY_PREFIXES);
    let suffix = pick_one(rng, en::CITY_SUFFIXES);
    format!("{}{}", prefix, suffix)
}

pub fn postcode<R: Rng + ?Sized>(rng: &mut R, country: CountryCode) -> String {
    match country {
        CountryCode::Us => int_between(rng, 10000, 99999).to_string(),
        CountryCode::Ca => ca_postal(rng),
        CountryCode::Au => format!("{:04}", int_between(rng, 200, 9999)),
    }
}

/// `A1A 1A1`
fn ca_postal<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut code = String::with_capacity(7);
    for slot in "LDL DLD".chars() {
        match slot {
            'L' => code.push(*pick_one(rng, ca::POSTAL_LETTERS)),
            'D' => code.push(char::from(b'0' + rng.gen_range(0..10u8))),
            other => code.push(other),
        }
    }
    code
}

/// Random postal address for `country`.
///
/// When `format_valid` is false the street, city and postcode are replaced by
/// a fixed sentinel; region and country stay country-correct.
pub fn address<R: Rng + ?Sized>(rng: &mut R, country: CountryCode, format_valid: bool) -> Address {
    let region = pick_one(rng, locale::regions(country)).to_string();

    if !format_valid {
        return Address {
            line1: SENTINEL_LINE1.to_string(),
            city: SENTINEL_CITY.to_string(),
            region,
            postcode: SENTINEL_POSTCODE.to_string(),
            country,
        };
    }

    Address {
        line1: street_line(rng),
        city: city(rng),
        region,
        postcode: postcode(rng, country),
        country,
    }
}
