use rand::Rng;

use crate::generator::{contact, names};
use crate::types::{CountryCode, Identity};

/// Compose one identity. Only the email is tied to the person; phone and
/// address are independent draws.
pub fn build_identity<R: Rng + ?Sized>(
    rng: &mut R,
    country: CountryCode,
    format_valid: bool,
) -> Identity {
    let person = names::person(rng);
    let email = contact::email(rng, &person.first_name, &person.last_name);
    let phone = contact::phone_number(rng, country);
    let address = contact::address(rng, country, format_valid);
    Identity {
        person,
        email,
        phone,
        address,
    }
}
