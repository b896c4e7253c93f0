use rand::Rng;

use crate::generator::locale::en;
use crate::random::pick_one;
use crate::types::Person;

pub fn first_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick_one(rng, en::FIRST_NAMES).to_string()
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick_one(rng, en::LAST_NAMES).to_string()
}

/// First and last name are drawn independently; they may repeat across calls.
pub fn person<R: Rng + ?Sized>(rng: &mut R) -> Person {
    Person {
        first_name: first_name(rng),
        last_name: last_name(rng),
    }
}
