pub mod contact;
pub mod identity;
pub mod locale;
pub mod names;

pub use contact::{address, email, phone_number, slug};
pub use identity::build_identity;
pub use names::person;
