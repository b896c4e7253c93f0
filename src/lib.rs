pub mod error;
pub mod generator;
pub mod random;
pub mod router;
pub mod serve;
pub mod types;
