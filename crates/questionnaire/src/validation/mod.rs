//! Row-level validation.

mod email;

pub use email::{EmailValidator, InvalidEmail};
