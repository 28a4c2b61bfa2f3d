//! Form intake: turns raw `application/x-www-form-urlencoded` submissions into
//! typed creation requests.
//!
//! Every coercion failure is reported as a [`ValidationError`] naming the form
//! field, so a malformed submission never reaches the store.

mod fields;
mod forms;

pub use fields::{FormFields, ValidationError};

/// A creation request that can be built from a submitted form.
pub trait FromForm: Sized {
    fn from_form(fields: &FormFields) -> Result<Self, ValidationError>;
}
