//! Contact form: field state, validation, and the submission state machine.

pub mod controller;
pub mod error;
pub mod fields;
pub mod validation;

pub use controller::*;
pub use error::*;
pub use fields::*;
pub use validation::*;
