pub mod form;
pub mod pointer;

pub use form::{wire_contact_form, ContactWiring};
pub use pointer::wire_tilt_cards;
