//! Domain types shared by the Fyyur venue client crates.
//!
//! Holds the typed venue-creation record and its validation rules, the
//! opaque venue identifier used by delete requests, and the static
//! environment record of the companion front-end.

pub mod environment;
pub mod error;
pub mod types;
pub mod venue;

pub use error::{CoreError, ValidationError};
pub use types::VenueId;
pub use venue::{FieldSource, VenueForm, SEEKING_TALENT};
