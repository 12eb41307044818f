//! UI bridges that turn venue-page interactions into REST calls.
//!
//! [`FormSubmissionBridge`] handles the venue-creation form and
//! [`VenueList`] owns the delete controls of a venue listing. Both report
//! outcomes to a shared [`Feedback`] queue as well as to their caller.

pub mod feedback;
pub mod form;
pub mod venue_list;

#[cfg(test)]
mod testing;

pub use feedback::{Feedback, Flash};
pub use form::{FormSubmissionBridge, SubmitEvent};
pub use venue_list::{DeleteOutcome, VenueList, VenueRow};
