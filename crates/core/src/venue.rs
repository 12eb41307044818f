//! Typed venue-creation record and the explicit read step that fills it.
//!
//! Field values are copied from a [`FieldSource`] exactly as they appear
//! there: nothing is trimmed or defaulted, and empty optional fields travel
//! as empty strings.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ValidationError;

/// Value sent for `seeking_talent` by every record built through
/// [`VenueForm::read_from`], whatever the form's checkbox says.
pub const SEEKING_TALENT: bool = true;

/// Anything that can answer "what is the current value of field X".
///
/// Implemented for plain string maps; a UI layer implements it over its own
/// bound form state.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<&str>;
}

impl FieldSource for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FieldSource for HashMap<&str, &str> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}

/// Payload of `POST /venues/create`.
///
/// Field order is the wire key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct VenueForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(length(min = 1))]
    pub address: String,
    pub phone: String,
    #[validate(custom(function = "optional_link"))]
    pub facebook_link: String,
    #[validate(custom(function = "optional_link"))]
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
    #[validate(length(min = 1))]
    pub genres: String,
    #[validate(custom(function = "optional_link"))]
    pub image_link: String,
}

impl VenueForm {
    /// Read every named field from `fields`.
    ///
    /// Fails with [`ValidationError::MissingField`] on the first absent
    /// field. Values are not checked here; see [`VenueForm::check`].
    pub fn read_from<S: FieldSource + ?Sized>(fields: &S) -> Result<Self, ValidationError> {
        let read = |name: &'static str| {
            fields
                .field(name)
                .map(str::to_owned)
                .ok_or(ValidationError::MissingField(name))
        };

        Ok(Self {
            name: read("name")?,
            city: read("city")?,
            state: read("state")?,
            address: read("address")?,
            phone: read("phone")?,
            facebook_link: read("facebook_link")?,
            website: read("website")?,
            seeking_talent: SEEKING_TALENT,
            seeking_description: read("seeking_description")?,
            genres: read("genres")?,
            image_link: read("image_link")?,
        })
    }

    /// Run the field rules, mapping failures into [`ValidationError`].
    pub fn check(&self) -> Result<(), ValidationError> {
        self.validate().map_err(ValidationError::from)
    }
}

/// Empty is allowed; anything else must parse as an absolute URL.
fn optional_link(value: &str) -> Result<(), validator::ValidationError> {
    if value.is_empty() || validator::ValidateUrl::validate_url(&value) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("url"))
    }
}
