//! Donor registration aggregate.
//!
//! A [`DonorRegistration`] can only be built from a [`DonorRegistrationDraft`]
//! that passes the presence rules, so every value reaching a repository port
//! is already valid and normalised.

use std::fmt;

/// Validation errors returned when a draft is turned into a registration.
///
/// Rules run in declaration order and the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DonorValidationError {
    /// Full name, email, phone, or city is missing or empty.
    #[error("missing required fields")]
    MissingRequiredFields,
    /// The donor pledged blood without naming a blood group.
    #[error("missing blood group")]
    MissingBloodGroup,
}

/// Identifier assigned by storage when a registration is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DonorId(i32);

impl DonorId {
    /// Wrap a storage-assigned identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for DonorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unvalidated registration input as submitted by the form.
///
/// Every field is optional at this stage; inbound adapters fill it straight
/// from the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonorRegistrationDraft {
    /// Donor's full name.
    pub full_name: Option<String>,
    /// Contact email; unique across registrations.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// City of residence.
    pub city: Option<String>,
    /// Blood group, required when `is_blood_donor` is set.
    pub blood_group: Option<String>,
    /// Whether the donor pledges blood.
    pub is_blood_donor: bool,
    /// Whether the donor pledges organs.
    pub is_organ_donor: bool,
    /// Organs pledged, in the order submitted.
    pub organs: Vec<String>,
}

/// A validated donor registration ready for persistence.
///
/// ## Invariants
/// - `full_name`, `email`, `phone`, and `city` are non-empty.
/// - `blood_group` is `None` or non-empty; it is always `Some` for blood
///   donors.
/// - `organs` keeps the submitted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorRegistration {
    full_name: String,
    email: String,
    phone: String,
    city: String,
    blood_group: Option<String>,
    is_blood_donor: bool,
    is_organ_donor: bool,
    organs: Vec<String>,
}

fn required(value: Option<String>) -> Result<String, DonorValidationError> {
    value
        .filter(|text| !text.is_empty())
        .ok_or(DonorValidationError::MissingRequiredFields)
}

impl TryFrom<DonorRegistrationDraft> for DonorRegistration {
    type Error = DonorValidationError;

    fn try_from(draft: DonorRegistrationDraft) -> Result<Self, Self::Error> {
        let DonorRegistrationDraft {
            full_name,
            email,
            phone,
            city,
            blood_group,
            is_blood_donor,
            is_organ_donor,
            organs,
        } = draft;

        let full_name = required(full_name)?;
        let email = required(email)?;
        let phone = required(phone)?;
        let city = required(city)?;

        // An empty blood group means "not provided", whatever the flags say.
        let blood_group = blood_group.filter(|group| !group.is_empty());
        if is_blood_donor && blood_group.is_none() {
            return Err(DonorValidationError::MissingBloodGroup);
        }

        Ok(Self {
            full_name,
            email,
            phone,
            city,
            blood_group,
            is_blood_donor,
            is_organ_donor,
            organs,
        })
    }
}

impl DonorRegistration {
    /// Donor's full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Contact phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// City of residence.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Blood group, absent when not provided.
    #[must_use]
    pub fn blood_group(&self) -> Option<&str> {
        self.blood_group.as_deref()
    }

    /// Whether the donor pledges blood.
    #[must_use]
    pub fn is_blood_donor(&self) -> bool {
        self.is_blood_donor
    }

    /// Whether the donor pledges organs.
    #[must_use]
    pub fn is_organ_donor(&self) -> bool {
        self.is_organ_donor
    }

    /// Organs pledged, in submission order.
    #[must_use]
    pub fn organs(&self) -> &[String] {
        &self.organs
    }
}
