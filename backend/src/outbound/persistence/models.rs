//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::DonorRegistration;

use super::schema::donors;

/// Insertable struct for creating donor records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = donors)]
pub(crate) struct NewDonorRow<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub city: &'a str,
    pub blood_group: Option<&'a str>,
    pub is_blood_donor: bool,
    pub is_organ_donor: bool,
    pub organs_to_donate: String,
}

impl<'a> NewDonorRow<'a> {
    /// Borrow the registration and encode the organ list as JSON text.
    pub(crate) fn from_registration(
        registration: &'a DonorRegistration,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            full_name: registration.full_name(),
            email: registration.email(),
            phone: registration.phone(),
            city: registration.city(),
            blood_group: registration.blood_group(),
            is_blood_donor: registration.is_blood_donor(),
            is_organ_donor: registration.is_organ_donor(),
            organs_to_donate: serde_json::to_string(registration.organs())?,
        })
    }
}
