//! Diesel table definitions for the PostgreSQL schema.
//!
//! The `donors` table is created and migrated outside this service; these
//! definitions must match it exactly:
//!
//! ```sql
//! CREATE TABLE donors (
//!     id SERIAL PRIMARY KEY,
//!     full_name TEXT NOT NULL,
//!     email TEXT NOT NULL UNIQUE,
//!     phone TEXT NOT NULL,
//!     city TEXT NOT NULL,
//!     blood_group TEXT,
//!     is_blood_donor BOOLEAN NOT NULL,
//!     is_organ_donor BOOLEAN NOT NULL,
//!     organs_to_donate TEXT NOT NULL
//! );
//! ```

diesel::table! {
    /// Donor registrations.
    ///
    /// `email` carries a unique constraint (`donors_email_key`).
    donors (id) {
        /// Primary key assigned by the `SERIAL` sequence.
        id -> Int4,
        full_name -> Text,
        email -> Text,
        phone -> Text,
        city -> Text,
        /// NULL when the donor did not provide a blood group.
        blood_group -> Nullable<Text>,
        is_blood_donor -> Bool,
        is_organ_donor -> Bool,
        /// JSON array of organ names, in submission order.
        organs_to_donate -> Text,
    }
}
