//! Person record as stored in the backing file.
//!
//! The serialization keys are those of the existing data files and do not
//! follow the Rust field names:
//!
//! ```json
//! {
//!   "id": 1,
//!   "jpg": "https://example.com/1.jpg",
//!   "name": "Mustermann",
//!   "vorname": "Erika",
//!   "adresse": "Heidestrasse 17, 51147 Koeln",
//!   "pan_card_number": "ABCDE1234F",
//!   "expiration_date": "2030-12-31"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// One person entry.
///
/// Every key is required on load. Field declaration order is the
/// serialization order, which keeps response bodies byte-stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Lookup key, assumed unique within the collection
    pub id: i64,

    /// URL or path of the person's image
    #[serde(rename = "jpg")]
    pub image: String,

    #[serde(rename = "name")]
    pub last_name: String,

    #[serde(rename = "vorname")]
    pub first_name: String,

    /// Free-form postal address
    #[serde(rename = "adresse")]
    pub address: String,

    /// Card identifier, format not validated
    #[serde(rename = "pan_card_number")]
    pub card_number: String,

    /// Date-like string, format not validated
    #[serde(rename = "expiration_date")]
    pub expiry_date: String,
}

/// Find the first record with the given id, in collection order.
pub fn find_by_id(records: &[Record], id: i64) -> Option<&Record> {
    records.iter().find(|record| record.id == id)
}
