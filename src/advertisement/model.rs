use serde::Serialize;

use crate::utils::document::Record;

/// Advertisements are schemaless; the usual fields are title, city,
/// description, email, imgUrl and price.
pub type Advertisement = Record;

#[derive(Debug, Serialize)]
pub struct UpdateAdvertisementResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: &'static str,
}
