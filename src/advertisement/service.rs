use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::advertisement::model::Advertisement;
use crate::database::{CollectionName, DocumentStore};
use crate::utils::document::{Fields, Record};
use crate::utils::error::CustomError;

const COLLECTION: CollectionName = CollectionName::Advertisements;

pub struct AdvertisementService {
    store: Arc<dyn DocumentStore>,
}

impl AdvertisementService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        AdvertisementService { store }
    }

    pub async fn create_advertisement(&self, fields: Fields) -> Result<Advertisement, CustomError> {
        let id = self
            .store
            .insert(COLLECTION, fields.clone())
            .await
            .map_err(|e| CustomError::store("Failed to create advertisement", e))?;

        log::debug!("Created advertisement {}", id);
        Ok(Record::new(id, fields))
    }

    pub async fn get_advertisement(&self, id: ObjectId) -> Result<Advertisement, CustomError> {
        self.store
            .find_by_id(COLLECTION, id)
            .await
            .map_err(|e| CustomError::store("Failed to fetch advertisement", e))?
            .ok_or_else(|| CustomError::NotFoundError("Advertisement not found".into()))
    }

    pub async fn list_advertisements(&self) -> Result<Vec<Advertisement>, CustomError> {
        self.store
            .find_all(COLLECTION)
            .await
            .map_err(|e| CustomError::store("Failed to fetch advertisements", e))
    }

    /// Overwrites only the supplied fields.
    pub async fn update_advertisement(&self, id: ObjectId, fields: Fields) -> Result<(), CustomError> {
        if fields.is_empty() {
            return Err(CustomError::BadRequestError(
                "Update body must contain at least one field".into(),
            ));
        }

        let matched = self
            .store
            .merge_fields(COLLECTION, id, fields)
            .await
            .map_err(|e| CustomError::store("Failed to update advertisement", e))?;

        if !matched {
            return Err(CustomError::NotFoundError("Advertisement not found".into()));
        }

        Ok(())
    }

    pub async fn delete_advertisement(&self, id: ObjectId) -> Result<(), CustomError> {
        let deleted = self
            .store
            .delete_by_id(COLLECTION, id)
            .await
            .map_err(|e| CustomError::store("Failed to delete advertisement", e))?;

        if !deleted {
            return Err(CustomError::NotFoundError("Advertisement not found".into()));
        }

        Ok(())
    }
}
