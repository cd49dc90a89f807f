//! In-memory stand-in for the handler tests.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::store::{CollectionName, DocumentStore, StoreError};
use crate::utils::document::{Fields, Record};

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<CollectionName, BTreeMap<ObjectId, Fields>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn insert(&self, collection: CollectionName, fields: Fields) -> Result<ObjectId, StoreError> {
        let id = ObjectId::new();
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .insert(id, fields);
        Ok(id)
    }

    async fn find_by_id(&self, collection: CollectionName, id: ObjectId) -> Result<Option<Record>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.get(&id))
            .map(|fields| Record::new(id, fields.clone())))
    }

    async fn find_all(&self, collection: CollectionName) -> Result<Vec<Record>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| Record::new(*id, fields.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn merge_fields(&self, collection: CollectionName, id: ObjectId, fields: Fields) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        match collections.get_mut(&collection).and_then(|docs| docs.get_mut(&id)) {
            Some(existing) => {
                existing.extend(fields);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, collection: CollectionName, id: ObjectId) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .get_mut(&collection)
            .is_some_and(|docs| docs.remove(&id).is_some()))
    }
}

/// A store whose every call fails, for exercising the 500 paths.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn insert(&self, _: CollectionName, _: Fields) -> Result<ObjectId, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn find_by_id(&self, _: CollectionName, _: ObjectId) -> Result<Option<Record>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn find_all(&self, _: CollectionName) -> Result<Vec<Record>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn merge_fields(&self, _: CollectionName, _: ObjectId, _: Fields) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn delete_by_id(&self, _: CollectionName, _: ObjectId) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::document::FieldValue;

    #[actix_web::test]
    async fn merge_keeps_untouched_fields() {
        let store = MemoryStore::new();
        let mut fields = Fields::new();
        fields.insert("title".into(), "Mower".into());
        fields.insert("price".into(), "20".into());
        let id = store.insert(CollectionName::Advertisements, fields).await.unwrap();

        let mut update = Fields::new();
        update.insert("price".into(), "15".into());
        assert!(store.merge_fields(CollectionName::Advertisements, id, update).await.unwrap());

        let record = store.find_by_id(CollectionName::Advertisements, id).await.unwrap().unwrap();
        assert_eq!(record.fields.get("title"), Some(&FieldValue::from("Mower")));
        assert_eq!(record.fields.get("price"), Some(&FieldValue::from("15")));
    }

    #[actix_web::test]
    async fn collections_are_independent() {
        let store = MemoryStore::new();
        let id = store.insert(CollectionName::Posts, Fields::new()).await.unwrap();
        assert!(store.find_by_id(CollectionName::Advertisements, id).await.unwrap().is_none());
        assert!(!store.delete_by_id(CollectionName::Advertisements, id).await.unwrap());
    }
}
