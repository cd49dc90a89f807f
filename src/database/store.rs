use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::utils::document::{Fields, Record};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("unexpected inserted id: {0}")]
    UnexpectedId(String),
}

/// The two collections the API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionName {
    Advertisements,
    Posts,
}

impl CollectionName {
    pub fn as_str(self) -> &'static str {
        match self {
            CollectionName::Advertisements => "advertisements",
            CollectionName::Posts => "posts",
        }
    }
}

/// Single-document operations against a named collection.
///
/// Lookups are equality on `_id` or whole-collection scans; nothing spans
/// more than one store call.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;

    /// Inserts a new document and returns its store-assigned id.
    async fn insert(&self, collection: CollectionName, fields: Fields) -> Result<ObjectId, StoreError>;

    async fn find_by_id(&self, collection: CollectionName, id: ObjectId) -> Result<Option<Record>, StoreError>;

    async fn find_all(&self, collection: CollectionName) -> Result<Vec<Record>, StoreError>;

    /// Overwrites only the given fields. Returns whether a document matched.
    async fn merge_fields(&self, collection: CollectionName, id: ObjectId, fields: Fields) -> Result<bool, StoreError>;

    /// Returns whether a document was removed.
    async fn delete_by_id(&self, collection: CollectionName, id: ObjectId) -> Result<bool, StoreError>;
}
