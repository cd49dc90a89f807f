use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::database::{CollectionName, DocumentStore};
use crate::post::post_model::{Post, SeedPost};
use crate::utils::error::CustomError;

const COLLECTION: CollectionName = CollectionName::Posts;

pub struct PostService {
    store: Arc<dyn DocumentStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        PostService { store }
    }

    pub async fn get_post(&self, id: ObjectId) -> Result<Post, CustomError> {
        self.store
            .find_by_id(COLLECTION, id)
            .await
            .map_err(|e| CustomError::store("Failed to fetch post", e))?
            .ok_or_else(|| CustomError::NotFoundError("Post not found".into()))
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, CustomError> {
        self.store
            .find_all(COLLECTION)
            .await
            .map_err(|e| CustomError::store("Failed to fetch posts", e))
    }

    /// Inserts each post in turn and returns their ids.
    pub async fn seed_posts(&self, posts: Vec<SeedPost>) -> Result<Vec<ObjectId>, CustomError> {
        let mut ids = Vec::with_capacity(posts.len());
        for post in posts {
            let id = self
                .store
                .insert(COLLECTION, post.into_fields())
                .await
                .map_err(|e| CustomError::store("Failed to seed post", e))?;
            ids.push(id);
        }
        Ok(ids)
    }
}
