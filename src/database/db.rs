use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc, oid::ObjectId};
use mongodb::options::{ClientOptions, Tls};
use mongodb::{Client, Collection};

use super::store::{CollectionName, DocumentStore, StoreError};
use crate::config::StoreConfig;
use crate::utils::document::{Fields, Record, fields_to_document};

pub struct Database {
    pub client: Client,
}

impl Database {
    pub async fn init(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;
        client_options.app_name = Some(config.app_name.clone());

        if config.allow_invalid_certificates {
            relax_certificate_checks(&mut client_options);
        }

        let client = Client::with_options(client_options)?;

        Ok(Self { client })
    }
}

/// Turns off certificate validation on the TLS settings the URI produced.
/// Returns whether anything changed; a non-TLS connection is left alone.
fn relax_certificate_checks(client_options: &mut ClientOptions) -> bool {
    match client_options.tls.as_mut() {
        Some(Tls::Enabled(tls)) => {
            log::warn!("TLS certificate validation is DISABLED for the database connection");
            tls.allow_invalid_certificates = Some(true);
            true
        }
        _ => {
            log::warn!("MONGODB_TLS_ALLOW_INVALID_CERTIFICATES is set but the connection does not use TLS; ignoring");
            false
        }
    }
}

/// Opens the client and pings the server; any failure here is fatal to startup.
pub async fn connect_to_mongo(config: &StoreConfig) -> Result<MongoStore, StoreError> {
    let database = Database::init(config).await.map_err(|e| {
        log::error!("Failed to initialize database: {}", e);
        e
    })?;

    let store = MongoStore::new(&database.client, &config.database);
    store.ping().await?;

    log::info!("Connected successfully to MongoDB database {:?}", config.database);
    Ok(store)
}

/// `DocumentStore` backed by one MongoDB database.
pub struct MongoStore {
    db: mongodb::Database,
}

impl MongoStore {
    pub fn new(client: &Client, database: &str) -> Self {
        MongoStore {
            db: client.database(database),
        }
    }

    fn collection(&self, name: CollectionName) -> Collection<Document> {
        self.db.collection::<Document>(name.as_str())
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.db
            .run_command(doc! {"ping": 1})
            .await
            .map_err(|e| StoreError::Unavailable(format!("ping failed: {}", e)))?;
        Ok(())
    }

    async fn insert(&self, collection: CollectionName, fields: Fields) -> Result<ObjectId, StoreError> {
        let result = self
            .collection(collection)
            .insert_one(fields_to_document(fields))
            .await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::UnexpectedId(result.inserted_id.to_string()))
    }

    async fn find_by_id(&self, collection: CollectionName, id: ObjectId) -> Result<Option<Record>, StoreError> {
        let found = self
            .collection(collection)
            .find_one(doc! { "_id": id })
            .await?;

        Ok(found.map(Record::from_document))
    }

    async fn find_all(&self, collection: CollectionName) -> Result<Vec<Record>, StoreError> {
        let cursor = self.collection(collection).find(doc! {}).await?;
        let docs: Vec<Document> = cursor.try_collect().await?;

        Ok(docs.into_iter().map(Record::from_document).collect())
    }

    async fn merge_fields(&self, collection: CollectionName, id: ObjectId, fields: Fields) -> Result<bool, StoreError> {
        let result = self
            .collection(collection)
            .update_one(
                doc! { "_id": id },
                doc! { "$set": fields_to_document(fields) },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, collection: CollectionName, id: ObjectId) -> Result<bool, StoreError> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id })
            .await?;

        Ok(result.deleted_count > 0)
    }
}
