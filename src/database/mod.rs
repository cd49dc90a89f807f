mod db;
#[cfg(test)]
pub mod memory;
mod store;

pub use db::connect_to_mongo;
pub use store::{CollectionName, DocumentStore, StoreError};
