use std::env;
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{Result, SnaplinkError};

pub mod memory;
mod models;

pub use models::ShortLink;

/// Storage abstraction for short link mappings.
///
/// Mappings are insert-only: there is no removal or update path, so a
/// code that was ever inserted stays bound to the same target for the
/// storage's lifetime.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get(&self, code: &str) -> Option<ShortLink>;

    /// Insert the link only if its code is not already present.
    ///
    /// The check and the insert are a single atomic unit, so concurrent
    /// callers can never both claim the same code. Returns `false` and
    /// leaves the existing mapping untouched on collision.
    async fn insert_if_absent(&self, link: ShortLink) -> bool;

    async fn len(&self) -> usize;
    async fn backend_name(&self) -> String;
}

pub struct StorageFactory;

impl StorageFactory {
    pub fn create() -> Result<Arc<dyn Storage>> {
        let backend = env::var("STORAGE_BACKEND").unwrap_or_else(|_| "memory".into());

        match backend.as_str() {
            "memory" => Ok(Arc::new(memory::MemoryStorage::new())),
            other => Err(SnaplinkError::storage_backend_not_found(format!(
                "unknown storage backend: {other}"
            ))),
        }
    }
}
