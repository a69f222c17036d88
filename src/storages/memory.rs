//! In-memory storage backend
//!
//! Process-lifetime mapping table backed by a concurrent map. Nothing is
//! ever persisted; a restart loses all links.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::{ShortLink, Storage};

#[derive(Default)]
pub struct MemoryStorage {
    links: DashMap<String, ShortLink>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, code: &str) -> Option<ShortLink> {
        self.links.get(code).map(|entry| entry.value().clone())
    }

    async fn insert_if_absent(&self, link: ShortLink) -> bool {
        // The entry holds the shard lock across check and insert.
        match self.links.entry(link.code.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(link);
                true
            }
        }
    }

    async fn len(&self) -> usize {
        self.links.len()
    }

    async fn backend_name(&self) -> String {
        "memory".to_string()
    }
}
