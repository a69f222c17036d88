//! Storage backend tests
//!
//! Covers the factory and the uniqueness contract of the atomic
//! check-then-insert under concurrent writers.

use std::collections::HashSet;
use std::sync::Arc;

use snaplink::storages::{ShortLink, Storage, StorageFactory, memory::MemoryStorage};
use snaplink::utils::generate_random_code;

#[tokio::test]
async fn test_factory_default_backend_is_memory() {
    let storage = StorageFactory::create().unwrap();
    assert_eq!(storage.backend_name().await, "memory");
    assert_eq!(storage.len().await, 0);
}

#[tokio::test]
async fn test_insert_if_absent_contract() {
    let storage = MemoryStorage::new();

    let first = ShortLink::new("code01".to_string(), "https://first.example".to_string());
    let second = ShortLink::new("code01".to_string(), "https://second.example".to_string());

    assert!(storage.insert_if_absent(first).await);
    assert!(!storage.insert_if_absent(second).await);

    // The losing insert must not overwrite the stored target.
    let stored = storage.get("code01").await.unwrap();
    assert_eq!(stored.target, "https://first.example");
}

/// Many concurrent writers running the sample-and-insert loop must end up
/// with all-distinct codes, one stored mapping per writer.
///
/// Length-2 codes over a keyspace of 3844 make collisions (and therefore
/// retries) all but certain across 200 writers.
#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_generation_yields_unique_codes() {
    const WRITERS: usize = 200;
    const CODE_LENGTH: usize = 2;

    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());

    let mut handles = Vec::with_capacity(WRITERS);
    for i in 0..WRITERS {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            let target = format!("https://example.com/page/{}", i);
            loop {
                let code = generate_random_code(CODE_LENGTH);
                let link = ShortLink::new(code.clone(), target.clone());
                if storage.insert_if_absent(link).await {
                    return code;
                }
            }
        }));
    }

    let mut codes = HashSet::new();
    for handle in handles {
        codes.insert(handle.await.unwrap());
    }

    assert_eq!(codes.len(), WRITERS);
    assert_eq!(storage.len().await, WRITERS);
}
