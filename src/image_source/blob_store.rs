use crate::image_source::interface::BlobId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Owner of every uploaded image for the lifetime of a session.
#[derive(Clone, Default)]
pub struct BlobStore {
    next_id: Arc<AtomicU64>,
    blobs: Arc<Mutex<HashMap<BlobId, Arc<Vec<u8>>>>>,
}

impl BlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, bytes: Vec<u8>) -> BlobId {
        let id = BlobId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.lock().insert(id, Arc::new(bytes));
        id
    }

    pub fn get(&self, id: BlobId) -> Option<Arc<Vec<u8>>> {
        self.lock().get(&id).cloned()
    }

    pub fn release(&self, id: BlobId) -> bool {
        self.lock().remove(&id).is_some()
    }

    pub fn clear(&self) -> usize {
        let mut blobs = self.lock();
        let count = blobs.len();
        blobs.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave the map half-written.
    fn lock(&self) -> MutexGuard<'_, HashMap<BlobId, Arc<Vec<u8>>>> {
        self.blobs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
