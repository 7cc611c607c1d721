use crate::image_source::blob_store::BlobStore;
use crate::image_source::interface::{ImageFetcher, ImageReference, ImageSourceError};
use std::collections::HashMap;

/// Serves blobs from the store and URLs from a fixed table.
pub struct ImageFetcherFake {
    blob_store: BlobStore,
    urls: HashMap<String, Vec<u8>>,
}

impl ImageFetcherFake {
    pub fn new(blob_store: BlobStore) -> Self {
        Self {
            blob_store,
            urls: HashMap::new(),
        }
    }

    pub fn with_url(mut self, url: &str, bytes: Vec<u8>) -> Self {
        self.urls.insert(url.to_string(), bytes);
        self
    }
}

impl ImageFetcher for ImageFetcherFake {
    fn fetch(&self, reference: &ImageReference) -> Result<Vec<u8>, ImageSourceError> {
        match reference {
            ImageReference::Blob(id) => self
                .blob_store
                .get(*id)
                .map(|bytes| bytes.as_ref().clone())
                .ok_or(ImageSourceError::UnknownBlob(*id)),
            ImageReference::Url(url) => {
                self.urls
                    .get(url)
                    .cloned()
                    .ok_or_else(|| ImageSourceError::Fetch {
                        url: url.clone(),
                        message: "404 Not Found".to_string(),
                    })
            }
        }
    }
}
