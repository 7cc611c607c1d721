use crate::image_source::blob_store::BlobStore;
use crate::image_source::interface::{ImageFetcher, ImageReference, ImageSourceError};
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use std::time::Duration;

pub struct ImageFetcherHttp {
    blob_store: BlobStore,
    client: reqwest::blocking::Client,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageFetcherHttp {
    pub fn new(
        blob_store: BlobStore,
        timeout: Duration,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            blob_store,
            client,
            logger: logger.with_namespace("image_fetcher").with_namespace("http"),
        })
    }

    fn fetch_url(&self, url: &str) -> Result<Vec<u8>, ImageSourceError> {
        let to_error = |e: reqwest::Error| ImageSourceError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let _ = self.logger.info(&format!("Fetching {}", url));

        let bytes = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.bytes())
            .map_err(to_error)?;

        if bytes.is_empty() {
            return Err(ImageSourceError::EmptyBody(url.to_string()));
        }

        let _ = self
            .logger
            .info(&format!("Fetched {} bytes from {}", bytes.len(), url));

        Ok(bytes.to_vec())
    }
}

impl ImageFetcher for ImageFetcherHttp {
    fn fetch(&self, reference: &ImageReference) -> Result<Vec<u8>, ImageSourceError> {
        match reference {
            ImageReference::Blob(id) => self
                .blob_store
                .get(*id)
                .map(|bytes| bytes.as_ref().clone())
                .ok_or(ImageSourceError::UnknownBlob(*id)),
            ImageReference::Url(url) => self.fetch_url(url),
        }
    }
}
