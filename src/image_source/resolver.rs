use crate::image_source::blob_store::BlobStore;
use crate::image_source::interface::ImageReference;

#[derive(Clone)]
pub struct ImageSourceResolver {
    blob_store: BlobStore,
}

impl ImageSourceResolver {
    pub fn new(blob_store: BlobStore) -> Self {
        Self { blob_store }
    }

    /// Only the first selected file is used. An empty selection, or a
    /// zero-length file, clears the current image.
    pub fn resolve_from_file(&self, files: Vec<Vec<u8>>) -> Option<ImageReference> {
        let bytes = files.into_iter().next()?;
        if bytes.is_empty() {
            return None;
        }
        Some(ImageReference::Blob(self.blob_store.create(bytes)))
    }
}

/// Taken verbatim; whether the URL points at an image is only discovered
/// when it is fetched for inference.
pub fn resolve_from_url(text: &str) -> Option<ImageReference> {
    if text.is_empty() {
        None
    } else {
        Some(ImageReference::Url(text.to_string()))
    }
}
