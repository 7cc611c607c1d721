use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlobId(pub u64);

/// Handle to displayable image data. Blob references point into the
/// session's `BlobStore` and must be released once unreachable; URL
/// references are not owned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageReference {
    Blob(BlobId),
    Url(String),
}

impl ImageReference {
    pub fn blob_id(&self) -> Option<BlobId> {
        match self {
            ImageReference::Blob(id) => Some(*id),
            ImageReference::Url(_) => None,
        }
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageReference::Blob(BlobId(id)) => write!(f, "blob:{}", id),
            ImageReference::Url(url) => write!(f, "{}", url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImageSourceError {
    #[error("blob {0:?} is not in the store")]
    UnknownBlob(BlobId),
    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },
    #[error("{0} returned no image data")]
    EmptyBody(String),
}

pub trait ImageFetcher {
    fn fetch(&self, reference: &ImageReference) -> Result<Vec<u8>, ImageSourceError>;
}
