use crate::image_source::interface::ImageReference;
use std::collections::VecDeque;

/// Every image selected during the session, newest first. Duplicates are
/// kept; the optional limit evicts the oldest entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: VecDeque<ImageReference>,
}

impl HistoryLog {
    /// Returns whatever fell off the end because of `limit`.
    pub fn append(&mut self, reference: ImageReference, limit: Option<usize>) -> Vec<ImageReference> {
        self.entries.push_front(reference);

        match limit {
            Some(limit) if self.entries.len() > limit => {
                self.entries.split_off(limit).into_iter().collect()
            }
            _ => vec![],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageReference> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn to_vec(&self) -> Vec<ImageReference> {
        self.entries.iter().cloned().collect()
    }
}
