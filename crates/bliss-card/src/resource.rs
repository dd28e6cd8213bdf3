use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::details::Blob;

/// Handle to a live transient resource
///
/// Issued by a [`ResourceStore`] and valid until released.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issues and releases URLs for in-memory content
pub trait ResourceStore: Send + Sync {
    /// Make `blob` addressable and return its URL
    fn create(&self, blob: &Blob) -> ObjectUrl;

    /// Release a URL previously returned by [`create`](Self::create)
    fn release(&self, url: &ObjectUrl);
}

/// Process-local resource store keyed by `blob:` URLs
#[derive(Debug, Default)]
pub struct InMemoryResourceStore {
    entries: DashMap<ObjectUrl, Blob>,
}

impl InMemoryResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content behind a live URL
    pub fn get(&self, url: &ObjectUrl) -> Option<Blob> {
        self.entries.get(url).map(|entry| entry.value().clone())
    }

    pub fn is_live(&self, url: &ObjectUrl) -> bool {
        self.entries.contains_key(url)
    }

    /// Number of URLs not yet released
    pub fn live_count(&self) -> usize {
        self.entries.len()
    }
}

impl ResourceStore for InMemoryResourceStore {
    fn create(&self, blob: &Blob) -> ObjectUrl {
        let url = ObjectUrl(format!("blob:bliss/{}", Uuid::new_v4()));
        self.entries.insert(url.clone(), blob.clone());

        tracing::trace!(url = %url, mime_type = %blob.mime_type, size = blob.bytes.len(), "object url created");

        url
    }

    fn release(&self, url: &ObjectUrl) {
        if self.entries.remove(url).is_none() {
            tracing::warn!(url = %url, "release of unknown object url");
        }
    }
}

/// One resource that is either absent or present at a single live URL
///
/// Replacing the content releases the previous URL; dropping the slot
/// releases whatever is still present.
pub struct ResourceSlot {
    store: Arc<dyn ResourceStore>,
    current: Option<ObjectUrl>,
}

impl fmt::Debug for ResourceSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceSlot").field("current", &self.current).finish_non_exhaustive()
    }
}

impl ResourceSlot {
    pub fn new(store: Arc<dyn ResourceStore>) -> Self {
        Self { store, current: None }
    }

    pub const fn url(&self) -> Option<&ObjectUrl> {
        self.current.as_ref()
    }

    pub const fn is_present(&self) -> bool {
        self.current.is_some()
    }

    /// Point the slot at new content, or at nothing
    pub fn replace(&mut self, blob: Option<&Blob>) -> Option<&ObjectUrl> {
        let next = blob.map(|blob| self.store.create(blob));
        self.set(next);
        self.current.as_ref()
    }

    /// Adopt an already issued URL
    ///
    /// The previous URL is released unless it is the same one.
    pub fn set(&mut self, next: Option<ObjectUrl>) {
        if next == self.current {
            return;
        }

        if let Some(previous) = self.current.take() {
            self.store.release(&previous);
        }
        self.current = next;
    }

    pub fn clear(&mut self) {
        self.set(None);
    }
}

impl Drop for ResourceSlot {
    fn drop(&mut self) {
        self.clear();
    }
}
