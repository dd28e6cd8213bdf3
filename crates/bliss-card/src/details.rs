use std::sync::Arc;

/// Greeting shown before anything has been generated
pub const DEFAULT_MESSAGE: &str = "Happy 30th Birthday, Alex! May your day be as wonderful as you are. Wishing you a \
                                   year filled with amazing adventures, beautiful moments captured, and delicious new \
                                   dishes to savor. Cheers to you!";

/// Binary content a transient URL can point at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    /// File name as uploaded or generated
    pub name: String,
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
}

impl Blob {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// Everything needed to render one card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayDetails {
    pub name: String,
    pub age: u32,
    pub interests: String,
    pub message: String,
    pub image: Option<Blob>,
}

impl Default for BirthdayDetails {
    fn default() -> Self {
        Self {
            name: "Alex Doe".to_owned(),
            age: 30,
            interests: "hiking, photography, and trying new recipes".to_owned(),
            message: DEFAULT_MESSAGE.to_owned(),
            image: None,
        }
    }
}
