//! Immutable, shareable byte-sequence value type.

use std::fmt;
use std::sync::Arc;

/// An immutable view over a byte sequence.
///
/// Once constructed, a `ByteView` can never be mutated, which is what makes
/// it safe to hand out from a cache shared across threads without copying
/// on every read: the bytes are held behind an `Arc`, so cloning a
/// `ByteView` is a refcount bump, not a copy.
///
/// Any constructor that accepts borrowed bytes copies them immediately, so
/// the view never aliases a buffer the caller might go on to mutate.
#[derive(Clone, Eq)]
pub struct ByteView {
    bytes: Arc<[u8]>,
}

impl ByteView {
    /// Construct a view by copying the given bytes.
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            bytes: Arc::from(bytes.as_ref()),
        }
    }

    /// Construct a view that takes ownership of an already-owned buffer
    /// without a further copy.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Arc::from(bytes),
        }
    }

    /// Number of bytes in the view.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Copy the view's contents into a fresh `Vec<u8>`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Borrow the view's contents as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Project the view as a string, replacing invalid UTF-8 with the
    /// replacement character rather than failing.
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

impl PartialEq for ByteView {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.as_ref() == other.bytes.as_ref()
    }
}

impl fmt::Debug for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteView").field("len", &self.len()).finish()
    }
}

impl From<&str> for ByteView {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl From<String> for ByteView {
    fn from(s: String) -> Self {
        Self::from_vec(s.into_bytes())
    }
}

impl From<Vec<u8>> for ByteView {
    fn from(v: Vec<u8>) -> Self {
        Self::from_vec(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_input_produces_equal_views() {
        let a = ByteView::new(b"hello");
        let b = ByteView::new(b"hello");
        assert_eq!(a, b);
    }

    #[test]
    fn construction_copies_borrowed_bytes() {
        let mut buf = vec![1u8, 2, 3];
        let view = ByteView::new(&buf);
        buf[0] = 99;
        assert_eq!(view.as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn len_and_str_projection() {
        let view = ByteView::from("630".to_string());
        assert_eq!(view.len(), 3);
        assert_eq!(view.as_str(), "630");
    }
}
