use std::fmt;
use std::ops::{Deref, Range};

/// A borrowed window `start..end` into a backing string.
///
/// Captured variables are returned as `Slice`s so that the reported range
/// always refers to the buffer the caller passed in.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice<'a> {
    buf: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Slice<'a> {
    pub fn new(buf: &'a str) -> Self {
        Self {
            buf,
            start: 0,
            end: buf.len(),
        }
    }

    /// Returns `None` if the range is out of bounds or not on char boundaries.
    pub fn with_range(buf: &'a str, range: Range<usize>) -> Option<Self> {
        buf.get(range.clone())?;
        Some(Self {
            buf,
            start: range.start,
            end: range.end,
        })
    }

    #[inline]
    pub fn as_str(&self) -> &'a str {
        &self.buf[self.start..self.end]
    }

    #[inline]
    pub fn backing(&self) -> &'a str {
        self.buf
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The first `n` bytes of this slice.
    #[inline]
    pub(crate) fn head(self, n: usize) -> Self {
        debug_assert!(n <= self.len());
        Self {
            end: self.start + n,
            ..self
        }
    }

    /// This slice without its first `n` bytes.
    #[inline]
    pub(crate) fn skip(self, n: usize) -> Self {
        debug_assert!(n <= self.len());
        Self {
            start: self.start + n,
            ..self
        }
    }
}

impl Deref for Slice<'_> {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Slice<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Slice<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Slice<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<'a> From<&'a str> for Slice<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s)
    }
}

impl fmt::Debug for Slice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}..{}", self.as_str(), self.start, self.end)
    }
}

impl fmt::Display for Slice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
