use crate::slice::Slice;

use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Captured variables in pattern order. Names borrow the router, values the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captures<'r, 'p> {
    buf: SmallVec<[(&'r str, Slice<'p>); 8]>,
}

impl<'r, 'p> Captures<'r, 'p> {
    pub fn get(&self, name: &str) -> Option<&'p str> {
        self.get_slice(name).map(|s| s.as_str())
    }

    pub fn get_slice(&self, name: &str) -> Option<Slice<'p>> {
        self.buf
            .iter()
            .find_map(|&(k, v)| if name == k { Some(v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'r str, &'p str)> + '_ {
        self.buf.iter().map(|&(k, v)| (k, v.as_str()))
    }
}

impl<'r, 'p> Deref for Captures<'r, 'p> {
    type Target = [(&'r str, Slice<'p>)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl<'r, 'p> Captures<'r, 'p> {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    #[inline]
    pub(super) fn push(&mut self, name: &'r str, value: Slice<'p>) {
        self.buf.push((name, value))
    }
}
