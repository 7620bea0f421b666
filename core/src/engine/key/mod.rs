//! Composite-key codec for the ordered token index.
//!
//! A composite key is `token SEP id [SEP position]`. String fields are escaped
//! so the separator can never appear inside them:
//!
//! | raw byte | encoded       |
//! |----------|---------------|
//! | `0x00`   | `0x00 0xFF`   |
//! | SEP      | `0x00 0x01`   |
//!
//! Escaping maps every string to a byte string with the same prefixes, so all
//! keys whose token equals or extends `q` sit in the contiguous byte range
//! starting at `escape(q)`. The position is 8 big-endian bytes.

use crate::types::EntryId;
use std::ops::Bound;

const ESCAPE: u8 = 0x00;
const ESCAPED_NUL: u8 = 0xFF;
const SEPARATOR_TAG: u8 = 0x01;
const POSITION_WIDTH: usize = 8;

/// A decoded token-index key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeKey {
    pub token: String,
    pub id: EntryId,
    pub position: Option<u64>,
}

impl CompositeKey {
    pub fn encode(token: &str, id: &EntryId, position: Option<usize>) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(token.len() + id.len() + 4 + POSITION_WIDTH + 2);
        escape_into(token.as_bytes(), &mut bytes);
        bytes.extend_from_slice(&[ESCAPE, SEPARATOR_TAG]);
        escape_into(id.as_bytes(), &mut bytes);
        if let Some(position) = position {
            bytes.extend_from_slice(&[ESCAPE, SEPARATOR_TAG]);
            bytes.extend_from_slice(&(position as u64).to_be_bytes());
        }
        bytes
    }

    /// Decodes a key, requiring a position field when `positional` is set.
    ///
    /// Returns `None` for anything malformed: missing separator, truncated or
    /// oversized position, invalid escape, invalid UTF-8 or an empty id.
    pub fn decode(bytes: &[u8], positional: bool) -> Option<Self> {
        let (token, rest) = read_field(bytes)?;
        let (id, rest) = read_field(rest?)?;

        let position = match rest {
            Some(rest) => Some(u64::from_be_bytes(rest.try_into().ok()?)),
            None => None,
        };
        if positional && position.is_none() {
            return None;
        }

        Some(Self {
            token: String::from_utf8(token).ok()?,
            id: EntryId::try_new(String::from_utf8(id).ok()?).ok()?,
            position,
        })
    }
}

/// Unescapes one field. Returns the field and the bytes after its separator,
/// or `None` as the remainder when the field runs to the end of input.
fn read_field(bytes: &[u8]) -> Option<(Vec<u8>, Option<&[u8]>)> {
    let mut field = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if byte != ESCAPE {
            field.push(byte);
            i += 1;
            continue;
        }
        match bytes.get(i + 1) {
            Some(&ESCAPED_NUL) => {
                field.push(ESCAPE);
                i += 2;
            }
            Some(&SEPARATOR_TAG) => return Some((field, Some(&bytes[i + 2..]))),
            _ => return None,
        }
    }
    Some((field, None))
}

fn escape_into(raw: &[u8], out: &mut Vec<u8>) {
    for &byte in raw {
        out.push(byte);
        if byte == ESCAPE {
            out.push(ESCAPED_NUL);
        }
    }
}

/// Half-open byte range over composite keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRange {
    pub start: Vec<u8>,
    /// `None` means unbounded.
    pub end: Option<Vec<u8>>,
}

impl KeyRange {
    /// Every key in the index.
    pub fn all() -> Self {
        Self {
            start: Vec::new(),
            end: None,
        }
    }

    /// All keys whose token equals or extends `token`.
    pub fn prefix(token: &str) -> Self {
        let mut start = Vec::with_capacity(token.len() + 1);
        escape_into(token.as_bytes(), &mut start);
        let end = successor(&start);
        Self { start, end }
    }

    /// The part of this range strictly after `key`.
    pub fn after(&self, key: &[u8]) -> Self {
        let mut start = Vec::with_capacity(key.len() + 1);
        start.extend_from_slice(key);
        start.push(0);
        Self {
            start,
            end: self.end.clone(),
        }
    }

    #[cfg(test)]
    fn contains(&self, key: &[u8]) -> bool {
        key >= self.start.as_slice() && self.end.as_deref().is_none_or(|end| key < end)
    }

    pub fn bounds(&self) -> (Bound<&[u8]>, Bound<&[u8]>) {
        let end = match &self.end {
            Some(end) => Bound::Excluded(end.as_slice()),
            None => Bound::Unbounded,
        };
        (Bound::Included(self.start.as_slice()), end)
    }
}

/// Smallest byte string greater than every string starting with `prefix`.
fn successor(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut end = prefix.to_vec();
    while let Some(last) = end.pop() {
        if last < u8::MAX {
            end.push(last + 1);
            return Some(end);
        }
    }
    None
}
