//! Shared helpers for the record types: the `Display` field dump and the
//! metadata map operations.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::{Hash, Hasher};

use bytes::Bytes;

use crate::error::S3Error;

/// Incremental writer for the `{Name: value, ...}` record dump.
///
/// Only set fields are emitted, in the order the `opt`/`map`/... calls are
/// made, which every record keeps aligned with its field declaration order.
pub(crate) struct FieldList<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    state: fmt::Result,
    first: bool,
}

impl<'a, 'b> FieldList<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let state = f.write_str("{");
        Self {
            f,
            state,
            first: true,
        }
    }

    fn entry(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if self.state.is_err() {
            return;
        }
        let sep = if self.first { "" } else { ", " };
        self.first = false;
        self.state = write!(self.f, "{sep}{name}: {value}");
    }

    /// Emit an optional scalar field through its `Display` form.
    pub(crate) fn opt<T: fmt::Display>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        if let Some(v) = value {
            self.entry(name, format_args!("{v}"));
        }
        self
    }

    /// Emit a binary payload as a length summary rather than raw bytes.
    pub(crate) fn bytes(&mut self, name: &str, value: Option<&Bytes>) -> &mut Self {
        if let Some(b) = value {
            self.entry(name, format_args!("<{} bytes>", b.len()));
        }
        self
    }

    /// Emit a string-to-string map field, entries sorted by key so equal
    /// records always render identically.
    pub(crate) fn map(
        &mut self,
        name: &str,
        value: Option<&HashMap<String, String>>,
    ) -> &mut Self {
        if let Some(m) = value {
            let mut entries: Vec<_> = m.iter().collect();
            entries.sort();
            self.entry(name, format_args!("{}", MapEntries(&entries)));
        }
        self
    }

    /// Emit an optional list field as `[a, b, c]`; a set-but-empty list
    /// renders as `[]`.
    pub(crate) fn list<T: fmt::Display>(&mut self, name: &str, values: Option<&[T]>) -> &mut Self {
        if let Some(values) = values {
            self.entry(name, format_args!("{}", Join(values)));
        }
        self
    }

    pub(crate) fn finish(&mut self) -> fmt::Result {
        self.state?;
        self.f.write_str("}")
    }
}

struct MapEntries<'a>(&'a [(&'a String, &'a String)]);

impl fmt::Display for MapEntries<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k:?}: {v:?}")?;
        }
        f.write_str("}")
    }
}

struct Join<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for Join<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

/// Insert-if-absent for a metadata map, lazily creating the map.
///
/// Rejects a key that is already present so the convenience API never
/// silently overwrites; wholesale replacement goes through `with_metadata`.
pub(crate) fn insert_metadata_entry(
    metadata: &mut Option<HashMap<String, String>>,
    key: String,
    value: String,
) -> Result<(), S3Error> {
    match metadata.get_or_insert_with(HashMap::new).entry(key) {
        Entry::Occupied(e) => Err(S3Error::duplicate_metadata_key(e.key().clone())),
        Entry::Vacant(e) => {
            e.insert(value);
            Ok(())
        }
    }
}

/// Hash a metadata map independently of insertion order.
///
/// Entries are hashed sorted by key, keeping `Hash` consistent with the
/// unordered map equality of the derived `PartialEq`.
pub(crate) fn hash_metadata<H: Hasher>(
    metadata: &Option<HashMap<String, String>>,
    state: &mut H,
) {
    match metadata {
        None => state.write_u8(0),
        Some(map) => {
            state.write_u8(1);
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort();
            entries.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::hash::DefaultHasher;

    use super::*;

    fn hash_of(metadata: &Option<HashMap<String, String>>) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash_metadata(metadata, &mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_should_reject_duplicate_metadata_key() {
        let mut metadata = None;
        insert_metadata_entry(&mut metadata, "owner".into(), "alice".into())
            .expect("first insert");
        let err = insert_metadata_entry(&mut metadata, "owner".into(), "bob".into())
            .expect_err("second insert must fail");
        assert_eq!(err.code, crate::S3ErrorCode::InvalidArgument);
        assert_eq!(
            metadata.as_ref().and_then(|m| m.get("owner")).map(String::as_str),
            Some("alice")
        );
    }

    #[test]
    fn test_should_hash_metadata_independently_of_insertion_order() {
        let mut a = None;
        insert_metadata_entry(&mut a, "k1".into(), "v1".into()).unwrap();
        insert_metadata_entry(&mut a, "k2".into(), "v2".into()).unwrap();
        let mut b = None;
        insert_metadata_entry(&mut b, "k2".into(), "v2".into()).unwrap();
        insert_metadata_entry(&mut b, "k1".into(), "v1".into()).unwrap();
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_should_distinguish_unset_from_empty_metadata_in_hash() {
        assert_ne!(hash_of(&None), hash_of(&Some(HashMap::new())));
    }
}
