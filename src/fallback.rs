//! Defensive helpers for rendering partial data.
//!
//! These only look at values already in hand. Nothing here fetches or retries.

use std::collections::{BTreeMap, HashMap};

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Values that count as "nothing to show".
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for [T] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Blank for HashMap<K, V, S> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Blank for BTreeMap<K, V> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Blank::is_blank)
    }
}

impl Blank for Value {
    fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Array(items) => items.is_empty(),
            Value::Object(fields) => fields.is_empty(),
            _ => false,
        }
    }
}

/// `primary` unless it is blank, in which case `fallback`.
pub fn with_fallback<T: Blank>(primary: T, fallback: T) -> T {
    if primary.is_blank() { fallback } else { primary }
}

/// Like [`with_fallback`] for an optional primary.
pub fn with_fallback_opt<T: Blank>(primary: Option<T>, fallback: T) -> T {
    match primary {
        Some(v) if !v.is_blank() => v,
        _ => fallback,
    }
}

/// Walk `a.b.0.c` through objects and arrays. Empty segments are ignored.
pub fn safe_access<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').filter(|s| !s.is_empty()).try_fold(value, |current, key| match current {
        Value::Object(fields) => fields.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Value at `path` converted to `T`, or `default` when missing, null, or of another type.
pub fn safe_access_or<T: DeserializeOwned>(value: &Value, path: &str, default: T) -> T {
    safe_access(value, path)
        .filter(|v| !v.is_null())
        .and_then(|v| T::deserialize(v).ok())
        .unwrap_or(default)
}
