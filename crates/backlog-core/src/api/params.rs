//! Query-string and form-body parameter containers.

use crate::Result;
use crate::option::{FormOption, FormType, QueryOption, QueryType, apply_options};
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use url::form_urlencoded;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Ordered multi-valued mapping from key to values.
///
/// Keys are compared byte for byte and encoded in sorted order; values under
/// one key keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    entries: BTreeMap<String, Vec<String>>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every value stored under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), vec![value.into()]);
    }

    /// Appends `value` after the values already stored under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(value.into());
    }

    /// First value under `key`, or `""` when absent.
    pub fn get(&self, key: &str) -> &str {
        self.entries
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn del(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `application/x-www-form-urlencoded` serialization.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.entries {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

/// Parameters sent in the URL query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Values);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `options` through the whitelist gate and writes them.
    pub fn with_options(&mut self, options: &[QueryOption], allowed: &[QueryType]) -> Result<()> {
        apply_options(self, options, allowed)
    }
}

impl Deref for QueryParams {
    type Target = Values;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for QueryParams {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Parameters sent as an `application/x-www-form-urlencoded` body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams(Values);

impl FormParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(&mut self, options: &[FormOption], allowed: &[FormType]) -> Result<()> {
        apply_options(self, options, allowed)
    }

    pub fn content_type(&self) -> &'static str {
        FORM_CONTENT_TYPE
    }

    pub fn to_body(&self) -> Vec<u8> {
        self.encode().into_bytes()
    }
}

impl Deref for FormParams {
    type Target = Values;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for FormParams {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
