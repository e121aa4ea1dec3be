// Copyright 2024-2026 Farlight Networks, LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Hierarchical names.
//!
//! A [`Name`] is a sequence of opaque byte components. Names are written as
//! URIs such as `/localhost/nfd/fib`:
//!
//! - bytes outside the unreserved set (`A-Z a-z 0-9 - . _ ~`) are
//!   percent-encoded,
//! - a component made only of periods is written with three extra periods,
//!   so `...` is the empty component and `....` is a single period.

use crate::ControlError;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single component of a [`Name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct NameComponent(Bytes);

impl NameComponent {
    /// Creates a component from raw bytes.
    #[must_use]
    pub fn new(value: impl Into<Bytes>) -> Self {
        Self(value.into())
    }

    /// Returns the component value.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns a cheap clone of the underlying buffer.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }

    /// Returns the length of the component value in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the component value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses one URI path segment.
    fn from_escaped(segment: &str) -> Result<Self, ControlError> {
        if segment.bytes().all(|b| b == b'.') {
            if segment.len() < 3 {
                return Err(ControlError::invalid_name(format!(
                    "component {segment:?} is reserved"
                )));
            }
            return Ok(Self(Bytes::from(vec![b'.'; segment.len() - 3])));
        }

        let raw = segment.as_bytes();
        let mut value = Vec::with_capacity(raw.len());
        let mut i = 0;
        while i < raw.len() {
            if raw[i] == b'%' {
                let hex = raw
                    .get(i + 1..i + 3)
                    .filter(|h| h.iter().all(u8::is_ascii_hexdigit))
                    .ok_or_else(|| {
                        ControlError::invalid_name(format!("bad escape in {segment:?}"))
                    })?;
                value.push((hex_value(hex[0]) << 4) | hex_value(hex[1]));
                i += 3;
            } else {
                value.push(raw[i]);
                i += 1;
            }
        }

        Ok(Self(Bytes::from(value)))
    }
}

const fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

const fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

impl fmt::Display for NameComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(|&b| b == b'.') {
            return write!(f, "...{}", ".".repeat(self.0.len()));
        }
        for &byte in &self.0 {
            if is_unreserved(byte) {
                write!(f, "{}", char::from(byte))?;
            } else {
                write!(f, "%{byte:02X}")?;
            }
        }
        Ok(())
    }
}

impl From<&str> for NameComponent {
    fn from(s: &str) -> Self {
        Self(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for NameComponent {
    fn from(s: String) -> Self {
        Self(Bytes::from(s))
    }
}

impl From<&[u8]> for NameComponent {
    fn from(b: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(b))
    }
}

impl From<Vec<u8>> for NameComponent {
    fn from(b: Vec<u8>) -> Self {
        Self(Bytes::from(b))
    }
}

impl From<Bytes> for NameComponent {
    fn from(b: Bytes) -> Self {
        Self(b)
    }
}

/// A hierarchical name made of [`NameComponent`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Name {
    components: Vec<NameComponent>,
}

impl Name {
    /// Creates an empty name (`/`).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Parses a name from its URI form.
    ///
    /// An optional `ndn:` scheme is accepted. Empty path segments are
    /// skipped, so `/a//b/` is the same name as `/a/b`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URI does not start with `/`, contains a
    /// malformed percent escape, or uses the reserved `.`/`..` segments.
    pub fn parse(uri: &str) -> Result<Self, ControlError> {
        let trimmed = uri.trim();
        let path = trimmed.strip_prefix("ndn:").unwrap_or(trimmed);
        if !path.starts_with('/') {
            return Err(ControlError::invalid_name(format!(
                "{uri:?} does not start with '/'"
            )));
        }

        let components = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(NameComponent::from_escaped)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { components })
    }

    /// Appends a component, returning the extended name.
    #[must_use]
    pub fn append(mut self, component: impl Into<NameComponent>) -> Self {
        self.components.push(component.into());
        self
    }

    /// Appends a component in place.
    pub fn push(&mut self, component: impl Into<NameComponent>) {
        self.components.push(component.into());
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the name has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the component at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&NameComponent> {
        self.components.get(index)
    }

    /// Returns the last component, if any.
    #[must_use]
    pub fn last(&self) -> Option<&NameComponent> {
        self.components.last()
    }

    /// Returns all components.
    #[must_use]
    pub fn components(&self) -> &[NameComponent] {
        &self.components
    }

    /// Returns an iterator over the components.
    pub fn iter(&self) -> std::slice::Iter<'_, NameComponent> {
        self.components.iter()
    }

    /// Returns true if `prefix` is a prefix of this name.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.components.starts_with(&prefix.components)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.components.is_empty() {
            return write!(f, "/");
        }
        for component in &self.components {
            write!(f, "/{component}")?;
        }
        Ok(())
    }
}

impl FromStr for Name {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromIterator<NameComponent> for Name {
    fn from_iter<I: IntoIterator<Item = NameComponent>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Name {
    type Item = &'a NameComponent;
    type IntoIter = std::slice::Iter<'a, NameComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_simple_uri() {
        let name = Name::parse("/localhost/nfd/fib").expect("parse should succeed");
        assert_eq!(name.len(), 3);
        assert_eq!(name.get(0).map(NameComponent::as_bytes), Some(&b"localhost"[..]));
        assert_eq!(name.last().map(NameComponent::as_bytes), Some(&b"fib"[..]));
        assert_eq!(name.to_string(), "/localhost/nfd/fib");
    }

    #[test]
    fn parse_accepts_scheme_and_extra_slashes() {
        let a = Name::parse("ndn:/a//b/").expect("parse should succeed");
        let b: Name = "/a/b".parse().expect("parse should succeed");
        assert_eq!(a, b);
    }

    #[test]
    fn empty_name_displays_as_root() {
        assert_eq!(Name::new().to_string(), "/");
        assert!(Name::parse("/").expect("parse should succeed").is_empty());
    }

    #[test]
    fn relative_uri_is_rejected() {
        assert!(matches!(
            Name::parse("localhost/nfd"),
            Err(ControlError::InvalidName(_))
        ));
    }

    #[test]
    fn percent_escapes() {
        let name = Name::new().append(&[0x00u8, b'a', 0xff, b' '][..]);
        assert_eq!(name.to_string(), "/%00a%FF%20");

        let parsed = Name::parse("/%00a%ff%20").expect("parse should succeed");
        assert_eq!(parsed, name);
    }

    #[test]
    fn malformed_escapes_are_rejected() {
        assert!(Name::parse("/a%2").is_err());
        assert!(Name::parse("/a%zz").is_err());
        assert!(Name::parse("/a%+1").is_err());
    }

    #[test]
    fn period_only_components() {
        let name = Name::new().append("").append(".");
        assert_eq!(name.to_string(), "/.../....");
        assert_eq!(Name::parse("/.../....").expect("parse should succeed"), name);

        assert!(Name::parse("/.").is_err());
        assert!(Name::parse("/a/..").is_err());
    }

    #[test]
    fn prefix_matching() {
        let prefix = Name::parse("/localhost/nfd").expect("parse should succeed");
        let name = prefix.clone().append("fib").append("add-nexthop");
        assert!(name.starts_with(&prefix));
        assert!(!prefix.starts_with(&name));
        assert!(name.starts_with(&Name::new()));
    }

    #[test]
    fn push_and_iterate() {
        let mut name = Name::new();
        name.push("a");
        name.push(String::from("b"));
        let collected: Vec<_> = name.iter().map(ToString::to_string).collect();
        assert_eq!(collected, vec!["a", "b"]);

        let rebuilt: Name = name.components().iter().cloned().collect();
        assert_eq!(rebuilt, name);
    }

    proptest! {
        #[test]
        fn uri_form_preserves_components(
            components in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..16), 0..8)
        ) {
            let name: Name = components.into_iter().map(NameComponent::from).collect();
            let parsed = Name::parse(&name.to_string()).expect("parse should succeed");
            prop_assert_eq!(parsed, name);
        }

        #[test]
        fn parse_never_panics(uri in ".*") {
            let _ = Name::parse(&uri);
        }
    }
}
