// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::str::FromStr;

/// Separator of multiple values packed into a single tag, e.g. `access=no;bicycle`.
pub const VALUE_DELIMITER: char = ';';

/// Immutable set of [OSM tags](https://wiki.openstreetmap.org/wiki/Tags)
/// attached to a single way or node.
///
/// Tags with empty values are indistinguishable from missing tags.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tags(HashMap<String, String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of tags with non-empty values.
    pub fn len(&self) -> usize {
        self.0.values().filter(|v| !v.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value of a tag, or [None] if it is missing or empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(|v| v.as_str())
            .filter(|v| !v.is_empty())
    }

    /// Checks if a tag with the given key is present.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Checks if a tag has exactly the provided value.
    pub fn has_tag(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value)
    }

    /// Checks if the whole value of a tag is one of the provided values.
    pub fn has_tag_in(&self, key: &str, values: &[&str]) -> bool {
        self.get(key).is_some_and(|v| values.contains(&v))
    }

    /// Returns the [VALUE_DELIMITER]-separated sub-values of a tag,
    /// or [None] if the tag is missing.
    ///
    /// Sub-values are yielded lazily and in order, without allocating.
    /// Empty sub-values (e.g. from `no;;yes`) are yielded as-is.
    pub fn values(&self, key: &str) -> Option<std::str::Split<'_, char>> {
        self.get(key).map(|v| v.split(VALUE_DELIMITER))
    }

    /// Sets a tag, returning its previous value.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a tag, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Iterates over all tags with non-empty values, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Tags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<HashMap<String, String>> for Tags {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl FromIterator<Tag> for Tags {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().map(|t| (t.key, t.value)).collect())
    }
}

/// Single `key=value` pair, usually parsed from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagParseError {
    #[error("missing '=' in tag: {0:?}")]
    MissingSeparator(String),

    #[error("empty key in tag: {0:?}")]
    EmptyKey(String),
}

impl FromStr for Tag {
    type Err = TagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| TagParseError::MissingSeparator(s.to_string()))?;

        let key = key.trim();
        if key.is_empty() {
            return Err(TagParseError::EmptyKey(s.to_string()));
        }

        Ok(Tag {
            key: key.to_string(),
            value: value.trim().to_string(),
        })
    }
}

/// Creates [Tags] from `"key": "value"` literal pairs.
#[cfg(test)]
macro_rules! tags {
    {} => { $crate::Tags::default() };
    {$( $k:literal : $v:literal ),+ $(,)?} => {
        $crate::Tags::from_iter([ $( ($k, $v) ),+ ])
    };
}

#[cfg(test)]
pub(crate) use tags;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_treats_empty_as_missing() {
        let t = tags! {"highway": "path", "vehicle": ""};
        assert_eq!(t.get("highway"), Some("path"));
        assert_eq!(t.get("vehicle"), None);
        assert!(!t.has("vehicle"));
        assert!(!t.has("access"));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn iter_skips_empty_values() {
        let t = tags! {"highway": "path", "vehicle": "", "access": "no"};
        let mut pairs: Vec<(&str, &str)> = t.iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![("access", "no"), ("highway", "path")]);
    }

    #[test]
    fn from_hash_map() {
        let map = HashMap::from([
            ("highway".to_string(), "path".to_string()),
            ("bicycle".to_string(), "".to_string()),
        ]);
        let t = Tags::from(map);
        assert_eq!(t, tags! {"highway": "path", "bicycle": ""});
        assert_eq!(t.get("highway"), Some("path"));
        assert!(!t.has("bicycle"));
    }

    #[test]
    fn has_tag_in() {
        let t = tags! {"oneway": "yes", "access": "no;delivery"};
        assert!(t.has_tag_in("oneway", &["yes", "1"]));
        assert!(!t.has_tag_in("oneway", &["-1"]));
        assert!(!t.has_tag_in("access", &["no"]));
        assert!(!t.has_tag_in("bicycle", &["no"]));
    }

    #[test]
    fn values() {
        let t = tags! {"access": "no;;delivery", "bicycle": "yes"};
        assert_eq!(
            t.values("access").unwrap().collect::<Vec<_>>(),
            vec!["no", "", "delivery"],
        );
        assert_eq!(t.values("bicycle").unwrap().collect::<Vec<_>>(), vec!["yes"]);
        assert!(t.values("vehicle").is_none());
    }

    #[test]
    fn parse_tag() {
        assert_eq!(
            "oneway:bicycle=no".parse::<Tag>(),
            Ok(Tag {
                key: "oneway:bicycle".to_string(),
                value: "no".to_string()
            }),
        );
        assert_eq!(
            "note=a=b".parse::<Tag>().map(|t| t.value),
            Ok("a=b".to_string())
        );
        assert_eq!(
            "highway".parse::<Tag>(),
            Err(TagParseError::MissingSeparator("highway".to_string())),
        );
        assert_eq!(
            "=yes".parse::<Tag>(),
            Err(TagParseError::EmptyKey("=yes".to_string())),
        );
    }
}
