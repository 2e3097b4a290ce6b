//! Prompt Set
//!
//! Ordered language -> prompt template mapping.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Prompt templates keyed by language label, in the order the backend sent them.
///
/// Question order on the detail page follows this order, so a plain hash map
/// would not do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptSet(Vec<(String, String)>);

impl PromptSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the template for `language`. A replaced entry keeps its position.
    pub fn insert(&mut self, language: impl Into<String>, text: impl Into<String>) {
        let language = language.into();
        let text = text.into();
        match self.0.iter_mut().find(|(lang, _)| *lang == language) {
            Some(entry) => entry.1 = text,
            None => self.0.push((language, text)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(lang, _)| lang == language)
            .map(|(_, text)| text.as_str())
    }

    pub fn first(&self) -> Option<(&str, &str)> {
        self.iter().next()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(lang, text)| (lang.as_str(), text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L: Into<String>, T: Into<String>> FromIterator<(L, T)> for PromptSet {
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        let mut set = PromptSet::new();
        for (language, text) in iter {
            set.insert(language, text);
        }
        set
    }
}

impl Serialize for PromptSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (language, text) in &self.0 {
            map.serialize_entry(language, text)?;
        }
        map.end()
    }
}

struct PromptSetVisitor;

impl<'de> Visitor<'de> for PromptSetVisitor {
    type Value = PromptSet;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of language label to prompt text")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<PromptSet, M::Error> {
        let mut set = PromptSet::new();
        while let Some((language, text)) = access.next_entry::<String, Option<String>>()? {
            set.insert(language, text.unwrap_or_default());
        }
        Ok(set)
    }
}

impl<'de> Deserialize<'de> for PromptSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PromptSetVisitor)
    }
}
