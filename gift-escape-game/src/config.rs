//! Personalization fields for the voucher card.
//!
//! Every field is resolved on its own: a non-empty override wins, anything
//! else (missing key, empty value) falls back to the compiled-in default.
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Recognized override keys, in voucher display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigKey {
    Name,
    Course,
    Date,
    Location,
    Link,
    Note,
}

impl ConfigKey {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Course,
        Self::Date,
        Self::Location,
        Self::Link,
        Self::Note,
    ];

    /// Query-string name of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Course => "course",
            Self::Date => "date",
            Self::Location => "location",
            Self::Link => "link",
            Self::Note => "note",
        }
    }

    #[must_use]
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::Name => "Love",
            Self::Course => "Woodcraft Workshop — Beginner",
            Self::Date => "14 Dec 2025",
            Self::Location => "Barcelona",
            Self::Link => "https://example.com/woodcraft-course",
            Self::Note => {
                "Bring comfy clothes you don’t mind getting a little sawdusty. I’ll be right there with you. 💚"
            }
        }
    }

    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only source of override values, e.g. a parsed query string.
pub trait OverrideSource {
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl<K, V, H> OverrideSource for HashMap<K, V, H>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    H: BuildHasher,
{
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(AsRef::as_ref)
    }
}

impl<K, V> OverrideSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(AsRef::as_ref)
    }
}

/// Display fields for the intro greeting and the voucher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub name: String,
    pub course: String,
    pub date: String,
    pub location: String,
    pub link: String,
    pub note: String,
}

impl Default for Configuration {
    fn default() -> Self {
        resolve(&HashMap::<String, String>::new())
    }
}

impl Configuration {
    #[must_use]
    pub fn field(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::Name => &self.name,
            ConfigKey::Course => &self.course,
            ConfigKey::Date => &self.date,
            ConfigKey::Location => &self.location,
            ConfigKey::Link => &self.link,
            ConfigKey::Note => &self.note,
        }
    }
}

fn resolve_field<O: OverrideSource + ?Sized>(overrides: &O, key: ConfigKey) -> String {
    overrides
        .lookup(key.as_str())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| key.default_value())
        .to_string()
}

/// Merge `overrides` over the built-in defaults.
#[must_use]
pub fn resolve<O: OverrideSource + ?Sized>(overrides: &O) -> Configuration {
    Configuration {
        name: resolve_field(overrides, ConfigKey::Name),
        course: resolve_field(overrides, ConfigKey::Course),
        date: resolve_field(overrides, ConfigKey::Date),
        location: resolve_field(overrides, ConfigKey::Location),
        link: resolve_field(overrides, ConfigKey::Link),
        note: resolve_field(overrides, ConfigKey::Note),
    }
}
