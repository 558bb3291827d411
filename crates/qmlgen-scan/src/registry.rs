//! Scan configuration: the known-base registry and heuristic bounds
//!
//! The registry ships with the default Qt reactive root set but is an
//! injectable value so alternate frameworks or naming schemes can be
//! matched without code changes. The two heuristic distances (singleton
//! lookback, property correlation window) are configuration fields rather
//! than hardcoded constants for the same reason.

use serde::{Deserialize, Serialize};

/// Default ordered root set of recognized reactive base classes.
///
/// Order matters: when a class matches several bases, the earliest entry
/// wins as the emitted prototype. The first entry is the generic root base
/// used as the fallback prototype.
const DEFAULT_BASES: &[&str] = &[
    "QObject",
    "QQuickItem",
    "QQuickPaintedItem",
    "QQuickFramebufferObject",
    "QOpenGLFunctionsQGraphicsItem",
    "QAbstractItemModel",
    "QAbstractListModel",
    "QAbstractTableModel",
    "QSortFilterProxyModel",
];

/// Configuration for class location and member extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Ordered registry of recognized base class names.
    pub bases: Vec<String>,
    /// Decorator token marking a class as a singleton.
    pub singleton_marker: String,
    /// How many lines above a class declaration are searched for the
    /// singleton marker.
    pub singleton_lookback: usize,
    /// Character window after a property declaration within which the
    /// getter definition must appear to be correlated with it.
    pub property_window: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            bases: DEFAULT_BASES.iter().map(ToString::to_string).collect(),
            singleton_marker: "@Singleton".to_string(),
            singleton_lookback: 5,
            property_window: 200,
        }
    }
}

impl ScanConfig {
    /// The generic root base, used as the default prototype.
    pub fn root_base(&self) -> &str {
        self.bases.first().map_or("QObject", String::as_str)
    }

    /// Whether `name` is itself a registry member (such classes are never
    /// candidates; they are the framework's own types).
    pub fn is_known_base(&self, name: &str) -> bool {
        self.bases.iter().any(|b| b == name)
    }

    /// Whether the base-list text of a class mentions any registry member.
    /// Substring containment, deliberately permissive.
    pub fn matches_bases(&self, bases_text: &str) -> bool {
        self.bases.iter().any(|b| bases_text.contains(b.as_str()))
    }

    /// The earliest registry member (registry order) mentioned in the
    /// base-list text, if any.
    pub fn prototype_for(&self, bases_text: &str) -> Option<&str> {
        self.bases
            .iter()
            .find(|b| bases_text.contains(b.as_str()))
            .map(String::as_str)
    }

    /// Regex alternation over the per-file effective root set: locally
    /// imported aliases first, then the full registry.
    pub fn alternation_with(&self, imported: &[String]) -> String {
        let mut names: Vec<&str> = imported
            .iter()
            .filter(|name| self.is_known_base(name))
            .map(String::as_str)
            .collect();
        names.extend(self.bases.iter().map(String::as_str));
        names.join("|")
    }
}
