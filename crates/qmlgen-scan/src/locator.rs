//! Candidate class location via inheritance-pattern matching
//!
//! A class is a candidate when its declared base list mentions a member of
//! the per-file effective root set: the known-base registry extended with
//! names this file imports from the framework namespace. Matching is
//! substring containment first, with a combined-alternation regex recheck
//! to also catch bases spelled with extra qualifiers or whitespace.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::registry::ScanConfig;

static CLASS_DEF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"class\s+(\w+)\s*\(([^)]+)\):").expect("valid pattern"));

static FRAMEWORK_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"from\s+PySide6\.\w+\s+import\s+([^#\n]+)").expect("valid pattern"));

/// Non-fatal location failures; the affected class is skipped.
#[derive(Error, Debug)]
pub enum LocateError {
    #[error("Could not find class definition for {0}")]
    ClassNotFound(String),

    #[error("Class {0} does not inherit from any recognized reactive base")]
    NotReactive(String),
}

/// One candidate class and its captured text span.
#[derive(Debug, Clone)]
pub struct LocatedClass<'a> {
    pub name: String,
    /// Earliest matched registry base, or the generic root base.
    pub prototype: String,
    pub is_singleton: bool,
    /// Text from the declaration up to the next class definition or EOF.
    pub span: &'a str,
}

/// Locates candidate classes within one file's text.
pub struct ClassLocator<'a> {
    source: &'a str,
    config: &'a ScanConfig,
    /// Combined alternation over the effective root set, compiled lazily
    /// into per-class fallback patterns.
    alternation: String,
}

impl<'a> ClassLocator<'a> {
    pub fn new(source: &'a str, config: &'a ScanConfig) -> Self {
        let imported = scan_framework_imports(source);
        let alternation = config.alternation_with(&imported);
        ClassLocator {
            source,
            config,
            alternation,
        }
    }

    /// Locate every candidate class in the file, in textual order.
    pub fn locate_all(&self) -> Result<Vec<LocatedClass<'a>>> {
        let defs = self.class_definitions();
        let mut located = Vec::new();

        for (i, (name, bases, start, _)) in defs.iter().enumerate() {
            // The framework's own types are never candidates.
            if self.config.is_known_base(name) {
                continue;
            }
            if !self.is_candidate(name, bases)? {
                continue;
            }
            let end = defs.get(i + 1).map_or(self.source.len(), |next| next.2);
            located.push(self.build_located(name, bases, *start, end));
        }

        debug!("Located {} candidate classes", located.len());
        Ok(located)
    }

    /// Locate one externally requested class by name.
    ///
    /// Absence or a non-matching base list is reported as a non-fatal
    /// error so sibling classes can still be processed by the caller.
    pub fn locate_named(&self, class_name: &str) -> Result<LocatedClass<'a>, LocateError> {
        let defs = self.class_definitions();
        let Some(i) = defs.iter().position(|(name, _, _, _)| name == class_name) else {
            return Err(LocateError::ClassNotFound(class_name.to_string()));
        };
        let (name, bases, start, _) = &defs[i];
        if !self.is_candidate(name, bases).unwrap_or(false) {
            return Err(LocateError::NotReactive(class_name.to_string()));
        }
        let end = defs.get(i + 1).map_or(self.source.len(), |next| next.2);
        Ok(self.build_located(name, bases, *start, end))
    }

    /// All class definitions in the file: (name, bases text, match start,
    /// match end), in textual order.
    fn class_definitions(&self) -> Vec<(String, String, usize, usize)> {
        CLASS_DEF
            .captures_iter(self.source)
            .filter_map(|c| {
                let whole = c.get(0)?;
                Some((
                    c.get(1)?.as_str().to_string(),
                    c.get(2)?.as_str().to_string(),
                    whole.start(),
                    whole.end(),
                ))
            })
            .collect()
    }

    /// Candidate check: direct substring containment over the registry,
    /// then the combined-alternation regex over the whole file.
    fn is_candidate(&self, name: &str, bases: &str) -> Result<bool> {
        if self.config.matches_bases(bases) {
            return Ok(true);
        }
        if self.alternation.is_empty() {
            return Ok(false);
        }
        let fallback = Regex::new(&format!(
            r"class\s+{}\s*\([^)]*(?:{})[^)]*\):",
            regex::escape(name),
            self.alternation
        ))?;
        Ok(fallback.is_match(self.source))
    }

    fn build_located(&self, name: &str, bases: &str, start: usize, end: usize) -> LocatedClass<'a> {
        let prototype = self
            .config
            .prototype_for(bases)
            .unwrap_or_else(|| self.config.root_base())
            .to_string();
        LocatedClass {
            name: name.to_string(),
            prototype,
            is_singleton: self.is_singleton_at(start),
            span: &self.source[start..end],
        }
    }

    /// Singleton iff the marker token sits on one of the `lookback` lines
    /// immediately preceding the declaration.
    fn is_singleton_at(&self, decl_start: usize) -> bool {
        let prefix = &self.source[..decl_start];
        prefix
            .lines()
            .rev()
            .take(self.config.singleton_lookback)
            .any(|line| line.trim() == self.config.singleton_marker)
    }
}

/// Names imported from the framework namespace in this file.
fn scan_framework_imports(source: &str) -> Vec<String> {
    let mut imported = Vec::new();
    for captures in FRAMEWORK_IMPORT.captures_iter(source) {
        if let Some(names) = captures.get(1) {
            imported.extend(
                names
                    .as_str()
                    .split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty()),
            );
        }
    }
    imported
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ScanConfig {
        ScanConfig::default()
    }

    #[test]
    fn test_locates_direct_inheritance() {
        let source = "\
from PySide6.QtCore import QObject

class Backend(QObject):
    pass
";
        let cfg = config();
        let locator = ClassLocator::new(source, &cfg);
        let classes = locator.locate_all().unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "Backend");
        assert_eq!(classes[0].prototype, "QObject");
        assert!(!classes[0].is_singleton);
    }

    #[test]
    fn test_skips_unrelated_classes() {
        let source = "\
class Plain:
    pass

class Helper(Widget):
    pass
";
        let cfg = config();
        let locator = ClassLocator::new(source, &cfg);
        assert!(locator.locate_all().unwrap().is_empty());
    }

    #[test]
    fn test_prototype_follows_registry_order() {
        let source = "class Chart(QQuickPaintedItem):\n    pass\n";
        let cfg = config();
        let locator = ClassLocator::new(source, &cfg);
        let classes = locator.locate_all().unwrap();
        assert_eq!(classes[0].prototype, "QQuickPaintedItem");
    }

    #[test]
    fn test_qualified_base_matches_by_substring() {
        let source = "class Model(QtCore.QAbstractListModel):\n    pass\n";
        let cfg = config();
        let locator = ClassLocator::new(source, &cfg);
        let classes = locator.locate_all().unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].prototype, "QAbstractListModel");
    }

    #[test]
    fn test_known_bases_are_not_candidates() {
        let source = "class QObject(Shiboken.Object):\n    pass\n";
        let cfg = config();
        let locator = ClassLocator::new(source, &cfg);
        assert!(locator.locate_all().unwrap().is_empty());
    }

    #[test]
    fn test_span_ends_at_next_class() {
        let source = "\
class First(QObject):
    a = 1

class Second(QObject):
    b = 2
";
        let cfg = config();
        let locator = ClassLocator::new(source, &cfg);
        let classes = locator.locate_all().unwrap();
        assert_eq!(classes.len(), 2);
        assert!(classes[0].span.contains("a = 1"));
        assert!(!classes[0].span.contains("b = 2"));
        assert!(classes[1].span.contains("b = 2"));
    }

    #[test]
    fn test_singleton_marker_within_lookback() {
        let source = "\
from PySide6.QtCore import QObject

@Singleton
class AppInfo(QObject):
    pass
";
        let cfg = config();
        let locator = ClassLocator::new(source, &cfg);
        let classes = locator.locate_all().unwrap();
        assert!(classes[0].is_singleton);
    }

    #[test]
    fn test_singleton_marker_beyond_lookback_is_ignored() {
        let source = "\
@Singleton




# padding line

class AppInfo(QObject):
    pass
";
        let cfg = config();
        let locator = ClassLocator::new(source, &cfg);
        let classes = locator.locate_all().unwrap();
        assert!(!classes[0].is_singleton);
    }

    #[test]
    fn test_lookback_is_configurable() {
        let source = "\
@Singleton




# padding line

class AppInfo(QObject):
    pass
";
        let mut cfg = config();
        cfg.singleton_lookback = 10;
        let locator = ClassLocator::new(source, &cfg);
        let classes = locator.locate_all().unwrap();
        assert!(classes[0].is_singleton);
    }

    #[test]
    fn test_locate_named_missing_class() {
        let cfg = config();
        let locator = ClassLocator::new("class A(QObject):\n    pass\n", &cfg);
        let err = locator.locate_named("Missing").unwrap_err();
        assert!(matches!(err, LocateError::ClassNotFound(_)));
    }

    #[test]
    fn test_locate_named_non_reactive_class() {
        let cfg = config();
        let locator = ClassLocator::new("class A(Widget):\n    pass\n", &cfg);
        let err = locator.locate_named("A").unwrap_err();
        assert!(matches!(err, LocateError::NotReactive(_)));
    }

    #[test]
    fn test_framework_import_scan() {
        let source = "from PySide6.QtCore import QObject, Signal, Property\n";
        let imported = scan_framework_imports(source);
        assert_eq!(imported, vec!["QObject", "Signal", "Property"]);
    }
}
