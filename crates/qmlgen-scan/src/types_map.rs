//! Python type spelling → QML type name mapping
//!
//! A fixed, deterministic, intentionally lossy lookup. Anything not
//! recognized (including user-defined classes) collapses to `QVariant`;
//! there is no reverse mapping.

use once_cell::sync::Lazy;
use regex::Regex;

/// The generic/variant fallback type.
pub const QVARIANT: &str = "QVariant";

static OPTIONAL_INNER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Optional\[(.*?)\]").expect("valid pattern"));

/// Map a Python type spelling to its QML type name.
pub fn map_python_type(python_type: &str) -> String {
    let type_str = python_type.trim();

    match type_str {
        "str" => return "QString".to_string(),
        "int" => return "int".to_string(),
        "float" => return "double".to_string(),
        "bool" => return "bool".to_string(),
        "list" | "tuple" => return "QVariantList".to_string(),
        "dict" => return "QVariantMap".to_string(),
        "None" => return "void".to_string(),
        _ => {}
    }

    // Generic container spellings, with or without the typing. prefix.
    if type_str.contains("typing.List") || type_str.contains("list[") || type_str.contains("tuple[")
    {
        return "QVariantList".to_string();
    }
    if type_str.contains("typing.Dict") || type_str.contains("dict[") {
        return "QVariantMap".to_string();
    }

    // Optional[T] unwraps recursively to T.
    if type_str.contains("Optional[") {
        if let Some(captures) = OPTIONAL_INNER.captures(type_str) {
            if let Some(inner) = captures.get(1) {
                return map_python_type(inner.as_str());
            }
        }
    }

    // Union members are never ranked; the union collapses outright.
    if type_str.contains("Union[") {
        return QVARIANT.to_string();
    }

    QVARIANT.to_string()
}
