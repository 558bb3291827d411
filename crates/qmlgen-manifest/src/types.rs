//! Record types for discovered reactive classes
//!
//! One `ClassRecord` is produced per matched class per scanned file. The
//! record owns its property/signal/method lists; there are no
//! cross-references between records.

use serde::{Deserialize, Serialize};

/// The unit return type; `Method` blocks omit `type:` for it.
pub const VOID_TYPE: &str = "void";

/// The meta-object revision emitted for every component.
const META_OBJECT_REVISION: u32 = 256;

/// A named, typed parameter of a signal or method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub qml_type: String,
}

/// A change-notifying property.
///
/// `index` is zero-based and reflects textual discovery order within the
/// class, assigned after extraction completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub qml_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<String>,
    pub index: usize,
}

/// A declared signal. Parameter names are synthesized (`arg0`, `arg1`, ...)
/// since the declaration site only carries types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRecord {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParameterRecord>,
}

/// An invokable (slot-decorated) method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub return_type: String,
    #[serde(default)]
    pub parameters: Vec<ParameterRecord>,
}

impl MethodRecord {
    /// Whether the method returns nothing (no `type:` field is emitted).
    pub fn returns_void(&self) -> bool {
        self.return_type == VOID_TYPE
    }
}

/// Everything known about one matched class, in emission order. Serialized
/// keys follow the manifest vocabulary (`accessSemantics`, `isCreatable`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    /// Basename of the source file the class was found in.
    pub file: String,
    pub name: String,
    pub access_semantics: String,
    /// The matched known base, or the generic root base.
    pub prototype: String,
    /// Pre-quoted export strings, e.g. `"FluentUI/FluApp 1.0"`.
    pub exports: Vec<String>,
    pub is_creatable: bool,
    pub is_singleton: bool,
    pub export_meta_object_revisions: Vec<u32>,
    #[serde(default)]
    pub properties: Vec<PropertyRecord>,
    #[serde(default)]
    pub signals: Vec<SignalRecord>,
    #[serde(default)]
    pub methods: Vec<MethodRecord>,
}

impl ClassRecord {
    /// Create a record with default metadata for a class exported as
    /// `<module_name>/<class_name> 1.0`, prototyped on `root_base`.
    pub fn new(file: &str, class_name: &str, module_name: &str, root_base: &str) -> Self {
        ClassRecord {
            file: file.to_string(),
            name: class_name.to_string(),
            access_semantics: "reference".to_string(),
            prototype: root_base.to_string(),
            exports: vec![format!("\"{}/{} 1.0\"", module_name, class_name)],
            is_creatable: true,
            is_singleton: false,
            export_meta_object_revisions: vec![META_OBJECT_REVISION],
            properties: Vec::new(),
            signals: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Set singleton status, keeping `is_creatable == !is_singleton`.
    pub fn set_singleton(&mut self, singleton: bool) {
        self.is_singleton = singleton;
        self.is_creatable = !singleton;
    }
}
