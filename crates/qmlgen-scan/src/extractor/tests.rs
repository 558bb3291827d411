use super::*;
use crate::registry::ScanConfig;

fn config() -> ScanConfig {
    ScanConfig::default()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn test_property_with_notify() {
    let class_text = r#"class Backend(QObject):
    titleChanged = Signal()

    @Property(str, notify=titleChanged)
    def title(self):
        return self._title
"#;
    let properties = extract_properties(class_text, &config()).unwrap();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].name, "title");
    assert_eq!(properties[0].qml_type, "QString");
    assert_eq!(properties[0].notify.as_deref(), Some("titleChanged"));
    assert_eq!(properties[0].index, 0);
}

#[test]
fn test_property_indices_are_contiguous() {
    let class_text = r#"class Backend(QObject):
    @Property(str, notify=aChanged)
    def a(self):
        return self._a

    @Property(int, notify=bChanged)
    def b(self):
        return self._b

    @Property(bool, notify=cChanged)
    def c(self):
        return self._c
"#;
    let properties = extract_properties(class_text, &config()).unwrap();
    let indices: Vec<usize> = properties.iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    let names: Vec<&str> = properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_property_without_bindable_declaration_falls_back() {
    // The getter exists but no @Property(type, notify=...) declaration sits
    // within the correlation window.
    let class_text = r#"class Backend(QObject):
    @Property(QColor)
    def tint(self):
        return self._tint
"#;
    let properties = extract_properties(class_text, &config()).unwrap();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].qml_type, "QVariant");
    assert_eq!(properties[0].notify, None);
}

#[test]
fn test_property_window_bounds_correlation() {
    // A declaration-shaped string sits more than one window before the
    // getter; the getter's own decorator carries no notify target. The
    // distant declaration must not be associated with the getter unless
    // the window is widened to reach it.
    let padding = "x".repeat(300);
    let class_text = format!(
        "class Backend(QObject):\n    decl = \"@Property(str, notify=nameChanged)\"\n    pad = \"{padding}\"\n    @Property(QColor)\n    def name(self):\n        return self._name\n"
    );
    let properties = extract_properties(&class_text, &config()).unwrap();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].qml_type, "QVariant");
    assert_eq!(properties[0].notify, None);

    let mut wide = config();
    wide.property_window = 1000;
    let properties = extract_properties(&class_text, &wide).unwrap();
    assert_eq!(properties[0].qml_type, "QString");
    assert_eq!(properties[0].notify.as_deref(), Some("nameChanged"));
}

// ---------------------------------------------------------------------------
// Signals
// ---------------------------------------------------------------------------

#[test]
fn test_signal_with_parameters() {
    let class_text = "class B(QObject):\n    moved = Signal(int, int)\n";
    let signals = extract_signals(class_text).unwrap();
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].name, "moved");
    assert_eq!(signals[0].parameters.len(), 2);
    assert_eq!(signals[0].parameters[0].name, "arg0");
    assert_eq!(signals[0].parameters[0].qml_type, "int");
    assert_eq!(signals[0].parameters[1].name, "arg1");
    assert_eq!(signals[0].parameters[1].qml_type, "int");
}

#[test]
fn test_signal_without_parameters() {
    let class_text = "class B(QObject):\n    refreshed = Signal()\n";
    let signals = extract_signals(class_text).unwrap();
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].name, "refreshed");
    assert!(signals[0].parameters.is_empty());
}

#[test]
fn test_signal_types_are_mapped() {
    let class_text = "class B(QObject):\n    changed = Signal(str, dict)\n";
    let signals = extract_signals(class_text).unwrap();
    assert_eq!(signals[0].parameters[0].qml_type, "QString");
    assert_eq!(signals[0].parameters[1].qml_type, "QVariantMap");
}

#[test]
fn test_signals_in_declaration_order() {
    let class_text = "\
class B(QObject):
    zebra = Signal()
    alpha = Signal(int)
";
    let signals = extract_signals(class_text).unwrap();
    let names: Vec<&str> = signals.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["zebra", "alpha"]);
}

// ---------------------------------------------------------------------------
// Methods: return-type inference tiers
// ---------------------------------------------------------------------------

#[test]
fn test_method_result_spec_wins() {
    let class_text = r#"class B(QObject):
    @Slot(result=bool)
    def is_ready(self):
        return 1
"#;
    let methods = methods::extract_methods(class_text).unwrap();
    assert_eq!(methods.len(), 1);
    assert_eq!(methods[0].name, "is_ready");
    assert_eq!(methods[0].return_type, "bool");
    assert!(methods[0].parameters.is_empty());
}

#[test]
fn test_method_annotation_beats_body_inference() {
    let class_text = r#"class B(QObject):
    @Slot()
    def count(self) -> str:
        return 42
"#;
    let methods = methods::extract_methods(class_text).unwrap();
    assert_eq!(methods[0].return_type, "QString");
}

#[test]
fn test_return_type_inference_table() {
    let cases = [
        ("return 1", "int"),
        ("return \"x\"", "QString"),
        ("return 'x'", "QString"),
        ("return True", "bool"),
        ("return False", "bool"),
        ("return a == b", "bool"),
        ("return a > b", "bool"),
        ("return a and b", "bool"),
        ("return bool(x)", "bool"),
        ("return int(x)", "int"),
        ("return str(x)", "QString"),
        ("return float(x)", "double"),
        ("return self._data", "void"),
    ];
    for (stmt, expected) in cases {
        let class_text = format!(
            "class B(QObject):\n    @Slot()\n    def probe(self):\n        {stmt}\n"
        );
        let methods = methods::extract_methods(&class_text).unwrap();
        assert_eq!(
            methods[0].return_type, expected,
            "statement '{stmt}' should infer {expected}"
        );
    }
}

#[test]
fn test_method_without_return_is_void() {
    let class_text = r#"class B(QObject):
    @Slot()
    def fire(self):
        self._count += 1
"#;
    let methods = methods::extract_methods(class_text).unwrap();
    assert_eq!(methods[0].return_type, "void");
}

#[test]
fn test_body_inference_stops_at_next_member() {
    // The return belongs to the following method, not to fire().
    let class_text = r#"class B(QObject):
    @Slot()
    def fire(self):
        self._count += 1

    @Slot()
    def other(self):
        return True
"#;
    let methods = methods::extract_methods(class_text).unwrap();
    assert_eq!(methods[0].return_type, "void");
    assert_eq!(methods[1].return_type, "bool");
}

// ---------------------------------------------------------------------------
// Methods: parameters
// ---------------------------------------------------------------------------

#[test]
fn test_parameters_from_annotations() {
    let class_text = r#"class B(QObject):
    @Slot()
    def resize(self, width: int, height: int):
        pass
"#;
    let methods = methods::extract_methods(class_text).unwrap();
    let params = &methods[0].parameters;
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name, "width");
    assert_eq!(params[0].qml_type, "int");
    assert_eq!(params[1].name, "height");
    assert_eq!(params[1].qml_type, "int");
}

#[test]
fn test_parameters_from_decorator_positional_types() {
    let class_text = r#"class B(QObject):
    @Slot(str, int)
    def rename(self, name, count):
        pass
"#;
    let methods = methods::extract_methods(class_text).unwrap();
    let params = &methods[0].parameters;
    assert_eq!(params[0].qml_type, "QString");
    assert_eq!(params[1].qml_type, "int");
}

#[test]
fn test_decorator_result_entries_are_not_positional_types() {
    let class_text = r#"class B(QObject):
    @Slot(str, result=bool)
    def check(self, value):
        pass
"#;
    let methods = methods::extract_methods(class_text).unwrap();
    assert_eq!(methods[0].return_type, "bool");
    assert_eq!(methods[0].parameters[0].qml_type, "QString");
}

#[test]
fn test_untyped_parameter_defaults_to_variant() {
    let class_text = r#"class B(QObject):
    @Slot()
    def accept(self, payload):
        pass
"#;
    let methods = methods::extract_methods(class_text).unwrap();
    assert_eq!(methods[0].parameters[0].qml_type, "QVariant");
}

#[test]
fn test_parameter_default_values_are_stripped() {
    let class_text = r#"class B(QObject):
    @Slot()
    def move(self, x: int = 0):
        pass
"#;
    let methods = methods::extract_methods(class_text).unwrap();
    assert_eq!(methods[0].parameters[0].name, "x");
    assert_eq!(methods[0].parameters[0].qml_type, "int");
}

#[test]
fn test_receiver_only_signature_has_no_parameters() {
    let class_text = r#"class B(QObject):
    @Slot()
    def refresh(self):
        pass
"#;
    let methods = methods::extract_methods(class_text).unwrap();
    assert!(methods[0].parameters.is_empty());
}

// ---------------------------------------------------------------------------
// Combined extraction
// ---------------------------------------------------------------------------

#[test]
fn test_extract_members_orders_by_kind() {
    let class_text = r#"class Backend(QObject):
    nameChanged = Signal()
    countChanged = Signal(int, int)

    @Property(str, notify=nameChanged)
    def name(self):
        return self._name

    @Slot(result=bool)
    def is_ready(self):
        return True
"#;
    let members = extract_members(class_text, &config()).unwrap();
    assert_eq!(members.properties.len(), 1);
    assert_eq!(members.signals.len(), 2);
    assert_eq!(members.methods.len(), 1);
    assert_eq!(members.properties[0].qml_type, "QString");
    assert_eq!(members.methods[0].return_type, "bool");
}

#[test]
fn test_empty_class_yields_empty_members() {
    let members = extract_members("class B(QObject):\n    pass\n", &config()).unwrap();
    assert!(members.properties.is_empty());
    assert!(members.signals.is_empty());
    assert!(members.methods.is_empty());
}
