//! Invokable-method extraction and return-type inference
//!
//! Return type resolution is a strict three-tier fallback, first match
//! wins: an explicit `result=` on the decorator, then a `-> T` annotation
//! on the signature, then heuristics over the body's first return
//! statement. Parameter types come from the annotation, then the
//! decorator's positional type list, then `QVariant`.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

use qmlgen_manifest::{MethodRecord, ParameterRecord, VOID_TYPE};

use crate::types_map::{map_python_type, QVARIANT};

static RETURN_STMT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"return\s+([^#\n]+)").expect("valid pattern"));

static BODY_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*(?:@|def\s)").expect("valid pattern"));

/// Extract all slot-decorated methods from the class span.
pub fn extract_methods(class_text: &str) -> Result<Vec<MethodRecord>> {
    let mut methods = Vec::new();
    for name in super::slot_method_names(class_text) {
        methods.push(extract_method(class_text, &name)?);
    }
    Ok(methods)
}

/// Extract one named method. Stacked decorators merge into this single
/// extraction via the first matching occurrence in document order; no
/// separate overloads are synthesized.
pub fn extract_method(class_text: &str, method_name: &str) -> Result<MethodRecord> {
    let name = regex::escape(method_name);

    let result_spec = Regex::new(&format!(
        r"@Slot\([^)]*result=(\w+)[^)]*\)[^@]*def\s+{name}\s*\("
    ))?;
    let annotation = Regex::new(&format!(r"def\s+{name}\s*\([^)]*\)\s*->\s*(\w+)"))?;

    let return_type = if let Some(spec) = first_capture(&result_spec, class_text) {
        map_python_type(&spec)
    } else if let Some(spec) = first_capture(&annotation, class_text) {
        map_python_type(&spec)
    } else if let Some(inferred) = infer_from_body(class_text, &name)? {
        inferred.to_string()
    } else {
        VOID_TYPE.to_string()
    };

    Ok(MethodRecord {
        name: method_name.to_string(),
        return_type,
        parameters: extract_parameters(class_text, &name)?,
    })
}

fn first_capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Tier three: infer the return type from the body's first return
/// statement. The body runs from the signature's colon to the next
/// decorator or `def` at the start of a line, or the end of the span.
fn infer_from_body(class_text: &str, escaped_name: &str) -> Result<Option<&'static str>> {
    let signature = Regex::new(&format!(
        r"def\s+{escaped_name}\s*\([^)]*\)(?:\s*->\s*[^:\n]*)?:"
    ))?;
    let Some(sig) = signature.find(class_text) else {
        return Ok(None);
    };

    let rest = &class_text[sig.end()..];
    let body = match BODY_END.find(rest) {
        Some(boundary) => &rest[..boundary.start()],
        None => rest,
    };

    let Some(expr) = RETURN_STMT
        .captures(body)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
    else {
        return Ok(None);
    };
    Ok(classify_return_expr(expr))
}

/// Shape heuristics over a return expression.
fn classify_return_expr(expr: &str) -> Option<&'static str> {
    if expr.starts_with("int(") {
        Some("int")
    } else if expr.starts_with("bool(") {
        Some("bool")
    } else if expr.starts_with("str(") {
        Some("QString")
    } else if expr.starts_with("float(") {
        Some("double")
    } else if expr == "True" || expr == "False" {
        Some("bool")
    } else if !expr.is_empty() && expr.bytes().all(|b| b.is_ascii_digit()) {
        Some("int")
    } else if expr.starts_with('"') || expr.starts_with('\'') {
        Some("QString")
    } else if expr.contains("==")
        || expr.contains('>')
        || expr.contains('<')
        || expr.contains(" and ")
        || expr.contains(" or ")
    {
        // Comparisons and logical chains conventionally return bool.
        Some("bool")
    } else {
        None
    }
}

/// Formal parameters, excluding the implicit receiver.
fn extract_parameters(class_text: &str, escaped_name: &str) -> Result<Vec<ParameterRecord>> {
    let signature = Regex::new(&format!(
        r"def\s+{escaped_name}\s*\(self(?:,\s*([^)]*))?\)"
    ))?;
    let Some(params_text) = signature
        .captures(class_text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
    else {
        return Ok(Vec::new());
    };

    // Positional type list from the decorator, excluding result= entries.
    let slot_args = Regex::new(&format!(
        r"@Slot\(([^)]*)\)[^@]*def\s+{escaped_name}\s*\("
    ))?;
    let decorator_types: Vec<String> = slot_args
        .captures(class_text)
        .and_then(|c| c.get(1))
        .map(|m| {
            m.as_str()
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty() && !entry.contains("result="))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let mut parameters = Vec::new();
    for (i, part) in params_text.split(',').enumerate() {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let name = part
            .split(':')
            .next()
            .unwrap_or(part)
            .split('=')
            .next()
            .unwrap_or(part)
            .trim()
            .to_string();

        let qml_type = if let Some((_, annotation)) = part.split_once(':') {
            let annotation = annotation.split('=').next().unwrap_or(annotation).trim();
            map_python_type(annotation)
        } else if let Some(decorator_type) = decorator_types.get(i) {
            map_python_type(decorator_type)
        } else {
            QVARIANT.to_string()
        };

        parameters.push(ParameterRecord { name, qml_type });
    }
    Ok(parameters)
}
