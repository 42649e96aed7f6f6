//! Message resolution for violations.
//!
//! A violation expands into a list of resolution codes, most specific first
//! (`range.item.price`, `range.price`, `range`). The first code with a template
//! in the catalog wins, and `{0}`, `{1}`, ... placeholders are replaced with the
//! violation's parameters.

use std::collections::HashMap;

use itemservice_core::{BindingFailure, Violation};

use crate::item::OBJECT_NAME;

const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    ("required.item.name", "Item name is required."),
    ("range.item.price", "Price must be between {0} and {1}."),
    ("max.item.quantity", "Quantity must be at most {0}."),
    ("totalPriceMin", "Price * quantity must be at least {0}. Current value = {1}"),
    ("required", "This value is required."),
    ("range", "Value must be between {0} and {1}."),
    ("max", "Value must be at most {0}."),
    ("typeMismatch", "Please enter a number."),
];

/// Code → template lookup table.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    templates: HashMap<String, String>,
}

impl MessageCatalog {
    /// Catalog with no templates; every lookup falls back to the bare code.
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Add or replace a template.
    pub fn with_template(mut self, code: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(code.into(), template.into());
        self
    }

    /// Resolution codes for a violation, most specific first.
    pub fn resolution_codes(violation: &Violation) -> Vec<String> {
        let code = violation.code().as_str();
        match violation.field_name() {
            Some(field) => field_codes(code, field),
            None => vec![format!("{code}.{OBJECT_NAME}"), code.to_string()],
        }
    }

    /// Render a violation using the first matching template.
    pub fn render(&self, violation: &Violation) -> String {
        let codes = Self::resolution_codes(violation);
        self.render_codes(&codes, violation.params())
    }

    /// Render a binding failure (`typeMismatch.item.price`, ..., `typeMismatch`).
    pub fn render_binding_failure(&self, failure: &BindingFailure) -> String {
        let codes = field_codes(BindingFailure::CODE, &failure.field);
        self.render_codes(&codes, &[])
    }

    fn render_codes(&self, codes: &[String], params: &[i64]) -> String {
        codes
            .iter()
            .find_map(|c| self.templates.get(c))
            .map(|template| fill(template, params))
            .unwrap_or_else(|| codes.last().cloned().unwrap_or_default())
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        DEFAULT_TEMPLATES
            .iter()
            .fold(Self::empty(), |catalog, (code, template)| {
                catalog.with_template(*code, *template)
            })
    }
}

fn field_codes(code: &str, field: &str) -> Vec<String> {
    vec![
        format!("{code}.{OBJECT_NAME}.{field}"),
        format!("{code}.{field}"),
        code.to_string(),
    ]
}

/// Replace `{n}` with `params[n]`. Placeholders without a matching parameter
/// are left as-is.
fn fill(template: &str, params: &[i64]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let substituted = after.find('}').and_then(|end| {
            let idx: usize = after[..end].parse().ok()?;
            let value = params.get(idx)?;
            Some((value.to_string(), end))
        });
        match substituted {
            Some((value, end)) => {
                out.push_str(&value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
