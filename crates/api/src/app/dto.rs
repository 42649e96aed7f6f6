use serde_json::json;

use itemservice_core::{
    BindingFailure, DomainError, DomainResult, Entity, ItemId, Violation, Violations,
};
use itemservice_items::{Item, ItemPayload, MessageCatalog, fields};

// -------------------------
// Request DTOs
// -------------------------

/// Raw add/edit form submission (`application/x-www-form-urlencoded`).
///
/// Numeric fields arrive as text so conversion failures can be reported as
/// binding failures instead of a framework rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<String>,
}

impl ItemForm {
    /// Collect decoded `key=value` pairs. A repeated field keeps every value,
    /// joined with `,`; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                fields::NAME => &mut form.name,
                fields::PRICE => &mut form.price,
                fields::QUANTITY => &mut form.quantity,
                _ => continue,
            };
            *slot = Some(match slot.take() {
                Some(mut existing) => {
                    existing.push(',');
                    existing.push_str(&value);
                    existing
                }
                None => value,
            });
        }
        form
    }

    /// Bind the form to a typed payload.
    ///
    /// Blank numeric text binds to "absent". Text that is not a 32-bit integer
    /// yields `DomainError::MalformedInput` listing every offending field.
    pub fn parse(&self) -> DomainResult<ItemPayload> {
        let mut failures = Vec::new();
        let price = bind_number(fields::PRICE, self.price.as_deref(), &mut failures);
        let quantity = bind_number(fields::QUANTITY, self.quantity.as_deref(), &mut failures);

        if !failures.is_empty() {
            return Err(DomainError::MalformedInput(failures));
        }

        Ok(ItemPayload {
            name: self.name.clone(),
            price,
            quantity,
        })
    }
}

fn bind_number(field: &str, raw: Option<&str>, failures: &mut Vec<BindingFailure>) -> Option<i32> {
    let text = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match text.parse::<i32>() {
        Ok(v) => Some(v),
        Err(_) => {
            failures.push(BindingFailure::new(field, raw.unwrap_or_default()));
            None
        }
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn item_to_json(item: &Item) -> serde_json::Value {
    json!({
        "id": *item.id(),
        "name": item.name(),
        "price": item.price(),
        "quantity": item.quantity(),
    })
}

pub fn payload_to_json(id: Option<ItemId>, payload: &ItemPayload) -> serde_json::Value {
    let mut value = json!({
        "name": payload.name,
        "price": payload.price,
        "quantity": payload.quantity,
    });
    if let Some(id) = id {
        value["id"] = json!(id);
    }
    value
}

pub fn raw_form_to_json(id: Option<ItemId>, form: &ItemForm) -> serde_json::Value {
    let mut value = json!({
        "name": form.name,
        "price": form.price,
        "quantity": form.quantity,
    });
    if let Some(id) = id {
        value["id"] = json!(id);
    }
    value
}

pub fn violation_to_json(v: &Violation, messages: &MessageCatalog) -> serde_json::Value {
    let mut value = serde_json::to_value(v).unwrap_or_else(|_| json!({}));
    value["codes"] = json!(MessageCatalog::resolution_codes(v));
    value["message"] = json!(messages.render(v));
    value
}

pub fn binding_failure_to_json(f: &BindingFailure, messages: &MessageCatalog) -> serde_json::Value {
    json!({
        "scope": "field",
        "field": f.field,
        "code": BindingFailure::CODE,
        "rejected_value": f.rejected_value,
        "message": messages.render_binding_failure(f),
    })
}

/// A request body that could not be decoded as a form at all.
pub fn undecodable_form_to_json(message: impl Into<String>) -> serde_json::Value {
    json!({
        "scope": "object",
        "code": "malformedForm",
        "message": message.into(),
    })
}

/// Form view: the model to (re)display plus its errors.
pub fn form_view(item: serde_json::Value, errors: Vec<serde_json::Value>) -> serde_json::Value {
    json!({ "item": item, "errors": errors })
}

pub fn violations_to_json(violations: &Violations, messages: &MessageCatalog) -> Vec<serde_json::Value> {
    violations
        .iter()
        .map(|v| violation_to_json(v, messages))
        .collect()
}
