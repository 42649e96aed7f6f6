//! Validation violations: structured descriptions of failed rules.
//!
//! A violation is either scoped to a single field (`Field`) or to the whole
//! object (`Object`, used by cross-field rules). It carries a code and ordered
//! integer parameters so a boundary layer can render a message later.

use serde::{Deserialize, Serialize};

/// Rule code reported by a violation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViolationCode {
    /// Value absent or blank.
    Required,
    /// Value absent or outside `[params[0], params[1]]`.
    Range,
    /// Value absent or not below `params[0]`.
    Max,
    /// Object-level: `params[1]` (the computed total) is below `params[0]`.
    TotalPriceMin,
}

impl ViolationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationCode::Required => "required",
            ViolationCode::Range => "range",
            ViolationCode::Max => "max",
            ViolationCode::TotalPriceMin => "totalPriceMin",
        }
    }
}

impl core::fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "lowercase")]
pub enum Violation {
    Field {
        field: String,
        code: ViolationCode,
        params: Vec<i64>,
    },
    Object {
        code: ViolationCode,
        params: Vec<i64>,
    },
}

impl Violation {
    pub fn field(field: impl Into<String>, code: ViolationCode, params: Vec<i64>) -> Self {
        Self::Field {
            field: field.into(),
            code,
            params,
        }
    }

    pub fn object(code: ViolationCode, params: Vec<i64>) -> Self {
        Self::Object { code, params }
    }

    /// Field name for field-scoped violations, `None` for object-scoped ones.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            Violation::Field { field, .. } => Some(field),
            Violation::Object { .. } => None,
        }
    }

    pub fn code(&self) -> ViolationCode {
        match self {
            Violation::Field { code, .. } | Violation::Object { code, .. } => *code,
        }
    }

    pub fn params(&self) -> &[i64] {
        match self {
            Violation::Field { params, .. } | Violation::Object { params, .. } => params,
        }
    }
}

impl core::fmt::Display for Violation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(field) = self.field_name() {
            write!(f, "{field}: ")?;
        }
        write!(f, "{}", self.code())?;
        if !self.params().is_empty() {
            let params = self
                .params()
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "({params})")?;
        }
        Ok(())
    }
}

/// Ordered collection of violations produced by a single validation run.
///
/// Empty means the payload is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.0
    }

    /// Violations attached to the given field, in evaluation order.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.0.iter().filter(move |v| v.field_name() == Some(field))
    }

    /// Object-scoped violations, in evaluation order.
    pub fn global(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter().filter(|v| v.field_name().is_none())
    }
}

impl From<Vec<Violation>> for Violations {
    fn from(value: Vec<Violation>) -> Self {
        Self(value)
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<T: IntoIterator<Item = Violation>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = core::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl core::fmt::Display for Violations {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
