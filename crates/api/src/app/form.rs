//! Add/edit submission flow shared by every form handler.
//!
//! parse → validate → persist. The validation strategy and the persistence step
//! are parameters, so "add" and "edit" differ only in what they pass in.

use itemservice_core::{DomainError, DomainResult};
use itemservice_items::{Item, ItemPayload, ItemValidator};

/// Validate `payload` and, if it has no violations, hand it to `persist`.
///
/// Returns `DomainError::ValidationFailed` with the ordered violations when the
/// strategy rejects the payload; `persist` is not called in that case.
pub fn submit<F>(validator: &dyn ItemValidator, payload: ItemPayload, persist: F) -> DomainResult<Item>
where
    F: FnOnce(ItemPayload) -> DomainResult<Item>,
{
    let violations = validator.validate(&payload);
    if !violations.is_empty() {
        return Err(DomainError::validation_failed(violations));
    }
    persist(payload)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use itemservice_core::{Entity, ItemId, Violation, ViolationCode, Violations};
    use itemservice_items::RuleSet;

    use super::*;

    #[test]
    fn valid_payload_is_persisted() {
        let item = submit(&RuleSet::default(), ItemPayload::new("TV", 100_000, 10), |p| {
            Ok(Item::new(ItemId::new(1), p))
        })
        .unwrap();
        assert_eq!(item.name(), Some("TV"));
    }

    #[test]
    fn invalid_payload_is_not_persisted() {
        let called = Cell::new(false);
        let err = submit(&RuleSet::default(), ItemPayload::new("book", 500, 10), |p| {
            called.set(true);
            Ok(Item::new(ItemId::new(1), p))
        })
        .unwrap_err();

        assert!(!called.get());
        match err {
            DomainError::ValidationFailed(v) => assert_eq!(v.len(), 2),
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn strategy_is_pluggable() {
        let only_names = |p: &ItemPayload| -> Violations {
            if p.name.as_deref() == Some("forbidden") {
                vec![Violation::field("name", ViolationCode::Required, vec![])].into()
            } else {
                Violations::new()
            }
        };

        // A payload the default rules would reject passes the custom strategy.
        let item = submit(&only_names, ItemPayload::new("cheap", 1, 1), |p| {
            Ok(Item::new(ItemId::new(9), p))
        })
        .unwrap();
        assert_eq!(*item.id(), ItemId::new(9));

        assert!(submit(&only_names, ItemPayload::new("forbidden", 1, 1), |p| {
            Ok(Item::new(ItemId::new(9), p))
        })
        .is_err());
    }

    #[test]
    fn persistence_errors_propagate() {
        let err = submit(&RuleSet::default(), ItemPayload::new("TV", 100_000, 10), |_| {
            Err(DomainError::NotFound)
        })
        .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }
}
