//! Item validation rules.
//!
//! Field constraints live in a static table (`FIELD_RULES`) and cross-field
//! constraints in `OBJECT_RULES`. `RuleSet::validate` walks both tables in order
//! and collects a violation for every rule that does not pass.

use serde::{Deserialize, Serialize};

use itemservice_core::{Violation, ViolationCode, Violations};

use crate::item::{ItemPayload, fields};

pub const PRICE_MIN: i32 = 1_000;
pub const PRICE_MAX: i32 = 1_000_000;
/// Exclusive upper bound on quantity (largest accepted value is 9_998).
pub const QUANTITY_LIMIT: i32 = 9_999;
pub const TOTAL_PRICE_MIN: i64 = 10_000;

/// One row of the field rule table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub code: ViolationCode,
    pub params: &'static [i64],
    pub passes: fn(&ItemPayload) -> bool,
}

/// One row of the cross-field rule table.
///
/// `check` returns the violation parameters when the rule fails, `None` when it
/// passes or does not apply.
#[derive(Debug, Clone, Copy)]
pub struct ObjectRule {
    pub code: ViolationCode,
    pub check: fn(&ItemPayload) -> Option<Vec<i64>>,
}

pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: fields::NAME,
        code: ViolationCode::Required,
        params: &[],
        passes: name_has_text,
    },
    FieldRule {
        field: fields::PRICE,
        code: ViolationCode::Range,
        params: &[PRICE_MIN as i64, PRICE_MAX as i64],
        passes: price_in_range,
    },
    FieldRule {
        field: fields::QUANTITY,
        code: ViolationCode::Max,
        params: &[QUANTITY_LIMIT as i64],
        passes: quantity_below_limit,
    },
];

pub const OBJECT_RULES: &[ObjectRule] = &[ObjectRule {
    code: ViolationCode::TotalPriceMin,
    check: total_price_below_minimum,
}];

fn name_has_text(p: &ItemPayload) -> bool {
    p.name.as_deref().is_some_and(|n| !n.trim().is_empty())
}

fn price_in_range(p: &ItemPayload) -> bool {
    p.price.is_some_and(|v| (PRICE_MIN..=PRICE_MAX).contains(&v))
}

fn quantity_below_limit(p: &ItemPayload) -> bool {
    p.quantity.is_some_and(|v| v < QUANTITY_LIMIT)
}

fn total_price_below_minimum(p: &ItemPayload) -> Option<Vec<i64>> {
    let total = p.total_price()?;
    (total < TOTAL_PRICE_MIN).then(|| vec![TOTAL_PRICE_MIN, total])
}

/// Strictness knobs for a rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetConfig {
    /// Run the per-field rules (name, price, quantity). The cross-field rule
    /// always runs.
    pub validate_name_and_price_and_quantity: bool,
}

impl Default for RuleSetConfig {
    fn default() -> Self {
        Self {
            validate_name_and_price_and_quantity: true,
        }
    }
}

/// Validation strategy for submitted items.
///
/// Implemented by `RuleSet` and by any `Fn(&ItemPayload) -> Violations`, so a
/// handler can be parameterized with a plain function.
pub trait ItemValidator: Send + Sync {
    fn validate(&self, payload: &ItemPayload) -> Violations;
}

impl<F> ItemValidator for F
where
    F: Fn(&ItemPayload) -> Violations + Send + Sync,
{
    fn validate(&self, payload: &ItemPayload) -> Violations {
        self(payload)
    }
}

/// Table-driven item validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleSet {
    config: RuleSetConfig,
}

impl RuleSet {
    pub fn new(config: RuleSetConfig) -> Self {
        Self { config }
    }

    /// Evaluate `payload` against the rule tables.
    ///
    /// Pure and deterministic: the same payload always yields the same ordered
    /// violations. Field rules come first (name, price, quantity), then
    /// cross-field rules, which run even if a field rule already fired.
    pub fn validate(&self, payload: &ItemPayload) -> Violations {
        let field_rules: &[FieldRule] = if self.config.validate_name_and_price_and_quantity {
            FIELD_RULES
        } else {
            &[]
        };
        run(field_rules, OBJECT_RULES, payload)
    }
}

impl ItemValidator for RuleSet {
    fn validate(&self, payload: &ItemPayload) -> Violations {
        RuleSet::validate(self, payload)
    }
}

/// Validate with the default (strict) rule set.
pub fn validate(payload: &ItemPayload) -> Violations {
    RuleSet::default().validate(payload)
}

fn run(field_rules: &[FieldRule], object_rules: &[ObjectRule], payload: &ItemPayload) -> Violations {
    let mut violations = Violations::new();

    for rule in field_rules {
        if !(rule.passes)(payload) {
            violations.push(Violation::field(rule.field, rule.code, rule.params.to_vec()));
        }
    }

    for rule in object_rules {
        if let Some(params) = (rule.check)(payload) {
            violations.push(Violation::object(rule.code, params));
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_name() -> Violation {
        Violation::field(fields::NAME, ViolationCode::Required, vec![])
    }

    fn price_range() -> Violation {
        Violation::field(fields::PRICE, ViolationCode::Range, vec![1000, 1_000_000])
    }

    fn quantity_max() -> Violation {
        Violation::field(fields::QUANTITY, ViolationCode::Max, vec![9999])
    }

    fn total_min(actual: i64) -> Violation {
        Violation::object(ViolationCode::TotalPriceMin, vec![10_000, actual])
    }

    #[test]
    fn valid_item_has_no_violations() {
        let violations = validate(&ItemPayload::new("TV", 100_000, 10));
        assert!(violations.is_empty(), "unexpected: {violations}");
    }

    #[test]
    fn low_price_reports_range_and_total_price() {
        let violations = validate(&ItemPayload::new("book", 500, 10));
        assert_eq!(violations.into_inner(), vec![price_range(), total_min(5_000)]);
    }

    #[test]
    fn blank_name_reports_required_and_total_price() {
        let violations = validate(&ItemPayload::new("", 1000, 1));
        assert_eq!(violations.into_inner(), vec![required_name(), total_min(1_000)]);
    }

    #[test]
    fn whitespace_name_is_blank() {
        let violations = validate(&ItemPayload::new(" \t ", 10_000, 10));
        assert_eq!(violations.into_inner(), vec![required_name()]);
    }

    #[test]
    fn empty_payload_reports_every_field_but_no_total() {
        let violations = validate(&ItemPayload::default());
        assert_eq!(
            violations.into_inner(),
            vec![required_name(), price_range(), quantity_max()]
        );
    }

    #[test]
    fn price_bounds_are_inclusive() {
        assert_eq!(validate(&ItemPayload::new("a", 1000, 10)).for_field("price").count(), 0);
        assert_eq!(validate(&ItemPayload::new("a", 1_000_000, 1)).for_field("price").count(), 0);
        assert_eq!(validate(&ItemPayload::new("a", 999, 100)).for_field("price").count(), 1);
        assert_eq!(validate(&ItemPayload::new("a", 1_000_001, 1)).for_field("price").count(), 1);
    }

    #[test]
    fn quantity_limit_is_exclusive() {
        assert_eq!(validate(&ItemPayload::new("a", 1000, 9998)).for_field("quantity").count(), 0);
        assert_eq!(
            validate(&ItemPayload::new("a", 1000, 9999)).into_inner(),
            vec![quantity_max()]
        );
    }

    #[test]
    fn total_price_threshold_is_inclusive() {
        assert!(validate(&ItemPayload::new("a", 1000, 10)).is_empty());
        assert_eq!(
            validate(&ItemPayload::new("a", 1111, 9)).into_inner(),
            vec![total_min(9_999)]
        );
    }

    #[test]
    fn largest_total_price_is_computed_without_overflow() {
        assert!(validate(&ItemPayload::new("a", 1_000_000, 9998)).is_empty());
    }

    #[test]
    fn negative_total_price_is_reported_verbatim() {
        let violations = validate(&ItemPayload::new("a", -5, 3));
        assert_eq!(violations.into_inner(), vec![price_range(), total_min(-15)]);
    }

    #[test]
    fn disabling_field_rules_keeps_cross_field_rule() {
        let rules = RuleSet::new(RuleSetConfig {
            validate_name_and_price_and_quantity: false,
        });

        assert!(rules.validate(&ItemPayload::default()).is_empty());
        assert_eq!(
            rules.validate(&ItemPayload::new("", 500, 10)).into_inner(),
            vec![total_min(5_000)]
        );
    }

    #[test]
    fn closures_are_validators() {
        let reject_all = |_: &ItemPayload| Violations::from(vec![required_name()]);
        let strategy: &dyn ItemValidator = &reject_all;
        assert_eq!(strategy.validate(&ItemPayload::new("TV", 100_000, 10)).len(), 1);

        let strict: &dyn ItemValidator = &RuleSet::default();
        assert!(strict.validate(&ItemPayload::new("TV", 100_000, 10)).is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn opt_i32() -> impl Strategy<Value = Option<i32>> {
            prop_oneof![
                1 => Just(None),
                4 => (-10_000i32..2_000_000).prop_map(Some),
                1 => any::<i32>().prop_map(Some),
            ]
        }

        fn opt_name() -> impl Strategy<Value = Option<String>> {
            prop_oneof![
                Just(None),
                "[ \t]{0,5}".prop_map(Some),
                "[A-Za-z][A-Za-z0-9 ]{0,30}".prop_map(Some),
            ]
        }

        fn payload() -> impl Strategy<Value = ItemPayload> {
            (opt_name(), opt_i32(), opt_i32()).prop_map(|(name, price, quantity)| ItemPayload {
                name,
                price,
                quantity,
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: validating twice yields the identical sequence.
            #[test]
            fn validate_is_idempotent(p in payload()) {
                prop_assert_eq!(validate(&p), validate(&p));
            }

            /// Property: blank or absent name yields exactly one `required` on name.
            #[test]
            fn blank_name_is_required(
                name in prop_oneof![Just(None), "[ \t\n]{0,8}".prop_map(Some)],
                price in opt_i32(),
                quantity in opt_i32(),
            ) {
                let v = validate(&ItemPayload { name, price, quantity });
                let on_name: Vec<_> = v.for_field("name").cloned().collect();
                prop_assert_eq!(on_name, vec![required_name()]);
            }

            /// Property: price violation iff absent or outside [1000, 1000000].
            #[test]
            fn price_range_rule(p in payload()) {
                let v = validate(&p);
                let flagged = v.for_field("price").any(|x| *x == price_range());
                let expected = !p.price.is_some_and(|x| (1000..=1_000_000).contains(&x));
                prop_assert_eq!(flagged, expected);
                prop_assert!(v.for_field("price").count() <= 1);
            }

            /// Property: quantity violation iff absent or >= 9999.
            #[test]
            fn quantity_max_rule(p in payload()) {
                let v = validate(&p);
                let flagged = v.for_field("quantity").any(|x| *x == quantity_max());
                let expected = !p.quantity.is_some_and(|q| q < 9999);
                prop_assert_eq!(flagged, expected);
            }

            /// Property: object-level total check iff both present and product < 10000.
            #[test]
            fn total_price_rule(p in payload()) {
                let v = validate(&p);
                let global: Vec<_> = v.global().cloned().collect();
                match (p.price, p.quantity) {
                    (Some(price), Some(qty)) if i64::from(price) * i64::from(qty) < 10_000 => {
                        prop_assert_eq!(global, vec![total_min(i64::from(price) * i64::from(qty))]);
                    }
                    _ => prop_assert!(global.is_empty()),
                }
            }

            /// Property: field violations always precede object violations.
            #[test]
            fn field_violations_come_first(p in payload()) {
                let v = validate(&p);
                let first_object = v.iter().position(|x| x.field_name().is_none());
                if let Some(idx) = first_object {
                    prop_assert!(v.iter().skip(idx).all(|x| x.field_name().is_none()));
                }
            }
        }
    }
}
