//! Property-based tests for jar status derivation and merge-patch.

use budget_mgt_shared::types::{BudgetId, JarId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::status::{JarStatus, derive_status};
use super::types::{Jar, JarPatch};

/// Strategy to generate a positive amount (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate any amount, including zero and negatives.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a non-positive capacity.
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..=0i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn jar_strategy() -> impl Strategy<Value = Jar> {
    (
        proptest::option::of("[a-z]{1,12}"),
        any_amount(),
        any_amount(),
    )
        .prop_map(|(name, current_amount, capacity)| {
            Jar::new(
                JarId::generate(),
                BudgetId::generate(),
                name,
                current_amount,
                capacity,
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A zero amount never starts a jar, whatever the capacity.
    #[test]
    fn prop_zero_amount_not_started(capacity in positive_amount()) {
        prop_assert_eq!(
            derive_status(Some(Decimal::ZERO), Some(capacity)),
            JarStatus::NotStarted
        );
    }

    /// Reaching or exceeding the capacity completes the jar.
    #[test]
    fn prop_reached_capacity_completed(
        capacity in positive_amount(),
        surplus in (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
    ) {
        prop_assert_eq!(
            derive_status(Some(capacity + surplus), Some(capacity)),
            JarStatus::Completed
        );
    }

    /// Any amount strictly between zero and the capacity is in progress.
    #[test]
    fn prop_partial_amount_in_progress(
        amount in positive_amount(),
        gap in positive_amount(),
    ) {
        prop_assert_eq!(
            derive_status(Some(amount), Some(amount + gap)),
            JarStatus::InProgress
        );
    }

    /// A capacity at or below zero never starts a jar.
    #[test]
    fn prop_non_positive_capacity_not_started(
        amount in any_amount(),
        capacity in non_positive_amount(),
    ) {
        prop_assert_eq!(derive_status(Some(amount), Some(capacity)), JarStatus::NotStarted);
    }

    /// The stored status always matches the derivation from the stored amounts.
    #[test]
    fn prop_status_tracks_amounts(
        jar in jar_strategy(),
        amount in any_amount(),
        capacity in any_amount(),
    ) {
        let mut jar = jar;
        jar.set_current_amount(amount).set_capacity(capacity);
        prop_assert_eq!(jar.status(), derive_status(Some(amount), Some(capacity)));
    }

    /// Applying the same fully-populated patch twice equals applying it once.
    #[test]
    fn prop_merge_idempotent(
        jar in jar_strategy(),
        name in "[a-z]{1,12}",
        amount in any_amount(),
        capacity in any_amount(),
    ) {
        let patch = JarPatch {
            id: Some(JarId::generate()),
            budget_id: Some(BudgetId::generate()),
            jar_name: Some(name),
            current_amount: Some(amount),
            capacity: Some(capacity),
        };

        let mut once = jar.clone();
        once.merge_with(&patch);
        let mut twice = once.clone();
        twice.merge_with(&patch);

        prop_assert_eq!(once, twice);
    }

    /// An empty patch leaves the jar unchanged.
    #[test]
    fn prop_merge_empty_patch_identity(jar in jar_strategy()) {
        let mut merged = jar.clone();
        merged.merge_with(&JarPatch {
            jar_name: Some(String::new()),
            ..JarPatch::default()
        });
        prop_assert_eq!(merged, jar);
    }
}
