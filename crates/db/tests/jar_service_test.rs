//! Jar service tests over the memory store.

mod common;

use budget_mgt_core::jar::{JarError, JarPatch, JarStatus, NewJar};
use budget_mgt_shared::types::{BudgetId, JarId, PageRequest};
use common::{budget_for, services};
use rust_decimal_macros::dec;

fn new_jar(budget_id: &BudgetId, name: &str) -> NewJar {
    NewJar {
        budget_id: budget_id.clone(),
        jar_name: Some(name.to_string()),
        current_amount: Some(dec!(36)),
        capacity: Some(dec!(5000)),
    }
}

#[tokio::test]
async fn test_create_derives_status_and_find_returns_it() {
    let services = services();
    let budget = budget_for(&services, "family-1").await;

    let jar = services
        .jars
        .create(new_jar(&budget.id, "CAR"), &budget.id)
        .await
        .unwrap();

    assert_eq!(jar.status(), JarStatus::InProgress);
    assert_eq!(
        services.jars.find(jar.id(), &budget.id).await.unwrap(),
        jar
    );
}

#[tokio::test]
async fn test_create_with_mismatched_budget_is_rejected() {
    let services = services();
    let budget = budget_for(&services, "family-1").await;

    let err = services
        .jars
        .create(new_jar(&BudgetId::from("other"), "CAR"), &budget.id)
        .await
        .unwrap_err();

    assert!(matches!(err, JarError::BudgetMismatch));
}

#[tokio::test]
async fn test_create_in_unknown_budget_is_rejected() {
    let services = services();
    let missing = BudgetId::from("missing");

    let err = services
        .jars
        .create(new_jar(&missing, "CAR"), &missing)
        .await
        .unwrap_err();

    assert!(matches!(err, JarError::BudgetNotFound(_)));
}

#[tokio::test]
async fn test_create_with_negative_amount_is_rejected() {
    let services = services();
    let budget = budget_for(&services, "family-1").await;
    let mut input = new_jar(&budget.id, "CAR");
    input.current_amount = Some(dec!(-1));

    let err = services.jars.create(input, &budget.id).await.unwrap_err();

    assert!(matches!(err, JarError::NegativeAmount));
}

#[tokio::test]
async fn test_update_completes_jar() {
    let services = services();
    let budget = budget_for(&services, "family-1").await;
    let jar = services
        .jars
        .create(new_jar(&budget.id, "CAR"), &budget.id)
        .await
        .unwrap();

    let updated = services
        .jars
        .update(
            jar.id(),
            &budget.id,
            &JarPatch {
                id: Some(jar.id().clone()),
                budget_id: Some(budget.id.clone()),
                current_amount: Some(dec!(5000)),
                ..JarPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status(), JarStatus::Completed);
    assert_eq!(updated.jar_name(), Some("CAR"));
    assert_eq!(
        services.jars.find(jar.id(), &budget.id).await.unwrap(),
        updated
    );
}

#[tokio::test]
async fn test_update_requires_matching_ids() {
    let services = services();
    let budget = budget_for(&services, "family-1").await;
    let jar = services
        .jars
        .create(new_jar(&budget.id, "CAR"), &budget.id)
        .await
        .unwrap();

    let wrong_jar = services
        .jars
        .update(
            jar.id(),
            &budget.id,
            &JarPatch {
                id: Some(JarId::from("other")),
                budget_id: Some(budget.id.clone()),
                ..JarPatch::default()
            },
        )
        .await
        .unwrap_err();
    let wrong_budget = services
        .jars
        .update(
            jar.id(),
            &budget.id,
            &JarPatch {
                id: Some(jar.id().clone()),
                budget_id: None,
                ..JarPatch::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(wrong_jar, JarError::JarMismatch));
    assert!(matches!(wrong_budget, JarError::BudgetMismatch));
}

#[tokio::test]
async fn test_jar_is_invisible_from_other_budget() {
    let services = services();
    let first = budget_for(&services, "family-1").await;
    let second = budget_for(&services, "family-2").await;
    let jar = services
        .jars
        .create(new_jar(&first.id, "CAR"), &first.id)
        .await
        .unwrap();

    let find = services.jars.find(jar.id(), &second.id).await.unwrap_err();
    let delete = services.jars.delete(jar.id(), &second.id).await.unwrap_err();

    assert!(matches!(find, JarError::NotFound { .. }));
    assert!(matches!(delete, JarError::NotFound { .. }));
    assert!(services.jars.find(jar.id(), &first.id).await.is_ok());
}

#[tokio::test]
async fn test_delete_removes_jar() {
    let services = services();
    let budget = budget_for(&services, "family-1").await;
    let jar = services
        .jars
        .create(new_jar(&budget.id, "CAR"), &budget.id)
        .await
        .unwrap();

    services.jars.delete(jar.id(), &budget.id).await.unwrap();

    let err = services.jars.find(jar.id(), &budget.id).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Jar with id: {} not found in budget with id: {}", jar.id(), budget.id)
    );
}

#[tokio::test]
async fn test_list_pages_in_creation_order() {
    let services = services();
    let budget = budget_for(&services, "family-1").await;
    let other = budget_for(&services, "family-2").await;
    for name in ["a", "b", "c"] {
        services
            .jars
            .create(new_jar(&budget.id, name), &budget.id)
            .await
            .unwrap();
    }
    services
        .jars
        .create(new_jar(&other.id, "x"), &other.id)
        .await
        .unwrap();

    let page = services
        .jars
        .list_by_budget(&budget.id, &PageRequest::new(0, 2))
        .await
        .unwrap();
    let names: Vec<_> = page.items.iter().map(|j| j.jar_name()).collect();
    assert_eq!(names, vec![Some("a"), Some("b")]);
    assert_eq!(page.meta.elements, 2);
    assert_eq!(page.meta.total_elements, 3);
    assert_eq!(page.meta.total_pages, 2);

    let last = services
        .jars
        .list_by_budget(&budget.id, &PageRequest::new(1, 2))
        .await
        .unwrap();
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].jar_name(), Some("c"));
}

#[tokio::test]
async fn test_list_for_unknown_budget_is_not_found() {
    let services = services();

    let err = services
        .jars
        .list_by_budget(&BudgetId::from("missing"), &PageRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, JarError::BudgetNotFound(_)));
}

#[tokio::test]
async fn test_find_update_delete_in_unknown_budget() {
    let services = services();
    let missing = BudgetId::from("missing");
    let jar_id = JarId::from("j-1");

    let find = services.jars.find(&jar_id, &missing).await.unwrap_err();
    let update = services
        .jars
        .update(
            &jar_id,
            &missing,
            &JarPatch {
                id: Some(jar_id.clone()),
                budget_id: Some(missing.clone()),
                capacity: Some(dec!(10)),
                ..JarPatch::default()
            },
        )
        .await
        .unwrap_err();
    let delete = services.jars.delete(&jar_id, &missing).await.unwrap_err();

    assert!(matches!(find, JarError::BudgetNotFound(ref b) if *b == missing));
    assert!(matches!(update, JarError::BudgetNotFound(_)));
    assert!(matches!(delete, JarError::BudgetNotFound(_)));
}
