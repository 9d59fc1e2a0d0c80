//! Concurrent in-process document store.

use std::sync::atomic::{AtomicU64, Ordering};

use budget_mgt_core::budget::Budget;
use budget_mgt_core::expense::Expense;
use budget_mgt_core::jar::Jar;
use budget_mgt_core::store::{StoreError, StoredPage};
use budget_mgt_shared::types::{BudgetId, ExpenseId, FamilyId, JarId, PageRequest};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

/// A document plus the sequence number of its first insertion.
///
/// Replacing a document keeps its sequence number, so collection scans
/// return documents in the order they were created.
#[derive(Debug, Clone)]
pub(crate) struct Stored<T> {
    pub(crate) seq: u64,
    pub(crate) doc: T,
}

/// In-memory document store.
///
/// Holds three collections (`budget`, `jar`, `expense`) plus a unique index
/// on the budget's `family_id`. Every operation is atomic per document;
/// there are no multi-document transactions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    budgets: DashMap<BudgetId, Stored<Budget>>,
    families: DashMap<FamilyId, BudgetId>,
    jars: DashMap<JarId, Stored<Jar>>,
    expenses: DashMap<ExpenseId, Stored<Expense>>,
    sequence: AtomicU64,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_seq(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }

    pub(crate) fn budget_by_id(&self, id: &BudgetId) -> Option<Budget> {
        self.budgets.get(id).map(|entry| entry.doc.clone())
    }

    pub(crate) fn budget_by_family(&self, family_id: &FamilyId) -> Option<Budget> {
        let budget_id = self.families.get(family_id).map(|entry| entry.clone())?;
        self.budget_by_id(&budget_id)
    }

    /// Inserts or replaces a budget, enforcing the `family_id` unique index.
    pub(crate) fn upsert_budget(&self, budget: Budget) -> Result<Budget, StoreError> {
        match self.families.entry(budget.family_id.clone()) {
            Entry::Occupied(owner) if *owner.get() != budget.id => {
                debug!(family_id = %budget.family_id, "Unique index rejected budget");
                return Err(StoreError::Conflict(format!(
                    "family_id {} already indexed",
                    budget.family_id
                )));
            }
            Entry::Occupied(_) => {}
            Entry::Vacant(slot) => {
                slot.insert(budget.id.clone());
            }
        }

        let moved_from = match self.budgets.entry(budget.id.clone()) {
            Entry::Occupied(mut slot) => {
                let previous = std::mem::replace(&mut slot.get_mut().doc, budget.clone());
                (previous.family_id != budget.family_id).then_some(previous.family_id)
            }
            Entry::Vacant(slot) => {
                slot.insert(Stored {
                    seq: self.next_seq(),
                    doc: budget.clone(),
                });
                None
            }
        };
        if let Some(old_family) = moved_from {
            self.families
                .remove_if(&old_family, |_, owner| *owner == budget.id);
        }
        Ok(budget)
    }

    pub(crate) fn remove_budget(&self, id: &BudgetId) -> u64 {
        match self.budgets.remove(id) {
            Some((_, removed)) => {
                self.families
                    .remove_if(&removed.doc.family_id, |_, owner| owner == id);
                1
            }
            None => 0,
        }
    }

    pub(crate) fn jars(&self) -> &DashMap<JarId, Stored<Jar>> {
        &self.jars
    }

    pub(crate) fn expenses(&self) -> &DashMap<ExpenseId, Stored<Expense>> {
        &self.expenses
    }

    /// Inserts or replaces a document, keeping the sequence number of an
    /// existing entry.
    pub(crate) fn upsert<K, T>(&self, collection: &DashMap<K, Stored<T>>, key: K, doc: T)
    where
        K: Eq + std::hash::Hash,
    {
        match collection.entry(key) {
            Entry::Occupied(mut slot) => slot.get_mut().doc = doc,
            Entry::Vacant(slot) => {
                slot.insert(Stored {
                    seq: self.next_seq(),
                    doc,
                });
            }
        }
    }
}

/// Filters a collection, orders it by insertion and cuts out one page.
pub(crate) fn page_of<K, T, F>(
    collection: &DashMap<K, Stored<T>>,
    page: &PageRequest,
    filter: F,
) -> StoredPage<T>
where
    K: Eq + std::hash::Hash,
    T: Clone,
    F: Fn(&T) -> bool,
{
    let mut matching: Vec<(u64, T)> = collection
        .iter()
        .filter(|entry| filter(&entry.doc))
        .map(|entry| (entry.seq, entry.doc.clone()))
        .collect();
    matching.sort_by_key(|(seq, _)| *seq);

    let total_elements = u64::try_from(matching.len()).unwrap_or(u64::MAX);
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
    let items = matching
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(|(_, doc)| doc)
        .collect();

    StoredPage {
        items,
        total_elements,
    }
}
