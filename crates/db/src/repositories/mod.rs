//! Repository implementations backed by [`MemoryStore`](crate::MemoryStore).

pub mod budget;
pub mod expense;
pub mod jar;

pub use budget::MemoryBudgetRepository;
pub use expense::MemoryExpenseRepository;
pub use jar::MemoryJarRepository;
