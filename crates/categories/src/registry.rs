//! Process-wide category/product counters.

use core::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Cumulative counters shared by every category built against this registry.
///
/// Counts reflect history, not live objects: dropping a [`crate::Category`]
/// does not decrement anything. Pass a fresh registry to constructors in
/// tests; use [`CategoryRegistry::global`] for process-wide accounting.
///
/// `product_count` is signed: after [`CategoryRegistry::reset`], removing a
/// product counted before the reset takes it below zero.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    category_count: AtomicU64,
    product_count: AtomicI64,
}

static GLOBAL: CategoryRegistry = CategoryRegistry::new();

impl CategoryRegistry {
    pub const fn new() -> Self {
        Self {
            category_count: AtomicU64::new(0),
            product_count: AtomicI64::new(0),
        }
    }

    /// The registry that lives from process start to process end.
    pub fn global() -> &'static CategoryRegistry {
        &GLOBAL
    }

    /// Categories constructed so far.
    pub fn category_count(&self) -> u64 {
        self.category_count.load(Ordering::Relaxed)
    }

    /// Initial products of every category plus later add/remove deltas.
    pub fn product_count(&self) -> i64 {
        self.product_count.load(Ordering::Relaxed)
    }

    /// Zero both counters.
    pub fn reset(&self) {
        self.category_count.store(0, Ordering::Relaxed);
        self.product_count.store(0, Ordering::Relaxed);
    }

    pub(crate) fn record_category(&self, initial_products: usize) {
        self.category_count.fetch_add(1, Ordering::Relaxed);
        self.product_count
            .fetch_add(initial_products as i64, Ordering::Relaxed);
    }

    pub(crate) fn record_added(&self) {
        self.product_count.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_removed(&self) {
        self.product_count.fetch_sub(1, Ordering::Relaxed);
    }
}
