#![doc(test(attr(deny(warnings))))]

//! Budget Engine offers the allocation, validation, and savings-metric
//! primitives behind a personal-finance dashboard: a four-way budget split
//! (needs/wants/savings/investments) derived from income, expenses, and a
//! risk profile, plus the append-only plan history it feeds.

pub mod allocation;
pub mod config;
pub mod currency;
pub mod errors;
pub mod history;
pub mod metrics;
pub mod profile;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Engine tracing initialized.");
    });
}
