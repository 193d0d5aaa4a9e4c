#![doc(test(attr(deny(warnings))))]

//! Finance Core offers personal finance primitives: clients holding bank
//! accounts and investments, transaction tracking, and textual reports of
//! current and projected net worth.

pub mod cli;
pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod report;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
