//! Step execution orchestration.

pub mod bootstrap;

pub use bootstrap::{
    next_steps, BootstrapOptions, BootstrapReport, BootstrapRunner, READY_TITLE,
    SKIPPED_BY_REQUEST,
};
