// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod error;
pub mod gaps;
pub mod progress;
pub mod reference;
pub mod report;
pub mod runner;
pub mod scan;

pub use error::{AuditError, Result};
