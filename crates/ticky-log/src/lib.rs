//! # Ticky Log Analyzer
//!
//! Line classifier and report aggregator for `ticky` system logs.
//!
//! ## Overview
//!
//! A ticky log line carries a severity, a free-text message and the user that
//! triggered it:
//!
//! ```text
//! Jan 31 00:09:39 ubuntu.local ticky: ERROR Timeout while retrieving information (oren)
//! Jan 31 00:16:25 ubuntu.local ticky: INFO Closed ticket [#1754] (noel)
//! ```
//!
//! This crate turns such lines into typed [`Event`](ir::Event)s and folds them
//! into two aggregates:
//!
//! - **Error counts**: error message → number of `ERROR` lines with that message
//! - **User stats**: user → `{ info, error }` tallies
//!
//! Lines without the ticky shape are skipped silently.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   classify()   ┌────────────────┐  accumulate()  ┌────────────┐
//! │  log lines   │ ─────────────► │ LineClassifier │ ─────────────► │ Aggregator │
//! └──────────────┘                └────────────────┘     Event      └────────────┘
//!                                                                         │
//!                                                   error_report() / user_report()
//!                                                                         ▼
//!                                                                    CSV writer
//! ```
//!
//! ## Examples
//!
//! ### Classifying a line
//!
//! ```
//! use ticky_log::ir::Severity;
//!
//! let event = ticky_log::classify("ticky: ERROR Disk full (alice)").unwrap();
//! assert_eq!(event.severity, Severity::Error);
//! assert_eq!(event.message, "Disk full");
//! assert_eq!(event.user, "alice");
//!
//! assert!(ticky_log::classify("garbage line").is_none());
//! ```
//!
//! ### Building the reports
//!
//! ```
//! let log = "ticky: ERROR Disk full (alice)\n\
//!            ticky: ERROR Disk full (alice)\n\
//!            ticky: INFO Login (bob)\n";
//! let aggregator = ticky_log::analyze(log.as_bytes())?;
//!
//! let mut csv = Vec::new();
//! aggregator.error_report().write_csv(&mut csv)?;
//! assert_eq!(String::from_utf8(csv).unwrap(), "Error,Count\nDisk full,2\n");
//!
//! let mut csv = Vec::new();
//! aggregator.user_report().write_csv(&mut csv)?;
//! assert_eq!(
//!     String::from_utf8(csv).unwrap(),
//!     "Username,INFO,ERROR\nalice,0,2\nbob,1,0\n"
//! );
//! # Ok::<(), ticky_log::AnalyzeError>(())
//! ```

/// Running aggregates.
pub mod aggregate;
/// Line pattern and field extraction.
pub mod classifier;
pub mod error;
/// Typed event Intermediate Representation (IR).
pub mod ir;
/// Single-pass drivers over a line reader.
pub mod pipeline;
/// Ordered report rows and their CSV form.
pub mod report;


pub use aggregate::Aggregator;
pub use classifier::{LineClassifier, classify};
pub use error::AnalyzeError;
pub use pipeline::{analyze, analyze_with, events};
pub use report::{ErrorReport, UserReport};

/// Schema version for the JSON form of events and reports.
pub const SCHEMA_VERSION: &str = "1.0.0";
