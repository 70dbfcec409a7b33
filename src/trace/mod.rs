//! Trace document parsing and summary statistics.
//!
//! This module analyzes SQL Server XML trace exports to understand where
//! the JDBC driver's batch-declaration statements spend their resources.
//!
//! The pipeline is one pass, left to right:
//!
//! - **parse**: locate the `Events` container and decode the events
//!   recorded for the JDBC driver
//! - **stats**: keep the events whose statements declare batch variables
//!   and consumed CPU, then reduce them to min/max/average figures
//! - **report**: render the figures as fixed-width label/value lines
//!
//! ```no_run
//! use sqltrace::{trace, xml};
//!
//! let source = std::fs::read_to_string("trace.xml")?;
//! let document = xml::parse_document(&source)?;
//! let events = trace::filter_events(trace::extract_events(&document)?);
//! let summary = trace::summarize(&events)?;
//! print!("{}", trace::render_summary(&summary));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod parse;
pub mod report;
pub mod stats;

// Re-export main types for convenience
pub use error::TraceError;
pub use parse::{APPLICATION_FILTER, TraceEvent, extract_events};
pub use report::render_summary;
pub use stats::{TEXT_DATA_FILTER, TraceSummary, filter_events, summarize};
