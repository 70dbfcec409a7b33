//! Typed errors for the trace pipeline.
//!
//! `TraceError` is a plain enum of domain failures that can be
//! pattern-matched and tested; Display produces the styled user-facing
//! message. Every variant is fatal: this is a single-shot batch tool and
//! nothing is retried, skipped, or logged-and-continued.

use std::path::PathBuf;

use color_print::cwrite;

use crate::styling::{ERROR_EMOJI, HINT_EMOJI};
use crate::xml::XmlError;

use super::parse::APPLICATION_FILTER;
use super::stats::TEXT_DATA_FILTER;

#[derive(Debug)]
pub enum TraceError {
    /// The trace file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The trace file is not well-formed XML.
    Xml { message: String },
    /// The document root has no `Events` child.
    MissingEventsContainer,
    /// A `Column` element of a relevant event carries no `name` attribute.
    ColumnMissingName,
    /// A numeric column holds text that does not parse as an integer.
    InvalidNumericColumn { column: String, value: String },
    /// No events survived both filters, so the aggregate is undefined.
    NoMatchingEvents,
}

impl std::error::Error for TraceError {}

impl From<XmlError> for TraceError {
    fn from(error: XmlError) -> Self {
        TraceError::Xml {
            message: error.to_string(),
        }
    }
}

impl std::fmt::Display for TraceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceError::Io { path, source } => {
                cwrite!(
                    f,
                    "{ERROR_EMOJI} <red>Failed to read <bold>{}</></>\n\n{HINT_EMOJI} <dim>{source}</>",
                    path.display()
                )
            }

            TraceError::Xml { message } => {
                cwrite!(
                    f,
                    "{ERROR_EMOJI} <red>Trace file is not well-formed XML</>\n\n{HINT_EMOJI} <dim>{message}</>"
                )
            }

            TraceError::MissingEventsContainer => {
                cwrite!(
                    f,
                    "{ERROR_EMOJI} <red>No <<Events>> container found under the document root</>\n\n{HINT_EMOJI} <dim>Expected a trace export whose root element has an <<Events>> child</>"
                )
            }

            TraceError::ColumnMissingName => {
                cwrite!(
                    f,
                    "{ERROR_EMOJI} <red>A <<Column>> element has no name attribute</>"
                )
            }

            TraceError::InvalidNumericColumn { column, value } => {
                cwrite!(
                    f,
                    "{ERROR_EMOJI} <red>Column <bold>{column}</> holds non-numeric value <bold>{value}</></>"
                )
            }

            TraceError::NoMatchingEvents => {
                cwrite!(
                    f,
                    "{ERROR_EMOJI} <red>No events matched the filters</>\n\n{HINT_EMOJI} <dim>Looking for events from <bold>{APPLICATION_FILTER}</><dim> whose text contains \"{TEXT_DATA_FILTER}\" and whose CPU is positive</>"
                )
            }
        }
    }
}
