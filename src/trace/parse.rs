//! Extract trace events from a parsed trace document.
//!
//! A trace export looks like this (one default namespace, candidate tag
//! names vary by event class):
//! ```text
//! <TraceData xmlns="http://tempuri.org/TracePersistence.xsd">
//!   <Events>
//!     <Event name="RPC:Completed">
//!       <Column name="ApplicationName">Microsoft JDBC Driver for SQL Server</Column>
//!       <Column name="TextData">declare @p1 int ...</Column>
//!       <Column name="Duration">123</Column>
//!       <Column name="CPU">45</Column>
//!       <Column name="Reads">6</Column>
//!       <Column name="Writes">7</Column>
//!     </Event>
//!     ...
//!   </Events>
//! </TraceData>
//! ```
//!
//! Candidates are screened for relevance before any column decoding, so a
//! malformed record from some other application cannot fail the run.

use log::debug;

use crate::xml::Element;

use super::error::TraceError;

/// Only events recorded for this driver are relevant.
pub const APPLICATION_FILTER: &str = "Microsoft JDBC Driver for SQL Server";

/// One recorded database event, decoded from a candidate element.
///
/// Absent columns keep their defaults: the source treats "absent" as
/// "default", not as an error state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceEvent {
    pub application_name: String,
    pub text_data: String,
    pub duration: i64,
    pub cpu: i64,
    pub reads: i64,
    pub writes: i64,
}

/// Extract all relevant events from the document, in document order.
///
/// The root's direct child named `Events` supplies the candidates via its
/// own direct children, whatever their tag names. A document without an
/// `Events` container is structurally broken and fatal.
pub fn extract_events(document: &Element) -> Result<Vec<TraceEvent>, TraceError> {
    let container = document
        .child("Events")
        .ok_or(TraceError::MissingEventsContainer)?;

    let mut events = Vec::new();
    for candidate in &container.children {
        if is_relevant(candidate) {
            events.push(decode_event(candidate)?);
        }
    }

    debug!(
        "extracted {} relevant events from {} candidates",
        events.len(),
        container.children.len()
    );
    Ok(events)
}

/// A candidate is relevant when exactly one of its `Column` children names
/// the application, and that column matches the driver filter exactly.
/// Zero or duplicate application columns disqualify the candidate.
fn is_relevant(candidate: &Element) -> bool {
    let mut columns = candidate
        .children_named("Column")
        .filter(|column| column.attr("name") == Some("ApplicationName"));

    match (columns.next(), columns.next()) {
        (Some(column), None) => column.text == APPLICATION_FILTER,
        _ => false,
    }
}

/// Decode one relevant candidate into a [`TraceEvent`].
///
/// Column names outside the known set are ignored for forward
/// compatibility. A `Column` without a `name` attribute, or a numeric
/// column that does not parse, aborts the run.
fn decode_event(candidate: &Element) -> Result<TraceEvent, TraceError> {
    let mut event = TraceEvent::default();

    for column in candidate.children_named("Column") {
        let name = column.attr("name").ok_or(TraceError::ColumnMissingName)?;
        match name {
            "ApplicationName" => event.application_name = column.text.clone(),
            "TextData" => event.text_data = column.text.clone(),
            "Duration" => event.duration = parse_count(name, &column.text)?,
            "CPU" => event.cpu = parse_count(name, &column.text)?,
            "Reads" => event.reads = parse_count(name, &column.text)?,
            "Writes" => event.writes = parse_count(name, &column.text)?,
            _ => {}
        }
    }

    Ok(event)
}

fn parse_count(column: &str, value: &str) -> Result<i64, TraceError> {
    value.parse().map_err(|_| TraceError::InvalidNumericColumn {
        column: column.to_string(),
        value: value.to_string(),
    })
}
