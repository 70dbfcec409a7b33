//! Summary statistics for SQL Server XML trace files.
//!
//! `sqltrace` reads one trace export, keeps the events recorded for the
//! JDBC driver whose statement text looks like a batch declaration, and
//! prints min/max/average statistics for their CPU, duration, read and
//! write counts. The whole program is a single pass:
//! load, extract, filter, aggregate, print.
//!
//! See the [`trace`] module for the pipeline and [`xml`] for the document
//! tree it runs over.

pub mod styling;
pub mod trace;
pub mod xml;
