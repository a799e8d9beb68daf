//! Render contract shared by every list view.
//!
//! [`render`] is a pure function from a [`RemoteList`] to a [`RenderedView`]:
//! summary cards, a fixed header and one keyed row per record. Components only
//! turn that into markup.

pub mod specs;

use crate::format::Formatter;
use crate::records::ListRecord;
use crate::remote_list::RemoteList;
use crate::status::{StatusDomain, StatusTone};

/// A rendered table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Pill { label: String, tone: StatusTone },
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Status pill; a missing status shows the formatter's placeholder in gray.
    pub fn status(domain: StatusDomain, status: Option<&str>, fmt: &Formatter) -> Self {
        let label = status
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| fmt.config().placeholder.clone());
        Cell::Pill {
            tone: domain.tone(status),
            label,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Cell::Text(text) => text,
            Cell::Pill { label, .. } => label,
        }
    }
}

/// One table column: a fixed title and how to pull its cell out of a record.
pub struct Column<R> {
    pub title: &'static str,
    pub cell: fn(&R, &Formatter) -> Cell,
}

/// One summary card: a label and the aggregate it shows.
pub struct SummaryField<S> {
    pub label: &'static str,
    pub value: fn(&S) -> Option<f64>,
}

/// Everything a domain declares about how its list is shown.
pub struct TableSpec<R, S> {
    pub title: &'static str,
    pub columns: Vec<Column<R>>,
    pub summary_fields: Vec<SummaryField<S>>,
    pub empty_message: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewStatus {
    Loading,
    /// Loaded with at least one record
    Ready,
    /// Loaded, nothing to show
    Empty,
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub key: String,
    pub cells: Vec<Cell>,
}

/// A list view reduced to display data.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    pub title: &'static str,
    pub status: ViewStatus,
    pub summary_cards: Vec<SummaryCard>,
    pub header: Vec<&'static str>,
    pub rows: Vec<RenderedRow>,
    pub empty_message: &'static str,
}

pub fn render<R, S>(
    spec: &TableSpec<R, S>,
    state: &RemoteList<R, S>,
    fmt: &Formatter,
) -> RenderedView
where
    R: ListRecord,
{
    let status = match state {
        RemoteList::Loading => ViewStatus::Loading,
        RemoteList::Failed(failure) => ViewStatus::Failed {
            message: failure.message.clone(),
        },
        RemoteList::Loaded(page) if page.records.is_empty() => ViewStatus::Empty,
        RemoteList::Loaded(_) => ViewStatus::Ready,
    };

    let summary_cards = state
        .summary()
        .map(|summary| {
            spec.summary_fields
                .iter()
                .map(|field| SummaryCard {
                    label: field.label,
                    value: fmt.currency((field.value)(summary)),
                })
                .collect()
        })
        .unwrap_or_default();

    let rows = state
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| RenderedRow {
            key: record.key().unwrap_or_else(|| format!("row-{}", index)),
            cells: spec.columns.iter().map(|column| (column.cell)(record, fmt)).collect(),
        })
        .collect();

    RenderedView {
        title: spec.title,
        status,
        summary_cards,
        header: spec.columns.iter().map(|column| column.title).collect(),
        rows,
        empty_message: spec.empty_message,
    }
}
