//! Platform-independent core of the tuition portal frontend.
//!
//! The portal shows four read-only lists (salary history, attendance, fees,
//! class schedule). They all follow one pattern: fetch once when the view is
//! activated, normalize the response envelope, then render summary cards and a
//! table. This crate holds that pattern so it can be tested without a browser.

pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod format;
pub mod records;
pub mod remote_list;
pub mod session;
pub mod status;
pub mod table;

pub use endpoints::{Endpoint, FeeQuery, SortOrder};
pub use envelope::{normalize_list, ListPage, ListShape};
pub use error::{FailureKind, FetchError, FetchFailure};
pub use format::{DisplayConfig, Formatter};
pub use records::{
    AttendanceRecord, ClassRef, FeeRecord, FeeSummary, ListRecord, NoSummary, SalaryRecord,
    SalarySummary, ScheduleRecord, TutorRef,
};
pub use remote_list::{
    load_remote_list, Activation, ActivationSlot, ListFuture, RemoteList, Settled,
};
pub use session::{CurrentUser, Session, SessionUser};
pub use status::{StatusDomain, StatusTone};
pub use table::{
    render, Cell, Column, RenderedRow, RenderedView, SummaryCard, SummaryField, TableSpec,
    ViewStatus,
};
