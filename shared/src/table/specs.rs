//! Column and summary layouts for the four portal lists.

use super::{Cell, Column, SummaryField, TableSpec};
use crate::records::{
    AttendanceRecord, FeeRecord, FeeSummary, NoSummary, SalaryRecord, SalarySummary, ScheduleRecord,
};
use crate::status::StatusDomain;

pub fn salary_history() -> TableSpec<SalaryRecord, SalarySummary> {
    TableSpec {
        title: "Salary History",
        columns: vec![
            Column {
                title: "Month",
                cell: |r, f| Cell::text(f.month_year(r.salary_month.as_deref())),
            },
            Column {
                title: "Base",
                cell: |r, f| Cell::text(f.currency(r.base_amount)),
            },
            Column {
                title: "Allowances",
                cell: |r, f| Cell::text(f.currency(r.allowances)),
            },
            Column {
                title: "Deductions",
                cell: |r, f| Cell::text(f.currency(r.deductions)),
            },
            Column {
                title: "Net Salary",
                cell: |r, f| Cell::text(f.currency(r.net_salary)),
            },
            Column {
                title: "Status",
                cell: |r, f| Cell::status(StatusDomain::Salary, r.status.as_deref(), f),
            },
            Column {
                title: "Paid On",
                cell: |r, f| Cell::text(f.short_date(r.paid_date.as_deref())),
            },
        ],
        summary_fields: vec![
            SummaryField {
                label: "Total Earned",
                value: |s| s.total_earned,
            },
            SummaryField {
                label: "Pending Amount",
                value: |s| s.pending_amount,
            },
        ],
        empty_message: "No salary records yet.",
    }
}

pub fn attendance() -> TableSpec<AttendanceRecord, NoSummary> {
    TableSpec {
        title: "Attendance",
        columns: vec![
            Column {
                title: "Date",
                cell: |r, f| Cell::text(f.long_date(r.attendance_date.as_deref())),
            },
            Column {
                title: "Class",
                cell: |r, f| {
                    let class = r.class.as_ref();
                    let name = class
                        .and_then(|c| c.name.as_deref())
                        .or_else(|| class.and_then(|c| c.subject.as_deref()));
                    Cell::text(f.text(name))
                },
            },
            Column {
                title: "Status",
                cell: |r, f| Cell::status(StatusDomain::Attendance, r.status.as_deref(), f),
            },
            Column {
                title: "Remarks",
                cell: |r, f| Cell::text(f.text(r.remarks.as_deref())),
            },
        ],
        summary_fields: Vec::new(),
        empty_message: "No attendance has been recorded.",
    }
}

pub fn fees() -> TableSpec<FeeRecord, FeeSummary> {
    TableSpec {
        title: "Fees",
        columns: vec![
            Column {
                title: "Fee",
                cell: |r, f| Cell::text(f.text(r.description.as_deref().or(r.fee_id.as_deref()))),
            },
            Column {
                title: "Amount",
                cell: |r, f| Cell::text(f.currency(r.amount)),
            },
            Column {
                title: "Due Date",
                cell: |r, f| Cell::text(f.long_date(r.due_date.as_deref())),
            },
            Column {
                title: "Paid Date",
                cell: |r, f| Cell::text(f.long_date(r.paid_date.as_deref())),
            },
            Column {
                title: "Status",
                cell: |r, f| Cell::status(StatusDomain::Fee, r.status.as_deref(), f),
            },
        ],
        summary_fields: vec![
            SummaryField {
                label: "Total Fees",
                value: |s| s.total_fees,
            },
            SummaryField {
                label: "Paid",
                value: |s| s.paid,
            },
            SummaryField {
                label: "Pending",
                value: |s| s.pending,
            },
        ],
        empty_message: "No fees on record.",
    }
}

pub fn schedule() -> TableSpec<ScheduleRecord, NoSummary> {
    TableSpec {
        title: "Class Schedule",
        columns: vec![
            Column {
                title: "Date",
                cell: |r, f| Cell::text(f.long_date(r.schedule_date.as_deref())),
            },
            Column {
                title: "Subject",
                cell: |r, f| Cell::text(f.text(r.subject.as_deref())),
            },
            Column {
                title: "Time",
                cell: |r, f| {
                    Cell::text(f.time_range(r.start_time.as_deref(), r.end_time.as_deref()))
                },
            },
            Column {
                title: "Tutor",
                cell: |r, f| Cell::text(f.text(r.tutor.as_ref().and_then(|t| t.name.as_deref()))),
            },
        ],
        summary_fields: Vec::new(),
        empty_message: "No classes scheduled.",
    }
}
