pub mod report;
pub mod report_kind;

pub use report::Report;
pub use report_kind::ReportKind;
