pub mod report_catalog;

pub use report_catalog::ReportCatalog;
