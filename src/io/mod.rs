//! Output rendering

pub mod output;
pub mod style;

pub use output::{create_writer, DashboardReport, ForecastRun, OutputFormat, ReportWriter};
pub use style::{Styled, Tone};
