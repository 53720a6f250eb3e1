pub mod assembler;
pub mod charts;
pub mod payload;
pub mod scores;
pub mod session;
pub mod validity;
pub mod views;

pub use assembler::{assemble, assemble_competitor, assemble_policy, ReportKind};
pub use session::{AnalysisSession, RequestToken};
pub use views::{CompetitorReportView, PolicyReportView, ReportView};
