//! Command implementations

pub mod analyze;
pub mod check;
pub mod play;

pub use analyze::{AnalysisResult, analyze_root};
pub use check::{CheckConfig, CheckResult, CheckStep, run_check};
pub use play::{play_session, run_play};
