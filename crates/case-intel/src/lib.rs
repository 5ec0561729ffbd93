//! Deterministic analysis of officer-written incident reports.
//!
//! [`analysis::CaseAnalysisEngine`] turns free-form report text into a structured
//! [`analysis::CaseAnalysis`]: case type, priority, risk factors, next steps, follow-up
//! questions, digital-evidence leads and tentative suspect/evidence mentions.

pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;

pub use analysis::{CaseAnalysis, CaseAnalysisEngine, CaseType, PriorityLevel, RuleSet};
