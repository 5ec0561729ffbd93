//! Incident report analysis: normalize, classify, detect risks, recommend, extract.

pub mod batch;
pub mod classifier;
pub mod domain;
pub mod extract;
pub mod normalizer;
pub mod recommend;
pub mod risk;
pub mod router;
pub mod rules;

#[cfg(test)]
mod tests;

pub use batch::{BatchError, BatchOutcome, IntakeBatch, IntakeRecord};
pub use classifier::Classification;
pub use domain::{CaseAnalysis, CaseType, DisplayList, DisplayView, PriorityLevel};
pub use risk::RiskFactor;
pub use router::analysis_router;
pub use rules::{
    CaseTypeRule, DigitalDimension, EscalationTemplate, ExtractionRules, RecommendationTemplate,
    RiskRule, RuleSet, RuleSetError, RuleSetSummary, TriggerPhrase,
};

use crate::config::RulesConfig;
use classifier::Classifier;
use domain::CaseAnalysisParts;
use extract::Extractor;
use recommend::Recommender;
use risk::{priority_floor, RiskDetector};
use tracing::{debug, info};

/// Stateless analysis engine holding a compiled, read-only rule set.
///
/// Build it once at startup and share it behind an `Arc`; `analyze_case` takes `&self` and
/// touches no shared mutable state.
pub struct CaseAnalysisEngine {
    rules: RuleSet,
    classifier: Classifier,
    risks: RiskDetector,
    recommender: Recommender,
    extractor: Extractor,
}

impl CaseAnalysisEngine {
    pub fn new(rules: RuleSet) -> Result<Self, RuleSetError> {
        rules.validate()?;

        let classifier = Classifier::new(&rules.case_types);
        let risks = RiskDetector::new(&rules.risks);
        let recommender = Recommender::new(&rules);
        let extractor = Extractor::new(&rules.extraction)?;

        Ok(Self {
            rules,
            classifier,
            risks,
            recommender,
            extractor,
        })
    }

    pub fn standard() -> Result<Self, RuleSetError> {
        Self::new(RuleSet::standard())
    }

    /// Load the configured rule file, or the built-in table when none is configured.
    pub fn from_config(config: &RulesConfig) -> Result<Self, RuleSetError> {
        let rules = match &config.path {
            Some(path) => RuleSet::from_path(path)?,
            None => RuleSet::standard(),
        };
        let engine = Self::new(rules)?;
        let source = config
            .path
            .as_ref()
            .map_or_else(|| "built-in".to_string(), |path| path.display().to_string());
        info!(version = %engine.rules.version, %source, "case analysis rules loaded");
        Ok(engine)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn version(&self) -> &str {
        &self.rules.version
    }

    /// Derive a full case analysis from free-form incident text.
    pub fn analyze_case(&self, text: &str) -> CaseAnalysis {
        let normalized = normalizer::normalize(text);

        let classification = self.classifier.classify(&normalized);
        let risks = self.risks.detect(&normalized);
        let priority = priority_floor(&risks)
            .map_or(classification.priority, |floor| floor.max(classification.priority));

        let recommendations = self
            .recommender
            .recommend(&classification, priority, &risks, &normalized);
        let extraction = self.extractor.extract(normalized.original());

        debug!(
            case_type = ?classification.case_type,
            %priority,
            risks = risks.len(),
            suspects = extraction.suspects.len(),
            evidence = extraction.evidence.len(),
            "case analysis assembled"
        );

        CaseAnalysis::from_parts(CaseAnalysisParts {
            case_type: classification.case_type,
            priority,
            risk_factors: risks.into_iter().map(|risk| risk.label).collect(),
            next_steps: recommendations.next_steps,
            questions: recommendations.questions,
            digital_trails: recommendations.digital_trails,
            suspects: extraction.suspects,
            evidence: extraction.evidence,
        })
    }

    /// Analyze intake records in order.
    pub fn analyze_batch(&self, records: &[IntakeRecord]) -> Vec<BatchOutcome> {
        records
            .iter()
            .map(|record| BatchOutcome {
                case_id: record.case_id.clone(),
                analysis: self.analyze_case(&record.report),
            })
            .collect()
    }
}
