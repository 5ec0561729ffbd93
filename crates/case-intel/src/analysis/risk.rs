use tracing::debug;

use super::domain::PriorityLevel;
use super::normalizer::{NormalizedText, Phrase};
use super::rules::{compile_phrases, RiskRule};

/// Escalation signal detected in a report, independent of its case type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskFactor {
    pub label: String,
    pub floor: PriorityLevel,
    pub next_step: Option<String>,
    pub digital_evidence: bool,
}

/// Highest floor across the detected risks, if any fired.
pub fn priority_floor(risks: &[RiskFactor]) -> Option<PriorityLevel> {
    risks.iter().map(|risk| risk.floor).max()
}

struct CompiledRiskRule {
    factor: RiskFactor,
    triggers: Vec<Phrase>,
}

/// Evaluates every risk rule against the whole report. All matching rules fire.
pub struct RiskDetector {
    rules: Vec<CompiledRiskRule>,
}

impl RiskDetector {
    pub(crate) fn new(rules: &[RiskRule]) -> Self {
        let rules = rules
            .iter()
            .map(|rule| CompiledRiskRule {
                factor: RiskFactor {
                    label: rule.label.trim().to_string(),
                    floor: rule.floor,
                    next_step: rule.next_step.clone(),
                    digital_evidence: rule.digital_evidence,
                },
                triggers: compile_phrases(&rule.triggers),
            })
            .collect();

        Self { rules }
    }

    pub fn detect(&self, text: &NormalizedText<'_>) -> Vec<RiskFactor> {
        let mut detected: Vec<RiskFactor> = Vec::new();
        for rule in &self.rules {
            if !text.contains_any(&rule.triggers) {
                continue;
            }
            if detected
                .iter()
                .any(|existing| existing.label == rule.factor.label)
            {
                continue;
            }
            debug!(risk = %rule.factor.label, floor = %rule.factor.floor, "risk factor detected");
            detected.push(rule.factor.clone());
        }
        detected
    }
}
