use tracing::debug;

use super::domain::{CaseType, PriorityLevel};
use super::normalizer::{NormalizedText, Phrase};
use super::rules::{compile_phrases, CaseTypeRule};

/// Outcome of the keyword classification stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub case_type: CaseType,
    pub priority: PriorityLevel,
    pub score: u32,
}

impl Classification {
    pub fn unclassified() -> Self {
        Self {
            case_type: CaseType::Unclassified,
            priority: PriorityLevel::Low,
            score: 0,
        }
    }
}

struct CompiledTrigger {
    phrase: Phrase,
    weight: u32,
}

struct CompiledCaseRule {
    case_type: CaseType,
    base_priority: PriorityLevel,
    triggers: Vec<CompiledTrigger>,
    escalators: Vec<Phrase>,
}

impl CompiledCaseRule {
    fn score(&self, text: &NormalizedText<'_>) -> u32 {
        let mut seen: Vec<&Phrase> = Vec::new();
        let mut score = 0u32;
        for trigger in &self.triggers {
            // Phrases compiling to the same tokens ("break-in", "break in") count once.
            if seen.contains(&&trigger.phrase) || !text.contains(&trigger.phrase) {
                continue;
            }
            seen.push(&trigger.phrase);
            score = score.saturating_add(trigger.weight);
        }
        score
    }
}

/// Weighted keyword classifier over the case-type entries of a rule set.
pub struct Classifier {
    rules: Vec<CompiledCaseRule>,
}

impl Classifier {
    pub(crate) fn new(rules: &[CaseTypeRule]) -> Self {
        let rules = rules
            .iter()
            .map(|rule| CompiledCaseRule {
                case_type: rule.case_type,
                base_priority: rule.base_priority,
                triggers: rule
                    .triggers
                    .iter()
                    .filter_map(|trigger| {
                        Phrase::compile(&trigger.phrase).map(|phrase| CompiledTrigger {
                            phrase,
                            weight: trigger.weight,
                        })
                    })
                    .collect(),
                escalators: compile_phrases(&rule.escalators),
            })
            .collect();

        Self { rules }
    }

    /// Highest score wins; equal scores resolve to the entry listed first in the table.
    pub fn classify(&self, text: &NormalizedText<'_>) -> Classification {
        let mut best: Option<(&CompiledCaseRule, u32)> = None;
        for rule in &self.rules {
            let score = rule.score(text);
            if score == 0 {
                continue;
            }
            match best {
                Some((_, best_score)) if best_score >= score => {}
                _ => best = Some((rule, score)),
            }
        }

        let Some((rule, score)) = best else {
            debug!("no case type triggers matched");
            return Classification::unclassified();
        };

        let escalated = text.contains_any(&rule.escalators);
        let priority = if escalated {
            rule.base_priority.escalate()
        } else {
            rule.base_priority
        };

        debug!(case_type = ?rule.case_type, score, escalated, %priority, "classified incident");

        Classification {
            case_type: rule.case_type,
            priority,
            score,
        }
    }
}
