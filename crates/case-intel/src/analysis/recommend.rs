use std::collections::HashMap;

use super::classifier::Classification;
use super::domain::{CaseType, PriorityLevel};
use super::normalizer::{NormalizedText, Phrase};
use super::risk::RiskFactor;
use super::rules::{compile_phrases, DigitalDimension, RecommendationTemplate, RuleSet};

/// Ordered guidance produced for one analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recommendations {
    pub next_steps: Vec<String>,
    pub questions: Vec<String>,
    pub digital_trails: Vec<String>,
}

/// Lookup-table generator mapping case type, priority and risks to guidance.
pub struct Recommender {
    templates: HashMap<CaseType, RecommendationTemplate>,
    fallback: RecommendationTemplate,
    high_block: Vec<String>,
    critical_block: Vec<String>,
    digital_cues: Vec<Phrase>,
}

impl Recommender {
    pub(crate) fn new(rules: &RuleSet) -> Self {
        let templates = rules
            .case_types
            .iter()
            .map(|rule| (rule.case_type, rule.recommendations.clone()))
            .collect();

        Self {
            templates,
            fallback: rules.fallback.clone(),
            high_block: rules.escalation.high.clone(),
            critical_block: rules.escalation.critical.clone(),
            digital_cues: compile_phrases(&rules.digital_cues),
        }
    }

    fn template(&self, case_type: CaseType) -> &RecommendationTemplate {
        self.templates.get(&case_type).unwrap_or(&self.fallback)
    }

    pub fn recommend(
        &self,
        classification: &Classification,
        priority: PriorityLevel,
        risks: &[RiskFactor],
        text: &NormalizedText<'_>,
    ) -> Recommendations {
        let template = self.template(classification.case_type);

        let mut next_steps = StepList::default();
        if priority == PriorityLevel::Critical {
            next_steps.extend(&self.critical_block);
        }
        if priority.is_escalated() {
            next_steps.extend(&self.high_block);
        }
        next_steps.extend(risks.iter().filter_map(|risk| risk.next_step.as_ref()));
        next_steps.extend(&template.next_steps);

        let digital_trails = match template.digital {
            DigitalDimension::Always => template.digital_trails.clone(),
            DigitalDimension::WhenCued if self.has_digital_cue(risks, text) => {
                template.digital_trails.clone()
            }
            DigitalDimension::WhenCued | DigitalDimension::Never => Vec::new(),
        };

        Recommendations {
            next_steps: next_steps.into_inner(),
            questions: template.questions.clone(),
            digital_trails,
        }
    }

    fn has_digital_cue(&self, risks: &[RiskFactor], text: &NormalizedText<'_>) -> bool {
        risks.iter().any(|risk| risk.digital_evidence) || text.contains_any(&self.digital_cues)
    }
}

/// Keeps first occurrences only and skips blank template lines.
#[derive(Default)]
struct StepList(Vec<String>);

impl StepList {
    fn extend<'a>(&mut self, steps: impl IntoIterator<Item = &'a String>) {
        for step in steps {
            let step = step.trim();
            if step.is_empty() || self.0.iter().any(|existing| existing == step) {
                continue;
            }
            self.0.push(step.to_string());
        }
    }

    fn into_inner(self) -> Vec<String> {
        self.0
    }
}
