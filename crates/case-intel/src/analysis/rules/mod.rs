//! Versioned rule tables driving classification, risk detection, recommendations and extraction.
//!
//! A [`RuleSet`] is plain data: it can be built in code, deserialized from JSON, or taken from
//! [`RuleSet::standard`]. The engine validates and compiles it once at construction time and never
//! mutates it afterwards.

mod standard;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{CaseType, PriorityLevel};
use super::normalizer::Phrase;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub version: String,
    pub published_on: NaiveDate,
    /// Order doubles as the tie-break order: earlier entries win equal scores.
    pub case_types: Vec<CaseTypeRule>,
    #[serde(default)]
    pub risks: Vec<RiskRule>,
    #[serde(default)]
    pub escalation: EscalationTemplate,
    pub fallback: RecommendationTemplate,
    #[serde(default)]
    pub digital_cues: Vec<String>,
    #[serde(default)]
    pub extraction: ExtractionRules,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseTypeRule {
    pub case_type: CaseType,
    pub base_priority: PriorityLevel,
    pub triggers: Vec<TriggerPhrase>,
    /// Phrases that raise the base priority by one level when present.
    #[serde(default)]
    pub escalators: Vec<String>,
    pub recommendations: RecommendationTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerPhrase {
    pub phrase: String,
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    1
}

impl TriggerPhrase {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self::weighted(phrase, default_weight())
    }

    pub fn weighted(phrase: impl Into<String>, weight: u32) -> Self {
        Self {
            phrase: phrase.into(),
            weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRule {
    pub label: String,
    pub triggers: Vec<String>,
    pub floor: PriorityLevel,
    #[serde(default)]
    pub next_step: Option<String>,
    /// Marks the risk as implying electronic evidence for `when_cued` case types.
    #[serde(default)]
    pub digital_evidence: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationTemplate {
    /// Prepended for high and critical priority.
    #[serde(default)]
    pub high: Vec<String>,
    /// Prepended ahead of `high` for critical priority only.
    #[serde(default)]
    pub critical: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationTemplate {
    pub next_steps: Vec<String>,
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub digital_trails: Vec<String>,
    #[serde(default)]
    pub digital: DigitalDimension,
}

/// Whether a case type produces digital-evidence leads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitalDimension {
    Always,
    WhenCued,
    #[default]
    Never,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRules {
    #[serde(default)]
    pub suspect_triggers: Vec<String>,
    #[serde(default)]
    pub evidence_triggers: Vec<String>,
    /// Evidence kinds reported wherever they appear in the text.
    #[serde(default)]
    pub evidence_terms: Vec<String>,
    /// Capitalized words that never start a suspect name (pronouns, titles, generic nouns).
    #[serde(default)]
    pub ignored_names: Vec<String>,
}

/// Compact description of a rule set for status endpoints and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSetSummary {
    pub version: String,
    pub published_on: NaiveDate,
    pub case_types: Vec<CaseType>,
    pub risk_labels: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RuleSetError {
    #[error("failed to read rule set: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid rule set JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("rule set version must not be empty")]
    MissingVersion,
    #[error("case type {0} appears more than once")]
    DuplicateCaseType(CaseType),
    #[error("the unclassified case type is the fallback and cannot carry rules")]
    UnclassifiedRule,
    #[error("case type {0} has no trigger phrases")]
    NoTriggers(CaseType),
    #[error("{context} contains a blank phrase")]
    BlankPhrase { context: String },
    #[error("trigger '{phrase}' for {case_type} has zero weight")]
    ZeroWeight { case_type: CaseType, phrase: String },
    #[error("{context} has no next steps")]
    MissingNextSteps { context: String },
    #[error("risk rule #{index} has an empty label")]
    UnlabeledRisk { index: usize },
    #[error("risk rule '{0}' has no triggers")]
    RiskWithoutTriggers(String),
    #[error("could not compile extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl RuleSet {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RuleSetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RuleSetError> {
        let rules: RuleSet = serde_json::from_reader(reader)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn from_json_str(json: &str) -> Result<Self, RuleSetError> {
        Self::from_reader(json.as_bytes())
    }

    pub fn to_json_pretty(&self) -> Result<String, RuleSetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn rule_for(&self, case_type: CaseType) -> Option<&CaseTypeRule> {
        self.case_types
            .iter()
            .find(|rule| rule.case_type == case_type)
    }

    pub fn summary(&self) -> RuleSetSummary {
        RuleSetSummary {
            version: self.version.clone(),
            published_on: self.published_on,
            case_types: self.case_types.iter().map(|rule| rule.case_type).collect(),
            risk_labels: self.risks.iter().map(|risk| risk.label.clone()).collect(),
        }
    }

    /// Structural checks that keep the output invariants of the engine intact.
    pub fn validate(&self) -> Result<(), RuleSetError> {
        if self.version.trim().is_empty() {
            return Err(RuleSetError::MissingVersion);
        }

        let mut seen = HashSet::new();
        for rule in &self.case_types {
            let case_type = rule.case_type;
            if case_type == CaseType::Unclassified {
                return Err(RuleSetError::UnclassifiedRule);
            }
            if !seen.insert(case_type) {
                return Err(RuleSetError::DuplicateCaseType(case_type));
            }
            if rule.triggers.is_empty() {
                return Err(RuleSetError::NoTriggers(case_type));
            }
            for trigger in &rule.triggers {
                if trigger.weight == 0 {
                    return Err(RuleSetError::ZeroWeight {
                        case_type,
                        phrase: trigger.phrase.clone(),
                    });
                }
            }
            let context = format!("case type {case_type}");
            ensure_phrases(rule.triggers.iter().map(|t| t.phrase.as_str()), &context)?;
            ensure_phrases(rule.escalators.iter().map(String::as_str), &context)?;
            ensure_template(&rule.recommendations, &context)?;
        }

        ensure_template(&self.fallback, "fallback template")?;

        for (index, risk) in self.risks.iter().enumerate() {
            if risk.label.trim().is_empty() {
                return Err(RuleSetError::UnlabeledRisk { index });
            }
            if risk.triggers.is_empty() {
                return Err(RuleSetError::RiskWithoutTriggers(risk.label.clone()));
            }
            let context = format!("risk rule '{}'", risk.label);
            ensure_phrases(risk.triggers.iter().map(String::as_str), &context)?;
        }

        ensure_phrases(
            self.digital_cues.iter().map(String::as_str),
            "digital cue list",
        )?;
        ensure_phrases(
            self.extraction
                .suspect_triggers
                .iter()
                .chain(&self.extraction.evidence_triggers)
                .chain(&self.extraction.evidence_terms)
                .map(String::as_str),
            "extraction rules",
        )?;

        Ok(())
    }
}

fn ensure_phrases<'a>(
    phrases: impl IntoIterator<Item = &'a str>,
    context: &str,
) -> Result<(), RuleSetError> {
    if phrases
        .into_iter()
        .any(|phrase| Phrase::compile(phrase).is_none())
    {
        return Err(RuleSetError::BlankPhrase {
            context: context.to_string(),
        });
    }
    Ok(())
}

fn ensure_template(template: &RecommendationTemplate, context: &str) -> Result<(), RuleSetError> {
    if template
        .next_steps
        .iter()
        .all(|step| step.trim().is_empty())
    {
        return Err(RuleSetError::MissingNextSteps {
            context: context.to_string(),
        });
    }
    Ok(())
}

/// Compile a list of validated phrases, skipping any that normalize to nothing.
pub(crate) fn compile_phrases<'a>(phrases: impl IntoIterator<Item = &'a String>) -> Vec<Phrase> {
    phrases
        .into_iter()
        .filter_map(|phrase| Phrase::compile(phrase))
        .collect()
}
