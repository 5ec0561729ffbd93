use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::analysis::domain::{CaseType, PriorityLevel};
use crate::analysis::rules::{
    CaseTypeRule, DigitalDimension, EscalationTemplate, ExtractionRules, RecommendationTemplate,
    RiskRule, RuleSet, TriggerPhrase,
};
use crate::analysis::CaseAnalysisEngine;

pub(super) const THEFT_REPORT: &str =
    "Someone broke into my house through the back window and stole my laptop and TV";

pub(super) const RANSOMWARE_REPORT: &str = "I received a phishing email and then ransomware locked all our files, and the attacker threatened our staff with violence";

pub(super) fn engine() -> CaseAnalysisEngine {
    CaseAnalysisEngine::standard().expect("built-in rules compile")
}

pub(super) fn shared_engine() -> Arc<CaseAnalysisEngine> {
    Arc::new(engine())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn template(steps: &[&str]) -> RecommendationTemplate {
    RecommendationTemplate {
        next_steps: strings(steps),
        questions: strings(&["What happened?"]),
        digital_trails: Vec::new(),
        digital: DigitalDimension::Never,
    }
}

/// A two-entry table used to check that new case types plug in without touching others.
pub(super) fn minimal_rules() -> RuleSet {
    RuleSet {
        version: "test-1".to_string(),
        published_on: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        case_types: vec![
            CaseTypeRule {
                case_type: CaseType::Theft,
                base_priority: PriorityLevel::Medium,
                triggers: vec![TriggerPhrase::new("stolen")],
                escalators: Vec::new(),
                recommendations: template(&["Log the stolen property"]),
            },
            CaseTypeRule {
                case_type: CaseType::Vandalism,
                base_priority: PriorityLevel::Low,
                triggers: vec![TriggerPhrase::new("graffiti")],
                escalators: Vec::new(),
                recommendations: template(&["Photograph the damage"]),
            },
        ],
        risks: vec![RiskRule {
            label: "Weapon involved".to_string(),
            triggers: strings(&["knife"]),
            floor: PriorityLevel::High,
            next_step: Some("Warn responding units".to_string()),
            digital_evidence: false,
        }],
        escalation: EscalationTemplate {
            high: strings(&["Notify the supervisor"]),
            critical: Vec::new(),
        },
        fallback: template(&["Gather more information"]),
        digital_cues: Vec::new(),
        extraction: ExtractionRules::default(),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
