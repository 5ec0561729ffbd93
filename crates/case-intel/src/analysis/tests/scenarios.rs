use super::common::*;
use crate::analysis::domain::{CaseType, PriorityLevel};
use crate::analysis::{CaseAnalysisEngine, RuleSetError};

#[test]
fn burglary_report_is_classified_as_theft() {
    let analysis = engine().analyze_case(THEFT_REPORT);

    assert_eq!(analysis.case_type(), CaseType::Theft);
    assert_eq!(analysis.priority(), PriorityLevel::Medium);
    assert!(analysis.risk_factors().is_empty());
    assert_eq!(
        analysis.next_steps().first().map(String::as_str),
        Some("Compile a list of stolen property with serial numbers")
    );
    assert!(!analysis.questions().is_empty());
    assert!(analysis.digital_trails().is_empty());
}

#[test]
fn ransomware_with_violent_threat_is_critical_cybercrime() {
    let analysis = engine().analyze_case(RANSOMWARE_REPORT);

    assert_eq!(analysis.case_type(), CaseType::Cybercrime);
    assert_eq!(analysis.priority(), PriorityLevel::Critical);
    assert_eq!(analysis.risk_factors(), ["Threat of violence"]);
    assert_eq!(
        analysis.next_steps().first().map(String::as_str),
        Some("Dispatch units immediately and request backup if required")
    );
    assert!(analysis
        .next_steps()
        .iter()
        .any(|step| step == "Isolate affected systems from the network"));
    assert!(!analysis.digital_trails().is_empty());
}

#[test]
fn empty_and_blank_reports_fall_back_to_generic_guidance() {
    let engine = engine();
    for text in ["", "   \n\t  ", "?!..."] {
        let analysis = engine.analyze_case(text);

        assert_eq!(analysis.case_type(), CaseType::Unclassified, "input {text:?}");
        assert_eq!(analysis.priority(), PriorityLevel::Low);
        assert!(analysis.risk_factors().is_empty());
        assert_eq!(analysis.next_steps().len(), 3);
        assert!(analysis.questions().is_empty());
        assert!(analysis.digital_trails().is_empty());
        assert!(analysis.suspects().is_empty());
        assert!(analysis.evidence().is_empty());
    }
}

#[test]
fn equal_scores_resolve_to_the_more_severe_case_type() {
    let analysis = engine().analyze_case("He punched me and then hacked my email");

    assert_eq!(analysis.case_type(), CaseType::Assault);
    assert_eq!(analysis.priority(), PriorityLevel::High);
}

#[test]
fn weapon_risk_lifts_priority_and_prepends_escalation_steps() {
    let analysis = engine().analyze_case("My bike was stolen by a man with a knife");

    assert_eq!(analysis.case_type(), CaseType::Theft);
    assert_eq!(analysis.priority(), PriorityLevel::High);
    assert_eq!(analysis.risk_factors(), ["Weapon involved"]);
    assert_eq!(
        &analysis.next_steps()[..3],
        [
            "Notify the shift supervisor of the escalated priority",
            "Secure the scene and preserve evidence immediately",
            "Advise responding units that a weapon may be present",
        ]
    );
}

#[test]
fn minor_involvement_forces_critical_priority() {
    let analysis = engine().analyze_case("A stranger stole a phone from a child at the park");

    assert_eq!(analysis.case_type(), CaseType::Theft);
    assert_eq!(analysis.priority(), PriorityLevel::Critical);
    assert!(analysis
        .risk_factors()
        .iter()
        .any(|risk| risk == "Minor involved"));
}

#[test]
fn minor_as_an_adjective_is_not_a_child() {
    let engine = engine();

    let injury = engine
        .analyze_case("The cashier sustained a minor injury when the shoplifter pushed past");
    assert_eq!(injury.case_type(), CaseType::Theft);
    assert_eq!(injury.priority(), PriorityLevel::High);
    assert_eq!(injury.risk_factors(), ["Physical injury reported"]);

    let fender_bender =
        engine.analyze_case("I had a minor fender bender and then someone stole my wallet");
    assert_eq!(fender_bender.case_type(), CaseType::Theft);
    assert_eq!(fender_bender.priority(), PriorityLevel::Medium);
    assert!(fender_bender.risk_factors().is_empty());

    let victim = engine.analyze_case("The victim is a minor and her phone was stolen");
    assert_eq!(victim.priority(), PriorityLevel::Critical);
    assert_eq!(victim.risk_factors(), ["Minor involved"]);
}

#[test]
fn risk_factors_follow_table_order() {
    let analysis = engine().analyze_case(
        "My ex boyfriend attacked me with a knife and fled, I was taken to hospital",
    );

    assert_eq!(analysis.case_type(), CaseType::Assault);
    assert_eq!(
        analysis.risk_factors(),
        [
            "Weapon involved",
            "Physical injury reported",
            "Domestic relationship",
            "Suspect at large",
        ]
    );
}

#[test]
fn digital_cue_unlocks_harassment_trails() {
    let analysis =
        engine().analyze_case("My ex keeps sending threatening messages on Instagram");

    assert_eq!(analysis.case_type(), CaseType::Harassment);
    assert_eq!(analysis.priority(), PriorityLevel::High);
    assert!(!analysis.digital_trails().is_empty());

    let offline = engine().analyze_case("A neighbour keeps following me home from work");
    assert_eq!(offline.case_type(), CaseType::Harassment);
    assert!(offline.digital_trails().is_empty());
}

#[test]
fn digital_risk_unlocks_fraud_trails_without_cue_words() {
    let analysis = engine().analyze_case("I was scammed and they leaked my bank details");

    assert_eq!(analysis.case_type(), CaseType::Fraud);
    assert_eq!(analysis.risk_factors(), ["Sensitive data exposure"]);
    assert_eq!(analysis.priority(), PriorityLevel::High);
    assert_eq!(
        analysis.digital_trails().first().map(String::as_str),
        Some("Bank and card transaction records")
    );
}

#[test]
fn suspects_and_evidence_are_extracted_from_original_casing() {
    let analysis = engine().analyze_case(
        "The suspect is Dana Reyes. Officers recovered a black backpack and CCTV footage near the lot.",
    );

    assert_eq!(analysis.suspects(), ["Dana Reyes"]);
    assert_eq!(analysis.evidence(), ["black backpack", "CCTV footage"]);
}

#[test]
fn new_case_types_do_not_disturb_existing_classifications() {
    let mut without_vandalism = minimal_rules();
    without_vandalism.case_types.truncate(1);

    let full = CaseAnalysisEngine::new(minimal_rules()).expect("rules compile");
    let reduced = CaseAnalysisEngine::new(without_vandalism).expect("rules compile");

    let text = "my bicycle was stolen from the shed";
    assert_eq!(full.analyze_case(text), reduced.analyze_case(text));
    assert_eq!(
        full.analyze_case("graffiti on the garage door").case_type(),
        CaseType::Vandalism
    );
}

#[test]
fn custom_tables_drive_recommendations() {
    let engine = CaseAnalysisEngine::new(minimal_rules()).expect("rules compile");

    let analysis = engine.analyze_case("my bicycle was stolen by someone with a knife");

    assert_eq!(analysis.priority(), PriorityLevel::High);
    assert_eq!(
        analysis.next_steps(),
        [
            "Notify the supervisor",
            "Warn responding units",
            "Log the stolen property",
        ]
    );
    assert_eq!(analysis.questions(), ["What happened?"]);
}

#[test]
fn engine_rejects_duplicate_case_types() {
    let mut rules = minimal_rules();
    let duplicate = rules.case_types[0].clone();
    rules.case_types.push(duplicate);

    match CaseAnalysisEngine::new(rules) {
        Err(RuleSetError::DuplicateCaseType(CaseType::Theft)) => {}
        Err(other) => panic!("expected duplicate case type error, got {other:?}"),
        Ok(_) => panic!("expected duplicate case type error"),
    }
}
