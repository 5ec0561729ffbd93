use crate::infra::cli_engine;
use crate::report::render_analysis;
use case_intel::error::AppError;
use chrono::Local;
use clap::Args;

const SAMPLE_REPORTS: &[(&str, &str)] = &[
    (
        "DEMO-1",
        "Someone broke into my house through the back window and stole my laptop and TV",
    ),
    (
        "DEMO-2",
        "I received a phishing email and then ransomware locked all our files, and the attacker threatened our staff with violence",
    ),
    (
        "DEMO-3",
        "My ex keeps sending threatening messages on Instagram and says he knows where I live",
    ),
    (
        "DEMO-4",
        "An elderly neighbour was tricked into buying gift cards by a caller named Frank Moss",
    ),
    (
        "DEMO-5",
        "A man punched the cashier and ran off. Officers recovered a baseball cap and CCTV footage near the exit.",
    ),
    ("DEMO-6", ""),
];

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Maximum entries shown per list
    #[arg(long, default_value_t = 3)]
    pub(crate) limit: usize,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = cli_engine()?;

    println!(
        "Case analysis demo (rules {}, {})",
        engine.version(),
        Local::now().format("%Y-%m-%d %H:%M")
    );
    for (case_id, report) in SAMPLE_REPORTS {
        println!();
        if report.is_empty() {
            println!("Report: <empty>");
        } else {
            println!("Report: {report}");
        }
        let analysis = engine.analyze_case(report);
        render_analysis(Some(*case_id), &analysis, args.limit);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_intel::{CaseAnalysisEngine, CaseType};

    #[test]
    fn sample_reports_cover_distinct_case_types() {
        let engine = CaseAnalysisEngine::standard().expect("built-in rules compile");
        let types: Vec<CaseType> = SAMPLE_REPORTS
            .iter()
            .map(|(_, report)| engine.analyze_case(report).case_type())
            .collect();

        assert_eq!(
            types,
            [
                CaseType::Theft,
                CaseType::Cybercrime,
                CaseType::Harassment,
                CaseType::Fraud,
                CaseType::Assault,
                CaseType::Unclassified,
            ]
        );
    }
}
