use crate::infra::cli_engine;
use case_intel::analysis::{BatchOutcome, DisplayList, IntakeBatch, RuleSet};
use case_intel::error::AppError;
use case_intel::{CaseAnalysis, CaseAnalysisEngine};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

const DEFAULT_DISPLAY_LIMIT: usize = 5;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Incident report text. Reads stdin when neither TEXT nor --file is given.
    #[arg(conflicts_with = "file")]
    pub(crate) text: Option<String>,
    /// Read the report from a file
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Print the full analysis as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Maximum entries shown per list in text output
    #[arg(long, default_value_t = DEFAULT_DISPLAY_LIMIT)]
    pub(crate) limit: usize,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Intake CSV export with `Case ID` and `Report` columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print the results as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RulesArgs {
    /// Print the complete rule table as JSON instead of a summary
    #[arg(long)]
    pub(crate) export: bool,
}

#[derive(Debug, Serialize)]
struct BatchReport<'a> {
    rule_set_version: &'a str,
    generated_at: DateTime<Utc>,
    results: &'a [BatchOutcome],
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        text,
        file,
        json,
        limit,
    } = args;

    let engine = cli_engine()?;
    let report = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let analysis = engine.analyze_case(&report);
    if json {
        print_json(&analysis)?;
    } else {
        render_analysis(None, &analysis, limit);
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let engine = cli_engine()?;
    let records = IntakeBatch::from_path(&args.csv)?;
    let outcomes = engine.analyze_batch(&records);

    if args.json {
        return print_json(&BatchReport {
            rule_set_version: engine.version(),
            generated_at: Utc::now(),
            results: &outcomes,
        });
    }

    println!(
        "Analyzed {} reports from {} (rules {})",
        outcomes.len(),
        args.csv.display(),
        engine.version()
    );
    for outcome in &outcomes {
        println!("- {}: {}", outcome.case_id, outcome.analysis.summary());
    }
    Ok(())
}

pub(crate) fn run_rules(args: RulesArgs) -> Result<(), AppError> {
    let engine = cli_engine()?;
    if args.export {
        println!("{}", engine.rules().to_json_pretty()?);
        return Ok(());
    }

    render_rules(&engine);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{json}");
    Ok(())
}

pub(crate) fn render_analysis(case_id: Option<&str>, analysis: &CaseAnalysis, limit: usize) {
    let view = analysis.display(limit);
    match case_id {
        Some(case_id) => println!("[{case_id}] {}", view.summary),
        None => println!("{}", view.summary),
    }

    render_list("Risk factors", &view.risk_factors);
    render_list("Next steps", &view.next_steps);
    render_list("Questions", &view.questions);
    render_list("Digital trails", &view.digital_trails);
    render_list("Possible suspects", &view.suspects);
    render_list("Possible evidence", &view.evidence);
}

fn render_list(title: &str, list: &DisplayList) {
    if list.entries.is_empty() {
        println!("{title}: none");
        return;
    }

    println!("{title}:");
    for entry in &list.entries {
        println!("  - {entry}");
    }
    if list.hidden > 0 {
        println!("  (+{} more)", list.hidden);
    }
}

fn render_rules(engine: &CaseAnalysisEngine) {
    let rules: &RuleSet = engine.rules();
    let summary = rules.summary();
    println!(
        "Rule set {} (published {})",
        summary.version, summary.published_on
    );

    println!("Case types in tie-break order:");
    for rule in &rules.case_types {
        println!(
            "  - {} (base {}, {} triggers, {} escalators)",
            rule.case_type,
            rule.base_priority,
            rule.triggers.len(),
            rule.escalators.len()
        );
    }

    println!("Risk factors:");
    for risk in &rules.risks {
        println!("  - {} (at least {})", risk.label, risk.floor);
    }
}
