use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::CaseAnalysis;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read intake file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid intake CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// One report queued for analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub case_id: String,
    pub report: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub case_id: String,
    pub analysis: CaseAnalysis,
}

#[derive(Debug, Deserialize)]
struct IntakeRow {
    #[serde(rename = "Case ID", default, deserialize_with = "empty_string_as_none")]
    case_id: Option<String>,
    #[serde(rename = "Report", default)]
    report: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Reader for CSV intake exports with `Case ID` and `Report` columns.
pub struct IntakeBatch;

impl IntakeBatch {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<IntakeRecord>, BatchError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<IntakeRecord>, BatchError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<IntakeRow>().enumerate() {
            let row = row?;
            let case_id = match row.case_id {
                Some(case_id) => case_id,
                None => {
                    let generated = format!("row-{}", index + 1);
                    warn!(case_id = %generated, "intake row missing case id");
                    generated
                }
            };
            records.push(IntakeRecord {
                case_id,
                report: row.report,
            });
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_rows_in_order_and_trims_fields() {
        let csv = "Case ID,Report\n  C-1 , Stolen bike from the rack \nC-2,\"Phishing email, then malware\"\n";
        let records = IntakeBatch::from_reader(Cursor::new(csv)).expect("csv parses");

        assert_eq!(
            records,
            vec![
                IntakeRecord {
                    case_id: "C-1".to_string(),
                    report: "Stolen bike from the rack".to_string(),
                },
                IntakeRecord {
                    case_id: "C-2".to_string(),
                    report: "Phishing email, then malware".to_string(),
                },
            ]
        );
    }

    #[test]
    fn generates_ids_for_rows_without_one() {
        let csv = "Case ID,Report\n,Graffiti on the wall\n";
        let records = IntakeBatch::from_reader(Cursor::new(csv)).expect("csv parses");
        assert_eq!(records[0].case_id, "row-1");
    }

    #[test]
    fn rejects_ragged_rows() {
        let csv = "Case ID,Report\nC-1,one,extra\n";
        match IntakeBatch::from_reader(Cursor::new(csv)) {
            Err(BatchError::Csv(_)) => {}
            other => panic!("expected csv error, got {other:?}"),
        }
    }

    #[test]
    fn from_path_propagates_io_errors() {
        match IntakeBatch::from_path("./does-not-exist.csv") {
            Err(BatchError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
