use serde::{Deserialize, Serialize};

/// Closed set of incident categories the engine can assign.
///
/// A variant only takes part in classification when the active rule set carries an entry for
/// it. `Unclassified` is the fallback and never has an entry of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseType {
    Assault,
    Cybercrime,
    Theft,
    Fraud,
    Harassment,
    Vandalism,
    Unclassified,
}

impl CaseType {
    pub fn label(&self) -> &'static str {
        match self {
            CaseType::Assault => "Assault",
            CaseType::Cybercrime => "Cybercrime",
            CaseType::Theft => "Theft",
            CaseType::Fraud => "Fraud",
            CaseType::Harassment => "Harassment",
            CaseType::Vandalism => "Vandalism",
            CaseType::Unclassified => "Unclassified",
        }
    }
}

impl std::fmt::Display for CaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Urgency rating with a total order: low < medium < high < critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl PriorityLevel {
    /// Raise by one level, saturating at `Critical`.
    pub fn escalate(self) -> Self {
        match self {
            PriorityLevel::Low => PriorityLevel::Medium,
            PriorityLevel::Medium => PriorityLevel::High,
            PriorityLevel::High | PriorityLevel::Critical => PriorityLevel::Critical,
        }
    }

    pub fn is_escalated(self) -> bool {
        self >= PriorityLevel::High
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriorityLevel::Low => "low",
            PriorityLevel::Medium => "medium",
            PriorityLevel::High => "high",
            PriorityLevel::Critical => "critical",
        }
    }
}

impl std::fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured result of analyzing one incident report.
///
/// Every list is always present; an empty list means the engine looked and found nothing.
/// Fields are private so a produced analysis cannot be altered by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseAnalysis {
    case_type: CaseType,
    priority: PriorityLevel,
    risk_factors: Vec<String>,
    next_steps: Vec<String>,
    questions: Vec<String>,
    digital_trails: Vec<String>,
    suspects: Vec<String>,
    evidence: Vec<String>,
}

pub(crate) struct CaseAnalysisParts {
    pub case_type: CaseType,
    pub priority: PriorityLevel,
    pub risk_factors: Vec<String>,
    pub next_steps: Vec<String>,
    pub questions: Vec<String>,
    pub digital_trails: Vec<String>,
    pub suspects: Vec<String>,
    pub evidence: Vec<String>,
}

impl CaseAnalysis {
    pub(crate) fn from_parts(parts: CaseAnalysisParts) -> Self {
        Self {
            case_type: parts.case_type,
            priority: parts.priority,
            risk_factors: parts.risk_factors,
            next_steps: parts.next_steps,
            questions: parts.questions,
            digital_trails: parts.digital_trails,
            suspects: parts.suspects,
            evidence: parts.evidence,
        }
    }

    pub fn case_type(&self) -> CaseType {
        self.case_type
    }

    pub fn priority(&self) -> PriorityLevel {
        self.priority
    }

    pub fn risk_factors(&self) -> &[String] {
        &self.risk_factors
    }

    pub fn next_steps(&self) -> &[String] {
        &self.next_steps
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn digital_trails(&self) -> &[String] {
        &self.digital_trails
    }

    pub fn suspects(&self) -> &[String] {
        &self.suspects
    }

    pub fn evidence(&self) -> &[String] {
        &self.evidence
    }

    /// One-line headline used by toast notifications and CLI output.
    pub fn summary(&self) -> String {
        let risks = match self.risk_factors.len() {
            0 => "no risk factors".to_string(),
            1 => "1 risk factor".to_string(),
            count => format!("{count} risk factors"),
        };
        format!("{} ({} priority), {}", self.case_type, self.priority, risks)
    }

    /// Truncated view for display surfaces that only have room for a few entries per list.
    pub fn display(&self, limit: usize) -> DisplayView {
        DisplayView {
            case_type: self.case_type,
            priority: self.priority,
            summary: self.summary(),
            risk_factors: DisplayList::truncate(&self.risk_factors, limit),
            next_steps: DisplayList::truncate(&self.next_steps, limit),
            questions: DisplayList::truncate(&self.questions, limit),
            digital_trails: DisplayList::truncate(&self.digital_trails, limit),
            suspects: DisplayList::truncate(&self.suspects, limit),
            evidence: DisplayList::truncate(&self.evidence, limit),
        }
    }
}

/// Caller-side presentation of an analysis with every list capped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayView {
    pub case_type: CaseType,
    pub priority: PriorityLevel,
    pub summary: String,
    pub risk_factors: DisplayList,
    pub next_steps: DisplayList,
    pub questions: DisplayList,
    pub digital_trails: DisplayList,
    pub suspects: DisplayList,
    pub evidence: DisplayList,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayList {
    pub entries: Vec<String>,
    pub hidden: usize,
}

impl DisplayList {
    fn truncate(items: &[String], limit: usize) -> Self {
        let shown = items.len().min(limit);
        Self {
            entries: items[..shown].to_vec(),
            hidden: items.len() - shown,
        }
    }
}
