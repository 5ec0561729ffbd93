use chrono::NaiveDate;

use super::{
    CaseTypeRule, DigitalDimension, EscalationTemplate, ExtractionRules, RecommendationTemplate,
    RiskRule, RuleSet, TriggerPhrase,
};
use crate::analysis::domain::{CaseType, PriorityLevel};

const STANDARD_VERSION: &str = "2024.1";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn triggers(items: &[(&str, u32)]) -> Vec<TriggerPhrase> {
    items
        .iter()
        .map(|(phrase, weight)| TriggerPhrase::weighted(*phrase, *weight))
        .collect()
}

fn risk(label: &str, floor: PriorityLevel, triggers: &[&str], next_step: &str) -> RiskRule {
    RiskRule {
        label: label.to_string(),
        triggers: strings(triggers),
        floor,
        next_step: Some(next_step.to_string()),
        digital_evidence: false,
    }
}

impl RuleSet {
    /// Built-in rule table shipped with the engine.
    pub fn standard() -> Self {
        RuleSet {
            version: STANDARD_VERSION.to_string(),
            published_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default(),
            case_types: vec![assault(), cybercrime(), theft(), fraud(), harassment(), vandalism()],
            risks: risks(),
            escalation: EscalationTemplate {
                high: strings(&[
                    "Notify the shift supervisor of the escalated priority",
                    "Secure the scene and preserve evidence immediately",
                ]),
                critical: strings(&["Dispatch units immediately and request backup if required"]),
            },
            fallback: RecommendationTemplate {
                next_steps: strings(&[
                    "Gather more information from the reporting officer",
                    "Record the reporting party's contact details",
                    "Log the report for supervisor review",
                ]),
                questions: Vec::new(),
                digital_trails: Vec::new(),
                digital: DigitalDimension::Never,
            },
            digital_cues: strings(&[
                "card",
                "cards",
                "online",
                "account",
                "accounts",
                "email",
                "e-mail",
                "website",
                "app",
                "bank transfer",
                "wire transfer",
                "password",
                "social media",
                "text message*",
                "login",
                "paypal",
                "venmo",
                "crypto*",
                "bitcoin",
                "internet",
                "instagram",
                "facebook",
                "whatsapp",
            ]),
            extraction: ExtractionRules {
                suspect_triggers: strings(&[
                    "named",
                    "known as",
                    "identified as",
                    "suspect is",
                    "suspect",
                    "called",
                    "alias",
                    "goes by",
                    "by the name of",
                ]),
                evidence_triggers: strings(&[
                    "found",
                    "recovered",
                    "left behind",
                    "seized",
                    "collected",
                    "dropped",
                    "discovered",
                ]),
                evidence_terms: strings(&[
                    "cctv",
                    "security footage",
                    "camera footage",
                    "doorbell footage",
                    "dashcam footage",
                    "surveillance video",
                    "fingerprints",
                    "dna",
                    "shell casings",
                    "receipt",
                    "screenshots",
                ]),
                ignored_names: strings(&[
                    "He", "She", "They", "It", "I", "We", "You", "The", "A", "An", "His", "Her",
                    "Him", "Their", "This", "That", "My", "Our", "Unknown", "Someone", "Police",
                    "Officer",
                ]),
            },
        }
    }
}

fn assault() -> CaseTypeRule {
    CaseTypeRule {
        case_type: CaseType::Assault,
        base_priority: PriorityLevel::High,
        triggers: triggers(&[
            ("assault*", 2),
            ("stabbed", 2),
            ("strangled", 2),
            ("shot at", 2),
            ("attacked", 1),
            ("punched", 1),
            ("beaten", 1),
            ("beat up", 1),
            ("hit me", 1),
            ("kicked", 1),
            ("choked", 1),
            ("slapped", 1),
            ("shoved", 1),
            ("injured", 1),
            ("fight", 1),
        ]),
        escalators: strings(&["weapon*", "knife", "gun", "child", "unconscious", "ongoing"]),
        recommendations: RecommendationTemplate {
            next_steps: strings(&[
                "Ensure victims receive medical attention",
                "Photograph visible injuries with the victim's consent",
                "Identify and interview witnesses",
                "Collect CCTV footage from the surrounding area",
                "Obtain a detailed suspect description",
            ]),
            questions: strings(&[
                "Can you describe the person who assaulted you?",
                "Where exactly did the assault take place and at what time?",
                "Were there any witnesses present?",
                "Did the suspect use or display any weapon?",
                "Do you know the suspect or have you seen them before?",
            ]),
            digital_trails: Vec::new(),
            digital: DigitalDimension::Never,
        },
    }
}

fn cybercrime() -> CaseTypeRule {
    CaseTypeRule {
        case_type: CaseType::Cybercrime,
        base_priority: PriorityLevel::Medium,
        triggers: triggers(&[
            ("phishing", 2),
            ("ransomware", 2),
            ("malware", 2),
            ("data breach", 2),
            ("ddos", 2),
            ("unauthorized access", 2),
            ("sextortion", 2),
            ("cyberattack*", 2),
            ("cyber attack*", 2),
            ("hack*", 1),
            ("spyware", 1),
            ("keylogger", 1),
            ("virus", 1),
            ("compromised", 1),
            ("encrypted our files", 1),
        ]),
        escalators: strings(&["ransomware", "critical infrastructure", "hospital", "ongoing", "child"]),
        recommendations: RecommendationTemplate {
            next_steps: strings(&[
                "Isolate affected systems from the network",
                "Preserve system logs and suspicious emails",
                "Capture screenshots of ransom notes or messages",
                "Refer the case to the cybercrime unit",
            ]),
            questions: strings(&[
                "When did you first notice the incident?",
                "Which systems, accounts or files were affected?",
                "Did you click any links or open attachments beforehand?",
                "Has any payment or ransom been requested or made?",
                "Who else had access to the affected accounts?",
            ]),
            digital_trails: strings(&[
                "Email headers and originating IP addresses",
                "Server and firewall access logs",
                "Cryptocurrency wallet addresses named in ransom demands",
                "Login history for compromised accounts",
            ]),
            digital: DigitalDimension::Always,
        },
    }
}

fn theft() -> CaseTypeRule {
    CaseTypeRule {
        case_type: CaseType::Theft,
        base_priority: PriorityLevel::Medium,
        triggers: triggers(&[
            ("burglar*", 2),
            ("broke into", 2),
            ("break in", 2),
            ("robbed", 2),
            ("robbery", 2),
            ("shoplift*", 2),
            ("pickpocket*", 2),
            ("mugged", 2),
            ("carjack*", 2),
            ("stole", 1),
            ("stolen", 1),
            ("steal*", 1),
            ("theft", 1),
            ("snatched", 1),
            ("taken from", 1),
        ]),
        escalators: strings(&[
            "armed",
            "weapon*",
            "at gunpoint",
            "while we were home",
            "still inside",
            "ongoing",
        ]),
        recommendations: RecommendationTemplate {
            next_steps: strings(&[
                "Compile a list of stolen property with serial numbers",
                "Photograph the point of entry",
                "Canvass neighbors for witnesses and doorbell footage",
                "Dust the point of entry for fingerprints",
            ]),
            questions: strings(&[
                "What items were taken and what is their estimated value?",
                "When was the property last seen?",
                "How did the offender gain entry?",
                "Do any of the items have serial numbers or tracking features?",
                "Did anyone see or hear anything unusual?",
            ]),
            digital_trails: strings(&[
                "Transaction history for any stolen bank or credit cards",
                "Online marketplace listings matching the stolen items",
                "Location history from device tracking services",
                "Account login activity following the theft",
            ]),
            digital: DigitalDimension::WhenCued,
        },
    }
}

fn fraud() -> CaseTypeRule {
    CaseTypeRule {
        case_type: CaseType::Fraud,
        base_priority: PriorityLevel::Medium,
        triggers: triggers(&[
            ("scam*", 2),
            ("fraud*", 2),
            ("identity theft", 2),
            ("con artist", 2),
            ("ponzi", 2),
            ("swindled", 2),
            ("embezzl*", 2),
            ("unauthorized charge*", 2),
            ("unauthorized transaction*", 2),
            ("counterfeit", 1),
            ("forged", 1),
            ("forgery", 1),
            ("fake invoice*", 1),
            ("impersonat*", 1),
            ("tricked", 1),
            ("gift cards", 1),
        ]),
        escalators: strings(&["life savings", "elderly", "pension"]),
        recommendations: RecommendationTemplate {
            next_steps: strings(&[
                "Collect all correspondence with the suspected fraudster",
                "Advise the victim to contact their bank and freeze affected accounts",
                "Document the timeline of payments and losses",
                "Refer the case to the financial crimes unit",
            ]),
            questions: strings(&[
                "How did the suspect first contact you?",
                "How much money was lost and by what payment method?",
                "Did you share any personal or banking details?",
                "Do you still have the messages, invoices or receipts?",
            ]),
            digital_trails: strings(&[
                "Bank and card transaction records",
                "Payment processor and wire transfer references",
                "Email and phone records of the suspect's contact",
                "Website registration details used in the scheme",
            ]),
            digital: DigitalDimension::WhenCued,
        },
    }
}

fn harassment() -> CaseTypeRule {
    CaseTypeRule {
        case_type: CaseType::Harassment,
        base_priority: PriorityLevel::Medium,
        triggers: triggers(&[
            ("harass*", 2),
            ("stalk*", 2),
            ("threatening messages", 2),
            ("following me", 1),
            ("followed me", 1),
            ("unwanted messages", 1),
            ("keeps calling", 1),
            ("repeated calls", 1),
            ("bully*", 1),
            ("intimidat*", 1),
            ("restraining order", 1),
        ]),
        escalators: strings(&["stalk*", "knows where i live", "outside my house", "child"]),
        recommendations: RecommendationTemplate {
            next_steps: strings(&[
                "Record a timeline of each harassment incident",
                "Advise the victim on preserving messages and call logs",
                "Assess eligibility for a protective or restraining order",
                "Identify the suspect's relationship to the victim",
            ]),
            questions: strings(&[
                "How long has the harassment been going on?",
                "How does the person contact or approach you?",
                "Do you know the identity of the person?",
                "Have you felt threatened for your physical safety?",
            ]),
            digital_trails: strings(&[
                "Screenshots and exports of harassing messages",
                "Social media account identifiers used by the suspect",
                "Phone carrier call and text logs",
            ]),
            digital: DigitalDimension::WhenCued,
        },
    }
}

fn vandalism() -> CaseTypeRule {
    CaseTypeRule {
        case_type: CaseType::Vandalism,
        base_priority: PriorityLevel::Low,
        triggers: triggers(&[
            ("vandal*", 2),
            ("graffiti", 2),
            ("spray painted", 2),
            ("keyed my car", 2),
            ("arson", 2),
            ("set fire", 2),
            ("smashed", 1),
            ("slashed", 1),
            ("damaged", 1),
            ("destroyed", 1),
        ]),
        escalators: strings(&["arson", "set fire", "hate symbol*", "ongoing"]),
        recommendations: RecommendationTemplate {
            next_steps: strings(&[
                "Photograph all damage before any repair",
                "Estimate the cost of the damage",
                "Check nearby cameras for footage of the incident",
                "Canvass the area for witnesses",
            ]),
            questions: strings(&[
                "When was the damage discovered?",
                "What property was damaged and how?",
                "Has this location been targeted before?",
                "Was anything written or drawn that might identify the offender?",
            ]),
            digital_trails: Vec::new(),
            digital: DigitalDimension::Never,
        },
    }
}

fn risks() -> Vec<RiskRule> {
    vec![
        risk(
            "Weapon involved",
            PriorityLevel::High,
            &[
                "weapon*",
                "gun",
                "guns",
                "firearm*",
                "pistol",
                "rifle",
                "shotgun",
                "knife",
                "knives",
                "machete",
                "blade",
                "armed",
                "at gunpoint",
            ],
            "Advise responding units that a weapon may be present",
        ),
        risk(
            "Minor involved",
            PriorityLevel::Critical,
            &[
                "child",
                "children",
                "kid",
                "kids",
                "juvenile",
                "toddler",
                "infant",
                "baby",
                "teenager",
                "minors",
                "minor child",
                "minor victim",
                "a minor was",
                "victim is a minor",
            ],
            "Notify the child protection liaison",
        ),
        risk(
            "Threat of violence",
            PriorityLevel::Critical,
            &[
                "violence",
                "violent",
                "threatened to kill",
                "threatened to hurt",
                "threatened to shoot",
                "threatened to stab",
                "death threat*",
                "kill me",
                "kill you",
                "kill us",
                "bomb threat",
            ],
            "Assess threat credibility and arrange protection for those threatened",
        ),
        risk(
            "Physical injury reported",
            PriorityLevel::High,
            &[
                "injured",
                "injury",
                "injuries",
                "bleeding",
                "unconscious",
                "broken bone*",
                "broken arm",
                "broken nose",
                "hospitalized",
                "taken to hospital",
                "ambulance",
                "wound*",
                "concussion",
            ],
            "Confirm medical attention for injured parties and document injuries",
        ),
        risk(
            "Incident in progress",
            PriorityLevel::High,
            &[
                "ongoing",
                "in progress",
                "still here",
                "still inside",
                "still in the house",
                "right now",
                "happening now",
            ],
            "Dispatch the nearest available unit to the location",
        ),
        risk(
            "Vulnerable victim",
            PriorityLevel::High,
            &[
                "elderly",
                "senior citizen",
                "disabled",
                "disability",
                "pregnant",
                "dementia",
                "wheelchair",
                "vulnerable",
            ],
            "Arrange victim support services for the vulnerable party",
        ),
        risk(
            "Domestic relationship",
            PriorityLevel::High,
            &[
                "domestic",
                "my husband",
                "my wife",
                "my boyfriend",
                "my girlfriend",
                "my partner",
                "my ex",
                "ex husband",
                "ex wife",
                "ex boyfriend",
                "ex girlfriend",
            ],
            "Complete a domestic abuse risk assessment",
        ),
        RiskRule {
            label: "Sensitive data exposure".to_string(),
            triggers: strings(&[
                "personal data",
                "customer data",
                "data breach",
                "password",
                "passwords",
                "bank details",
                "social security",
                "credit card numbers",
                "medical records",
                "leaked",
            ]),
            floor: PriorityLevel::High,
            next_step: Some(
                "Advise affected parties to reset credentials and alert their bank".to_string(),
            ),
            digital_evidence: true,
        },
        risk(
            "Repeat offender",
            PriorityLevel::Medium,
            &[
                "again",
                "repeat offender",
                "second time",
                "third time",
                "keeps coming back",
                "not the first time",
                "has done this before",
                "previous incident*",
            ],
            "Check records for prior incidents involving the same suspect or location",
        ),
        risk(
            "Suspect at large",
            PriorityLevel::Medium,
            &[
                "fled",
                "ran away",
                "ran off",
                "escaped",
                "got away",
                "at large",
                "drove off",
                "took off",
            ],
            "Circulate the suspect description to patrol units",
        ),
        risk(
            "Significant financial loss",
            PriorityLevel::Medium,
            &[
                "life savings",
                "all my savings",
                "thousands",
                "thousand dollars",
                "large sum",
                "retirement fund*",
                "pension",
            ],
            "Request an itemized statement of the financial loss",
        ),
    ]
}
