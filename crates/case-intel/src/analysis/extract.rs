//! Best-effort suspect and evidence mention extraction.
//!
//! These heuristics are approximate by nature. They run over the original casing, never fail,
//! and return empty lists when nothing plausible is found.

use regex::Regex;

use super::normalizer::{normalize, Phrase};
use super::rules::{ExtractionRules, RuleSetError};

const NAME_WORD: &str = r"\p{Lu}[\p{L}'\-]+";
const MAX_EVIDENCE_WORDS: usize = 6;

/// Words that end an evidence noun phrase.
const PHRASE_BREAKS: &[&str] = &[
    "at", "in", "on", "near", "from", "by", "under", "inside", "outside", "with", "which", "that",
    "but", "while", "when", "where", "after", "before", "to", "into", "beside", "belonging",
    "for", "then", "was", "were", "is", "are",
];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "some", "his", "her", "their", "my", "our", "its", "your", "several",
];

/// Clauses starting with these are not evidence ("found out", "found that", "found him").
const NON_EVIDENCE_STARTS: &[&str] = &[
    "out", "that", "this", "it", "him", "them", "nothing", "off", "by", "no", "there",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub suspects: Vec<String>,
    pub evidence: Vec<String>,
}

pub struct Extractor {
    suspect_pattern: Option<Regex>,
    honorific_pattern: Regex,
    evidence_pattern: Option<Regex>,
    evidence_trigger: Option<Regex>,
    evidence_terms: Vec<(String, Phrase)>,
    ignored_names: Vec<String>,
}

impl Extractor {
    pub(crate) fn new(rules: &ExtractionRules) -> Result<Self, RuleSetError> {
        let suspect_pattern = trigger_alternation(&rules.suspect_triggers)
            .map(|triggers| {
                Regex::new(&format!(
                    r"(?i:\b(?:{triggers})\b)[ \t]+(?P<name>{NAME_WORD}(?:[ \t]+{NAME_WORD}){{0,2}})"
                ))
            })
            .transpose()?;

        let honorific_pattern = Regex::new(&format!(
            r"\b(?P<name>(?:Mr|Mrs|Ms|Dr)\.?[ \t]+{NAME_WORD}(?:[ \t]+{NAME_WORD})?)"
        ))?;

        let evidence_alternation = trigger_alternation(&rules.evidence_triggers);
        let evidence_pattern = evidence_alternation
            .as_ref()
            .map(|triggers| {
                Regex::new(&format!(
                    r"(?i:\b(?:{triggers})\b)(?P<clause>[^.,;:!?\n]*)"
                ))
            })
            .transpose()?;
        let evidence_trigger = evidence_alternation
            .as_ref()
            .map(|triggers| Regex::new(&format!(r"(?i:\b(?:{triggers})\b)")))
            .transpose()?;

        let evidence_terms = rules
            .evidence_terms
            .iter()
            .filter_map(|term| Phrase::compile(term).map(|phrase| (term.trim().to_string(), phrase)))
            .collect();

        Ok(Self {
            suspect_pattern,
            honorific_pattern,
            evidence_pattern,
            evidence_trigger,
            evidence_terms,
            ignored_names: rules.ignored_names.clone(),
        })
    }

    pub fn extract(&self, original: &str) -> Extraction {
        Extraction {
            suspects: self.suspects(original),
            evidence: self.evidence(original),
        }
    }

    fn suspects(&self, text: &str) -> Vec<String> {
        let mut found: Vec<(usize, String)> = Vec::new();
        let patterns = self
            .suspect_pattern
            .iter()
            .chain(std::iter::once(&self.honorific_pattern));

        for pattern in patterns {
            for captures in pattern.captures_iter(text) {
                let Some(name) = captures.name("name") else {
                    continue;
                };
                if let Some(candidate) = self.clean_name(name.as_str()) {
                    found.push((name.start(), candidate));
                }
            }
        }

        found.sort_by_key(|(start, _)| *start);
        dedup_case_insensitive(found.into_iter().map(|(_, name)| name))
    }

    fn clean_name(&self, raw: &str) -> Option<String> {
        let words: Vec<&str> = raw.split_whitespace().collect();
        let first = words.first()?;
        if self
            .ignored_names
            .iter()
            .any(|ignored| ignored.eq_ignore_ascii_case(first))
        {
            return None;
        }

        let joined = words.join(" ");
        let trimmed = joined
            .strip_suffix("'s")
            .unwrap_or(joined.as_str())
            .trim_end_matches(['\'', '-']);
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn evidence(&self, text: &str) -> Vec<String> {
        let mut items = Vec::new();
        if let Some(pattern) = &self.evidence_pattern {
            let mut start = 0;
            while let Some(captures) = pattern.captures_at(text, start) {
                let Some(clause) = captures.name("clause") else {
                    break;
                };
                // A later trigger in the same clause starts a clause of its own.
                let end = self
                    .evidence_trigger
                    .as_ref()
                    .and_then(|trigger| trigger.find(clause.as_str()))
                    .map_or(clause.end(), |next| clause.start() + next.start());
                items.extend(evidence_items(&text[clause.start()..end]));
                start = end;
            }
        }

        let normalized = normalize(text);
        for (term, phrase) in &self.evidence_terms {
            let lowered = term.to_lowercase();
            let covered = items
                .iter()
                .any(|item: &String| item.to_lowercase().contains(&lowered));
            if !covered && normalized.contains(phrase) {
                items.push(term.clone());
            }
        }

        dedup_case_insensitive(items)
    }
}

fn trigger_alternation(triggers: &[String]) -> Option<String> {
    let mut words: Vec<Vec<&str>> = triggers
        .iter()
        .map(|trigger| trigger.split_whitespace().collect::<Vec<_>>())
        .filter(|words| !words.is_empty())
        .collect();
    if words.is_empty() {
        return None;
    }

    // Longer triggers first so "suspect is" wins over "suspect".
    words.sort_by(|a, b| b.len().cmp(&a.len()));
    Some(
        words
            .iter()
            .map(|words| {
                words
                    .iter()
                    .map(|word| regex::escape(word))
                    .collect::<Vec<_>>()
                    .join(r"\s+")
            })
            .collect::<Vec<_>>()
            .join("|"),
    )
}

fn evidence_items(clause: &str) -> Vec<String> {
    let words: Vec<&str> = clause.split_whitespace().collect();
    match words.first() {
        None => return Vec::new(),
        Some(first) if is_one_of(first, NON_EVIDENCE_STARTS) => return Vec::new(),
        Some(_) => {}
    }

    let mut items = Vec::new();
    for segment in words.split(|word| is_one_of(word, &["and", "or", "&"])) {
        let phrase: Vec<&str> = segment
            .iter()
            .copied()
            .take_while(|word| !is_one_of(word, PHRASE_BREAKS))
            .skip_while(|word| is_one_of(word, DETERMINERS))
            .take(MAX_EVIDENCE_WORDS)
            .collect();
        if let Some(first) = phrase.first() {
            if !is_one_of(first, NON_EVIDENCE_STARTS) {
                items.push(phrase.join(" "));
            }
        }
    }
    items
}

fn is_one_of(word: &str, list: &[&str]) -> bool {
    list.iter().any(|entry| entry.eq_ignore_ascii_case(word))
}

fn dedup_case_insensitive(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for item in items {
        if !unique
            .iter()
            .any(|existing| existing.to_lowercase() == item.to_lowercase())
        {
            unique.push(item);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::rules::RuleSet;

    fn extractor() -> Extractor {
        Extractor::new(&RuleSet::standard().extraction).expect("extraction rules compile")
    }

    #[test]
    fn captures_names_after_trigger_words() {
        let extraction = extractor().extract(
            "The victim said a man named John Carter took the bag. The driver is known as Big Mike.",
        );
        assert_eq!(extraction.suspects, ["John Carter", "Big Mike"]);
    }

    #[test]
    fn captures_honorific_names_in_order_of_appearance() {
        let extraction =
            extractor().extract("Neighbors blamed Mr. Hollis, and the suspect is Dana Reyes.");
        assert_eq!(extraction.suspects, ["Mr. Hollis", "Dana Reyes"]);
    }

    #[test]
    fn ignores_pronouns_and_lowercase_words_after_triggers() {
        let extraction =
            extractor().extract("I called the station. The suspect He ran. Someone named him.");
        assert!(extraction.suspects.is_empty());
    }

    #[test]
    fn splits_evidence_clauses_and_drops_determiners() {
        let extraction = extractor().extract(
            "Officers recovered a red jacket and a baseball cap near the door, then found his wallet.",
        );
        assert_eq!(extraction.evidence, ["red jacket", "baseball cap", "wallet"]);
    }

    #[test]
    fn later_triggers_in_one_clause_start_new_items() {
        let extractor = extractor();
        let extraction = extractor.extract("Officers recovered a knife and found a phone in the alley");
        assert_eq!(extraction.evidence, ["knife", "phone"]);

        let extraction = extractor.extract("He left behind a hat and dropped a glove");
        assert_eq!(extraction.evidence, ["hat", "glove"]);
    }

    #[test]
    fn reports_known_evidence_terms_once() {
        let extraction = extractor()
            .extract("We found CCTV footage near the lot. The store also has CCTV and a receipt.");
        assert_eq!(extraction.evidence, ["CCTV footage", "receipt"]);
    }

    #[test]
    fn skips_non_evidence_uses_of_trigger_words() {
        let extraction = extractor().extract("I found out that my car was gone. We found it later.");
        assert!(extraction.evidence.is_empty());
    }

    #[test]
    fn never_panics_on_degenerate_input() {
        let extractor = extractor();
        for text in ["", "   ", "named", "found", "Mr.", "named \u{1F600} Émile", "found ,,,"] {
            let _ = extractor.extract(text);
        }
    }

    #[test]
    fn empty_rules_extract_only_honorific_names() {
        let extractor = Extractor::new(&ExtractionRules::default()).expect("compiles");
        let extraction = extractor.extract("Dr. Patel found a knife");
        assert_eq!(extraction.suspects, ["Dr. Patel"]);
        assert!(extraction.evidence.is_empty());
    }
}
