/// Searchable form of an incident report with the original text kept alongside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText<'a> {
    original: &'a str,
    normalized: String,
    tokens: Vec<String>,
}

impl<'a> NormalizedText<'a> {
    pub fn original(&self) -> &'a str {
        self.original
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Word-boundary match of a compiled phrase against the token stream.
    pub fn contains(&self, phrase: &Phrase) -> bool {
        let needle = phrase.tokens();
        if needle.is_empty() || needle.len() > self.tokens.len() {
            return false;
        }

        self.tokens.windows(needle.len()).any(|window| {
            window
                .iter()
                .zip(needle)
                .all(|(token, pattern)| pattern.matches(token))
        })
    }

    pub fn contains_any(&self, phrases: &[Phrase]) -> bool {
        phrases.iter().any(|phrase| self.contains(phrase))
    }
}

/// Lower-case the report, drop apostrophes, turn other punctuation into spaces and collapse runs
/// of whitespace. Total over every input string.
pub fn normalize(text: &str) -> NormalizedText<'_> {
    let normalized = normalize_str(text);
    let tokens = normalized
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    NormalizedText {
        original: text,
        normalized,
        tokens,
    }
}

pub(crate) fn normalize_str(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|ch| !matches!(ch, '\'' | '\u{2019}' | '\u{feff}' | '\u{200b}'))
        .flat_map(char::to_lowercase)
        .map(|ch| if ch.is_alphanumeric() { ch } else { ' ' })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PhraseToken {
    Exact(String),
    Prefix(String),
}

impl PhraseToken {
    fn matches(&self, token: &str) -> bool {
        match self {
            PhraseToken::Exact(word) => word == token,
            PhraseToken::Prefix(stem) => token.starts_with(stem.as_str()),
        }
    }
}

/// Trigger phrase compiled into the same token space as [`NormalizedText`].
///
/// A rule token ending in `*` matches any word starting with the preceding characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    tokens: Vec<PhraseToken>,
}

impl Phrase {
    /// Returns `None` when the phrase has no searchable characters left after normalization.
    pub fn compile(raw: &str) -> Option<Self> {
        let mut tokens = Vec::new();
        for word in raw.split_whitespace() {
            let (stem, prefix) = match word.strip_suffix('*') {
                Some(stem) => (stem, true),
                None => (word, false),
            };
            let normalized = normalize_str(stem);
            let mut parts: Vec<&str> = normalized.split(' ').filter(|p| !p.is_empty()).collect();
            let Some(last) = parts.pop() else {
                continue;
            };
            tokens.extend(
                parts
                    .into_iter()
                    .map(|part| PhraseToken::Exact(part.to_string())),
            );
            tokens.push(if prefix {
                PhraseToken::Prefix(last.to_string())
            } else {
                PhraseToken::Exact(last.to_string())
            });
        }

        if tokens.is_empty() {
            return None;
        }

        Some(Self { tokens })
    }

    pub(crate) fn tokens(&self) -> &[PhraseToken] {
        &self.tokens
    }
}
