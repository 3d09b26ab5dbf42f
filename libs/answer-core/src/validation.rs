//! Vocabulary answer validation for typed translation games.
//!
//! Unlike the token matcher this is all-or-nothing: the user's answer must
//! equal one accepted form of the correct answer. Accepted forms are built from
//! the correct answer's listed alternatives, optional prefixes like "(to)",
//! synonyms, contraction variants and British/American spelling, and the
//! comparison ignores accents and spelled-out numbers.

use crate::lexicon::{self, CONTRACTIONS};
use crate::normalize::{collapse_whitespace, split_alternatives, strip_accents};
use crate::types::{Language, ValidationResult};

/// Characters stripped from both answers before comparison.
const STRIPPED_PUNCTUATION: &[char] = &[
    '¿', '¡', '?', '!', '.', ',', ';', ':', '(', ')', '[', ']', '{', '}', '«', '»',
];

/// Separators between alternatives in a correct answer.
const ALTERNATIVE_SEPARATORS: &[char] = &[',', '|', ';', '/'];

/// Words separating alternatives ("I" is a common typo for "/").
const ALTERNATIVE_WORDS: &[&str] = &["i", "and", "or"];

/// Validate an answer in English without synonym expansion.
pub fn validate_answer_basic(user_answer: &str, correct_answer: &str) -> ValidationResult {
    validate_answer(user_answer, correct_answer, Language::En, false)
}

/// Validate a typed vocabulary answer against the correct answer.
pub fn validate_answer(
    user_answer: &str,
    correct_answer: &str,
    language: Language,
    allow_synonyms: bool,
) -> ValidationResult {
    if user_answer.trim().is_empty() || correct_answer.trim().is_empty() {
        return ValidationResult::rejected();
    }

    let accepted = accepted_forms(correct_answer, language, allow_synonyms);

    let user = expand_contractions(&clean(user_answer, language));
    let user_plain = strip_accents(&user);

    let mut is_correct = accepted
        .iter()
        .any(|form| strip_accents(form) == user_plain);

    if !is_correct {
        if let Some(value) = lexicon::number_value(&user) {
            is_correct = accepted
                .iter()
                .any(|form| lexicon::number_value(form).as_deref() == Some(value.as_str()));
        }
    }

    let missing_accents = is_correct && !accepted.iter().any(|form| *form == user);

    ValidationResult {
        is_correct,
        missing_accents,
    }
}

/// Every cleaned form of `correct_answer` that counts as correct.
fn accepted_forms(correct_answer: &str, language: Language, allow_synonyms: bool) -> Vec<String> {
    let mut base: Vec<String> = Vec::new();
    for piece in split_alternatives(correct_answer, ALTERNATIVE_SEPARATORS, ALTERNATIVE_WORDS) {
        match optional_prefix(&piece) {
            Some((prefix, main)) => {
                base.push(format!("{prefix} {main}"));
                base.push(main.to_string());
            }
            None => base.push(piece),
        }
    }

    if allow_synonyms {
        let extra: Vec<String> = base
            .iter()
            .flat_map(|answer| lexicon::synonyms(answer, language))
            .map(|s| s.to_string())
            .collect();
        base.extend(extra);
    }

    let mut forms: Vec<String> = Vec::new();
    let mut add = |form: String| {
        if !form.is_empty() && !forms.contains(&form) {
            forms.push(form);
        }
    };

    // The unsplit answer is accepted too ("children / sons")
    add(clean(correct_answer, language));

    for answer in &base {
        let cleaned = clean(answer, language);
        if cleaned.is_empty() {
            continue;
        }

        for (contraction, expansion) in CONTRACTIONS {
            if cleaned.contains(contraction) {
                add(cleaned.replacen(contraction, expansion, 1));
            }
            if cleaned.contains(expansion) {
                add(cleaned.replacen(expansion, contraction, 1));
            }
        }
        add(cleaned);
    }

    forms
}

/// Split "(to) recycle" into ("to", "recycle").
fn optional_prefix(piece: &str) -> Option<(&str, &str)> {
    let rest = piece.strip_prefix('(')?;
    let close = rest.find(')')?;
    let prefix = &rest[..close];
    let main = rest[close + 1..].trim_start();
    if prefix.is_empty() || main.is_empty() {
        return None;
    }
    Some((prefix, main))
}

/// Lowercase, drop parenthesised notes and punctuation, unify spelling.
fn clean(text: &str, language: Language) -> String {
    let lowered = drop_parenthesized(&text.to_lowercase());
    let stripped: String = lowered
        .trim()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();

    let unified = if language == Language::En {
        replace_words(&stripped, char::is_alphanumeric, lexicon::american_spelling)
    } else {
        stripped
    };

    collapse_whitespace(&unified)
}

/// Replace each "(...)" group, and whitespace before it, with a single space.
fn drop_parenthesized(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('(') {
        let after = &rest[open + 1..];
        match after.find(')') {
            Some(close) if close > 0 => {
                out.push_str(rest[..open].trim_end());
                out.push(' ');
                rest = &after[close + 1..];
            }
            _ => {
                out.push_str(&rest[..=open]);
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Expand contractions on word boundaries ("don't" -> "do not").
fn expand_contractions(text: &str) -> String {
    replace_words(
        text,
        |c| c.is_alphanumeric() || c == '\'',
        lexicon::expand_contraction,
    )
}

/// Rewrite each maximal run of word characters through `replace`.
fn replace_words(
    text: &str,
    is_word_char: impl Fn(char) -> bool,
    replace: impl Fn(&str) -> Option<&'static str>,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();

    let flush = |word: &mut String, out: &mut String| {
        if !word.is_empty() {
            match replace(word) {
                Some(replacement) => out.push_str(replacement),
                None => out.push_str(word),
            }
            word.clear();
        }
    };

    for c in text.chars() {
        if is_word_char(c) {
            word.push(c);
        } else {
            flush(&mut word, &mut out);
            out.push(c);
        }
    }
    flush(&mut word, &mut out);

    out
}
