//! Post-processing of model output.
//!
//! Models regularly write "ta introduction" where French requires the
//! masculine possessive before a vowel-initial feminine noun. Each known
//! pair is rewritten, case-insensitively and on word boundaries. A
//! capitalized determiner stays capitalized ("Ta analyse" → "Ton analyse").

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Nouns fixed after ta, ma and sa.
const ALL_DETERMINERS: &[&str] = &[
    "introduction",
    "argumentation",
    "analyse",
    "évaluation",
    "orthographe",
    "expression",
    "idée",
];

/// Nouns fixed after ta only.
const TA_ONLY: &[&str] = &[
    "attention",
    "explication",
    "organisation",
    "amélioration",
    "application",
    "approche",
    "erreur",
    "aisance",
];

struct Fix {
    pattern: Regex,
    replacement: String,
}

static FIXES: LazyLock<Vec<Fix>> = LazyLock::new(|| {
    let pairs = ALL_DETERMINERS
        .iter()
        .flat_map(|noun| {
            [("ta", "ton"), ("ma", "mon"), ("sa", "son")]
                .map(|(wrong, right)| (wrong, right, *noun))
        })
        .chain(TA_ONLY.iter().map(|noun| ("ta", "ton", *noun)));

    pairs
        .filter_map(|(wrong, right, noun)| {
            let pattern = Regex::new(&format!(r"(?i)\b{wrong} {noun}\b")).ok()?;
            Some(Fix {
                pattern,
                replacement: format!("{right} {noun}"),
            })
        })
        .collect()
});

/// Rewrite every known possessive agreement error in `text`.
/// Text without any of them comes back unchanged.
pub fn fix_grammar(text: &str) -> String {
    let mut out = text.to_string();
    for fix in FIXES.iter() {
        if !fix.pattern.is_match(&out) {
            continue;
        }
        out = fix
            .pattern
            .replace_all(&out, |caps: &Captures| {
                let starts_upper = caps[0].chars().next().is_some_and(char::is_uppercase);
                if starts_upper {
                    capitalize(&fix.replacement)
                } else {
                    fix.replacement.clone()
                }
            })
            .into_owned();
    }
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "grammar_test.rs"]
mod tests;
