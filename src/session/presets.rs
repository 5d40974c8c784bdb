//! Ready-made criteria sets for common assignment types.
//!
//! Each preset's criterion ids double as feedback keywords, so every
//! preset criterion gets a dedicated phrase in template feedback.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::Criterion;
use crate::error::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Dissertation,
    Exercice,
    Oral,
}

/// (id, display name, weight)
type PresetRow = (&'static str, &'static str, f64);

const DISSERTATION: [PresetRow; 5] = [
    ("intro", "Introduction", 3.0),
    ("fond", "Fond / Argumentation", 5.0),
    ("forme", "Forme / Rédaction", 3.0),
    ("conclusion", "Conclusion", 2.0),
    ("orthographe", "Orthographe", 2.0),
];

const EXERCICE: [PresetRow; 4] = [
    ("comprehension", "Compréhension", 4.0),
    ("methode", "Méthode", 4.0),
    ("resultat", "Résultat", 4.0),
    ("presentation", "Présentation", 3.0),
];

const ORAL: [PresetRow; 4] = [
    ("contenu", "Contenu", 5.0),
    ("expression", "Expression orale", 4.0),
    ("posture", "Posture / Aisance", 3.0),
    ("temps", "Gestion du temps", 2.0),
];

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Dissertation, Preset::Exercice, Preset::Oral];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dissertation => "dissertation",
            Self::Exercice => "exercice",
            Self::Oral => "oral",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dissertation => "Dissertation / Rédaction",
            Self::Exercice => "Exercice / Devoir",
            Self::Oral => "Oral / Présentation",
        }
    }

    fn rows(self) -> &'static [PresetRow] {
        match self {
            Self::Dissertation => &DISSERTATION,
            Self::Exercice => &EXERCICE,
            Self::Oral => &ORAL,
        }
    }

    /// Criteria for this preset, each capped at the session scale.
    pub fn criteria(self, scale: f64) -> Vec<Criterion> {
        self.rows()
            .iter()
            .map(|&(id, name, weight)| Criterion::new(id, name, weight, scale))
            .collect()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dissertation" => Ok(Self::Dissertation),
            "exercice" => Ok(Self::Exercice),
            "oral" => Ok(Self::Oral),
            _ => Err(SessionError::UnknownPreset(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "presets_test.rs"]
mod tests;
