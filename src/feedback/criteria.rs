//! Keyword table mapping criteria to dedicated phrases.
//!
//! Entries are checked in table order and the first keyword found in a
//! criterion's id or name wins, so "Fond / Argumentation" matches
//! `fond`, not `argumentation`.

use crate::grade::CriterionLevel;
use crate::session::Criterion;

#[derive(Debug)]
pub struct CriterionPhrases {
    pub keyword: &'static str,
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
}

impl CriterionPhrases {
    pub fn for_level(&self, level: CriterionLevel) -> &'static str {
        match level {
            CriterionLevel::High => self.high,
            CriterionLevel::Medium => self.medium,
            CriterionLevel::Low => self.low,
        }
    }
}

const fn entry(
    keyword: &'static str,
    high: &'static str,
    medium: &'static str,
    low: &'static str,
) -> CriterionPhrases {
    CriterionPhrases {
        keyword,
        high,
        medium,
        low,
    }
}

pub static KEYWORD_PHRASES: [CriterionPhrases; 14] = [
    entry(
        "intro",
        "L'introduction est efficace et pose bien le sujet.",
        "L'introduction est présente mais pourrait être plus percutante.",
        "L'introduction est trop succincte ou absente.",
    ),
    entry(
        "fond",
        "Le fond est riche et les arguments sont pertinents.",
        "Le fond est correct mais manque parfois de profondeur.",
        "Le fond est insuffisant, les arguments manquent de substance.",
    ),
    entry(
        "forme",
        "La forme est soignée et la rédaction fluide.",
        "La forme est acceptable mais quelques maladresses persistent.",
        "La forme est à retravailler (syntaxe, clarté).",
    ),
    entry(
        "argumentation",
        "L'argumentation est construite et convaincante.",
        "L'argumentation est présente mais pourrait être plus rigoureuse.",
        "L'argumentation est faible ou désorganisée.",
    ),
    entry(
        "conclusion",
        "La conclusion synthétise bien le propos.",
        "La conclusion existe mais reste basique.",
        "La conclusion est absente ou trop courte.",
    ),
    entry(
        "orthographe",
        "L'orthographe est maîtrisée.",
        "Quelques fautes d'orthographe à corriger.",
        "Trop de fautes d'orthographe, une relecture s'impose.",
    ),
    entry(
        "comprehension",
        "La compréhension du sujet est excellente.",
        "La compréhension est partielle.",
        "Le sujet n'a pas été bien compris.",
    ),
    entry(
        "methode",
        "La méthode est rigoureuse et bien appliquée.",
        "La méthode est suivie mais avec quelques erreurs.",
        "La méthode n'est pas maîtrisée.",
    ),
    entry(
        "resultat",
        "Les résultats sont justes et bien présentés.",
        "Les résultats sont partiellement corrects.",
        "Les résultats sont incorrects ou absents.",
    ),
    entry(
        "presentation",
        "La présentation est claire et soignée.",
        "La présentation est correcte.",
        "La présentation est à améliorer.",
    ),
    entry(
        "contenu",
        "Le contenu est riche et maîtrisé.",
        "Le contenu est correct mais perfectible.",
        "Le contenu est insuffisant.",
    ),
    entry(
        "expression",
        "L'expression orale est fluide et claire.",
        "L'expression orale est correcte mais perfectible.",
        "L'expression orale est à travailler.",
    ),
    entry(
        "posture",
        "La posture et l'aisance sont remarquables.",
        "La posture est correcte.",
        "Plus d'aisance serait bienvenue.",
    ),
    entry(
        "temps",
        "Le temps a été parfaitement géré.",
        "La gestion du temps est acceptable.",
        "La gestion du temps est à améliorer.",
    ),
];

/// First table entry whose keyword appears in the criterion's id
/// (lowercased, keeping ASCII letters only) or in its lowercased name.
pub fn match_criterion(criterion: &Criterion) -> Option<&'static CriterionPhrases> {
    let id: String = criterion
        .id
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect();
    let name = criterion.name.to_lowercase();

    KEYWORD_PHRASES
        .iter()
        .find(|p| id.contains(p.keyword) || name.contains(p.keyword))
}
