use crate::feedback::FeedbackInput;
use crate::util::format_number;

pub const SYSTEM_PROMPT: &str = "\
Tu es un assistant pédagogique expert. Ta mission est de rédiger des appréciations de copies \
pour des élèves, en te basant sur des critères d'évaluation précis.

STRUCTURE OBLIGATOIRE DE LA RÉPONSE (Sandwich Pédagogique) :
1. Une phrase d'accroche sur le niveau global ou un point fort majeur.
2. Une analyse des points à améliorer (sans lister toutes les notes).
3. Une conclusion encourageante avec un conseil pratique pour progresser.

RÈGLES DE STYLE :
- Ton : Bienveillant, constructif, professionnel mais accessible.
- Adresse-toi directement à l'élève (\"Tu\").
- Ne répète PAS robotiquement les notes de chaque critère (ex: \"Tu as eu 12 en grammaire, \
14 en syntaxe...\"). Synthétise plutôt : \"Ta maîtrise de la langue est solide\".
- Sois concis : 60 à 100 mots maximum.
- Termine TOUJOURS ta dernière phrase. Ne t'arrête jamais au milieu d'une idée.

RÈGLES DE GRAMMAIRE (CRITIQUE) :
- Devant un mot féminin commençant par une voyelle ou un h muet, utilise TON, MON, SON \
(jamais ta, ma, sa).
  Exemples : \"ton introduction\", \"ton analyse\", \"ton argumentation\", \"ton orthographe\".
- Accords parfaits exigés.";

/// Word describing a raw 0–20 criterion score.
pub fn criterion_level(score: f64) -> &'static str {
    if score >= 16.0 {
        "excellent"
    } else if score >= 12.0 {
        "bien"
    } else if score >= 8.0 {
        "moyen"
    } else {
        "insuffisant"
    }
}

/// `- Fond: 14/20 (bien, poids: 5)`, one line per criterion.
pub fn criteria_lines(input: &FeedbackInput<'_>) -> String {
    input
        .criteria
        .iter()
        .map(|c| {
            let score = input.scores.get(&c.id);
            format!(
                "- {}: {}/20 ({}, poids: {})",
                c.name,
                format_number(score),
                criterion_level(score),
                format_number(c.weight)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn user_prompt(input: &FeedbackInput<'_>) -> String {
    let mut prompt = format!(
        "Génère une appréciation concise pour cette copie.\n\n\
         CONTEXTE :\n\
         - Note finale : {}/{} (Niveau : {})\n\
         - Détails des critères :\n{}\n\n",
        format_number(input.final_grade),
        format_number(input.scale),
        input.band().label_fr(),
        criteria_lines(input),
    );
    if let Some(note) = input.trimmed_note() {
        prompt.push_str(&format!(
            "CONSIGNE SPÉCIFIQUE DU PROFESSEUR (à intégrer absolument) : \"{note}\"\n\n"
        ));
    }
    prompt.push_str(
        "Tâche : Rédige un paragraphe fluide (pas de liste à puces) qui synthétise ces résultats. \
         Sois encourageant mais exigeant sur les points faibles.",
    );
    prompt
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
