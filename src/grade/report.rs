use serde::Serialize;

use super::{Band, GradedStudent};
use crate::report_helpers;
use crate::session::Session;
use crate::util::format_number;

/// Print one line per student: final grade, band and any coherence warning.
pub fn print_report(session: &Session, graded: &[GradedStudent]) {
    let separator = report_helpers::separator(72);
    let scale = format_number(session.max_grade);

    println!("{}", session.name);
    println!("{separator}");
    println!(
        " {} critère(s), notes sur {scale}, {} élève(s)",
        session.criteria.len(),
        graded.len()
    );
    println!("{separator}");
    println!(" {:<20} {:>9}  {:<10} Alerte", "Élève", "Note", "Niveau");
    println!("{separator}");

    for g in graded {
        let grade = if g.completed {
            let mark = if g.overridden { "*" } else { " " };
            format!("{}/{scale}{mark}", format_number(g.final_grade))
        } else {
            "—".to_string()
        };
        let band = if g.completed { g.band.as_str() } else { "" };
        let warning = g.warning.map(|w| w.message()).unwrap_or("");
        println!(
            " {:<20} {:>9}  {:<10} {}",
            report_helpers::truncate(&g.name, 20),
            grade,
            band,
            warning
        );
    }

    println!("{separator}");
    if graded.iter().any(|g| g.overridden) {
        println!(" * note modifiée par l'enseignant");
    }
}

#[derive(Serialize)]
struct JsonStudent<'a> {
    name: &'a str,
    completed: bool,
    computed_grade: f64,
    final_grade: f64,
    overridden: bool,
    band: Band,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<&'static str>,
}

#[derive(Serialize)]
struct JsonGradeReport<'a> {
    session: &'a str,
    max_grade: f64,
    students: Vec<JsonStudent<'a>>,
}

pub fn print_json(
    session: &Session,
    graded: &[GradedStudent],
) -> Result<(), Box<dyn std::error::Error>> {
    let report = JsonGradeReport {
        session: &session.name,
        max_grade: session.max_grade,
        students: graded
            .iter()
            .map(|g| JsonStudent {
                name: &g.name,
                completed: g.completed,
                computed_grade: g.computed,
                final_grade: g.final_grade,
                overridden: g.overridden,
                band: g.band,
                warning: g.warning.map(|w| w.message()),
            })
            .collect(),
    };
    report_helpers::print_json_stdout(&report)
}
