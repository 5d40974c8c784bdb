use serde::Serialize;

use super::{GeneratedFeedback, ReviewedStudent};
use crate::grade::Band;
use crate::report_helpers;
use crate::session::Session;
use crate::util::format_number;

const TEXT_WIDTH: usize = 72;

pub fn print_report(session: &Session, reviewed: &[ReviewedStudent], notice: Option<&str>) {
    let separator = report_helpers::separator(TEXT_WIDTH);
    let scale = format_number(session.max_grade);

    println!("{}", session.name);
    println!("{separator}");
    if let Some(notice) = notice {
        println!(" ! {notice}");
        println!("{separator}");
    }
    if reviewed.is_empty() {
        println!(" Aucun élève noté.");
        return;
    }

    for r in reviewed {
        println!(
            " {}  {}/{scale}  ({})  [{}]",
            r.name,
            format_number(r.final_grade),
            r.band.label_fr(),
            r.feedback.origin.as_str()
        );
        if let Some(notice) = &r.feedback.notice {
            println!(" ! {notice}");
        }
        if let Some(w) = r.warning {
            println!(" ⚠ {}", w.message());
        }
        println!();
        for line in report_helpers::wrap(&r.feedback.text, TEXT_WIDTH - 2) {
            println!("   {line}");
        }
        println!("{separator}");
    }
}

#[derive(Serialize)]
struct JsonReviewed<'a> {
    name: &'a str,
    final_grade: f64,
    band: Band,
    feedback: &'a GeneratedFeedback,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<&'static str>,
}

#[derive(Serialize)]
struct JsonReviewReport<'a> {
    session: &'a str,
    max_grade: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<&'a str>,
    students: Vec<JsonReviewed<'a>>,
}

pub fn print_json(
    session: &Session,
    reviewed: &[ReviewedStudent],
    notice: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = JsonReviewReport {
        session: &session.name,
        max_grade: session.max_grade,
        notice,
        students: reviewed
            .iter()
            .map(|r| JsonReviewed {
                name: &r.name,
                final_grade: r.final_grade,
                band: r.band,
                feedback: &r.feedback,
                warning: r.warning.map(|w| w.message()),
            })
            .collect(),
    };
    report_helpers::print_json_stdout(&report)
}
