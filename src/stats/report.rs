use serde::Serialize;

use super::ClassStats;
use crate::grade::Band;
use crate::report_helpers;
use crate::session::Session;
use crate::util::format_number;

const BAR_WIDTH: usize = 30;

pub fn print_report(session: &Session, stats: Option<&ClassStats>) {
    let separator = report_helpers::separator(52);
    let scale = format_number(session.max_grade);

    println!("{}", session.name);
    println!("{separator}");

    let Some(stats) = stats else {
        println!(" Aucun élève noté.");
        return;
    };

    println!(" Élèves notés : {}/{}", stats.count, session.students.len());
    println!(" Moyenne      : {}/{scale}", format_number(stats.average));
    println!(" Médiane      : {}/{scale}", format_number(stats.median));
    println!(
        " Min / Max    : {} / {}",
        format_number(stats.min),
        format_number(stats.max)
    );
    println!("{separator}");

    for band in Band::ALL {
        let n = stats.in_band(band);
        let bar = "\u{2588}".repeat(n * BAR_WIDTH / stats.count.max(1));
        println!(" {:<22} {:>3}  {bar}", band.label_fr(), n);
    }
    println!("{separator}");
}

#[derive(Serialize)]
struct JsonStatsReport<'a> {
    session: &'a str,
    max_grade: f64,
    students: usize,
    stats: Option<&'a ClassStats>,
}

pub fn print_json(
    session: &Session,
    stats: Option<&ClassStats>,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = JsonStatsReport {
        session: &session.name,
        max_grade: session.max_grade,
        students: session.students.len(),
        stats,
    };
    report_helpers::print_json_stdout(&report)
}
