mod report;

use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;

use serde::Serialize;

use crate::grade::{Band, normalize_to_20, round_tenth};
use crate::session::Session;
use crate::util::mean;

use report::{print_json, print_report};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassStats {
    pub count: usize,
    pub average: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Students per band, every band present even when empty.
    pub distribution: BTreeMap<Band, usize>,
}

impl ClassStats {
    pub fn in_band(&self, band: Band) -> usize {
        self.distribution.get(&band).copied().unwrap_or(0)
    }
}

pub fn run(path: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let session = Session::load(path)?;
    let stats = session_stats(&session);

    if json {
        print_json(&session, stats.as_ref())?;
    } else {
        print_report(&session, stats.as_ref());
    }
    Ok(())
}

/// Statistics over the final grades of the session's completed students.
pub fn session_stats(session: &Session) -> Option<ClassStats> {
    let grades: Vec<f64> = session
        .completed_students()
        .map(|s| s.final_grade(&session.criteria, session.max_grade))
        .collect();
    compute_stats(&grades, session.max_grade)
}

/// `None` when there are no grades. Non-finite grades are ignored.
pub fn compute_stats(grades: &[f64], scale: f64) -> Option<ClassStats> {
    let mut sorted: Vec<f64> = grades.iter().copied().filter(|g| g.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);

    let average = mean(&sorted)?;
    let n = sorted.len();
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };

    let mut distribution: BTreeMap<Band, usize> = Band::ALL.iter().map(|&b| (b, 0)).collect();
    for &g in &sorted {
        *distribution
            .entry(Band::classify(normalize_to_20(g, scale)))
            .or_default() += 1;
    }

    Some(ClassStats {
        count: n,
        average: round_tenth(average),
        median: round_tenth(median),
        min: round_tenth(sorted[0]),
        max: round_tenth(sorted[n - 1]),
        distribution,
    })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
