use serde::Serialize;

use super::Preset;
use crate::report_helpers;
use crate::util::format_number;

/// Print every preset with its weighted criteria.
pub fn print_presets(scale: f64) {
    let separator = report_helpers::separator(52);

    for preset in Preset::ALL {
        let criteria = preset.criteria(scale);
        let total: f64 = criteria.iter().map(|c| c.weight).sum();
        println!("{} ({})", preset.label(), preset);
        println!("{separator}");
        println!(" {:<15} {:<24} {:>6}", "Id", "Critère", "Poids");
        println!("{separator}");
        for c in &criteria {
            println!(
                " {:<15} {:<24} {:>6}",
                c.id,
                report_helpers::truncate(&c.name, 24),
                format_number(c.weight)
            );
        }
        println!("{separator}");
        println!(
            " {:<40} {:>6}",
            format!("Total (notes sur {})", format_number(scale)),
            format_number(total)
        );
        println!();
    }
}

#[derive(Serialize)]
struct JsonCriterion {
    id: String,
    name: String,
    weight: f64,
    max_score: f64,
}

#[derive(Serialize)]
struct JsonPreset {
    preset: Preset,
    label: &'static str,
    criteria: Vec<JsonCriterion>,
}

pub fn print_presets_json(scale: f64) -> Result<(), Box<dyn std::error::Error>> {
    let presets: Vec<JsonPreset> = Preset::ALL
        .iter()
        .map(|&preset| JsonPreset {
            preset,
            label: preset.label(),
            criteria: preset
                .criteria(scale)
                .into_iter()
                .map(|c| JsonCriterion {
                    id: c.id,
                    name: c.name,
                    weight: c.weight,
                    max_score: c.max_score,
                })
                .collect(),
        })
        .collect();
    report_helpers::print_json_stdout(&presets)
}
