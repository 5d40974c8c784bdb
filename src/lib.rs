//! Grading assistant engine.
//!
//! Turns per-criterion scores into a weighted final grade, bands it,
//! writes feedback for the student (from phrase templates or from a
//! language model) and audits the score/grade pair for incoherence.

pub mod ai;
pub mod cli;
pub mod cli_help;
pub mod coherence;
pub mod config;
pub mod error;
pub mod feedback;
pub mod grade;
pub mod logging;
pub mod report_helpers;
pub mod review;
pub mod session;
pub mod stats;
pub mod util;
