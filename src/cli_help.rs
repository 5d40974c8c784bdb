/// Weighted grade per student, with band and coherence audit.
pub const GRADE: &str = "\
Compute the final grade of every student in a session file.

Each criterion score is entered on a 0-20 slider. The final grade is the
weighted mean of those scores, expressed on the session scale (max_grade)
and rounded to one decimal. A grade override set by the teacher replaces
the computed grade.

Bands (on a 0-20 basis):
  excellent   >= 16
  good        >= 12
  average     >= 8
  below       >= 4
  poor        <  4

A warning is shown when the scores and the final grade disagree: a gap
of more than 4 points (on 20) between the mean score and the grade, or
a mostly excellent / mostly weak set of scores next to a grade that says
otherwise.

Session files are TOML (.toml) or JSON (.json). Overridden grades are
marked with *.";

/// Feedback generation pass.
pub const REVIEW: &str = "\
Write feedback for each graded student.

By default feedback is assembled from phrase templates: an opening and a
development line for the overall band, one line per well-known criterion
(introduction, fond, forme, méthode, contenu...), the teacher's note, and
a closing line. --seed makes the phrase choice reproducible.

With --ai the feedback is written by a language model through an
OpenAI-compatible chat API (Groq by default), then grammar-corrected. If
the API key is missing, the request fails, or it takes longer than
--timeout, template feedback is used instead and a notice is shown.

Feedback already present in the session file was edited by the teacher
and is shown as is, never regenerated.

Environment:
  SQG_AI_API_KEY          API key (falls back to GROQ_API_KEY)
  SQG_AI_BASE_URL         default https://api.groq.com/openai/v1
  SQG_AI_MODEL            default llama-3.3-70b-versatile
  SQG_AI_TIMEOUT_SECONDS  HTTP timeout, default 30

Examples:
  sqg review classe.toml
  sqg review classe.toml --student \"Léa Martin\" --ai
  sqg review classe.json --seed 7 --json";

/// Class statistics.
pub const STATS: &str = "\
Summarize the final grades of completed students.

Shows the count of graded students, average, median (mean of the two
middle grades for an even count), minimum and maximum, all rounded to one
decimal, and the number of students in each band. A student counts as
graded once at least one score or a grade override is recorded.";
