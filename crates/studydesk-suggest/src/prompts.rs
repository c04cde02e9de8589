//! Prompt construction and reply post-processing.

use studydesk_models::{Course, Feedback, Task};

/// Characters treated as list bullets at the start of a reply line.
pub const BULLET_CHARS: &[char] = &['-', '•'];

/// Prompt asking for productivity tips based on the current tasks.
pub fn task_prompt(tasks: &[Task]) -> String {
    let texts: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
    format!(
        "Based on these tasks:\n{}\n\nSuggest 3 actionable and simple productivity improvements. Use bullets.",
        texts.join(", ")
    )
}

/// Prompt asking for one new course based on the existing catalogue.
pub fn course_prompt(courses: &[Course]) -> String {
    let headlines: Vec<String> = courses.iter().map(Course::headline).collect();
    format!(
        "Based on these courses: {}\nSuggest a new course with title and short description (use bullets).",
        headlines.join(", ")
    )
}

/// Prompt asking for a short summary of all feedback.
pub fn feedback_prompt(entries: &[Feedback]) -> String {
    let digests: Vec<String> = entries.iter().map(Feedback::digest).collect();
    format!(
        "Summarize this student feedback in 3-4 sentences:\n\n{}",
        digests.join(" ")
    )
}

/// Splits a bulleted reply into clean lines.
///
/// Any leading run of bullets and whitespace is removed along with trailing
/// whitespace; lines left empty are dropped.
pub fn bullet_lines(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(|c: char| c.is_whitespace() || BULLET_CHARS.contains(&c))
        })
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
