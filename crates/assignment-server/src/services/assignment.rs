//! Prompting and question extraction for assignment generation.

use tracing::warn;
use tutor_core::TextCompletion;

const USER_PROMPT: &str = "Generate assignment questions for the student.";
const MAX_QUESTIONS: usize = 10;

fn build_system_prompt(subject: &str, topic: &str) -> String {
    format!(
        "You are an intelligent assistant. Based on the subject {subject} and topic {topic}, \
         generate an assignment consisting of:\n\
         - 5 easy questions,\n\
         - 3 medium-difficulty questions, and\n\
         - 2 hard questions.\n\
         Each question should be unique and clear."
    )
}

/// Asks the language model for assignment questions and normalizes the reply.
///
/// A failed or unnumbered reply yields an empty list; the route treats that
/// as a valid result, not an error.
pub async fn generate(llm: &dyn TextCompletion, subject: &str, topic: &str) -> Vec<String> {
    let system_prompt = build_system_prompt(subject, topic);

    match llm.complete(Some(&system_prompt), USER_PROMPT).await {
        Ok(reply) => format_questions(&reply),
        Err(e) => {
            warn!("Assignment generation failed: {}", e);
            Vec::new()
        }
    }
}

/// Extracts up to ten numbered questions from a model reply.
///
/// Keeps only trimmed lines that start with a digit (the model's own
/// numbering), strips everything up to the first ". ", and renumbers from 1.
/// Lines without a leading digit are dropped even when they continue a
/// question; this is a best-effort text heuristic, not a parser.
pub fn format_questions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| line.chars().next().is_some_and(|c| c.is_ascii_digit()))
        .take(MAX_QUESTIONS)
        .enumerate()
        .map(|(i, line)| {
            let body = line.split_once(". ").map_or(line, |(_, rest)| rest);
            format!("{}. {}", i + 1, body)
        })
        .collect()
}
