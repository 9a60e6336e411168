//! Factor Questionnaire Scorer
//!
//! Asks every question of a [`FactorCategory`], re-prompting until each
//! answer is a valid option index, and normalizes the summed selections to
//! a percentage of the category maximum.

pub mod catalog;

use crate::answers::AnswerSource;
use crate::errors::ScopeResult;
use crate::models::{CategoryResult, FactorCategory, FactorQuestion};
use crate::ui::Console;

/// Why a raw answer was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotNumeric,
    OutOfRange,
    /// Numeric, but negative or fractional where a count is expected
    NotWholeNumber,
}

impl Rejection {
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::NotNumeric => "Invalid input. Please enter a numeric value.",
            Rejection::OutOfRange => "Please enter a valid option number.",
            Rejection::NotWholeNumber => "Please enter a whole number of zero or more.",
        }
    }
}

/// Parse a raw answer into a 1-based selection for `question`.
///
/// Surrounding whitespace and colons are ignored, so `" 2:"` selects option 2.
pub fn parse_selection(raw: &str, question: &FactorQuestion) -> Result<u32, Rejection> {
    let cleaned = raw.trim_matches(|c: char| c == ':' || c.is_whitespace());
    let value: i64 = cleaned.parse().map_err(|_| Rejection::NotNumeric)?;

    u32::try_from(value)
        .ok()
        .filter(|&selection| question.accepts(selection))
        .ok_or(Rejection::OutOfRange)
}

/// Ask one question until a valid selection arrives.
pub fn ask_selection<A>(
    question: &FactorQuestion,
    answers: &mut A,
    console: &Console,
) -> ScopeResult<u32>
where
    A: AnswerSource + ?Sized,
{
    loop {
        console.prompt("~");
        let raw = answers.next_answer()?;

        match parse_selection(&raw, question) {
            Ok(selection) => {
                log::debug!("{} -> {}", question.prompt, selection);
                return Ok(selection);
            }
            Err(rejection) => {
                log::debug!("Rejected answer {:?} for {}: {:?}", raw, question.prompt, rejection);
                console.error(rejection.message());
            }
        }
    }
}

/// Run the questionnaire for one category.
pub fn score_category<A>(
    category: &FactorCategory,
    answers: &mut A,
    console: &Console,
) -> ScopeResult<CategoryResult>
where
    A: AnswerSource + ?Sized,
{
    console.section(category.name());

    let mut selections = Vec::with_capacity(category.questions().len());
    for question in category.questions() {
        console.question(question);
        selections.push(ask_selection(question, answers, console)?);
    }

    let result = CategoryResult::from_selections(category, selections);
    log::info!(
        "{}: {}/{} ({:.2}%)",
        result.category,
        result.raw_score,
        result.max_possible_score,
        result.normalized_percent
    );

    Ok(result)
}
