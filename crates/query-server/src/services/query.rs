//! Query classification and backend dispatch.

use tracing::{info, warn};
use tutor_core::{ComputeEngine, TextCompletion};

const NO_RESULT: &str = "No result found.";

/// Tokens that mark a query as math-like. Checked against the raw query,
/// so "square"/"cube" only match in lowercase, same as "=" only matches
/// literally. Known to over-match (e.g. "IMO = ...") and under-match
/// (e.g. "prove the Pythagorean theorem"); kept as-is on purpose.
const MATH_TOKENS: [&str; 7] = ["+", "-", "*", "/", "=", "square", "cube"];

/// Classifies a query as math-like.
///
/// True when the lowercase form contains "math" or the raw query contains
/// any of the math tokens. Pure and order-independent.
pub fn is_math_like(query: &str) -> bool {
    query.to_lowercase().contains("math")
        || MATH_TOKENS.iter().any(|token| query.contains(token))
}

/// Dispatches a query to exactly one backend and returns a textual answer.
///
/// Backend failures never propagate out of this function; they are folded
/// into a descriptive string so the route always answers with a body.
pub async fn process(
    llm: &dyn TextCompletion,
    compute: &dyn ComputeEngine,
    query: &str,
) -> String {
    if is_math_like(query) {
        info!("Routing to {}", compute.name());
        fetch_computed_answer(compute, query).await
    } else {
        info!("Routing to {}", llm.name());
        fetch_generated_answer(llm, query).await
    }
}

async fn fetch_computed_answer(compute: &dyn ComputeEngine, query: &str) -> String {
    match compute.compute(query).await {
        Ok(answer) if answer.trim().is_empty() => NO_RESULT.to_string(),
        Ok(answer) => answer,
        Err(e) => {
            warn!("{} call failed: {}", compute.name(), e);
            format!("Error fetching from {}: {}", compute.name(), e)
        }
    }
}

async fn fetch_generated_answer(llm: &dyn TextCompletion, query: &str) -> String {
    match llm.complete(None, query).await {
        Ok(answer) if answer.trim().is_empty() => NO_RESULT.to_string(),
        Ok(answer) => answer,
        Err(e) => {
            warn!("{} call failed: {}", llm.name(), e);
            format!("Error fetching from {}: {}", llm.name(), e)
        }
    }
}
