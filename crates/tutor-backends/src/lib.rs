//! Reqwest clients for the remote AI and knowledge backends.
//!
//! `GeminiClient` talks to the Generative Language API for free-form text,
//! `WolframClient` to the WolframAlpha short-answer API for computed results.
//! Both implement the `tutor-core` backend traits.

mod gemini;
mod wolfram;

pub use gemini::GeminiClient;
pub use wolfram::WolframClient;
