/// 7W analysis module
///
/// This module handles:
/// - The statically typed analysis result schema (result.rs)
/// - The Gemini generateContent client and its error taxonomy (client.rs)

pub mod client;
pub mod result;

pub use client::{AnalysisClient, AnalysisError};
pub use result::AnalysisResult;
