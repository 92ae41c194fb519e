//! Tokens module - token model, categories and the category classifier.

mod classifier;
mod tokens_model;

pub use classifier::classify;
pub use tokens_model::{Category, Token};
