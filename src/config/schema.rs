//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// A single pattern expression.
///
/// Either a bare match string, from which the chunk name is derived, or
/// a `[pattern, name]` pair naming the chunk explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expression {
    /// Bare match string; the chunk name is derived from it
    Pattern(String),

    /// `[pattern, name]` pair; must hold exactly two elements
    Named(Vec<String>),
}

/// Pattern rules grouped by matching strategy.
///
/// All fields are optional; an absent field contributes no chunks.
/// Evaluation order is fixed: prefix rules first, then suffix, then
/// include, each in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patterns {
    /// Match dependency names by leading characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<Vec<Expression>>,

    /// Match dependency names by trailing characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<Vec<Expression>>,

    /// Match dependency names by substring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<Expression>>,
}

impl Patterns {
    /// Check whether any rules are configured
    pub fn is_empty(&self) -> bool {
        self.prefix.is_none() && self.suffix.is_none() && self.include.is_none()
    }
}
