//! Configuration error taxonomy

use thiserror::Error;

use crate::config::Expression;

/// Errors raised while resolving pattern rules from configuration.
///
/// Invalid rules are rejected instead of coerced: a coerced rule either
/// produces an invalid chunk key or strands dependencies outside every
/// chunk in the final mapping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An expression was not a pattern string or a two-element pair, or
    /// had an empty match string or chunk name
    #[error("malformed {kind} expression {expression}: expected \"pattern\" or [\"pattern\", \"chunk-name\"]")]
    MalformedExpression {
        kind: &'static str,
        expression: String,
    },

    /// The same chunk name was produced by more than one expression
    #[error("chunk name {name:?} is assigned by more than one expression")]
    DuplicateChunkName { name: String },

    /// An expression tried to claim the catch-all chunk
    #[error("chunk name {name:?} is reserved for unmatched dependencies")]
    ReservedChunkName { name: String },
}

impl ConfigError {
    /// Malformed-expression error with the offending value rendered for
    /// diagnostics
    pub fn malformed(kind: &'static str, expression: &Expression) -> Self {
        let rendered = match expression {
            Expression::Pattern(pattern) => format!("{pattern:?}"),
            Expression::Named(parts) => format!("{parts:?}"),
        };

        Self::MalformedExpression {
            kind,
            expression: rendered,
        }
    }
}
