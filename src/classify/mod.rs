//! Chunk classification
//!
//! Assigns every dependency to a named chunk based on the configured
//! pattern rules, collecting the unmatched remainder into `vendor`.

mod name;

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::config::{Expression, Patterns};
use crate::error::ConfigError;

pub use name::derive_chunk_name;

/// Reserved key for the catch-all chunk
pub const VENDOR_CHUNK: &str = "vendor";

/// Mapping from chunk name to the dependencies forced into that chunk.
///
/// Key order follows rule declaration order (prefix rules first, then
/// suffix, then include), with `vendor` always last.
pub type ChunkMap = IndexMap<String, Vec<String>>;

/// Matching strategy for a pattern rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Dependency name starts with the match string
    Prefix,
    /// Dependency name ends with the match string
    Suffix,
    /// Dependency name contains the match string
    Include,
}

impl PatternKind {
    /// Test a dependency name against a match string
    pub fn matches(&self, dep: &str, pattern: &str) -> bool {
        match self {
            PatternKind::Prefix => dep.starts_with(pattern),
            PatternKind::Suffix => dep.ends_with(pattern),
            PatternKind::Include => dep.contains(pattern),
        }
    }

    /// Label used in configuration diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            PatternKind::Prefix => "prefix",
            PatternKind::Suffix => "suffix",
            PatternKind::Include => "include",
        }
    }
}

/// An expression resolved to its match string and target chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub kind: PatternKind,
    pub match_string: String,
    pub chunk_name: String,
}

/// Resolve the configured patterns into an ordered rule list.
///
/// Rules come out in evaluation order: prefix expressions first, then
/// suffix, then include, each in declaration order. Malformed pairs,
/// empty components and chunk-name collisions are rejected here so the
/// classifier never sees an invalid rule. `vendor` cannot be claimed by
/// an expression.
pub fn resolve_rules(patterns: &Patterns) -> Result<Vec<Rule>, ConfigError> {
    let kinds = [
        (PatternKind::Prefix, patterns.prefix.as_deref()),
        (PatternKind::Suffix, patterns.suffix.as_deref()),
        (PatternKind::Include, patterns.include.as_deref()),
    ];

    let mut rules = Vec::new();
    let mut seen = HashSet::new();

    for (kind, expressions) in kinds {
        for exp in expressions.unwrap_or_default() {
            let (match_string, chunk_name) = match exp {
                Expression::Pattern(pattern) => (pattern.clone(), derive_chunk_name(pattern)),
                Expression::Named(parts) => match parts.as_slice() {
                    [match_string, chunk_name] => (match_string.clone(), chunk_name.clone()),
                    _ => return Err(ConfigError::malformed(kind.label(), exp)),
                },
            };

            if match_string.is_empty() || chunk_name.is_empty() {
                return Err(ConfigError::malformed(kind.label(), exp));
            }

            if chunk_name == VENDOR_CHUNK {
                return Err(ConfigError::ReservedChunkName { name: chunk_name });
            }

            if !seen.insert(chunk_name.clone()) {
                return Err(ConfigError::DuplicateChunkName { name: chunk_name });
            }

            rules.push(Rule {
                kind,
                match_string,
                chunk_name,
            });
        }
    }

    Ok(rules)
}

/// Compute the chunk mapping for a dependency list.
///
/// Rules are evaluated in order and each dependency is claimed by the
/// first rule that matches it; later rules never reassign a claimed
/// dependency. Rules that match nothing still produce their key with an
/// empty list. Whatever remains unclaimed lands in `vendor`, preserving
/// the original dependency order.
pub fn classify(deps: &[String], patterns: &Patterns) -> Result<ChunkMap, ConfigError> {
    let rules = resolve_rules(patterns)?;

    let mut chunks = ChunkMap::with_capacity(rules.len() + 1);
    let mut claimed: HashSet<&str> = HashSet::new();

    for rule in &rules {
        let matched: Vec<&str> = deps
            .iter()
            .map(String::as_str)
            .filter(|dep| !claimed.contains(*dep) && rule.kind.matches(dep, &rule.match_string))
            .collect();

        debug!(
            "chunk '{}' claimed {} dependencies ({} '{}')",
            rule.chunk_name,
            matched.len(),
            rule.kind.label(),
            rule.match_string
        );

        claimed.extend(matched.iter().copied());
        chunks.insert(
            rule.chunk_name.clone(),
            matched.iter().map(|dep| (*dep).to_string()).collect(),
        );
    }

    let vendor: Vec<String> = deps
        .iter()
        .filter(|dep| !claimed.contains(dep.as_str()))
        .cloned()
        .collect();
    chunks.insert(VENDOR_CHUNK.to_string(), vendor);

    Ok(chunks)
}
