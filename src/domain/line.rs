//! Line classification for indentation-structured config text

use serde::{Deserialize, Serialize};

use crate::domain::error::{TreeBuildError, TreeBuildResult};

/// Comment marker and block terminator of a config dialect.
///
/// Defaults match classic network-CLI show output: `!` comments, `end`
/// closing all open blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Dialect {
    /// First non-whitespace character marking a comment line
    pub comment_marker: char,
    /// Keyword closing open blocks (case-sensitive, matched against the trimmed line)
    pub terminator: String,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            comment_marker: '!',
            terminator: "end".to_string(),
        }
    }
}

/// Classification tag for one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Terminator,
    Content,
}

/// One classified input line. Immutable once classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLine {
    /// 1-based line number in the input
    pub number: usize,
    pub kind: LineKind,
    /// Count of leading indentation units (0 for blank/comment lines)
    pub depth: usize,
    /// Trimmed content
    pub text: String,
}

/// Classifies lines one at a time.
///
/// The indentation unit (one space or one tab) is pinned by the first
/// indented line; any later deviation is a structural error.
#[derive(Debug)]
pub struct LineClassifier {
    dialect: Dialect,
    indent_unit: Option<char>,
}

impl LineClassifier {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            indent_unit: None,
        }
    }

    pub fn classify(&mut self, number: usize, raw: &str) -> TreeBuildResult<ConfigLine> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Ok(ConfigLine {
                number,
                kind: LineKind::Blank,
                depth: 0,
                text: String::new(),
            });
        }

        if trimmed.starts_with(self.dialect.comment_marker) {
            return Ok(ConfigLine {
                number,
                kind: LineKind::Comment,
                depth: 0,
                text: trimmed.to_string(),
            });
        }

        let depth = self.indent_depth(number, raw)?;
        let kind = if trimmed == self.dialect.terminator {
            LineKind::Terminator
        } else {
            LineKind::Content
        };

        Ok(ConfigLine {
            number,
            kind,
            depth,
            text: trimmed.to_string(),
        })
    }

    /// Depth of a line's leading whitespace, validating indent consistency.
    fn indent_depth(&mut self, number: usize, raw: &str) -> TreeBuildResult<usize> {
        let indent: Vec<char> = raw
            .chars()
            .take_while(|c| *c == ' ' || *c == '\t')
            .collect();

        let Some(&first) = indent.first() else {
            return Ok(0);
        };

        if indent.iter().any(|&c| c != first) {
            return Err(TreeBuildError::InconsistentIndent {
                line: number,
                text: raw.trim_end().to_string(),
                reason: "leading whitespace mixes tabs and spaces".to_string(),
            });
        }

        match self.indent_unit {
            None => self.indent_unit = Some(first),
            Some(unit) if unit != first => {
                return Err(TreeBuildError::InconsistentIndent {
                    line: number,
                    text: raw.trim_end().to_string(),
                    reason: format!(
                        "indentation unit changed from {:?} to {:?}",
                        unit, first
                    ),
                });
            }
            Some(_) => {}
        }

        Ok(indent.len())
    }
}
