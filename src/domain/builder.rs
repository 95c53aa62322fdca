//! Ancestor-stack construction of command trees from raw config text

use tracing::{debug, instrument};

use crate::domain::error::{TreeBuildError, TreeBuildResult};
use crate::domain::line::{ConfigLine, Dialect, LineClassifier, LineKind};
use crate::domain::tree::{CommandTree, NodeValue};

/// One currently-open block: a command whose sub-commands are still being
/// collected.
#[derive(Debug)]
struct OpenBlock {
    depth: usize,
    command: String,
    line: usize,
    children: CommandTree,
}

/// Builds an ordered command tree from indentation-delimited text.
///
/// The chain of open ancestors is an explicit stack; the (conceptual) root
/// sits below every possible depth, so `close_to_depth(0)` drains the stack.
#[derive(Debug)]
pub struct TreeBuilder {
    classifier: LineClassifier,
    stack: Vec<OpenBlock>,
    root: CommandTree,
}

impl TreeBuilder {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            classifier: LineClassifier::new(dialect),
            stack: Vec::new(),
            root: CommandTree::new(),
        }
    }

    /// Parse the whole text into a normalized tree.
    ///
    /// Fails on empty/whitespace-only input, on inconsistent indentation and
    /// on duplicate sibling commands. All-or-nothing: no partial tree.
    #[instrument(level = "debug", skip(self, text))]
    pub fn build(mut self, text: &str) -> TreeBuildResult<CommandTree> {
        if text.trim().is_empty() {
            return Err(TreeBuildError::EmptyInput);
        }

        for (index, raw) in text.lines().enumerate() {
            let line = self.classifier.classify(index + 1, raw)?;
            match line.kind {
                LineKind::Blank | LineKind::Comment => {}
                // Permissive close: a terminator with nothing open is a no-op.
                LineKind::Terminator => self.close_to_depth(line.depth)?,
                LineKind::Content => self.open(line)?,
            }
        }
        self.close_to_depth(0)?;

        let mut root = self.root;
        root.normalize();
        debug!(top_level = root.len(), "built command tree");
        Ok(root)
    }

    /// A content line at depth d ends the scope of every open block at depth
    /// ≥ d and becomes the new innermost open block.
    fn open(&mut self, line: ConfigLine) -> TreeBuildResult<()> {
        self.close_to_depth(line.depth)?;
        self.stack.push(OpenBlock {
            depth: line.depth,
            command: line.text,
            line: line.number,
            children: CommandTree::new(),
        });
        Ok(())
    }

    /// Close every open block with depth ≥ `depth`, attaching each to the
    /// block below it (or to the root). Siblings close in the order they
    /// opened, so insertion order matches the input as written.
    fn close_to_depth(&mut self, depth: usize) -> TreeBuildResult<()> {
        while self.stack.last().is_some_and(|block| block.depth >= depth) {
            let Some(block) = self.stack.pop() else {
                break;
            };
            let value = if block.children.is_empty() {
                NodeValue::Empty
            } else {
                NodeValue::Children(block.children)
            };
            let parent = match self.stack.last_mut() {
                Some(open) => &mut open.children,
                None => &mut self.root,
            };
            if parent.contains_key(&block.command) {
                return Err(TreeBuildError::DuplicateCommand {
                    command: block.command,
                    line: block.line,
                });
            }
            parent.insert(block.command, value);
        }
        Ok(())
    }
}

/// Parse `text` into a normalized command tree using `dialect`.
pub fn build_tree(text: &str, dialect: Dialect) -> TreeBuildResult<CommandTree> {
    TreeBuilder::new(dialect).build(text)
}
