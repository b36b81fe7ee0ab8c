//! Path resolution against the fixed hierarchy
//!
//! Expressions are split on `/` and walked left to right from the current
//! directory:
//!
//! - `..` goes up one level (a no-op at `~`)
//! - `.` and empty segments are skipped
//! - `~` jumps back to the root
//! - anything else must name a child directory of the cursor
//!
//! Resolution works on a copy of the current path, so a failure halfway
//! through an expression leaves the caller's path untouched.

use super::{VfsNode, VfsPath, VirtualFs};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Some segment of the expression does not exist. Carries the whole
    /// expression as typed, for the error message.
    #[error("{expression}: No such file or directory")]
    NotFound { expression: String },
}

impl ResolveError {
    fn not_found(expression: &str) -> Self {
        ResolveError::NotFound {
            expression: expression.to_string(),
        }
    }
}

impl VirtualFs {
    /// Resolve a directory expression relative to `current`.
    ///
    /// An empty expression or a bare `~` always resolves to the root.
    pub fn resolve(&self, current: &VfsPath, expression: &str) -> Result<VfsPath, ResolveError> {
        if expression.is_empty() || expression == "~" {
            return Ok(VfsPath::root());
        }

        let mut cursor = current.clone();
        for segment in expression.split('/') {
            match segment {
                ".." => cursor.pop(),
                "." | "" => {}
                "~" => cursor = VfsPath::root(),
                name => {
                    let is_child_dir = self
                        .node(&cursor)
                        .is_some_and(|node| node.children().iter().any(|c| c == name))
                        && self.node(&cursor.join(name)).is_some_and(VfsNode::is_dir);
                    if !is_child_dir {
                        return Err(ResolveError::not_found(expression));
                    }
                    cursor.push(name);
                }
            }
        }

        Ok(cursor)
    }

    /// Resolve a file expression (`README.md`, `projects/tara/details.txt`)
    /// to its leaf node. A non-empty directory part goes through
    /// [`resolve`]; the final segment must name a leaf of that directory.
    ///
    /// An empty directory part (`/README.md`) stays in `current`, the same
    /// way `cd /` does.
    ///
    /// [`resolve`]: VirtualFs::resolve
    pub fn resolve_file(&self, current: &VfsPath, expression: &str) -> Result<&VfsNode, ResolveError> {
        let (dir, name) = match expression.rsplit_once('/') {
            Some(("", name)) => (Ok(current.clone()), name),
            Some((dir_part, name)) => (self.resolve(current, dir_part), name),
            None => (Ok(current.clone()), expression),
        };
        let dir = dir.map_err(|_| ResolveError::not_found(expression))?;

        self.node(&dir.join(name))
            .filter(|node| !node.is_dir())
            .ok_or_else(|| ResolveError::not_found(expression))
    }
}
