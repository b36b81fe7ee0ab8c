//! Read-only virtual filesystem over the portfolio content
//!
//! The tree is built once from a [`Portfolio`] and never mutated:
//!
//! ```text
//! ~
//! ├── projects/<slug>/{README.md, details.txt}
//! ├── skills/<category>/<Skill>.txt
//! ├── experience/<n>-<company>/{details.txt, description.txt}
//! ├── about.txt
//! └── contact.txt
//! ```
//!
//! - [`VfsPath`]: normalized absolute path (`~`, `~/projects/drai-ai`)
//! - [`VfsNode`]: one addressable location, directory or leaf
//! - [`VirtualFs`]: the node table plus path resolution (see [`resolve`])
//!
//! Leaf content is rendered at construction time, so reading a file is a
//! plain lookup.

mod documents;
pub mod resolve;

pub use resolve::ResolveError;

use crate::portfolio::{Portfolio, PORTFOLIO};
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Display prefix of the root directory
pub const ROOT: &str = "~";

/// Absolute path inside the virtual filesystem, stored as segments below `~`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VfsPath {
    segments: Vec<String>,
}

impl VfsPath {
    pub fn root() -> Self {
        VfsPath::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment, `None` at the root
    pub fn name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn join(&self, name: &str) -> Self {
        let mut path = self.clone();
        path.push(name);
        path
    }

    pub fn push(&mut self, name: &str) {
        self.segments.push(name.to_string());
    }

    /// Drop the last segment. Popping the root leaves the root.
    pub fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for VfsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ROOT)?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

/// A path string that does not start at `~`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}: not an absolute path")]
pub struct PathParseError(String);

impl FromStr for VfsPath {
    type Err = PathParseError;

    /// Parse the display form (`~/skills/nlp-vector-db`). Does not check that
    /// the path exists.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(ROOT)
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
            .ok_or_else(|| PathParseError(s.to_string()))?;
        let segments = rest
            .split('/')
            .filter(|seg| !seg.is_empty())
            .map(str::to_string)
            .collect();
        Ok(VfsPath { segments })
    }
}

/// Node variants of the fixed hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `~`
    Root,
    /// `~/projects`, `~/skills`, `~/experience`
    Category,
    /// A single project, skill category or internship directory
    Item,
    /// A readable file
    Leaf,
}

impl NodeKind {
    pub fn is_dir(self) -> bool {
        !matches!(self, NodeKind::Leaf)
    }
}

/// One addressable location in the filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VfsNode {
    path: VfsPath,
    kind: NodeKind,
    children: Vec<String>,
    content: Vec<String>,
}

impl VfsNode {
    pub fn path(&self) -> &VfsPath {
        &self.path
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Child names in listing order (empty for leaves)
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Rendered file content (empty for directories)
    pub fn content(&self) -> &[String] {
        &self.content
    }
}

/// The node table
#[derive(Debug, Clone)]
pub struct VirtualFs {
    portfolio: &'static Portfolio,
    nodes: FxHashMap<VfsPath, VfsNode>,
}

impl VirtualFs {
    /// Build the tree from the compiled-in [`PORTFOLIO`]
    pub fn new() -> Self {
        Self::from_portfolio(&PORTFOLIO)
    }

    pub fn from_portfolio(portfolio: &'static Portfolio) -> Self {
        let mut builder = Builder::default();
        let root = VfsPath::root();

        let projects = root.join("projects");
        for project in portfolio.projects {
            let dir = projects.join(project.slug);
            builder.leaf(&dir, "README.md", documents::project_readme(project));
            builder.leaf(&dir, "details.txt", documents::project_details(project));
            builder.dir(dir, NodeKind::Item, ["README.md", "details.txt"]);
        }
        builder.dir(
            projects,
            NodeKind::Category,
            portfolio.projects.iter().map(|p| p.slug),
        );

        let skills = root.join("skills");
        for category in portfolio.skills {
            let dir = skills.join(category.key);
            let mut files = Vec::with_capacity(category.skills.len());
            for skill in category.skills {
                let file = format!("{}.txt", skill);
                let note = documents::skill_note(skill, portfolio.skill_description(skill));
                builder.leaf(&dir, &file, note);
                files.push(file);
            }
            builder.dir(dir, NodeKind::Item, files);
        }
        builder.dir(
            skills,
            NodeKind::Category,
            portfolio.skills.iter().map(|c| c.key),
        );

        let experience = root.join("experience");
        let mut slugs = Vec::with_capacity(portfolio.internships.len());
        for (slug, internship) in portfolio.experience_slugs() {
            let dir = experience.join(&slug);
            builder.leaf(&dir, "details.txt", documents::internship_details(internship));
            builder.leaf(
                &dir,
                "description.txt",
                documents::internship_description(internship),
            );
            builder.dir(dir, NodeKind::Item, ["details.txt", "description.txt"]);
            slugs.push(slug);
        }
        builder.dir(experience, NodeKind::Category, slugs);

        builder.leaf(&root, "about.txt", documents::about(&portfolio.profile));
        builder.leaf(&root, "contact.txt", documents::contact(&portfolio.profile));
        builder.dir(
            root,
            NodeKind::Root,
            ["projects", "skills", "experience", "about.txt", "contact.txt"],
        );

        VirtualFs {
            portfolio,
            nodes: builder.nodes,
        }
    }

    /// The content this tree was built from
    pub fn portfolio(&self) -> &'static Portfolio {
        self.portfolio
    }

    pub fn node(&self, path: &VfsPath) -> Option<&VfsNode> {
        self.nodes.get(path)
    }

    pub fn root(&self) -> Option<&VfsNode> {
        self.node(&VfsPath::root())
    }

    /// Children of the directory at `path` as shown by `ls`: directories
    /// carry a trailing `/`. `None` if `path` is not a directory.
    pub fn listing(&self, path: &VfsPath) -> Option<Vec<String>> {
        let node = self.node(path).filter(|n| n.is_dir())?;
        let entries = node
            .children
            .iter()
            .map(|name| match self.node(&path.join(name)) {
                Some(child) if child.is_dir() => format!("{}/", name),
                _ => name.clone(),
            })
            .collect();
        Some(entries)
    }

    /// Every directory path in the tree, for exhaustive checks
    pub fn directories(&self) -> impl Iterator<Item = &VfsPath> {
        self.nodes.values().filter(|n| n.is_dir()).map(|n| &n.path)
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
struct Builder {
    nodes: FxHashMap<VfsPath, VfsNode>,
}

impl Builder {
    fn dir<I, S>(&mut self, path: VfsPath, kind: NodeKind, children: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let node = VfsNode {
            path: path.clone(),
            kind,
            children: children.into_iter().map(Into::into).collect(),
            content: Vec::new(),
        };
        self.nodes.insert(path, node);
    }

    fn leaf(&mut self, parent: &VfsPath, name: &str, content: Vec<String>) {
        let path = parent.join(name);
        let node = VfsNode {
            path: path.clone(),
            kind: NodeKind::Leaf,
            children: Vec::new(),
            content,
        };
        self.nodes.insert(path, node);
    }
}
