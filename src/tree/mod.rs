//! Node model: an arena of filesystem entries mirroring one directory hierarchy.

pub mod layout;
pub mod walk;

use std::ffi::OsString;
use std::ops::Range;
use std::path::Path;

use crate::error::Result;

pub use layout::{render_line, size_annotation};
pub use walk::{DirLister, WalkdirLister};

/// What the filesystem layer reports about a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Base name of the entry, exactly as the filesystem reports it.
    pub name: OsString,
    /// Whether the entry is a directory (recursion applies, no size annotation).
    pub is_dir: bool,
    /// Size in bytes; only meaningful for non-directories.
    pub size: u64,
}

impl EntryInfo {
    pub fn dir(name: impl Into<OsString>) -> Self {
        EntryInfo {
            name: name.into(),
            is_dir: true,
            size: 0,
        }
    }

    pub fn file(name: impl Into<OsString>, size: u64) -> Self {
        EntryInfo {
            name: name.into(),
            is_dir: false,
            size,
        }
    }
}

/// Handle of a node inside a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// One arena slot.
#[derive(Debug, Clone)]
pub struct Node {
    pub info: EntryInfo,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena holding the root sentinel and the generations currently being rendered.
///
/// Generations are attached and released in stack order, so a generation that
/// is released is always the tail of the arena and every child list stays
/// sorted by id.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Build the root sentinel from the entry at `path`.
    pub fn create_root(lister: &impl DirLister, path: &Path) -> Result<Tree> {
        Ok(Tree::with_root(lister.stat(path)?))
    }

    /// Build the root sentinel from already-known entry info.
    pub fn with_root(info: EntryInfo) -> Tree {
        Tree {
            nodes: vec![Node {
                info,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        self.node(id).parent.is_none()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn info(&self, id: NodeId) -> &EntryInfo {
        &self.node(id).info
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append one child to `parent`'s generation. Never touches the filesystem.
    pub fn create_child(&mut self, parent: NodeId, info: EntryInfo) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            info,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Attach a whole generation in the given order and return the range of
    /// positions it occupies among `parent`'s children.
    pub fn attach_generation(
        &mut self,
        parent: NodeId,
        entries: impl IntoIterator<Item = EntryInfo>,
    ) -> Range<usize> {
        let start = self.children(parent).len();
        for info in entries {
            self.create_child(parent, info);
        }
        start..self.children(parent).len()
    }

    /// Drop `parent`'s generation (and anything below it) from the arena.
    pub fn release_generation(&mut self, parent: NodeId) {
        let Some(&first) = self.nodes[parent.0].children.first() else {
            return;
        };
        debug_assert!(
            self.nodes[first.0..].iter().all(|n| n.parent.is_some_and(|p| p >= parent)),
            "released generation must be the arena tail"
        );
        self.nodes.truncate(first.0);
        self.nodes[parent.0].children.clear();
    }

    /// Zero-based index of `id` among its siblings. The root is at position 0.
    pub fn position(&self, id: NodeId) -> usize {
        match self.parent(id) {
            // Ids only grow while a generation is alive, so every child list is sorted.
            Some(parent) => self
                .children(parent)
                .binary_search(&id)
                .unwrap_or_else(|_| unreachable!("node missing from its parent's children")),
            None => 0,
        }
    }

    /// Size of the generation `id` belongs to. The root counts as its own
    /// single-node generation.
    pub fn sibling_count(&self, id: NodeId) -> usize {
        match self.parent(id) {
            Some(parent) => self.children(parent).len(),
            None => 1,
        }
    }

    pub fn is_last_sibling(&self, id: NodeId) -> bool {
        self.position(id) + 1 == self.sibling_count(id)
    }

    /// Distance from the root (root = 0).
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count() + usize::from(!self.is_root(id))
    }

    /// Rendered ancestors of `id`, parent first, stopping before the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&a| self.parent(a))
            .take_while(move |&a| !self.is_root(a))
    }
}
