use std::time::SystemTime;

use derive_more::Display;
use hashlink::LinkedHashMap;

/// Handle to a node stored in a [`Tree`](super::Tree).
///
/// Ids are only meaningful for the tree that issued them and are never
/// handed out for a node that has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) usize);

/// The kind of a filesystem node. Rendered the way `ls -l` prefixes entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NodeKind {
    #[display("d")]
    Directory,
    #[display("-")]
    File,
}

/// Kind-specific payload. Only directories carry a children map, so a file
/// cannot acquire children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum NodeContents {
    File,
    Directory {
        children: LinkedHashMap<String, NodeId>,
    },
}

#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    permissions: String,
    modified: SystemTime,
    parent: Option<NodeId>,
    contents: NodeContents,
}

impl Node {
    pub(super) fn new(
        name: String,
        kind: NodeKind,
        permissions: String,
        modified: SystemTime,
        parent: Option<NodeId>,
    ) -> Self {
        let contents = match kind {
            NodeKind::File => NodeContents::File,
            NodeKind::Directory => NodeContents::Directory {
                children: LinkedHashMap::new(),
            },
        };

        Node {
            name,
            permissions,
            modified,
            parent,
            contents,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        match self.contents {
            NodeContents::File => NodeKind::File,
            NodeContents::Directory { .. } => NodeKind::Directory,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind() == NodeKind::Directory
    }

    pub fn permissions(&self) -> &str {
        &self.permissions
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    /// `None` only for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Number of direct children; always 0 for files.
    pub fn child_count(&self) -> usize {
        self.children().map_or(0, LinkedHashMap::len)
    }

    pub(super) fn children(&self) -> Option<&LinkedHashMap<String, NodeId>> {
        match &self.contents {
            NodeContents::Directory { children } => Some(children),
            NodeContents::File => None,
        }
    }

    pub(super) fn children_mut(&mut self) -> Option<&mut LinkedHashMap<String, NodeId>> {
        match &mut self.contents {
            NodeContents::Directory { children } => Some(children),
            NodeContents::File => None,
        }
    }

    pub(super) fn child(&self, name: &str) -> Option<NodeId> {
        self.children().and_then(|children| children.get(name).copied())
    }

    /// Moves `modified` forward to `now`. A clock that went backwards never
    /// makes a node older than it already is.
    pub(super) fn touch(&mut self, now: SystemTime) {
        self.modified = self.modified.max(now);
    }
}

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    pub name: &'a str,
    pub kind: NodeKind,
    pub permissions: &'a str,
    pub modified: SystemTime,
}

impl<'a> From<&'a Node> for Entry<'a> {
    fn from(node: &'a Node) -> Self {
        Entry {
            name: node.name(),
            kind: node.kind(),
            permissions: node.permissions(),
            modified: node.modified(),
        }
    }
}
