use hashlink::LinkedHashMap;
use snafu::{OptionExt, Snafu, ensure};
use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::node::{Entry, Node, NodeId, NodeKind};

pub const PATH_SEPARATOR: &str = "/";
pub const PARENT_DIRECTORY: &str = "..";
pub const DEFAULT_PERMISSIONS: &str = "755";

/// A rooted tree of directories and files with a current-directory cursor.
///
/// Nodes live in an arena owned by the tree and refer to each other by
/// [`NodeId`]: a directory maps child names to ids, every node except the
/// root keeps the id of its parent. All operations act on the children of
/// the cursor; operands are single names, never multi-segment paths.
#[derive(Debug)]
pub struct Tree<C = SystemClock> {
    nodes: Vec<Option<Node>>,
    vacant: Vec<usize>,
    root: NodeId,
    cursor: NodeId,
    default_permissions: String,
    clock: C,
}

impl Tree {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Tree<C> {
    pub fn with_clock(clock: C) -> Self {
        let root = Node::new(
            String::new(),
            NodeKind::Directory,
            DEFAULT_PERMISSIONS.to_string(),
            clock.now(),
            None,
        );

        Tree {
            nodes: vec![Some(root)],
            vacant: Vec::new(),
            root: NodeId(0),
            cursor: NodeId(0),
            default_permissions: DEFAULT_PERMISSIONS.to_string(),
            clock,
        }
    }

    /// Permissions string given to nodes created from now on.
    pub fn with_default_permissions(mut self, permissions: impl Into<String>) -> Self {
        self.default_permissions = permissions.into();
        self
    }

    pub fn is_at_root(&self) -> bool {
        self.cursor == self.root
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.vacant.len()
    }

    /// Finds a direct child of the current directory.
    #[cfg(test)]
    pub fn lookup(&self, name: &str) -> Option<&Node> {
        self.cursor_node().child(name).map(|id| self.get(id))
    }

    /// Absolute path of the current directory, `/` at the root.
    pub fn current_path(&self) -> String {
        let mut names = Vec::new();
        let mut current = self.get(self.cursor);
        while let Some(parent) = current.parent() {
            names.push(current.name());
            current = self.get(parent);
        }
        names.reverse();

        format!("{PATH_SEPARATOR}{}", names.join(PATH_SEPARATOR))
    }

    /// Entries of the current directory in insertion order.
    pub fn list(&self) -> impl Iterator<Item = Entry<'_>> {
        self.cursor_node()
            .children()
            .into_iter()
            .flat_map(|children| children.values())
            .map(|&id| Entry::from(self.get(id)))
    }

    pub fn make_directory(&mut self, name: &str) -> Result<(), TreeError> {
        self.insert(name, NodeKind::Directory)
    }

    /// Creates an empty file, or refreshes the modification time of an
    /// existing entry of either kind.
    pub fn touch(&mut self, name: &str) -> Result<(), TreeError> {
        ensure!(!name.is_empty(), InvalidNameSnafu);

        match self.cursor_node().child(name) {
            Some(id) => {
                let now = self.clock.now();
                self.get_mut(id).touch(now);
                debug!("Touched '{}' in {}", name, self.current_path());
                Ok(())
            }
            None => self.insert(name, NodeKind::File),
        }
    }

    /// Moves the cursor into a child directory, or to the parent for `..`.
    /// `..` at the root leaves the cursor where it is.
    pub fn change_directory(&mut self, name: &str) -> Result<(), TreeError> {
        ensure!(!name.is_empty(), InvalidNameSnafu);

        if name == PARENT_DIRECTORY {
            if self.is_at_root() {
                debug!("Already at the root, staying there");
                return Ok(());
            }
            if let Some(parent) = self.cursor_node().parent() {
                self.cursor = parent;
            }
            debug!("Changed directory to {}", self.current_path());
            return Ok(());
        }

        let id = self.cursor_node().child(name).context(NotFoundSnafu { name })?;
        ensure!(self.get(id).is_directory(), NotADirectorySnafu { name });

        self.cursor = id;
        debug!("Changed directory to {}", self.current_path());
        Ok(())
    }

    pub fn remove_file(&mut self, name: &str) -> Result<(), TreeError> {
        ensure!(!name.is_empty(), InvalidNameSnafu);
        let id = self.cursor_node().child(name).context(NotFoundSnafu { name })?;
        ensure!(!self.get(id).is_directory(), IsADirectorySnafu { name });

        self.detach(name, id);
        Ok(())
    }

    /// Removes a child directory, which must be empty.
    pub fn remove_directory(&mut self, name: &str) -> Result<(), TreeError> {
        ensure!(!name.is_empty(), InvalidNameSnafu);
        let id = self.cursor_node().child(name).context(NotFoundSnafu { name })?;
        let node = self.get(id);
        ensure!(node.is_directory(), NotADirectorySnafu { name });
        ensure!(node.child_count() == 0, NotEmptySnafu { name });

        self.detach(name, id);
        Ok(())
    }

    fn insert(&mut self, name: &str, kind: NodeKind) -> Result<(), TreeError> {
        ensure!(!name.is_empty(), InvalidNameSnafu);
        ensure!(
            self.cursor_node().child(name).is_none(),
            AlreadyExistsSnafu { name }
        );

        let node = Node::new(
            name.to_string(),
            kind,
            self.default_permissions.clone(),
            self.clock.now(),
            Some(self.cursor),
        );
        let id = self.allocate(node);
        self.cursor_children_mut().insert(name.to_string(), id);

        debug!("Created {:?} '{}' in {}", kind, name, self.current_path());
        Ok(())
    }

    fn detach(&mut self, name: &str, id: NodeId) {
        self.cursor_children_mut().remove(name);
        self.nodes[id.0] = None;
        self.vacant.push(id.0);

        debug!("Removed '{}' from {}", name, self.current_path());
    }

    fn allocate(&mut self, node: Node) -> NodeId {
        match self.vacant.pop() {
            Some(index) => {
                self.nodes[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn cursor_node(&self) -> &Node {
        self.get(self.cursor)
    }

    fn cursor_children_mut(&mut self) -> &mut LinkedHashMap<String, NodeId> {
        let cursor = self.cursor;
        match self.get_mut(cursor).children_mut() {
            Some(children) => children,
            None => unreachable!("the cursor always points at a directory"),
        }
    }

    // Ids reachable from the root or the cursor are always live.
    fn get(&self, id: NodeId) -> &Node {
        match self.node(id) {
            Some(node) => node,
            None => unreachable!("node {id:?} was removed from the tree"),
        }
    }

    fn get_mut(&mut self, id: NodeId) -> &mut Node {
        match self.nodes.get_mut(id.0).and_then(Option::as_mut) {
            Some(node) => node,
            None => unreachable!("node {id:?} was removed from the tree"),
        }
    }
}

#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[snafu(display("'{}' already exists", name))]
    AlreadyExists { name: String },
    #[snafu(display("'{}' does not exist", name))]
    NotFound { name: String },
    #[snafu(display("'{}' is not a directory", name))]
    NotADirectory { name: String },
    #[snafu(display("'{}' is a directory", name))]
    IsADirectory { name: String },
    #[snafu(display("directory '{}' is not empty", name))]
    NotEmpty { name: String },
    #[snafu(display("entry name must not be empty"))]
    InvalidName,
}
