use alloc::vec::Vec;

/// The ordered holder of visual nodes that a [`crate::KeyedList`] edits.
///
/// The reconciler only needs positional reads plus three structural primitives. Implementations
/// must follow DOM-style attach semantics: `append` and `insert_before` *move* a node that is
/// already a child, rather than duplicating it.
///
/// `Node` is a handle, and `PartialEq` means "same node". Two distinct nodes that happen to
/// hold equal content must compare unequal.
pub trait Container {
    type Node: Clone + PartialEq;

    /// Number of children currently attached.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The child at `index`, if any. Handles are expected to be cheap to clone.
    fn node_at(&self, index: usize) -> Option<Self::Node>;

    /// Attaches `node` as the last child.
    fn append(&mut self, node: Self::Node);

    /// Attaches `node` immediately before `reference`.
    ///
    /// If `reference` is not a child, `node` is appended.
    fn insert_before(&mut self, node: Self::Node, reference: &Self::Node);

    /// Detaches `node`. Detaching a node that is not a child is a no-op.
    fn remove(&mut self, node: &Self::Node);

    /// Detaches every child, first to last.
    fn clear(&mut self) {
        while let Some(node) = self.node_at(0) {
            self.remove(&node);
        }
    }
}

/// A `Vec`-backed [`Container`].
///
/// Useful as a headless rendering surface: the "nodes" can be any cheap handle (ids, `Rc`s).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VecContainer<N> {
    nodes: Vec<N>,
}

impl<N> Default for VecContainer<N> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<N: Clone + PartialEq> VecContainer<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a container that already holds `nodes`.
    pub fn from_nodes(nodes: impl IntoIterator<Item = N>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
        }
    }

    pub fn as_slice(&self) -> &[N] {
        &self.nodes
    }

    pub fn into_vec(self) -> Vec<N> {
        self.nodes
    }

    pub fn position(&self, node: &N) -> Option<usize> {
        self.nodes.iter().position(|n| n == node)
    }

    fn detach(&mut self, node: &N) -> bool {
        match self.position(node) {
            Some(i) => {
                self.nodes.remove(i);
                true
            }
            None => false,
        }
    }
}

impl<N: Clone + PartialEq> Container for VecContainer<N> {
    type Node = N;

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn node_at(&self, index: usize) -> Option<N> {
        self.nodes.get(index).cloned()
    }

    fn append(&mut self, node: N) {
        self.detach(&node);
        self.nodes.push(node);
    }

    fn insert_before(&mut self, node: N, reference: &N) {
        if node == *reference {
            return;
        }
        self.detach(&node);
        match self.position(reference) {
            Some(i) => self.nodes.insert(i, node),
            None => self.nodes.push(node),
        }
    }

    fn remove(&mut self, node: &N) {
        self.detach(node);
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }
}
