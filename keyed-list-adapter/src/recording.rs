use alloc::vec::Vec;

use keyed_list::Container;

/// One structural primitive issued against a container.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edit<N> {
    Append(N),
    InsertBefore { node: N, reference: N },
    Remove(N),
}

impl<N> Edit<N> {
    /// The node being attached or detached.
    pub fn node(&self) -> &N {
        match self {
            Edit::Append(node) | Edit::InsertBefore { node, .. } | Edit::Remove(node) => node,
        }
    }

    pub fn is_remove(&self) -> bool {
        matches!(self, Edit::Remove(_))
    }
}

/// Wraps a [`Container`] and logs every structural edit before forwarding it.
///
/// Positional reads are not logged. `clear` is recorded as one `Remove` per child, first to
/// last.
pub struct RecordingContainer<C: Container> {
    inner: C,
    edits: Vec<Edit<C::Node>>,
}

impl<C: Container + Clone> Clone for RecordingContainer<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            edits: self.edits.clone(),
        }
    }
}

impl<C: Container + Default> Default for RecordingContainer<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C> core::fmt::Debug for RecordingContainer<C>
where
    C: Container + core::fmt::Debug,
    C::Node: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecordingContainer")
            .field("inner", &self.inner)
            .field("edits", &self.edits)
            .finish()
    }
}

impl<C: Container> RecordingContainer<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            edits: Vec::new(),
        }
    }

    pub fn edits(&self) -> &[Edit<C::Node>] {
        &self.edits
    }

    /// Returns the edits recorded so far and starts a fresh log.
    pub fn take_edits(&mut self) -> Vec<Edit<C::Node>> {
        core::mem::take(&mut self.edits)
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Container> Container for RecordingContainer<C> {
    type Node = C::Node;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn node_at(&self, index: usize) -> Option<C::Node> {
        self.inner.node_at(index)
    }

    fn append(&mut self, node: C::Node) {
        self.edits.push(Edit::Append(node.clone()));
        self.inner.append(node);
    }

    fn insert_before(&mut self, node: C::Node, reference: &C::Node) {
        self.edits.push(Edit::InsertBefore {
            node: node.clone(),
            reference: reference.clone(),
        });
        self.inner.insert_before(node, reference);
    }

    fn remove(&mut self, node: &C::Node) {
        self.edits.push(Edit::Remove(node.clone()));
        self.inner.remove(node);
    }

    fn clear(&mut self) {
        while let Some(node) = self.inner.node_at(0) {
            self.remove(&node);
        }
    }
}
