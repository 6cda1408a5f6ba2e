/// How the placement step moves nodes into their target positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReorderStrategy {
    /// Walk the target order and, at each index, insert the expected node before whatever
    /// currently occupies that position. Linear, reads the container positionally, and issues
    /// no edit where the expected node is already in place.
    #[default]
    Positional,
    /// Keep the longest increasing run of surviving nodes in place and move only the rest.
    ///
    /// Issues the fewest moves for arbitrary permutations, but relies on the list owning every
    /// child of its container.
    MinimalMoves,
}

/// Counters for the most recent reconciliation pass.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassStats {
    /// Nodes produced by the renderer.
    pub created: usize,
    /// Nodes kept from the previous pass.
    pub reused: usize,
    /// Nodes detached because their key went away.
    pub removed: usize,
    /// Placement edits for newly created nodes.
    pub inserted: usize,
    /// Placement edits for reused nodes.
    pub moved: usize,
    /// Target items dropped because an earlier item had the same key.
    pub duplicates: usize,
}

impl PassStats {
    /// Total structural edits issued against the container.
    pub fn edits(&self) -> usize {
        self.removed + self.inserted + self.moved
    }
}
