use core::fmt;

/// Errors reported by [`crate::SharedList`].
///
/// The reconciler itself trusts its collaborators: a panicking renderer or hook unwinds out of
/// the operation and leaves the pass partially applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ListError {
    /// The list was called into while a reconciliation pass on it was still running, typically
    /// from inside its own renderer or hooks.
    Reentrant,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reentrant => f.write_str("list operation re-entered during a reconciliation pass"),
        }
    }
}

impl core::error::Error for ListError {}
