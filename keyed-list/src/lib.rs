//! A headless keyed list reconciler.
//!
//! For adapter-level utilities (retained elements, edit recording, markup snapshots), see the
//! `keyed-list-adapter` crate.
//!
//! Given a container of visual nodes and a data sequence that changes over time, a
//! [`KeyedList`] brings the container back in sync with each new sequence:
//! - nodes are reused for as long as their item's key persists,
//! - only nodes that are out of place get moved,
//! - `on_add` / `on_remove` fire exactly once per key appearing / disappearing.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`Container`] (append, insert-before, remove, positional read)
//! - a renderer that turns an item into a node handle
//! - optionally, a key extractor and lifecycle hooks
//!
//! ```
//! use keyed_list::{KeyedList, ListOptions, VecContainer};
//!
//! let mut list = KeyedList::new(
//!     ListOptions::new_keyed(|row: &(u32, char)| row.0, |row, _| row.1),
//!     VecContainer::new(),
//! );
//! list.set([(1, 'a'), (2, 'b')]);
//! list.prepend([(0, 'z')]);
//! assert_eq!(list.container().as_slice(), ['z', 'a', 'b']);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod container;
mod error;
mod key;
mod list;
mod options;
mod reorder;
mod shared;
mod types;


pub use container::{Container, VecContainer};
pub use error::ListError;
pub use key::ListKey;
pub use list::KeyedList;
pub use options::{KeyExtractor, ListOptions, NodeHook, Renderer, UpdateHook};
pub use shared::{SharedList, WeakList};
pub use types::{PassStats, ReorderStrategy};
