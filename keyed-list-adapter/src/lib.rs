//! Adapter utilities for the `keyed-list` crate.
//!
//! The `keyed-list` crate only knows the [`keyed_list::Container`] contract. This crate provides
//! small, framework-neutral pieces that adapters and tests keep needing:
//!
//! - [`Element`]: a retained, DOM-like node tree whose nodes are also containers
//! - [`RecordingContainer`]: a wrapper that logs every structural edit
//! - [`to_markup`]: a compact text snapshot of an element subtree
//!
//! ```
//! use keyed_list::{KeyedList, ListOptions};
//! use keyed_list_adapter::{Element, to_markup};
//!
//! let root = Element::new("ul");
//! let mut list = KeyedList::new(
//!     ListOptions::new_keyed(
//!         |label: &&'static str| *label,
//!         |label: &&'static str, _| Element::new("li").with_text(*label),
//!     ),
//!     root.clone(),
//! );
//! list.set(["a", "b"]);
//! list.prepend(["z"]);
//! assert_eq!(to_markup(&root), "<ul><li>z</li><li>a</li><li>b</li></ul>");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod element;
mod markup;
mod recording;

#[cfg(test)]
mod tests;

pub use element::{Element, ElementList};
pub use markup::to_markup;
pub use recording::{Edit, RecordingContainer};
