use alloc::collections::BTreeMap;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use keyed_list::{Container, KeyedList};

/// A [`KeyedList`] that renders into an [`Element`].
pub type ElementList<T, K> = KeyedList<T, K, Element>;

struct Inner {
    tag: String,
    text: RefCell<String>,
    attrs: RefCell<BTreeMap<String, String>>,
    data: RefCell<BTreeMap<String, String>>,
    children: RefCell<Vec<Element>>,
    parent: RefCell<Weak<Inner>>,
}

/// A retained, reference-counted node in a DOM-like tree.
///
/// Cloning an `Element` clones the handle, not the node: `==` is identity. Parents own their
/// children; the back pointer to the parent is weak, so dropping the last handle to a root
/// frees the whole subtree.
///
/// `Element` is a [`Container`] over its own children. Attaching a node that already has a
/// parent detaches it from that parent first.
#[derive(Clone)]
pub struct Element {
    inner: Rc<Inner>,
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Element {}

impl core::fmt::Debug for Element {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.inner.tag)
            .field("text", &*self.inner.text.borrow())
            .field("attrs", &*self.inner.attrs.borrow())
            .field("children", &self.inner.children.borrow().len())
            .finish_non_exhaustive()
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(Inner {
                tag: tag.into(),
                text: RefCell::new(String::new()),
                attrs: RefCell::new(BTreeMap::new()),
                data: RefCell::new(BTreeMap::new()),
                children: RefCell::new(Vec::new()),
                parent: RefCell::new(Weak::new()),
            }),
        }
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn tag(&self) -> &str {
        &self.inner.tag
    }

    pub fn text(&self) -> String {
        self.inner.text.borrow().clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        *self.inner.text.borrow_mut() = text.into();
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.inner.attrs.borrow().get(name).cloned()
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.inner.attrs.borrow().contains_key(name)
    }

    pub fn set_attr(&self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.attrs.borrow_mut().insert(name.into(), value.into());
    }

    pub fn remove_attr(&self, name: &str) -> Option<String> {
        self.inner.attrs.borrow_mut().remove(name)
    }

    /// Attributes in name order.
    pub fn attrs(&self) -> Vec<(String, String)> {
        self.inner
            .attrs
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// A `data-*` entry, without the prefix.
    pub fn data(&self, key: &str) -> Option<String> {
        self.inner.data.borrow().get(key).cloned()
    }

    pub fn set_data(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.data.borrow_mut().insert(key.into(), value.into());
    }

    /// `data-*` entries in key order, without the prefix.
    pub fn data_entries(&self) -> Vec<(String, String)> {
        self.inner
            .data
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// A snapshot of the current children.
    pub fn children(&self) -> Vec<Element> {
        self.inner.children.borrow().clone()
    }

    pub fn child_count(&self) -> usize {
        self.inner.children.borrow().len()
    }

    pub fn parent(&self) -> Option<Element> {
        self.inner.parent.borrow().upgrade().map(|inner| Element { inner })
    }

    /// Whether `other` is `self` or one of its descendants.
    pub fn contains(&self, other: &Element) -> bool {
        let mut cursor = Some(other.clone());
        while let Some(node) = cursor {
            if node == *self {
                return true;
            }
            cursor = node.parent();
        }
        false
    }

    /// Detaches this element from its parent, if it has one.
    pub fn detach(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent.inner.children.borrow_mut().retain(|child| child != self);
        *self.inner.parent.borrow_mut() = Weak::new();
    }

    fn position(&self, child: &Element) -> Option<usize> {
        self.inner.children.borrow().iter().position(|c| c == child)
    }

    /// Detaches `child` from wherever it is and returns whether it may be attached here.
    fn adopt(&self, child: &Element) -> bool {
        if child.contains(self) {
            awarn!(tag = child.tag(), "refusing to attach an element inside itself");
            debug_assert!(false, "attaching an element inside itself");
            return false;
        }
        child.detach();
        *child.inner.parent.borrow_mut() = Rc::downgrade(&self.inner);
        true
    }
}

impl Container for Element {
    type Node = Element;

    fn len(&self) -> usize {
        self.child_count()
    }

    fn node_at(&self, index: usize) -> Option<Element> {
        self.inner.children.borrow().get(index).cloned()
    }

    fn append(&mut self, node: Element) {
        if !self.adopt(&node) {
            return;
        }
        atrace!(parent = self.tag(), child = node.tag(), "append");
        self.inner.children.borrow_mut().push(node);
    }

    fn insert_before(&mut self, node: Element, reference: &Element) {
        if node == *reference || !self.adopt(&node) {
            return;
        }
        atrace!(parent = self.tag(), child = node.tag(), "insert_before");
        let index = self.position(reference);
        let mut children = self.inner.children.borrow_mut();
        match index {
            Some(i) => children.insert(i, node),
            None => children.push(node),
        }
    }

    fn remove(&mut self, node: &Element) {
        if node.parent().as_ref() == Some(&*self) {
            atrace!(parent = self.tag(), child = node.tag(), "remove");
            node.detach();
        }
    }

    fn clear(&mut self) {
        let children = core::mem::take(&mut *self.inner.children.borrow_mut());
        for child in &children {
            *child.inner.parent.borrow_mut() = Weak::new();
        }
    }
}
