use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use crate::key::ListKey;
use crate::{Container, KeyedList, ListError};

/// A shared, re-entrancy-guarded handle to a [`KeyedList`].
///
/// Renderers and hooks may hold a [`WeakList`] to the list they belong to. Any operation issued
/// through the handle while a pass is in progress fails fast with [`ListError::Reentrant`]
/// instead of corrupting the pass.
pub struct SharedList<T, K, C: Container> {
    inner: Rc<RefCell<KeyedList<T, K, C>>>,
}

impl<T, K, C: Container> Clone for SharedList<T, K, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T, K, C: Container> core::fmt::Debug for SharedList<T, K, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedList")
            .field("in_pass", &self.inner.try_borrow_mut().is_err())
            .finish_non_exhaustive()
    }
}

/// A non-owning [`SharedList`] reference, for use inside the list's own callbacks.
pub struct WeakList<T, K, C: Container> {
    inner: Weak<RefCell<KeyedList<T, K, C>>>,
}

impl<T, K, C: Container> Clone for WeakList<T, K, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T, K, C: Container> WeakList<T, K, C> {
    /// Creates a reference that never upgrades. Handy for wiring callbacks before the list exists.
    pub fn new() -> Self {
        Self { inner: Weak::new() }
    }

    pub fn upgrade(&self) -> Option<SharedList<T, K, C>> {
        self.inner.upgrade().map(|inner| SharedList { inner })
    }
}

impl<T, K, C: Container> Default for WeakList<T, K, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, K: ListKey + Clone, C: Container> SharedList<T, K, C> {
    pub fn new(list: KeyedList<T, K, C>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(list)),
        }
    }

    /// Builds the list inside a shared handle, giving `build` a [`WeakList`] to capture in
    /// callbacks.
    pub fn new_cyclic(build: impl FnOnce(&WeakList<T, K, C>) -> KeyedList<T, K, C>) -> Self {
        let inner = Rc::new_cyclic(|weak| {
            let weak = WeakList {
                inner: Weak::clone(weak),
            };
            RefCell::new(build(&weak))
        });
        Self { inner }
    }

    pub fn downgrade(&self) -> WeakList<T, K, C> {
        WeakList {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Whether a pass on this list is running right now.
    pub fn is_reconciling(&self) -> bool {
        self.inner.try_borrow_mut().is_err()
    }

    /// Runs `f` with shared access to the list.
    pub fn with<R>(&self, f: impl FnOnce(&KeyedList<T, K, C>) -> R) -> Result<R, ListError> {
        let list = self.inner.try_borrow().map_err(|_| Self::reentrant())?;
        Ok(f(&list))
    }

    pub fn set(&self, items: impl IntoIterator<Item = T>) -> Result<(), ListError> {
        self.with_mut(|list| list.set(items))
    }

    pub fn append(&self, items: impl IntoIterator<Item = T>) -> Result<(), ListError> {
        self.with_mut(|list| list.append(items))
    }

    pub fn prepend(&self, items: impl IntoIterator<Item = T>) -> Result<(), ListError> {
        self.with_mut(|list| list.prepend(items))
    }

    pub fn insert(&self, index: usize, items: impl IntoIterator<Item = T>) -> Result<(), ListError> {
        self.with_mut(|list| list.insert(index, items))
    }

    pub fn remove(&self, predicate: impl FnMut(&T) -> bool) -> Result<(), ListError> {
        self.with_mut(|list| list.remove(predicate))
    }

    pub fn update(
        &self,
        predicate: impl FnMut(&T) -> bool,
        updater: impl FnMut(&T) -> T,
    ) -> Result<(), ListError> {
        self.with_mut(|list| list.update(predicate, updater))
    }

    pub fn clear(&self) -> Result<(), ListError> {
        self.with_mut(KeyedList::clear)
    }

    fn with_mut(&self, f: impl FnOnce(&mut KeyedList<T, K, C>)) -> Result<(), ListError> {
        let mut list = self.inner.try_borrow_mut().map_err(|_| Self::reentrant())?;
        f(&mut list);
        Ok(())
    }

    fn reentrant() -> ListError {
        lwarn!("re-entrant call rejected");
        ListError::Reentrant
    }
}
