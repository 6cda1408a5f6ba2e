use alloc::rc::Rc;

use crate::ReorderStrategy;

/// Maps an item to its stable identity.
pub type KeyExtractor<T, K> = Rc<dyn Fn(&T) -> K>;

/// Creates the visual node for a newly seen item at `index`.
pub type Renderer<T, N> = Rc<dyn Fn(&T, usize) -> N>;

/// Fired once for a node, with its item. Used for both `on_add` and `on_remove`.
pub type NodeHook<T, N> = Rc<dyn Fn(&N, &T)>;

/// Fired for every persisting node on every pass, with the new item and its index.
pub type UpdateHook<T, N> = Rc<dyn Fn(&N, &T, usize)>;

/// Configuration for [`crate::KeyedList`].
///
/// This type is cheap to clone: callbacks are stored in `Rc`s so callers can tweak a field and
/// hand a copy to another list without reallocating closures.
///
/// Without a key extractor the list falls back to full replacement on every operation.
pub struct ListOptions<T, K, N> {
    pub get_key: Option<KeyExtractor<T, K>>,
    pub render: Renderer<T, N>,
    /// Fired right after a new node is cached, before it is placed in the container.
    pub on_add: Option<NodeHook<T, N>>,
    /// Fired before a node is detached from the container.
    pub on_remove: Option<NodeHook<T, N>>,
    /// Refreshes a persisting node in place. Without it, persisting nodes keep showing
    /// whatever they rendered first, even when their item was replaced.
    pub update: Option<UpdateHook<T, N>>,
    pub reorder_strategy: ReorderStrategy,
}

impl<T, K, N> Clone for ListOptions<T, K, N> {
    fn clone(&self) -> Self {
        Self {
            get_key: self.get_key.clone(),
            render: Rc::clone(&self.render),
            on_add: self.on_add.clone(),
            on_remove: self.on_remove.clone(),
            update: self.update.clone(),
            reorder_strategy: self.reorder_strategy,
        }
    }
}

impl<T, N> ListOptions<T, (), N> {
    /// Creates options for a non-keyed list: every operation re-renders the whole sequence.
    pub fn new(render: impl Fn(&T, usize) -> N + 'static) -> Self {
        Self {
            get_key: None,
            render: Rc::new(render),
            on_add: None,
            on_remove: None,
            update: None,
            reorder_strategy: ReorderStrategy::default(),
        }
    }
}

impl<T, K, N> ListOptions<T, K, N> {
    /// Creates options for a keyed list.
    ///
    /// `get_key(item)` must be deterministic; nodes follow keys across reorders and
    /// replacements.
    pub fn new_keyed(
        get_key: impl Fn(&T) -> K + 'static,
        render: impl Fn(&T, usize) -> N + 'static,
    ) -> Self {
        Self {
            get_key: Some(Rc::new(get_key)),
            render: Rc::new(render),
            on_add: None,
            on_remove: None,
            update: None,
            reorder_strategy: ReorderStrategy::default(),
        }
    }

    pub fn is_keyed(&self) -> bool {
        self.get_key.is_some()
    }

    pub fn with_on_add(mut self, on_add: Option<impl Fn(&N, &T) + 'static>) -> Self {
        self.on_add = on_add.map(|f| Rc::new(f) as _);
        self
    }

    pub fn with_on_remove(mut self, on_remove: Option<impl Fn(&N, &T) + 'static>) -> Self {
        self.on_remove = on_remove.map(|f| Rc::new(f) as _);
        self
    }

    pub fn with_update(mut self, update: Option<impl Fn(&N, &T, usize) + 'static>) -> Self {
        self.update = update.map(|f| Rc::new(f) as _);
        self
    }

    pub fn with_reorder_strategy(mut self, reorder_strategy: ReorderStrategy) -> Self {
        self.reorder_strategy = reorder_strategy;
        self
    }
}

impl<T, K, N> core::fmt::Debug for ListOptions<T, K, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("keyed", &self.get_key.is_some())
            .field("on_add", &self.on_add.is_some())
            .field("on_remove", &self.on_remove.is_some())
            .field("update", &self.update.is_some())
            .field("reorder_strategy", &self.reorder_strategy)
            .finish_non_exhaustive()
    }
}
