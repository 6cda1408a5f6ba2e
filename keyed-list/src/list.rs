use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::key::{KeyMap, ListKey};
use crate::reorder::stable_positions;
use crate::{Container, KeyExtractor, ListOptions, PassStats, ReorderStrategy};

/// A keyed list reconciler bound to one container.
///
/// Every public operation computes a full target sequence and runs one reconciliation pass:
/// nodes whose key disappeared are removed, new keys are rendered, persisting keys keep their
/// node (refreshed through the `update` hook, if any), and the container children are put in
/// target order.
///
/// The list owns its copy of the item sequence. Mutating operations take `&mut self`, so a
/// renderer or hook can never call back into the same list during a pass; use
/// [`crate::SharedList`] when the list needs to be reachable from its own callbacks.
///
/// A panicking renderer or hook unwinds out of the operation without rollback: edits already
/// issued in that pass stay applied. The next complete pass re-renders keys whose nodes were
/// dropped and evicts nodes cached for a sequence that was never stored.
pub struct KeyedList<T, K, C: Container> {
    options: ListOptions<T, K, C::Node>,
    container: C,
    items: Vec<T>,
    nodes: Vec<C::Node>,
    cache: KeyMap<K, CacheEntry<T, C::Node>>,
    last_pass: PassStats,
}

/// A cached node and the item it last represented.
struct CacheEntry<T, N> {
    node: N,
    item: T,
}

impl<T, K, C> core::fmt::Debug for KeyedList<T, K, C>
where
    C: Container + core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyedList")
            .field("options", &self.options)
            .field("container", &self.container)
            .field("len", &self.items.len())
            .field("cached", &self.cache.len())
            .field("last_pass", &self.last_pass)
            .finish_non_exhaustive()
    }
}

impl<T: Clone, K: ListKey + Clone, C: Container> KeyedList<T, K, C> {
    /// Creates an empty list that manages the children of `container`.
    ///
    /// Existing children are left alone until the first operation places nodes around them.
    pub fn new(options: ListOptions<T, K, C::Node>, container: C) -> Self {
        ldebug!(
            keyed = options.is_keyed(),
            strategy = ?options.reorder_strategy,
            "KeyedList::new"
        );
        Self {
            options,
            container,
            items: Vec::new(),
            nodes: Vec::new(),
            cache: KeyMap::new(),
            last_pass: PassStats::default(),
        }
    }

    pub fn options(&self) -> &ListOptions<T, K, C::Node> {
        &self.options
    }

    pub fn is_keyed(&self) -> bool {
        self.options.is_keyed()
    }

    pub fn set_on_add(&mut self, on_add: Option<impl Fn(&C::Node, &T) + 'static>) {
        self.options.on_add = on_add.map(|f| Rc::new(f) as _);
    }

    pub fn set_on_remove(&mut self, on_remove: Option<impl Fn(&C::Node, &T) + 'static>) {
        self.options.on_remove = on_remove.map(|f| Rc::new(f) as _);
    }

    pub fn set_update(&mut self, update: Option<impl Fn(&C::Node, &T, usize) + 'static>) {
        self.options.update = update.map(|f| Rc::new(f) as _);
    }

    /// Changes the placement strategy used by subsequent passes.
    pub fn set_reorder_strategy(&mut self, reorder_strategy: ReorderStrategy) {
        self.options.reorder_strategy = reorder_strategy;
    }

    /// The current sequence, after duplicate keys were dropped.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The current nodes, positionally aligned with [`Self::items`].
    pub fn elements(&self) -> &[C::Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The node currently representing `key`. Always `None` for a non-keyed list.
    pub fn node_for_key(&self, key: &K) -> Option<&C::Node> {
        self.cache.get(key).map(|entry| &entry.node)
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    /// Mutable access to the container, e.g. to drain an edit log.
    ///
    /// Children attached here are left alone by later passes unless they sit where a list node
    /// has to go. Detaching a list node from here desyncs the list until the next pass re-places it.
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    /// Counters for the most recent pass.
    pub fn last_pass(&self) -> PassStats {
        self.last_pass
    }

    /// Replaces the whole sequence.
    pub fn set(&mut self, items: impl IntoIterator<Item = T>) {
        self.reconcile(items.into_iter().collect());
    }

    pub fn append(&mut self, items: impl IntoIterator<Item = T>) {
        let mut next = self.items.clone();
        next.extend(items);
        self.reconcile(next);
    }

    pub fn prepend(&mut self, items: impl IntoIterator<Item = T>) {
        let mut next: Vec<T> = items.into_iter().collect();
        next.extend(self.items.iter().cloned());
        self.reconcile(next);
    }

    /// Inserts `items` before position `index`. An `index` past the end appends.
    pub fn insert(&mut self, index: usize, items: impl IntoIterator<Item = T>) {
        let index = index.min(self.items.len());
        let mut next = self.items.clone();
        next.splice(index..index, items);
        self.reconcile(next);
    }

    /// Drops every item matching `predicate`.
    pub fn remove(&mut self, mut predicate: impl FnMut(&T) -> bool) {
        let next = self
            .items
            .iter()
            .filter(|item| !predicate(item))
            .cloned()
            .collect();
        self.reconcile(next);
    }

    /// Replaces every item matching `predicate` with `updater(item)`.
    ///
    /// Whether the replacement shows up depends on the `update` hook: a persisting key keeps
    /// its node, and only the hook refreshes it.
    pub fn update(
        &mut self,
        mut predicate: impl FnMut(&T) -> bool,
        mut updater: impl FnMut(&T) -> T,
    ) {
        let next = self
            .items
            .iter()
            .map(|item| {
                if predicate(item) {
                    updater(item)
                } else {
                    item.clone()
                }
            })
            .collect();
        self.reconcile(next);
    }

    pub fn clear(&mut self) {
        self.reconcile(Vec::new());
    }

    /// Clears the list (firing `on_remove` for every node), releases the identity cache, and
    /// hands the container back.
    pub fn destroy(mut self) -> C {
        self.clear();
        ldebug!("KeyedList::destroy");
        self.container
    }

    /// Runs one reconciliation pass against a full target sequence.
    fn reconcile(&mut self, target: Vec<T>) {
        match self.options.get_key.clone() {
            Some(get_key) => self.reconcile_keyed(&get_key, target),
            None => self.replace_all(target),
        }
    }

    fn reconcile_keyed(&mut self, get_key: &KeyExtractor<T, K>, target: Vec<T>) {
        let options = self.options.clone();
        let mut stats = PassStats::default();

        // Target key -> target index. The first occurrence of a key wins.
        let mut positions: KeyMap<K, usize> = KeyMap::new();
        let mut keys = Vec::with_capacity(target.len());
        let mut items = Vec::with_capacity(target.len());
        for item in target {
            let key = get_key(&item);
            if positions.contains_key(&key) {
                lwarn!(
                    index = items.len() + stats.duplicates,
                    "duplicate key in target sequence; keeping the first occurrence"
                );
                stats.duplicates += 1;
                continue;
            }
            positions.insert(key.clone(), items.len());
            keys.push(key);
            items.push(item);
        }

        // Removal, in previous order. `sources[i]` records the surviving rank of the node
        // that belongs at target index `i`.
        let mut sources: Vec<Option<usize>> = alloc::vec![None; items.len()];
        let mut rank = 0;
        for old in &self.items {
            let key = get_key(old);
            let Some(entry) = self.cache.get(&key) else {
                // Evicted by a pass that unwound; a surviving key gets rendered afresh.
                lwarn!("previous item has no cached node; skipping it");
                continue;
            };
            if let Some(&target_index) = positions.get(&key) {
                sources[target_index] = Some(rank);
                rank += 1;
                continue;
            }
            if let Some(on_remove) = &options.on_remove {
                on_remove(&entry.node, old);
            }
            self.container.remove(&entry.node);
            ltrace!("remove");
            self.cache.remove(&key);
            stats.removed += 1;
        }

        // Entries cached by a pass that unwound before it stored its items.
        let stale: Vec<K> = self
            .cache
            .keys()
            .filter(|key| !positions.contains_key(*key))
            .cloned()
            .collect();
        for key in stale {
            let Some(entry) = self.cache.remove(&key) else {
                continue;
            };
            lwarn!("evicting a node left behind by an unwound pass");
            if let Some(on_remove) = &options.on_remove {
                on_remove(&entry.node, &entry.item);
            }
            self.container.remove(&entry.node);
            stats.removed += 1;
        }

        // Build/refresh.
        let mut ordered = Vec::with_capacity(items.len());
        for (index, (item, key)) in items.iter().zip(&keys).enumerate() {
            let node = match self.cache.get_mut(key) {
                Some(entry) => {
                    if let Some(update) = &options.update {
                        update(&entry.node, item, index);
                    }
                    entry.item = item.clone();
                    stats.reused += 1;
                    entry.node.clone()
                }
                None => {
                    let node = (options.render)(item, index);
                    self.cache.insert(
                        key.clone(),
                        CacheEntry {
                            node: node.clone(),
                            item: item.clone(),
                        },
                    );
                    if let Some(on_add) = &options.on_add {
                        on_add(&node, item);
                    }
                    stats.created += 1;
                    node
                }
            };
            ordered.push(node);
        }

        match options.reorder_strategy {
            ReorderStrategy::Positional => self.place_positional(&ordered, &sources, &mut stats),
            ReorderStrategy::MinimalMoves => self.place_minimal(&ordered, &sources, &mut stats),
        }

        ldebug!(
            len = items.len(),
            created = stats.created,
            reused = stats.reused,
            removed = stats.removed,
            inserted = stats.inserted,
            moved = stats.moved,
            duplicates = stats.duplicates,
            "reconcile"
        );
        self.items = items;
        self.nodes = ordered;
        self.last_pass = stats;
    }

    /// Puts `ordered[i]` at container position `i`, reading the container as it goes.
    fn place_positional(
        &mut self,
        ordered: &[C::Node],
        sources: &[Option<usize>],
        stats: &mut PassStats,
    ) {
        for (index, node) in ordered.iter().enumerate() {
            match self.container.node_at(index) {
                Some(current) if current == *node => continue,
                Some(current) => {
                    self.container.insert_before(node.clone(), &current);
                    ltrace!(index, "insert_before");
                }
                None => {
                    self.container.append(node.clone());
                    ltrace!(index, "append");
                }
            }
            Self::count_placement(sources[index], stats);
        }
    }

    /// Leaves the longest increasing run of surviving nodes untouched and places the rest,
    /// walking backwards so each node goes before its already-placed successor.
    fn place_minimal(
        &mut self,
        ordered: &[C::Node],
        sources: &[Option<usize>],
        stats: &mut PassStats,
    ) {
        let stable = stable_positions(sources);
        for index in (0..ordered.len()).rev() {
            if stable[index] {
                continue;
            }
            let node = ordered[index].clone();
            match ordered.get(index + 1) {
                Some(next) => {
                    self.container.insert_before(node, next);
                    ltrace!(index, "insert_before");
                }
                None => {
                    self.container.append(node);
                    ltrace!(index, "append");
                }
            }
            Self::count_placement(sources[index], stats);
        }
    }

    fn count_placement(source: Option<usize>, stats: &mut PassStats) {
        if source.is_some() {
            stats.moved += 1;
        } else {
            stats.inserted += 1;
        }
    }

    /// Non-keyed pass: drop every child and render the target from scratch.
    fn replace_all(&mut self, target: Vec<T>) {
        let options = self.options.clone();
        let mut stats = PassStats::default();

        let old_nodes = core::mem::take(&mut self.nodes);
        if let Some(on_remove) = &options.on_remove {
            for (node, item) in old_nodes.iter().zip(&self.items) {
                on_remove(node, item);
            }
        }
        stats.removed = old_nodes.len();
        // Foreign children go too, but only list nodes are counted.
        self.container.clear();

        let mut nodes = Vec::with_capacity(target.len());
        for (index, item) in target.iter().enumerate() {
            let node = (options.render)(item, index);
            if let Some(on_add) = &options.on_add {
                on_add(&node, item);
            }
            self.container.append(node.clone());
            nodes.push(node);
        }
        stats.created = nodes.len();
        stats.inserted = nodes.len();

        ldebug!(
            len = nodes.len(),
            removed = stats.removed,
            "replace_all"
        );
        self.items = target;
        self.nodes = nodes;
        self.last_pass = stats;
    }
}
