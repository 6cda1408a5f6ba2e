use crate::*;

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use keyed_list::{Container, KeyedList, ListOptions, ReorderStrategy, VecContainer};

type Row = (u32, &'static str);

fn row_list(root: &Element) -> ElementList<Row, u32> {
    KeyedList::new(
        ListOptions::new_keyed(
            |row: &Row| row.0,
            |row: &Row, _: usize| Element::new("li").with_text(row.1),
        )
        .with_update(Some(|node: &Element, row: &Row, _: usize| {
            node.set_text(row.1)
        })),
        root.clone(),
    )
}

fn recorded(strategy: ReorderStrategy) -> KeyedList<u32, u32, RecordingContainer<VecContainer<u32>>> {
    KeyedList::new(
        ListOptions::new_keyed(|n: &u32| *n, |n: &u32, _: usize| *n)
            .with_reorder_strategy(strategy),
        RecordingContainer::new(VecContainer::new()),
    )
}

#[test]
fn keyed_list_renders_into_element_tree() {
    let root = Element::new("ul");
    let mut list = row_list(&root);

    list.set([(1, "a"), (2, "b"), (3, "c")]);
    assert_eq!(to_markup(&root), "<ul><li>a</li><li>b</li><li>c</li></ul>");

    let a = list.node_for_key(&1).cloned().unwrap();
    let b = list.node_for_key(&2).cloned().unwrap();
    list.set([(3, "c"), (2, "B"), (4, "d")]);

    assert_eq!(to_markup(&root), "<ul><li>c</li><li>B</li><li>d</li></ul>");
    assert_eq!(root.node_at(1), Some(b.clone()));
    assert_eq!(b.parent(), Some(root.clone()));
    assert_eq!(a.parent(), None);
    assert_eq!(root.children(), list.elements());
}

#[test]
fn destroy_hands_back_an_empty_root() {
    let removed = Rc::new(RefCell::new(Vec::new()));
    let root = Element::new("ul");
    let mut list = row_list(&root);
    list.set_on_remove(Some({
        let removed = Rc::clone(&removed);
        move |node: &Element, row: &Row| {
            assert!(node.parent().is_some());
            removed.borrow_mut().push(row.0);
        }
    }));

    list.set([(1, "a"), (2, "b")]);
    let returned = list.destroy();

    assert_eq!(returned, root);
    assert_eq!(root.child_count(), 0);
    assert_eq!(*removed.borrow(), [1, 2]);
}

#[test]
fn attaching_moves_between_parents() {
    let mut left = Element::new("div");
    let mut right = Element::new("div");
    let item = Element::new("span");

    left.append(item.clone());
    assert_eq!(item.parent(), Some(left.clone()));

    right.append(item.clone());
    assert_eq!(left.child_count(), 0);
    assert_eq!(right.children(), [item.clone()]);
    assert_eq!(item.parent(), Some(right.clone()));

    // Re-appending an existing child moves it to the end.
    let other = Element::new("em");
    right.append(other.clone());
    right.append(item.clone());
    assert_eq!(right.children(), [other.clone(), item.clone()]);

    // A missing reference appends.
    let stray = Element::new("b");
    right.insert_before(stray.clone(), &Element::new("i"));
    assert_eq!(right.node_at(2), Some(stray));
}

#[test]
fn remove_ignores_foreign_nodes_and_clear_drops_parents() {
    let mut a = Element::new("div");
    let mut b = Element::new("div");
    let x = Element::new("p");
    let y = Element::new("p");
    a.append(x.clone());
    b.append(y.clone());

    a.remove(&y);
    assert_eq!(b.children(), [y.clone()]);

    a.append(y.clone());
    a.clear();
    assert!(a.is_empty());
    assert_eq!(x.parent(), None);
    assert_eq!(y.parent(), None);
}

#[test]
#[cfg_attr(debug_assertions, should_panic(expected = "inside itself"))]
fn attaching_an_ancestor_is_refused() {
    let mut parent = Element::new("div");
    let child = Element::new("span");
    parent.append(child.clone());

    let mut inner = child.clone();
    inner.append(parent.clone());

    assert_eq!(parent.child_count(), 1);
    assert!(child.children().is_empty());
}

#[test]
fn identity_not_content_equality() {
    let a = Element::new("li").with_text("same");
    let b = Element::new("li").with_text("same");
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
    assert!(a.contains(&a));
    assert!(!a.contains(&b));
}

#[test]
fn attributes_and_data() {
    let el = Element::new("a").with_attr("href", "/x");
    assert!(el.has_attr("href"));
    el.set_attr("href", "/y");
    assert_eq!(el.attr("href").as_deref(), Some("/y"));
    assert_eq!(el.remove_attr("href").as_deref(), Some("/y"));
    assert!(!el.has_attr("href"));
    assert_eq!(el.remove_attr("href"), None);

    el.set_data("key", "7");
    assert_eq!(el.data("key").as_deref(), Some("7"));
    assert_eq!(el.data("missing"), None);
}

#[test]
fn markup_sorts_and_escapes() {
    let el = Element::new("a")
        .with_attr("title", "x \"y\"")
        .with_attr("class", "b")
        .with_text("1 < 2 & 3");
    el.set_data("id", "7");

    assert_eq!(
        to_markup(&el),
        "<a class=\"b\" title=\"x &quot;y&quot;\" data-id=\"7\">1 &lt; 2 &amp; 3</a>"
    );
    assert_eq!(to_markup(&Element::new("br")), "<br></br>");
}

#[test]
fn initial_set_appends_in_order() {
    for strategy in [ReorderStrategy::Positional, ReorderStrategy::MinimalMoves] {
        let mut list = recorded(strategy);
        list.set([1, 2, 3]);
        assert_eq!(list.container().inner().as_slice(), [1, 2, 3]);
        assert_eq!(list.last_pass().inserted, 3);
        assert!(list.container().edits().iter().all(|e| !e.is_remove()));
    }
}

#[test]
fn recorded_edits_for_common_changes() {
    let mut list = recorded(ReorderStrategy::Positional);
    list.set([1, 2, 3]);
    take(&mut list);

    list.prepend([0]);
    assert_eq!(
        take(&mut list),
        [Edit::InsertBefore { node: 0, reference: 1 }]
    );

    list.remove(|n| *n == 0 || *n == 2);
    assert_eq!(take(&mut list), [Edit::Remove(0), Edit::Remove(2)]);

    // Setting the same sequence again issues nothing.
    list.set([1, 3]);
    assert!(take(&mut list).is_empty());
    assert_eq!(list.container().inner().as_slice(), [1, 3]);
}

#[test]
fn rotation_edits_by_strategy() {
    let mut positional = recorded(ReorderStrategy::Positional);
    positional.set([1, 2, 3, 4]);
    take(&mut positional);
    positional.set([2, 3, 4, 1]);
    assert_eq!(
        take(&mut positional),
        [
            Edit::InsertBefore { node: 2, reference: 1 },
            Edit::InsertBefore { node: 3, reference: 1 },
            Edit::InsertBefore { node: 4, reference: 1 },
        ]
    );

    let mut minimal = recorded(ReorderStrategy::MinimalMoves);
    minimal.set([1, 2, 3, 4]);
    take(&mut minimal);
    minimal.set([2, 3, 4, 1]);
    assert_eq!(take(&mut minimal), [Edit::Append(1)]);

    assert_eq!(
        positional.container().inner().as_slice(),
        minimal.container().inner().as_slice()
    );
}

#[test]
fn non_keyed_replace_records_every_child() {
    let mut list = KeyedList::new(
        ListOptions::new(|n: &u32, _: usize| *n),
        RecordingContainer::new(VecContainer::new()),
    );
    list.set([1, 2]);
    list.set([3]);

    let edits = list.container().edits();
    assert_eq!(
        edits,
        [
            Edit::Append(1),
            Edit::Append(2),
            Edit::Remove(1),
            Edit::Remove(2),
            Edit::Append(3),
        ]
    );
    assert_eq!(edits.iter().filter(|e| e.is_remove()).count(), 2);
    assert_eq!(*edits[4].node(), 3);
}

fn take<C: Container>(
    list: &mut KeyedList<u32, u32, RecordingContainer<C>>,
) -> Vec<Edit<C::Node>> {
    list.container_mut().take_edits()
}

struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 17
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }
}

#[test]
fn element_tree_tracks_random_operations() {
    for (seed, strategy) in [
        (7, ReorderStrategy::Positional),
        (11, ReorderStrategy::MinimalMoves),
        (23, ReorderStrategy::Positional),
        (42, ReorderStrategy::MinimalMoves),
    ] {
        let mut rng = Lcg::new(seed);
        let root = Element::new("ol");
        let mut list: ElementList<(u32, u32), u32> = KeyedList::new(
            ListOptions::new_keyed(
                |item: &(u32, u32)| item.0,
                |item: &(u32, u32), _: usize| Element::new("li").with_text(label(item)),
            )
            .with_update(Some(|node: &Element, item: &(u32, u32), _: usize| {
                node.set_text(label(item))
            }))
            .with_reorder_strategy(strategy),
            root.clone(),
        );

        let mut version = 0u32;
        for _ in 0..200 {
            version += 1;
            match rng.gen_range_usize(0, 4) {
                0 => {
                    let len = rng.gen_range_usize(0, 12);
                    let items: Vec<(u32, u32)> = (0..len)
                        .map(|_| (rng.gen_range_usize(0, 16) as u32, version))
                        .collect();
                    list.set(items);
                }
                1 => {
                    let id = rng.gen_range_usize(0, 16) as u32;
                    let at = rng.gen_range_usize(0, list.len() + 2);
                    list.insert(at, [(id, version)]);
                }
                2 => {
                    let id = rng.gen_range_usize(0, 16) as u32;
                    list.remove(|item| item.0 == id);
                }
                _ => {
                    let id = rng.gen_range_usize(0, 16) as u32;
                    list.update(|item| item.0 == id, |item| (item.0, version));
                }
            }

            assert_eq!(root.children(), list.elements());
            let texts: Vec<String> = root.children().iter().map(Element::text).collect();
            let expected: Vec<String> = list.items().iter().map(label).collect();
            assert_eq!(texts, expected);
        }
    }
}

fn label(item: &(u32, u32)) -> String {
    format!("{}:{}", item.0, item.1)
}
