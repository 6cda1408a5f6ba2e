// Example: nodes follow keys across a reorder; only out-of-place nodes move.
use keyed_list::{KeyedList, ListOptions, ReorderStrategy, VecContainer};

fn build(strategy: ReorderStrategy) -> KeyedList<char, char, VecContainer<String>> {
    let options = ListOptions::new_keyed(|c: &char| *c, |c: &char, _| format!("<{c}>"))
        .with_update(Some(|node: &String, _: &char, index: usize| {
            println!("  update {node} -> index {index}");
        }))
        .with_reorder_strategy(strategy);
    KeyedList::new(options, VecContainer::new())
}

fn main() {
    for strategy in [ReorderStrategy::Positional, ReorderStrategy::MinimalMoves] {
        println!("{strategy:?}");
        let mut list = build(strategy);
        list.set("abcdef".chars());
        list.set("bcdefa".chars());
        println!(
            "  order={:?} stats={:?}",
            list.container().as_slice(),
            list.last_pass()
        );
    }
}
