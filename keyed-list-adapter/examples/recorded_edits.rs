// Example: log the structural edits a pass issues, per reorder strategy.
use keyed_list::{KeyedList, ListOptions, ReorderStrategy, VecContainer};
use keyed_list_adapter::RecordingContainer;

fn main() {
    for strategy in [ReorderStrategy::Positional, ReorderStrategy::MinimalMoves] {
        let mut list = KeyedList::new(
            ListOptions::new_keyed(|n: &u32| *n, |n: &u32, _| *n).with_reorder_strategy(strategy),
            RecordingContainer::new(VecContainer::new()),
        );
        list.set(1..=6);
        list.container_mut().take_edits();

        list.set([6, 1, 2, 3, 5, 4]);
        println!("{strategy:?}:");
        for edit in list.container_mut().take_edits() {
            println!("  {edit:?}");
        }
    }
}
