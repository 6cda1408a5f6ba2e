// Example: a hook that tries to call back into its own list is rejected, not run.
use keyed_list::{KeyedList, ListOptions, SharedList, VecContainer, WeakList};

fn main() {
    let shared = SharedList::new_cyclic(|weak: &WeakList<u32, u32, VecContainer<u32>>| {
        let weak = weak.clone();
        let options = ListOptions::new_keyed(|n: &u32| *n, |n: &u32, _| *n).with_on_add(Some(
            move |_: &u32, n: &u32| {
                if let Some(list) = weak.upgrade() {
                    let outcome = list.append([n + 100]);
                    println!("re-entrant append from on_add({n}): {outcome:?}");
                }
            },
        ));
        KeyedList::new(options, VecContainer::new())
    });

    shared.set([1, 2, 3]).expect("not re-entrant");
    let len = shared.with(|list| list.len()).expect("not re-entrant");
    println!("len after set: {len}");
}
