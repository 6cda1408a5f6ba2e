// Example: a keyed list over a plain `Vec` container.
use std::cell::Cell;
use std::rc::Rc;

use keyed_list::{KeyedList, ListOptions, VecContainer};

#[derive(Clone, Debug)]
struct Todo {
    id: u32,
    title: &'static str,
}

fn main() {
    let next_node = Rc::new(Cell::new(0u32));
    let options = ListOptions::new_keyed(|t: &Todo| t.id, {
        let next_node = Rc::clone(&next_node);
        move |t: &Todo, index| {
            let node = next_node.get();
            next_node.set(node + 1);
            println!("render #{node} for {:?} at {index}", t.title);
            node
        }
    })
    .with_on_add(Some(|node: &u32, t: &Todo| println!("  added #{node} ({})", t.title)))
    .with_on_remove(Some(|node: &u32, t: &Todo| println!("  removed #{node} ({})", t.title)));

    let mut list = KeyedList::new(options, VecContainer::new());

    list.set([
        Todo { id: 1, title: "write" },
        Todo { id: 2, title: "test" },
        Todo { id: 3, title: "ship" },
    ]);
    println!("after set: {:?}", list.container().as_slice());

    list.append([Todo { id: 4, title: "celebrate" }]);
    println!("after append: {:?}", list.container().as_slice());

    list.remove(|t| t.id == 2);
    println!("after remove: {:?}", list.container().as_slice());
    println!("last pass: {:?}", list.last_pass());
}
