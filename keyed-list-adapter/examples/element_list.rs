// Example: a keyed list rendering into a retained element tree, printed as markup.
use keyed_list::{KeyedList, ListOptions, ReorderStrategy};
use keyed_list_adapter::{Element, ElementList, to_markup};

#[derive(Clone)]
struct Task {
    id: u32,
    title: &'static str,
    done: bool,
}

fn task(id: u32, title: &'static str, done: bool) -> Task {
    Task { id, title, done }
}

fn render(task: &Task, _: usize) -> Element {
    let el = Element::new("li");
    el.set_data("id", task.id.to_string());
    refresh(&el, task, 0);
    el
}

fn refresh(el: &Element, task: &Task, _: usize) {
    el.set_text(task.title);
    if task.done {
        el.set_attr("class", "done");
    } else {
        el.remove_attr("class");
    }
}

fn main() {
    let root = Element::new("ul").with_attr("id", "tasks");
    let mut list: ElementList<Task, u32> = KeyedList::new(
        ListOptions::new_keyed(|t: &Task| t.id, render)
            .with_update(Some(refresh))
            .with_reorder_strategy(ReorderStrategy::MinimalMoves),
        root.clone(),
    );

    list.set([task(1, "write", false), task(2, "review", false), task(3, "ship", false)]);
    println!("{}", to_markup(&root));

    list.update(|t| t.id == 1, |t| Task { done: true, ..t.clone() });
    list.remove(|t| t.done);
    list.prepend([task(4, "plan", false)]);
    println!("{}", to_markup(&root));
    println!("{:?}", list.last_pass());
}
