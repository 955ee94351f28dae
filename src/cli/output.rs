use serde::Serialize;

use crate::model::{Tag, Task};

pub fn print_task_line(task: &Task) {
    let mark = if task.is_completed { "x" } else { " " };
    let tags: Vec<String> = task.tags.iter().map(|t| format!("#{}", t.name)).collect();
    if tags.is_empty() {
        println!("[{mark}] {:>4}  {}", task.id, task.description);
    } else {
        println!(
            "[{mark}] {:>4}  {}  {}",
            task.id,
            task.description,
            tags.join(" ")
        );
    }
}

pub fn print_tag_line(tag: &Tag) {
    println!("{:>4}  {:<20}  {}", tag.id, tag.name, tag.color);
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
