// Rust guideline compliant 2026-10-15

//! Attaches tasks to the stories they belong to.

use crate::{Error, Result, Story, Task};
use std::collections::HashMap;

/// Moves every task under the story whose key equals the task's parent key.
///
/// Tasks keep their relative input order within each story.
///
/// # Arguments
///
/// * `stories` - Stories built from the batch
/// * `tasks` - Tasks built from the batch's sub-tasks
///
/// # Returns
///
/// Ok once every task is attached.
///
/// # Errors
///
/// Returns an error if:
/// - Two stories share a key (`Error::DuplicateKey`)
/// - A task's parent key matches no story (`Error::OrphanTask`)
pub fn link_tasks(stories: &mut [Story], tasks: Vec<Task>) -> Result<()> {
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(stories.len());
    for (pos, story) in stories.iter().enumerate() {
        if positions.insert(story.key.clone(), pos).is_some() {
            return Err(Error::DuplicateKey(story.key.clone()));
        }
    }

    for task in tasks {
        let Some(&pos) = positions.get(&task.parent) else {
            return Err(Error::OrphanTask {
                task: task.key,
                parent: task.parent,
            });
        };
        stories[pos].tasks.push(task);
    }

    Ok(())
}
