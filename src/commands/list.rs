use crate::{
    libs::{messages::Message, view::View},
    msg_info, msg_print,
    store::TaskStore,
};
use anyhow::Result;

pub fn cmd(store: &TaskStore) -> Result<()> {
    let tasks = store.get_all();
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    View::tasks(&tasks);
    msg_print!(Message::TasksCount(tasks.len()));
    Ok(())
}
