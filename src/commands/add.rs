use crate::{
    libs::{
        messages::Message,
        task::{Priority, Repeat, TaskDraft, Weekday},
    },
    msg_bail_anyhow, msg_success,
    store::TaskStore,
};
use anyhow::Result;
use clap::Args;

/// Choice arguments take either the stored label (`الأحد`) or the English name (`sunday`).
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,

    #[arg(short, long, default_value = "")]
    description: String,

    /// Day of the week
    #[arg(long, default_value = "saturday")]
    day: Weekday,

    /// Start time, HH:MM
    #[arg(short, long, default_value = "")]
    start: String,

    /// End time, HH:MM
    #[arg(short, long, default_value = "")]
    end: String,

    /// high, medium or low
    #[arg(short, long, default_value = "medium")]
    priority: Priority,

    /// none, daily or weekly
    #[arg(short, long, default_value = "none")]
    repeat: Repeat,
}

pub fn cmd(args: AddArgs, store: &TaskStore) -> Result<()> {
    let title = args.title.trim();
    if title.is_empty() {
        msg_bail_anyhow!(Message::TaskTitleRequired);
    }

    let id = store.create(TaskDraft {
        title: title.to_string(),
        description: args.description.trim().to_string(),
        day: args.day,
        start_time: args.start.trim().to_string(),
        end_time: args.end.trim().to_string(),
        priority: args.priority,
        repeat: args.repeat,
    })?;

    msg_success!(Message::TaskCreated(id));
    Ok(())
}
