use crate::{
    libs::{
        messages::Message,
        task::{Priority, Repeat, TaskPatch, Weekday},
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success,
    store::TaskStore,
};
use anyhow::Result;
use clap::Args;

/// Only the options given are changed.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the task to change
    #[arg(required = true)]
    id: String,

    #[arg(short, long)]
    title: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    #[arg(long)]
    day: Option<Weekday>,

    #[arg(short, long)]
    start: Option<String>,

    #[arg(short, long)]
    end: Option<String>,

    #[arg(short, long)]
    priority: Option<Priority>,

    #[arg(short, long)]
    repeat: Option<Repeat>,
}

impl EditArgs {
    fn patch(&self) -> Result<TaskPatch> {
        let title = match &self.title {
            Some(title) if title.trim().is_empty() => msg_bail_anyhow!(Message::TaskTitleRequired),
            Some(title) => Some(title.trim().to_string()),
            None => None,
        };

        Ok(TaskPatch {
            title,
            description: self.description.as_ref().map(|s| s.trim().to_string()),
            day: self.day,
            start_time: self.start.as_ref().map(|s| s.trim().to_string()),
            end_time: self.end.as_ref().map(|s| s.trim().to_string()),
            priority: self.priority,
            repeat: self.repeat,
        })
    }
}

pub fn cmd(args: EditArgs, store: &TaskStore) -> Result<()> {
    let patch = args.patch()?;
    if patch.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    if !store.update(&args.id, &patch)? {
        msg_bail_anyhow!(Message::TaskNotFoundWithId(args.id));
    }

    msg_success!(Message::TaskUpdated);
    if let Some(task) = store.get(&args.id) {
        msg_print!(Message::CurrentTaskState);
        View::tasks(&[task]);
    }
    Ok(())
}
