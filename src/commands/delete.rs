use crate::{
    libs::messages::Message,
    msg_info, msg_success, msg_warning,
    store::TaskStore,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the task to delete
    #[arg(required = true)]
    id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs, store: &TaskStore) -> Result<()> {
    if let Some(task) = store.get(&args.id) {
        if !args.yes {
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::ConfirmDeleteTask(task.title).to_string())
                .default(false)
                .interact()?;
            if !confirmed {
                msg_info!(Message::TaskDeletionCancelled);
                return Ok(());
            }
        }
    }

    match store.delete(&args.id)? {
        0 => msg_warning!(Message::TaskNotFoundWithId(args.id)),
        _ => msg_success!(Message::TaskDeleted),
    }
    Ok(())
}
