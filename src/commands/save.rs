use crate::{libs::messages::Message, msg_success, store::TaskStore};
use anyhow::Result;

pub fn cmd(store: &TaskStore) -> Result<()> {
    store.save()?;
    msg_success!(Message::TasksSaved(store.path().display().to_string()));
    Ok(())
}
