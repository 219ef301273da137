//! Export command: writes the whole task table to a file for use elsewhere.

use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_success,
    store::TaskStore,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    ///
    /// Defaults to `daytask_export_<timestamp>.<ext>` in the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs, store: &TaskStore) -> Result<()> {
    let exporter = Exporter::new(args.format, args.output);
    exporter.export(&store.get_all())?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
