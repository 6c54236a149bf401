//! Remove persisted site state

use anyhow::Result;
use std::fs;

use crate::Folio;

/// Delete the state directory (saved preferences)
pub fn run(folio: &Folio) -> Result<()> {
    if folio.state_dir.exists() {
        fs::remove_dir_all(&folio.state_dir)?;
        tracing::info!("Deleted: {:?}", folio.state_dir);
    } else {
        tracing::debug!("Nothing to clean at {:?}", folio.state_dir);
    }

    Ok(())
}
