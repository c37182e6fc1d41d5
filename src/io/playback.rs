// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback hand-off.
//!
//! Videos are played by the platform's default player. Decoding errors are
//! reported by that player, not by this application.

use super::content::ContentSource;
use anyhow::{Context, Result};

/// Open a video in the system player without waiting for it to exit.
pub fn launch(source: &ContentSource) -> Result<()> {
    open::that_detached(&source.path)
        .with_context(|| format!("launching player for {}", source.path.display()))?;
    log::info!("Launched player for {}", source.path.display());
    Ok(())
}
