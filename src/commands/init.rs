use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

use crate::Config;

/// Write a default config under `root`.
pub fn run(root: &Path, force: bool) -> Result<()> {
    let path = Config::config_path(root);

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save(root)?;

    info!("Wrote default configuration to {:?}", path);
    println!("✓ Created {} with default configuration", path.display());
    println!("\nNext steps:");
    println!("  1. Set backend.url in {} (or export BACKEND_URL)", path.display());
    println!("  2. Run 'askdocs status' to check the backend");
    println!("  3. Run 'askdocs chat' to start asking questions");

    Ok(())
}
