//! Catalog conversion command handler

use anyhow::{Context, Result};
use std::path::Path;

/// Handle `convert` command
pub fn handle(input: &Path, output: &Path) -> Result<()> {
    let conversion = armory::convert_file(input, output).with_context(|| {
        format!("Failed to convert {} to {}", input.display(), output.display())
    })?;

    println!(
        "Converted {} weapons from {} to {}",
        conversion.weapons.len(),
        input.display(),
        output.display()
    );

    if !conversion.skipped.is_empty() {
        println!("Skipped {} malformed row(s):", conversion.skipped.len());
        for row in &conversion.skipped {
            println!("  {}", row);
        }
    }

    if !conversion.warnings.is_empty() {
        println!(
            "{} value(s) could not be converted and were set to their default:",
            conversion.warnings.len()
        );
        for warning in &conversion.warnings {
            println!("  {}", warning);
        }
    }

    Ok(())
}
