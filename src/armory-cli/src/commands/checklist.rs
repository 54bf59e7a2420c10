//! Checklist command handlers
//!
//! Handles the `recalc` and `sort` subcommands.

use anyhow::{Context, Result};
use std::path::Path;

/// Handle `recalc` command
pub fn recalc(path: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        let text = read_checklist(path)?;
        let result = armory::recalculate(&text);
        print!("{}", result.text);
        tracing::info!(
            "{} of {} entries would change (dry run, {} not modified)",
            result.changed,
            result.entries,
            path.display()
        );
        return Ok(());
    }

    let result = armory::recalculate_file(path)
        .with_context(|| format!("Failed to recalculate totals in {}", path.display()))?;

    println!("Updated totals in {}", path.display());
    println!("  {} entries, {} changed", result.entries, result.changed);

    Ok(())
}

/// Handle `sort` command
pub fn sort(path: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        let text = read_checklist(path)?;
        let outcome = armory::sort(&text);
        print!("{}", outcome.text);
        tracing::info!(
            "{} lines sorted, {} blank lines dropped (dry run, {} not modified)",
            outcome.lines,
            outcome.blank_dropped,
            path.display()
        );
        return Ok(());
    }

    let outcome =
        armory::sort_file(path).with_context(|| format!("Failed to sort {}", path.display()))?;

    println!("Sorted {}", path.display());
    println!("  {} lines, {} blank lines dropped", outcome.lines, outcome.blank_dropped);

    Ok(())
}

fn read_checklist(path: &Path) -> Result<String> {
    armory::file_io::read_to_string(path)
        .with_context(|| format!("Failed to read checklist {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const UNSORTED: &str = "- [ ] Claymore (16/10/-/-/-) (0)\n\n- [ ] Dagger (5/9/-/-/-) (0)\n";

    #[test]
    fn test_recalc_rewrites_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("weapon_requirements.md");
        fs::write(&path, UNSORTED).unwrap();

        recalc(&path, false).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "- [ ] Claymore (16/10/-/-/-) (6)\n\n- [ ] Dagger (5/9/-/-/-) (0)\n"
        );
    }

    #[test]
    fn test_dry_runs_leave_file_alone() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("weapon_requirements.md");
        fs::write(&path, UNSORTED).unwrap();

        recalc(&path, true).unwrap();
        sort(&path, true).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), UNSORTED);
    }

    #[test]
    fn test_recalc_then_sort() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("weapon_requirements.md");
        fs::write(&path, UNSORTED).unwrap();

        recalc(&path, false).unwrap();
        sort(&path, false).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "- [ ] Dagger (5/9/-/-/-) (0)\n- [ ] Claymore (16/10/-/-/-) (6)\n"
        );
    }

    #[test]
    fn test_missing_checklist_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("weapon_requirements.md");

        assert!(recalc(&path, false).is_err());
        assert!(sort(&path, false).is_err());
        assert!(recalc(&path, true).is_err());
        assert!(!path.exists());
    }
}
