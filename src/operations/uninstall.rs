//! Interactive uninstallation
//!
//! Two confirmation gates: the first covers the desktop entry and the
//! uninstall as a whole, the second the deletion of the entire workspace.
//! Declining the first prompt performs no filesystem deletion at all;
//! declining the second keeps the workspace and removes only the desktop
//! entry.

use inquire::Confirm;

use crate::desktop;
use crate::error::Result;
use crate::ui;
use crate::workspace::Workspace;

/// What the confirmed prompts allow the uninstaller to delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UninstallPlan {
    pub remove_desktop_entry: bool,
    pub remove_workspace: bool,
}

/// Derive the deletion plan from the two prompt answers.
///
/// The second answer is only meaningful when the first was affirmative.
pub fn plan_from_answers(confirm_uninstall: bool, confirm_workspace: bool) -> UninstallPlan {
    UninstallPlan {
        remove_desktop_entry: confirm_uninstall,
        remove_workspace: confirm_uninstall && confirm_workspace,
    }
}

pub fn run(workspace: &Workspace) -> Result<()> {
    ui::heading("Uninstalling Geminide");

    let first = Confirm::new("Remove the Geminide desktop entry and uninstall?")
        .with_default(false)
        .with_help_message("This is the first of two confirmations")
        .prompt()?;

    if !first {
        ui::info("Uninstall cancelled; nothing was removed");
        return Ok(());
    }

    let second = if workspace.exists() {
        let file_count = walkdir::WalkDir::new(&workspace.root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .count();
        Confirm::new(&format!(
            "Also delete the entire workspace at {} ({file_count} files)?",
            workspace.root.display()
        ))
        .with_default(false)
        .prompt()?
    } else {
        false
    };

    execute(workspace, plan_from_answers(first, second))
}

fn execute(workspace: &Workspace, plan: UninstallPlan) -> Result<()> {
    if plan.remove_desktop_entry {
        if desktop::remove_entry()? {
            ui::success("Desktop entry removed");
        } else {
            ui::info("No desktop entry found");
        }
    }

    if plan.remove_workspace {
        std::fs::remove_dir_all(&workspace.root)?;
        ui::success(&format!("Workspace {} deleted", workspace.root.display()));
    } else if workspace.exists() {
        ui::info(&format!("Workspace {} kept", workspace.root.display()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declining_first_prompt_deletes_nothing() {
        let plan = plan_from_answers(false, true);
        assert!(!plan.remove_desktop_entry);
        assert!(!plan.remove_workspace);
    }

    #[test]
    fn test_first_confirmation_only_removes_desktop_entry() {
        let plan = plan_from_answers(true, false);
        assert!(plan.remove_desktop_entry);
        assert!(!plan.remove_workspace);
    }

    #[test]
    fn test_both_confirmations_remove_everything() {
        let plan = plan_from_answers(true, true);
        assert!(plan.remove_desktop_entry);
        assert!(plan.remove_workspace);
    }
}
