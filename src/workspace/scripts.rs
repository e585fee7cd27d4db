//! Companion script generation
//!
//! Emits the launcher and maintenance scripts into `bin/`. The run and dev
//! scripts are thin wrappers that activate the virtual environment and invoke
//! the editor entry point; verify, uninstall and cloud-setup delegate to this
//! binary's subcommands. Scripts are regenerated on every install so they
//! always reflect the current workspace path.

use crate::error::Result;
use crate::file_ops;
use crate::templates::{Template, TemplateParams};
use crate::transaction::Transaction;
use crate::ui;
use crate::workspace::Workspace;

const SCRIPT_TEMPLATES: &[Template] = &[
    Template::RunScript,
    Template::DevScript,
    Template::VerifyScript,
    Template::UninstallScript,
    Template::CloudSetupScript,
];

/// Render every companion script into the workspace `bin/` directory
pub fn emit_scripts(workspace: &Workspace, tx: &mut Transaction) -> Result<()> {
    let params = TemplateParams::new(&workspace.root);

    for template in SCRIPT_TEMPLATES {
        let target = workspace.root.join(template.relative_path());
        if target.exists() {
            tx.backup_file(&target)?;
        } else {
            tx.track_file_created(&target);
        }
        let content = template.render(&params);
        if template.executable() {
            file_ops::write_executable(&target, &content)?;
        } else {
            file_ops::atomic_replace(&target, &content)?;
        }
    }

    ui::success("Companion scripts generated in bin/");
    Ok(())
}
