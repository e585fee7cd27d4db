//! Install command arguments

use clap::Args;

#[derive(Args, Debug, Default)]
pub struct InstallArgs {
    /// Overwrite existing configuration and template files with defaults
    ///
    /// By default a re-run keeps user-edited files untouched; the previous
    /// content is backed up for the duration of the run.
    #[arg(long)]
    pub force_config: bool,

    /// Skip the system package installation step
    #[arg(long)]
    pub skip_packages: bool,
}
