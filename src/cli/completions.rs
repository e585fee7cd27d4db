//! Completions command arguments

use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    geminide-setup completions bash > ~/.bash_completion.d/geminide-setup\n\n\
                  Generate zsh completions:\n    geminide-setup completions zsh > ~/.zfunc/_geminide-setup\n\n\
                  Generate fish completions:\n    geminide-setup completions fish > ~/.config/fish/completions/geminide-setup.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
