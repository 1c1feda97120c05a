use clap::ValueEnum;

/// Layout used when printing the line distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DistFormat {
    /// Right-aligned count followed by the line
    #[default]
    Default,
    /// `count line`, one per row
    Simple,
    /// Table with a header row
    Table,
    /// JSON array of {"count", "line"} objects
    Json,
}

/// Shells `--completion` can generate a script for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CompletionShell {
    Bash,
    Fish,
    Zsh,
}

impl From<CompletionShell> for clap_complete::Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Self::Bash,
            CompletionShell::Fish => Self::Fish,
            CompletionShell::Zsh => Self::Zsh,
        }
    }
}
