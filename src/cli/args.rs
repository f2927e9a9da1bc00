//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! gitgate defines no flags of its own. Help and version flags are
//! disabled and hyphen values are allowed, so every token (including
//! `--help`, `--version`, `-s`) reaches the alias table or git verbatim.

use clap::Parser;

/// gitgate - branch-guarded alias wrapper around git
#[derive(Parser, Debug)]
#[command(name = "gitgate")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Alias or git subcommand, followed by arguments forwarded to git
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub argv: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// The alias and its trailing arguments, if an alias was given.
    pub fn split(&self) -> Option<(&str, &[String])> {
        self.argv
            .split_first()
            .map(|(alias, rest)| (alias.as_str(), rest))
    }
}
