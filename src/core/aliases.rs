//! core::aliases
//!
//! The static alias table and translation to a git argument vector.
//!
//! # Table
//!
//! Each [`CommandSpec`] names its aliases, its [`CommandKind`], and an
//! argument template. Templates are made of [`ArgToken`]s so that values
//! known only at run time (the current branch) are substituted during
//! translation rather than forwarded as literal placeholders.
//!
//! Aliases not in the table are passed through: the token becomes the git
//! subcommand and the trailing arguments follow verbatim.
//!
//! # Example
//!
//! ```
//! use gitgate::core::aliases::{translate, CommandKind};
//! use gitgate::core::types::RepositoryContext;
//!
//! let ctx = RepositoryContext::new("/repo", "feature/x");
//! let translation = translate("op", &[], &ctx);
//!
//! assert_eq!(translation.kind(), CommandKind::Gated);
//! assert_eq!(translation.argv(), ["push", "-u", "origin", "feature/x"]);
//! ```

use crate::core::types::RepositoryContext;

/// How the dispatcher treats a translated command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Runs on any branch.
    ReadOnly,
    /// Mutating; must pass the branch policy gate first.
    Gated,
    /// Several git commands run in sequence, stopping at the first failure.
    Compound,
    /// Unknown alias forwarded verbatim.
    Passthrough,
    /// Only permitted outside any repository (`clone`).
    Bootstrap,
}

impl CommandKind {
    /// Whether the branch policy gate applies.
    pub fn requires_policy_check(self) -> bool {
        matches!(self, CommandKind::Gated)
    }
}

/// One element of an argument template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgToken {
    /// Forwarded as-is.
    Literal(&'static str),
    /// Replaced by the resolved current branch.
    CurrentBranch,
}

impl ArgToken {
    fn render(self, ctx: &RepositoryContext) -> String {
        match self {
            ArgToken::Literal(s) => s.to_string(),
            ArgToken::CurrentBranch => ctx.branch().to_string(),
        }
    }
}

/// A built-in alias and its translation.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Tokens that select this entry. The first is the canonical name.
    pub aliases: &'static [&'static str],
    /// Dispatch treatment.
    pub kind: CommandKind,
    /// Argument template for single commands.
    pub template: &'static [ArgToken],
    /// Step templates for compound commands, run in order. Trailing user
    /// arguments are never appended to steps.
    pub steps: &'static [&'static [ArgToken]],
    /// Whether to print `<branch> in <root>` before running.
    pub announce: bool,
}

impl CommandSpec {
    const fn single(
        aliases: &'static [&'static str],
        kind: CommandKind,
        template: &'static [ArgToken],
    ) -> Self {
        Self {
            aliases,
            kind,
            template,
            steps: &[],
            announce: false,
        }
    }

    const fn announcing(mut self) -> Self {
        self.announce = true;
        self
    }

    /// Canonical alias name.
    pub fn name(&self) -> &'static str {
        self.aliases[0]
    }

    /// Whether `alias` selects this entry.
    pub fn matches(&self, alias: &str) -> bool {
        self.aliases.contains(&alias)
    }
}

use ArgToken::{CurrentBranch, Literal};
use CommandKind::{Bootstrap, Compound, Gated, ReadOnly};

const REV_PARSE_HEAD: &[ArgToken] = &[Literal("rev-parse"), Literal("HEAD")];

/// Built-in aliases. Lookup is first match.
pub const COMMAND_TABLE: &[CommandSpec] = &[
    CommandSpec::single(&["check"], ReadOnly, REV_PARSE_HEAD).announcing(),
    CommandSpec::single(&["checkout", "co"], ReadOnly, &[Literal("checkout")]),
    CommandSpec {
        aliases: &["update", "u"],
        kind: Compound,
        template: &[],
        steps: &[
            &[
                Literal("fetch"),
                Literal("--all"),
                Literal("-p"),
                Literal("-t"),
            ],
            &[Literal("pull")],
        ],
        announce: false,
    },
    CommandSpec::single(
        &["log", "l"],
        ReadOnly,
        &[Literal("log"), Literal("--oneline"), Literal("--graph")],
    ),
    CommandSpec::single(&["add", "a"], Gated, &[Literal("add")]),
    CommandSpec::single(&["commit", "c"], Gated, &[Literal("commit")]),
    CommandSpec::single(&["push", "p"], Gated, &[Literal("push")]),
    CommandSpec::single(
        &["originpush", "op", "og"],
        Gated,
        &[
            Literal("push"),
            Literal("-u"),
            Literal("origin"),
            CurrentBranch,
        ],
    ),
    CommandSpec::single(&["current_hash", "hash"], ReadOnly, REV_PARSE_HEAD),
    CommandSpec::single(&["grep", "gg"], ReadOnly, &[Literal("grep"), Literal("-n")]),
    CommandSpec::single(&["clone"], Bootstrap, &[Literal("clone")]),
];

/// Find the built-in entry for `alias`, if any.
pub fn lookup(alias: &str) -> Option<&'static CommandSpec> {
    COMMAND_TABLE.iter().find(|spec| spec.matches(alias))
}

/// A translated alias, ready to gate and execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// One git invocation.
    Single {
        /// Canonical alias name, or the token itself for passthrough.
        name: String,
        kind: CommandKind,
        argv: Vec<String>,
        announce: bool,
    },
    /// Several git invocations run in order.
    Compound { name: String, steps: Vec<Vec<String>> },
}

impl Translation {
    /// Dispatch treatment of this translation.
    pub fn kind(&self) -> CommandKind {
        match self {
            Translation::Single { kind, .. } => *kind,
            Translation::Compound { .. } => CommandKind::Compound,
        }
    }

    /// Canonical name used in messages.
    pub fn name(&self) -> &str {
        match self {
            Translation::Single { name, .. } | Translation::Compound { name, .. } => name,
        }
    }

    /// Argument vector of a single translation (empty for compound).
    pub fn argv(&self) -> &[String] {
        match self {
            Translation::Single { argv, .. } => argv,
            Translation::Compound { .. } => &[],
        }
    }

    /// Every argument vector to execute, in order.
    pub fn invocations(&self) -> Vec<&[String]> {
        match self {
            Translation::Single { argv, .. } => vec![argv.as_slice()],
            Translation::Compound { steps, .. } => steps.iter().map(Vec::as_slice).collect(),
        }
    }
}

/// Translate `alias` and its trailing arguments into git argv.
///
/// Never fails: unknown aliases become passthrough translations. Whether
/// the result may run (policy, clone restrictions) is decided by the
/// dispatcher.
pub fn translate(alias: &str, trailing: &[String], ctx: &RepositoryContext) -> Translation {
    let Some(spec) = lookup(alias) else {
        let mut argv = Vec::with_capacity(trailing.len() + 1);
        argv.push(alias.to_string());
        argv.extend(trailing.iter().cloned());
        return Translation::Single {
            name: alias.to_string(),
            kind: CommandKind::Passthrough,
            argv,
            announce: false,
        };
    };

    let render = |template: &[ArgToken]| -> Vec<String> {
        template.iter().map(|token| token.render(ctx)).collect()
    };

    if spec.kind == CommandKind::Compound {
        return Translation::Compound {
            name: spec.name().to_string(),
            steps: spec.steps.iter().copied().map(render).collect(),
        };
    }

    let mut argv = render(spec.template);
    argv.extend(trailing.iter().cloned());

    Translation::Single {
        name: spec.name().to_string(),
        kind: spec.kind,
        argv,
        announce: spec.announce,
    }
}
