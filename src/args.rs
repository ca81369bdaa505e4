use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Build the command line of the FTP benchmark active check
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Turn a rule parameter document into the benchmark command line
    Build(BuildArgs),
    /// Print the rule form definition
    Form(FormArgs),
    /// Print the metric and graph definitions
    Metrics,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Parameter document (JSON), stdin when omitted or `-`
    #[clap(long)]
    pub params: Option<PathBuf>,
    /// Password store (JSON object of id to password), falls back to FTPBENCH_PASSWORD_STORE
    #[clap(long)]
    pub password_store: Option<PathBuf>,
    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    /// Mask the password in the printed command line
    #[clap(long)]
    pub redact: bool,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// Print the parameter document a fresh form submits instead of the form
    #[clap(long)]
    pub prefill: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    /// One argument per line; arguments containing a line break are rejected
    Lines,
}
