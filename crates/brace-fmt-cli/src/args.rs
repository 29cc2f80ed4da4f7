use clap::{crate_version, ArgEnum, Parser};

#[derive(Clone, Parser)]
#[clap(name = "brace-fmt")]
#[clap(bin_name = "brace-fmt")]
#[clap(version = crate_version!())]
pub struct FmtArgs {
    /// Files or glob patterns to format.
    pub files: Vec<String>,

    /// Check formatting without writing changes; exits non-zero if any file would change.
    #[clap(long)]
    pub check: bool,

    /// Path to a TOML config file (default: ./.brace-fmt.toml if present).
    #[clap(long)]
    pub config: Option<std::path::PathBuf>,

    /// Treat every input as a code fragment rather than a whole file.
    #[clap(long)]
    pub fragment: bool,

    #[clap(long, arg_enum, default_value = "auto")]
    pub colors: Colors,

    /// Enable a verbose logging format.
    #[clap(long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, ArgEnum)]
pub enum Colors {
    /// Determine whether to colorize output automatically.
    Auto,
    /// Always colorize output.
    Always,
    /// Never colorize output.
    Never,
}
