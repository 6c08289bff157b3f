//! # Command-line surface
//! An external collaborator (spec.md §1/§6): one positional argument, the
//! path to the PNG file to inspect. Argument count is handled by hand
//! rather than left to clap's defaults, since the contract calls for
//! "print usage, exit 0" on a missing path and "too many arguments" on
//! more than one — neither is clap's stock behavior for a required
//! positional.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about = "Streaming validator and inspector for the PNG container format.")]
pub struct Cli {
    /// Path to the PNG file to inspect.
    pub path: Option<PathBuf>,

    /// Any positional arguments past the first; their presence alone is
    /// the "too many arguments" condition (spec.md §6).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Reject chunks whose declared length exceeds this many bytes.
    #[arg(long, value_name = "BYTES")]
    pub max_chunk_bytes: Option<u32>,

    /// Increase log verbosity; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
