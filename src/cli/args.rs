//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// What to cut and where the results go
#[derive(Args, Debug)]
pub struct CutArgs {
    /// Source video file
    pub video: PathBuf,

    /// Output kind: vids (one clip per cut) or imgs (PNG frames per cut)
    #[arg(short, long, default_value = "vids")]
    pub mode: String,

    /// Append commands to the cut script instead of running them
    #[arg(short, long)]
    pub script: bool,

    /// Output directory (created if missing)
    #[arg(short, long, env = "FRAMECUT_OUTPUT_DIR")]
    pub outdir: Option<PathBuf>,

    /// Transcoder binary
    #[arg(long, env = "FRAMECUT_TOOL")]
    pub tool: Option<String>,

    /// Copy streams instead of re-encoding (clip mode only)
    #[arg(long)]
    pub copy: bool,
}
