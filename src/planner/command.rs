//! Transcoder command line rendering

use std::fmt;
use std::path::PathBuf;

use crate::utils::time::format_seconds;

/// Quote character understood by the shell commands are run with
pub const PATH_QUOTE: char = if cfg!(windows) { '"' } else { '\'' };

/// One external transcoder invocation
///
/// Renders as `<tool> -ss <start> -i '<input>' -t <duration> [-c copy] '<output>'`.
/// Paths are wrapped in [`PATH_QUOTE`] (single quotes for `sh`, double quotes
/// for `cmd`) and not escaped further, so a path containing that quote
/// yields a broken shell command.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscodeCommand {
    pub tool: String,
    pub start_time: f64,
    pub input: PathBuf,
    pub duration: f64,
    pub stream_copy: bool,
    pub output: PathBuf,
}

impl TranscodeCommand {
    /// Render the shell command line
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TranscodeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = PATH_QUOTE;
        write!(
            f,
            "{} -ss {} -i {q}{}{q} -t {}",
            self.tool,
            format_seconds(self.start_time),
            self.input.display(),
            format_seconds(self.duration)
        )?;
        if self.stream_copy {
            f.write_str(" -c copy")?;
        }
        write!(f, " {q}{}{q}", self.output.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(stream_copy: bool) -> TranscodeCommand {
        TranscodeCommand {
            tool: "ffmpeg".to_string(),
            start_time: 1.0,
            input: PathBuf::from("clip.mp4"),
            duration: 2.0,
            stream_copy,
            output: PathBuf::from("clip_000.mp4"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_render_plain() {
        assert_eq!(
            command(false).render(),
            "ffmpeg -ss 1.0 -i 'clip.mp4' -t 2.0 'clip_000.mp4'"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_render_stream_copy() {
        assert_eq!(
            command(true).render(),
            "ffmpeg -ss 1.0 -i 'clip.mp4' -t 2.0 -c copy 'clip_000.mp4'"
        );
    }

    #[cfg(windows)]
    #[test]
    fn test_render_quotes_for_cmd() {
        let mut cmd = command(true);
        cmd.input = PathBuf::from(r"C:\videos\clip.mp4");
        assert_eq!(
            cmd.render(),
            r#"ffmpeg -ss 1.0 -i "C:\videos\clip.mp4" -t 2.0 -c copy "clip_000.mp4""#
        );
    }

    #[test]
    fn test_paths_use_shell_quote() {
        let rendered = command(false).render();
        assert!(rendered.contains(&format!("-i {q}clip.mp4{q} ", q = PATH_QUOTE)));
        assert!(rendered.ends_with(&format!(" {q}clip_000.mp4{q}", q = PATH_QUOTE)));
        assert_eq!(rendered.matches(PATH_QUOTE).count(), 4);
    }

    #[test]
    fn test_render_custom_tool() {
        let mut cmd = command(false);
        cmd.tool = "/opt/ffmpeg/bin/ffmpeg".to_string();
        cmd.start_time = 0.04;
        assert!(cmd.render().starts_with("/opt/ffmpeg/bin/ffmpeg -ss 0.04 -i"));
    }
}
