// Adapters - External system implementations

pub mod exec_shell;
pub mod media_libav;
pub mod script_file;
pub mod terminal_ui;

// Re-export adapters
pub use exec_shell::ShellExecAdapter;
pub use media_libav::LibavMediaAdapter;
pub use script_file::ScriptFileAdapter;
pub use terminal_ui::TerminalUiAdapter;
