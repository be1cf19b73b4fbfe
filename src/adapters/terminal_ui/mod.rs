//! Terminal user interface
//!
//! Draws the current frame as ASCII art with a position slider underneath,
//! and reads single key presses in raw mode. Raw mode is only held while
//! waiting for one key, so prompts, notifications, logging and the
//! transcoder's own output use the terminal normally.

use std::io::{self, BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    terminal::{self, Clear, ClearType},
};
use tracing::debug;

use crate::domain::errors::*;
use crate::ports::*;

/// Characters from dark to bright
const ASCII_RAMP: &[u8] = b" .:-=+*#%@";

/// Height of a terminal cell relative to its width, inverted
const FONT_RATIO: f64 = 0.5;

/// Position slider with range `[0, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliderState {
    max: u64,
    position: u64,
}

impl SliderState {
    pub fn new(max: u64) -> Self {
        Self { max, position: 0 }
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    /// Move to `position`, clamped to the range; returns the new position
    pub fn set(&mut self, position: u64) -> u64 {
        self.position = position.min(self.max);
        self.position
    }

    /// Move by `delta` frames; returns whether the position changed
    pub fn step(&mut self, delta: i64) -> bool {
        let before = self.position;
        let target = if delta < 0 {
            before.saturating_sub(delta.unsigned_abs())
        } else {
            before.saturating_add(delta as u64)
        };
        self.set(target) != before
    }

    /// Draw the slider as `[====|-----]` with `width` inner cells
    pub fn render_bar(&self, width: usize) -> String {
        let width = width.max(1);
        let cursor = if self.max == 0 {
            0
        } else {
            (self.position as u128 * (width as u128 - 1) / self.max as u128) as usize
        };

        let mut bar = String::with_capacity(width + 2);
        bar.push('[');
        for cell in 0..width {
            bar.push(match cell.cmp(&cursor) {
                std::cmp::Ordering::Less => '=',
                std::cmp::Ordering::Equal => '|',
                std::cmp::Ordering::Greater => '-',
            });
        }
        bar.push(']');
        bar
    }
}

/// What a key press means to the terminal front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Printable key, handed to the interaction loop
    Char(char),
    /// Move the slider by a number of frames
    Step(i64),
    /// Move the slider to a position (clamped)
    MoveTo(u64),
    /// Ctrl+C
    Interrupt,
    /// Anything else
    Ignore,
}

/// Translate a key event into a slider or loop action
pub fn translate_key(key: &KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Interrupt;
    }

    match key.code {
        KeyCode::Char(c) => KeyAction::Char(c),
        KeyCode::Left => KeyAction::Step(-1),
        KeyCode::Right => KeyAction::Step(1),
        KeyCode::Down => KeyAction::Step(-10),
        KeyCode::Up => KeyAction::Step(10),
        KeyCode::PageDown => KeyAction::Step(-100),
        KeyCode::PageUp => KeyAction::Step(100),
        KeyCode::Home => KeyAction::MoveTo(0),
        KeyCode::End => KeyAction::MoveTo(u64::MAX),
        _ => KeyAction::Ignore,
    }
}

/// Render a frame as rows of ASCII characters, `columns` wide at most
pub fn render_ascii(image: &FrameImage, columns: u32) -> Vec<String> {
    if image.width == 0 || image.height == 0 {
        return Vec::new();
    }

    let columns = columns.clamp(1, image.width);
    let rows = ((image.height as f64 / image.width as f64) * columns as f64 * FONT_RATIO)
        .round()
        .max(1.0) as u32;

    (0..rows)
        .map(|row| {
            let y = (row as u64 * image.height as u64 / rows as u64) as u32;
            (0..columns)
                .map(|col| {
                    let x = (col as u64 * image.width as u64 / columns as u64) as u32;
                    char_for(luminance(image.pixel(x, y)))
                })
                .collect()
        })
        .collect()
}

/// Frame number typed at the jump prompt; `None` unless it is a whole number
pub fn parse_frame_entry(entry: &str) -> Option<u64> {
    entry.trim().parse().ok()
}

fn luminance([r, g, b]: [u8; 3]) -> u8 {
    (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32).round() as u8
}

fn char_for(luma: u8) -> char {
    let index = luma as usize * (ASCII_RAMP.len() - 1) / 255;
    ASCII_RAMP[index] as char
}

fn ui_error(e: io::Error) -> DomainError {
    DomainError::UiFail(e.to_string())
}

/// Holds the terminal in raw mode until dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self, DomainError> {
        terminal::enable_raw_mode().map_err(ui_error)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// crossterm-backed [`UiPort`]
pub struct TerminalUiAdapter {
    title: String,
    help: Vec<String>,
    preview_width: u16,
    slider: SliderState,
}

impl TerminalUiAdapter {
    /// Create the adapter; `help` is redrawn under the slider with every frame
    pub fn new(preview_width: u16, help: Vec<String>) -> Self {
        Self {
            title: String::new(),
            help,
            preview_width,
            slider: SliderState::default(),
        }
    }

    fn read_key() -> Result<KeyEvent, DomainError> {
        let _raw = RawModeGuard::enable()?;
        loop {
            // Some platforms also report releases and repeats
            if let Event::Key(key) = event::read().map_err(ui_error)? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }

    /// Slider line followed by the help text
    fn footer(&self, frame_index: u64, columns: u32) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.help.len() + 1);
        lines.push(format!(
            "{} frame {} / {}",
            self.slider.render_bar(columns.saturating_sub(2) as usize),
            frame_index,
            self.slider.max()
        ));
        lines.extend(self.help.iter().cloned());
        lines
    }

    fn preview_columns(&self) -> u32 {
        let terminal_columns = terminal::size().map(|(cols, _)| cols).unwrap_or(80);
        self.preview_width.min(terminal_columns).max(8) as u32
    }
}

impl UiPort for TerminalUiAdapter {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn create_slider(&mut self, max_position: u64) {
        self.slider = SliderState::new(max_position);
    }

    fn set_slider_position(&mut self, position: u64) -> u64 {
        self.slider.set(position)
    }

    fn slider_position(&self) -> u64 {
        self.slider.position()
    }

    fn show_frame(&mut self, frame_index: u64, image: &FrameImage) -> Result<(), DomainError> {
        let columns = self.preview_columns();
        let mut out = io::stdout().lock();

        queue!(out, Clear(ClearType::All), MoveTo(0, 0)).map_err(ui_error)?;
        writeln!(out, "{}", self.title).map_err(ui_error)?;
        for line in render_ascii(image, columns)
            .into_iter()
            .chain(self.footer(frame_index, columns))
        {
            writeln!(out, "{}", line).map_err(ui_error)?;
        }
        out.flush().map_err(ui_error)
    }

    fn next_event(&mut self) -> Result<UiEvent, DomainError> {
        loop {
            let key = Self::read_key()?;
            let action = translate_key(&key);
            debug!(?action, "Key pressed");

            match action {
                KeyAction::Char(c) => return Ok(UiEvent::Key(c)),
                KeyAction::Interrupt => return Ok(UiEvent::Interrupted),
                KeyAction::Step(delta) => {
                    if self.slider.step(delta) {
                        return Ok(UiEvent::SliderMoved(self.slider.position()));
                    }
                }
                KeyAction::MoveTo(position) => {
                    let before = self.slider.position();
                    if self.slider.set(position) != before {
                        return Ok(UiEvent::SliderMoved(self.slider.position()));
                    }
                }
                KeyAction::Ignore => {}
            }
        }
    }

    fn prompt_frame_number(&mut self) -> Result<Option<u64>, DomainError> {
        let mut out = io::stdout().lock();
        write!(out, "Frame: ").map_err(ui_error)?;
        out.flush().map_err(ui_error)?;
        drop(out);

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line).map_err(ui_error)?;
        if read == 0 {
            return Ok(None);
        }

        let frame = parse_frame_entry(&line);
        if frame.is_none() {
            self.notify(&format!("Not a frame number: {}", line.trim()));
        }
        Ok(frame)
    }

    fn notify(&mut self, message: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{}", message);
        let _ = out.flush();
    }
}
