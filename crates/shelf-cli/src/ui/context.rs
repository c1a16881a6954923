//! Terminal detection and the per-command rendering context.

use std::io::IsTerminal;

use super::mode::{OutputFormat, OutputMode};

const FALLBACK_WIDTH: usize = 80;

/// What stdout is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    pub stdout_tty: bool,
    /// `TERM=dumb`
    pub dumb: bool,
    /// `NO_COLOR` is set
    pub no_color_env: bool,
    pub width: usize,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false),
            no_color_env: std::env::var_os("NO_COLOR").is_some(),
            width: columns_from_env()
                .or_else(ioctl_width)
                .unwrap_or(FALLBACK_WIDTH),
        }
    }

    /// Output redirected to a file or pipe.
    pub fn piped() -> Self {
        Self {
            stdout_tty: false,
            dumb: false,
            no_color_env: false,
            width: FALLBACK_WIDTH,
        }
    }

    pub fn supports_pretty(&self) -> bool {
        self.stdout_tty && !self.dumb
    }
}

/// Command-line choices that shape rendering.
#[derive(Debug, Clone, Default)]
pub struct UiOptions {
    pub json: bool,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
    pub ascii: bool,
    /// Prefix for money amounts (e.g. "Rp")
    pub currency: String,
}

/// Resolved rendering settings for one command.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    pub width: usize,
    pub mode: OutputMode,
    pub currency: String,
}

impl UiContext {
    pub fn new(terminal: &Terminal, options: UiOptions) -> Self {
        let mode = OutputMode::select(options.json, options.format, terminal);
        Self {
            color: terminal.supports_pretty() && !terminal.no_color_env && !options.no_color,
            unicode: !options.ascii,
            width: terminal.width,
            mode,
            currency: options.currency,
        }
    }
}

fn columns_from_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.trim().parse::<usize>().ok())
        .filter(|&width| width > 0)
}

#[cfg(unix)]
fn ioctl_width() -> Option<usize> {
    let mut size = std::mem::MaybeUninit::<libc::winsize>::uninit();
    // SAFETY: TIOCGWINSZ only writes into the winsize buffer we pass
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, size.as_mut_ptr()) };
    if rc != 0 {
        return None;
    }
    // SAFETY: initialized by the successful ioctl above
    let size = unsafe { size.assume_init() };
    (size.ws_col > 0).then_some(size.ws_col as usize)
}

#[cfg(not(unix))]
fn ioctl_width() -> Option<usize> {
    None
}
