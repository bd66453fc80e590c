// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

use std::io::IsTerminal;

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};

pub mod codes {
    pub const HEADER: u8 = 74;
    pub const MUTED: u8 = 240;
    pub const ERROR: u8 = 203;
}

/// Priority: `NO_COLOR=1` disables, `COLOR=1` forces, otherwise a TTY check.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Build clap `Styles` using this binary's palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled().header(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::HEADER)))))
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const RESET: &str = "\x1b[0m";

pub fn header(text: &str) -> String {
    if should_colorize() { format!("{}{}{}", fg256(codes::HEADER), text, RESET) } else { text.to_string() }
}

pub fn muted(text: &str) -> String {
    if should_colorize() { format!("{}{}{}", fg256(codes::MUTED), text, RESET) } else { text.to_string() }
}

pub fn error(text: &str) -> String {
    if should_colorize() { format!("{}{}{}", fg256(codes::ERROR), text, RESET) } else { text.to_string() }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
