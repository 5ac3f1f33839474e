use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn album_title(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn artist(&self, text: &str) -> ColoredString {
        text.normal()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn step_number(&self, text: &str) -> ColoredString {
        text.blue()
    }

    /// Positive balances in green, negative in red.
    pub fn balance(&self, balance: i64) -> ColoredString {
        let text = format!("{:+}", balance);
        match balance {
            b if b > 0 => text.green(),
            b if b < 0 => text.red(),
            _ => text.normal(),
        }
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
