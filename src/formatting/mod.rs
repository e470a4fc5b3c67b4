use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

impl From<bool> for ColorMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Always
        } else {
            Self::Never
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,
    Always,
    Never,
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    /// Environment wins over the config file's `use_color`.
    pub fn from_env_with(use_color: Option<bool>) -> Self {
        let mut config = Self::default();
        if let Some(enabled) = use_color {
            config.color = enabled.into();
        }

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Create a plain output configuration (ASCII-only, no colors, no emoji)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }
}

pub trait OutputFormatter {
    fn success(&self, text: &str) -> String;
    fn error(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn emoji(&self, emoji: &str, fallback: &str) -> String;
    fn dim(&self, text: &str) -> String;

    /// Color an attainment value by band: zero, below target, at or above.
    fn attainment(&self, atingimento: f64, target_score: f64) -> String {
        let text = format!("{atingimento:.2}%");
        if atingimento <= 0.0 {
            self.error(&text)
        } else if atingimento < target_score {
            self.warning(&text)
        } else {
            self.success(&text)
        }
    }
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.config.color.should_use_color() {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green().bold())
    }

    fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.green().bold())
    }

    fn emoji(&self, emoji: &str, fallback: &str) -> String {
        if self.config.emoji.should_use_emoji() {
            emoji.to_string()
        } else {
            fallback.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn error(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn emoji(&self, _emoji: &str, fallback: &str) -> String {
        fallback.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Pick the formatter for a configuration.
pub fn formatter_for(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    if config.color == ColorMode::Never && config.emoji == EmojiMode::Never {
        Box::new(PlainFormatter)
    } else {
        Box::new(ColoredFormatter::new(config))
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}
