use ratatui::style::{Color, Modifier, Style};

use crate::model::Ownership;

/// Tokyo Night palette, carried as a value so rendering takes it as plain
/// immutable configuration.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub success: Color,
    pub warn: Color,
    pub error: Color,
    pub blue: Color,
    pub cyan: Color,
    pub purple: Color,
    pub cursor_bg: Color,
    pub cursor_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            text: Color::Rgb(0xc0, 0xca, 0xf5),
            muted: Color::Rgb(0x6b, 0x70, 0x89),
            success: Color::Rgb(0x9e, 0xce, 0x6a),
            warn: Color::Rgb(0xe0, 0xaf, 0x68),
            error: Color::Rgb(0xf7, 0x76, 0x8e),
            blue: Color::Rgb(0x7a, 0xa2, 0xf7),
            cyan: Color::Rgb(0x7d, 0xcf, 0xff),
            purple: Color::Rgb(0xbb, 0x9a, 0xf7),
            cursor_bg: Color::Rgb(0x2f, 0x33, 0x48),
            cursor_fg: Color::Rgb(0xc0, 0xca, 0xf5),
        }
    }
}

impl Theme {
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.blue).add_modifier(Modifier::BOLD)
    }

    pub fn header_style(&self) -> Style {
        Style::default().fg(self.cyan).add_modifier(Modifier::BOLD)
    }

    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn cursor_style(&self) -> Style {
        Style::default()
            .bg(self.cursor_bg)
            .fg(self.cursor_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_style(&self, ok: bool) -> Style {
        if ok {
            Style::default().fg(self.success)
        } else {
            Style::default().fg(self.error)
        }
    }

    pub fn filter_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Ownership tags carry the same color coding everywhere: current user
    /// green, system accounts amber, ourselves cyan, kernel purple.
    pub fn tag_style(&self, tag: Ownership) -> Style {
        match tag {
            Ownership::User => Style::default().fg(self.success),
            Ownership::System => Style::default().fg(self.warn),
            Ownership::SelfOwned => Style::default().fg(self.cyan),
            Ownership::Kernel => Style::default()
                .fg(self.purple)
                .add_modifier(Modifier::BOLD),
            Ownership::Unknown => Style::default().fg(self.error),
        }
    }
}
