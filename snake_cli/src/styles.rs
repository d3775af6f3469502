use anstyle::{AnsiColor, Color, Style};
use clap::builder::Styles;

pub fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

pub fn get_styles() -> Styles {
    Styles::styled()
        .usage(fg(AnsiColor::Yellow).bold())
        .header(fg(AnsiColor::Yellow).bold())
        .literal(fg(AnsiColor::Green))
        .placeholder(fg(AnsiColor::Cyan))
        .error(fg(AnsiColor::Red).bold())
        .valid(fg(AnsiColor::Green))
        .invalid(fg(AnsiColor::Red))
}

/// Style of the digit currently driven by the multiplexer.
pub fn active_digit() -> Style {
    fg(AnsiColor::BrightGreen).bold()
}

pub fn inactive_digit() -> Style {
    fg(AnsiColor::Green).dimmed()
}

pub fn paint(style: Style, text: &str) -> String {
    format!("{}{text}{}", style.render(), style.render_reset())
}
