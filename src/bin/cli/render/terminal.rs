use werkwoord_lib::review::MAX_MASTERY_LEVEL;
use werkwoord_lib::Trophy;

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap text in a color code when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Mastery as a row of filled and empty cells, e.g. `■■■□□□□`
pub fn mastery_bar(level: u8, use_color: bool) -> String {
    let level = level.min(MAX_MASTERY_LEVEL) as usize;
    let filled = "\u{25a0}".repeat(level);
    let empty = "\u{25a1}".repeat(MAX_MASTERY_LEVEL as usize - level);

    let color = match level {
        0 => Color::GRAY,
        1..=2 => Color::RED,
        3..=4 => Color::YELLOW,
        _ => Color::GREEN,
    };

    format!("{}{}", paint(&filled, color, use_color), paint(&empty, Color::DIM, use_color))
}

/// One trophy line for listings and unlock notices
pub fn trophy_line(trophy: &Trophy, unlocked: bool, use_color: bool) -> String {
    if unlocked {
        format!(
            "{} {}  {}",
            trophy.icon,
            paint(trophy.name, Color::BOLD, use_color),
            trophy.description
        )
    } else {
        paint(
            &format!("\u{1f512} {}  {}", trophy.name, trophy.description),
            Color::DIM,
            use_color,
        )
    }
}

/// Pad a column to a display width; accented letters count as one
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}
