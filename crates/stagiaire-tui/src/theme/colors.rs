use ratatui::style::Color;
use stagiaire_core::Theme;

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted_text: Color,
    pub focused_border: Color,
    pub unfocused_border: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub accent: Color,
    pub drop_target: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::White,
    text: Color::Black,
    muted_text: Color::DarkGray,
    focused_border: Color::Blue,
    unfocused_border: Color::Gray,
    selected_bg: Color::LightBlue,
    selected_fg: Color::Black,
    accent: Color::Blue,
    drop_target: Color::Magenta,
    success: Color::Green,
    warning: Color::Rgb(204, 122, 0),
    error: Color::Red,
    info: Color::Cyan,
};

pub const DARK: Palette = Palette {
    background: Color::Black,
    text: Color::White,
    muted_text: Color::DarkGray,
    focused_border: Color::Cyan,
    unfocused_border: Color::White,
    selected_bg: Color::Blue,
    selected_fg: Color::White,
    accent: Color::Cyan,
    drop_target: Color::LightMagenta,
    success: Color::Green,
    warning: Color::Yellow,
    error: Color::LightRed,
    info: Color::LightCyan,
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}
