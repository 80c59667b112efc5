pub use self::{board_display::*, stats_display::*};

mod board_display;
mod stats_display;

pub(crate) mod style {
    use ratatui::style::{Color, Style};

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    /// Unoccupied grid cell.
    pub const EMPTY: Style = bg_only(Color::Rgb(0, 0, 0));
    /// Locked stack cell.
    pub const STACK: Style = bg_only(Color::Rgb(255, 255, 255));
    /// Cell of the active falling piece.
    pub const ACTIVE: Style = bg_only(Color::Rgb(255, 0, 0));
}
