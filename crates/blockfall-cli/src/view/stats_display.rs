use blockfall_engine::GameState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

/// Renders the score and session status next to the board.
#[derive(Debug)]
pub struct StatsDisplay<'a> {
    state: &'a GameState,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        16
    }
}

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let mut lines = vec![
            Line::from("SCORE:"),
            Line::from(self.state.score().to_string()),
            Line::from(""),
            Line::from("TICKS:"),
            Line::from(self.state.ticks().to_string()),
        ];
        if self.state.phase().is_game_over() {
            lines.push(Line::from(""));
            lines.push(Line::from("GAME OVER").style(Style::new().fg(Color::Red)));
        }
        Text::from(lines).render(area, buf);
    }
}
