use blockfall_engine::{GameState, Rotation};
use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Color, Style},
    text::Text,
    widgets::Block as BlockWidget,
};

use crate::{
    input::KeyTracker,
    tui::{App, Tui},
    view::{BoardDisplay, StatsDisplay},
};

const TICK_RATE: f64 = 60.0;

#[derive(Debug)]
pub struct PlayApp {
    state: GameState,
    keys: KeyTracker,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            keys: KeyTracker::new(),
            is_exiting: false,
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_rate(TICK_RATE);
        tui.set_render_rate(TICK_RATE / f64::from(self.state.config().ticks_per_frame));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        let Some(key) = event.as_key_event() else {
            return;
        };
        if !self.keys.newly_pressed(&key) {
            return;
        }
        match key.code {
            KeyCode::Left => _ = self.state.try_move_left(),
            KeyCode::Right => _ = self.state.try_move_right(),
            KeyCode::Down => _ = self.state.try_soft_drop(),
            KeyCode::Up => _ = self.state.try_rotate(Rotation::Clockwise),
            KeyCode::Char('z') => _ = self.state.try_rotate(Rotation::CounterClockwise),
            KeyCode::Char('s') => self.state.increase_score(),
            KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let board = BoardDisplay::new(&self.state).block(BlockWidget::bordered());
        let stats = StatsDisplay::new(&self.state).block(BlockWidget::bordered());

        let help = Text::from(
            "Controls: \u{2190} \u{2192} (Move) | \u{2193} (Soft Drop) | \u{2191} Z (Rotate) | S (Score+) | Q (Quit)",
        )
        .style(Style::default().fg(Color::DarkGray))
        .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(board.height() + 2), Constraint::Length(1)])
                .areas::<2>(frame.area());
        let [board_area, stats_area] = Layout::horizontal([
            Constraint::Length(board.width() + 2),
            Constraint::Length(stats.width() + 2),
        ])
        .flex(Flex::Center)
        .areas::<2>(main_area);

        frame.render_widget(board, board_area);
        frame.render_widget(stats, stats_area);
        frame.render_widget(help, help_area);
    }

    fn update(&mut self, _tui: &mut Tui) {
        self.state.advance_clock();
    }
}
