use std::time::Duration;

use crate::tui::{App, event::TuiEvent, event_loop::EventLoop};

const DEFAULT_RATE: f64 = 60.0;

/// TUI application runtime.
///
/// Owns the event loop and drives an [`App`] until it asks to exit.
#[derive(Debug)]
pub struct Tui {
    events: EventLoop,
}

impl Default for Tui {
    fn default() -> Self {
        Self::new()
    }
}

impl Tui {
    pub fn new() -> Self {
        let interval = Duration::from_secs_f64(1.0 / DEFAULT_RATE);
        Self {
            events: EventLoop::new(interval, interval),
        }
    }

    /// Sets the logic tick rate (Hz).
    pub fn set_tick_rate(&mut self, rate: f64) {
        self.events
            .set_tick_interval(Duration::from_secs_f64(1.0 / rate));
    }

    /// Sets the render rate (Hz).
    pub fn set_render_rate(&mut self, rate: f64) {
        self.events
            .set_render_interval(Duration::from_secs_f64(1.0 / rate));
    }

    /// Runs the application: `update` on each tick, `draw` on each render,
    /// `handle_event` for everything the terminal sends.
    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => app.update(&mut self),
                    TuiEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(&mut self, event),
                }
            }
            Ok(())
        })
    }
}
