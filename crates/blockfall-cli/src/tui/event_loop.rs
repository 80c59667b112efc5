use std::time::{Duration, Instant};

use crossterm::event;

use crate::tui::event::TuiEvent;

/// Fixed-interval tick/render scheduling over crossterm event polling.
///
/// `next()` blocks until a tick or render deadline passes or a terminal
/// event arrives, whichever comes first. Ticks take priority over renders
/// so game logic never starves behind drawing.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Duration,
    render_interval: Duration,
    last_tick: Instant,
    last_render: Instant,
}

impl EventLoop {
    pub(super) fn new(tick_interval: Duration, render_interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            tick_interval,
            render_interval,
            last_tick: now,
            last_render: now,
        }
    }

    pub(super) fn set_tick_interval(&mut self, interval: Duration) {
        self.tick_interval = interval;
    }

    pub(super) fn set_render_interval(&mut self, interval: Duration) {
        self.render_interval = interval;
    }

    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if now.duration_since(self.last_tick) >= self.tick_interval {
                self.last_tick = now;
                return Ok(TuiEvent::Tick);
            }
            if now.duration_since(self.last_render) >= self.render_interval {
                self.last_render = now;
                return Ok(TuiEvent::Render);
            }

            if !event::poll(self.next_deadline(now))? {
                continue;
            }
            return Ok(event::read()?.into());
        }
    }

    fn next_deadline(&self, now: Instant) -> Duration {
        let next_tick_at = self.last_tick + self.tick_interval;
        let next_render_at = self.last_render + self.render_interval;
        next_tick_at
            .min(next_render_at)
            .saturating_duration_since(now)
    }
}
