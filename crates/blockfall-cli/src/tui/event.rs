use crossterm::event::Event;

/// Events produced by the TUI event loop.
#[derive(Debug, derive_more::From)]
pub(super) enum TuiEvent {
    /// Fixed-rate logic tick.
    Tick,
    /// Time to redraw.
    Render,
    /// Raw terminal event.
    #[from]
    Crossterm(Event),
}
