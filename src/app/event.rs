use crate::review::StoreEvent;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Result of the review fetch
    Store(StoreEvent),

    /// Tick for UI refresh
    Tick,
}
