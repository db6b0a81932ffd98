/// Side effects requested by the event handler and carried out by the main loop.
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
}
