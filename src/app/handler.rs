use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::review::AppFilter;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Store(store_event) => {
            state.apply_store_event(store_event);
            vec![]
        }
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState) {
    state.tick_count = state.tick_count.wrapping_add(1);
    // Spinner in the status bar while the fetch is outstanding
    if state.load == LoadStatus::Loading {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Some terminals also report releases and repeats
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Filter dropdown captures all input when visible
    if state.filter_menu.visible {
        return handle_filter_menu_key(state, key);
    }

    let len = state.store.displayed_len();
    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Char('f') => state.open_filter_menu(),
        KeyCode::Char('a') => state.select_filter(AppFilter::All),
        KeyCode::Char('s') => state.grid.cycle_page_size(len),
        KeyCode::Left | KeyCode::PageUp => state.grid.prev_page(),
        KeyCode::Right | KeyCode::PageDown => state.grid.next_page(len),
        KeyCode::Home => state.grid.first_page(),
        KeyCode::End => state.grid.last_page(len),
        KeyCode::Up => state.grid.move_up(),
        KeyCode::Down => state.grid.move_down(len),
        _ => {}
    }
    vec![]
}

fn handle_filter_menu_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => state.filter_menu.close(),
        KeyCode::Up => state.filter_menu.move_up(),
        KeyCode::Down => {
            let count = state.filter_options().len();
            state.filter_menu.move_down(count);
        }
        KeyCode::Home => state.filter_menu.highlighted = 0,
        KeyCode::End => state.filter_menu.highlighted = state.filter_options().len() - 1,
        KeyCode::Enter => state.confirm_filter_menu(),
        _ => {}
    }
    vec![]
}
