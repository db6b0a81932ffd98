use crate::config::{AppConfig, UiConfig};
use crate::review::{AppFilter, ReviewStore, StoreEvent};
use chrono::Local;
use std::fmt::Write;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Loaded { at: String, count: usize },
    Failed,
}

/// Pagination model of the review table.
#[derive(Debug, Clone)]
pub struct GridState {
    pub page: usize,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Cursor row, relative to the first row of the current page.
    pub selected: usize,
}

impl GridState {
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            page: 0,
            page_size: ui.page_size.max(1),
            page_size_options: ui.page_size_options.clone(),
            selected: 0,
        }
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Half-open row range `[start, end)` of the current page.
    pub fn page_bounds(&self, len: usize) -> (usize, usize) {
        let start = (self.page * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        (start, end)
    }

    pub fn rows_on_page(&self, len: usize) -> usize {
        let (start, end) = self.page_bounds(len);
        end - start
    }

    pub fn next_page(&mut self, len: usize) {
        if self.page + 1 < self.page_count(len) {
            self.page += 1;
            self.selected = 0;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
            self.selected = 0;
        }
    }

    pub fn first_page(&mut self) {
        self.reset();
    }

    pub fn last_page(&mut self, len: usize) {
        self.page = self.page_count(len) - 1;
        self.selected = 0;
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < self.rows_on_page(len) {
            self.selected += 1;
        }
    }

    /// Switch to the next page size, keeping the cursor row on screen.
    pub fn cycle_page_size(&mut self, len: usize) {
        if self.page_size_options.is_empty() {
            return;
        }
        let absolute = self.page * self.page_size + self.selected;
        let next = self
            .page_size_options
            .iter()
            .position(|&s| s == self.page_size)
            .map(|i| (i + 1) % self.page_size_options.len())
            .unwrap_or(0);
        self.page_size = self.page_size_options[next];
        self.page = absolute / self.page_size;
        self.selected = absolute % self.page_size;
        self.clamp(len);
    }

    /// Pull page and cursor back inside a row set of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        self.page = self.page.min(self.page_count(len) - 1);
        self.selected = self
            .selected
            .min(self.rows_on_page(len).saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.page = 0;
        self.selected = 0;
    }
}

/// The "Filter by App" dropdown.
#[derive(Debug, Default)]
pub struct FilterMenu {
    pub visible: bool,
    pub highlighted: usize,
}

impl FilterMenu {
    pub fn open(&mut self, current: usize) {
        self.visible = true;
        self.highlighted = current;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn move_down(&mut self, option_count: usize) {
        if self.highlighted + 1 < option_count {
            self.highlighted += 1;
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub store: ReviewStore,
    pub grid: GridState,
    pub filter_menu: FilterMenu,
    pub load: LoadStatus,
    pub log_path: Option<PathBuf>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let grid = GridState::new(&config.ui);
        Self {
            config,
            store: ReviewStore::new(),
            grid,
            filter_menu: FilterMenu::default(),
            load: LoadStatus::Loading,
            log_path: None,
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    /// Feed an event through the store and refresh everything derived from it.
    pub fn apply_store_event(&mut self, event: StoreEvent) {
        match &event {
            StoreEvent::FetchSucceeded(rows) => {
                debug!(count = rows.len(), "applying fetched reviews");
                self.load = LoadStatus::Loaded {
                    at: load_timestamp(&self.config.ui.timestamp_format),
                    count: rows.len(),
                };
            }
            StoreEvent::FetchFailed { .. } => self.load = LoadStatus::Failed,
            StoreEvent::FilterChanged(filter) => {
                debug!(filter = filter.label(), "filter changed");
                self.grid.reset();
            }
        }
        self.store = std::mem::take(&mut self.store).reduce(event);
        self.grid.clamp(self.store.displayed_len());
        self.dirty = true;
    }

    pub fn select_filter(&mut self, filter: AppFilter) {
        self.apply_store_event(StoreEvent::FilterChanged(filter));
    }

    /// Dropdown entries: the "All Apps" sentinel followed by every app name.
    pub fn filter_options(&self) -> Vec<AppFilter> {
        std::iter::once(AppFilter::All)
            .chain(self.store.app_names().iter().cloned().map(AppFilter::App))
            .collect()
    }

    /// Position of the active filter within `filter_options`.
    pub fn current_filter_index(&self) -> usize {
        match self.store.filter() {
            AppFilter::All => 0,
            AppFilter::App(name) => self
                .store
                .app_names()
                .iter()
                .position(|n| n == name)
                .map(|i| i + 1)
                .unwrap_or(0),
        }
    }

    pub fn open_filter_menu(&mut self) {
        let current = self.current_filter_index();
        self.filter_menu.open(current);
        self.dirty = true;
    }

    /// Apply the highlighted dropdown entry and close the dropdown.
    pub fn confirm_filter_menu(&mut self) {
        let options = self.filter_options();
        if let Some(filter) = options.into_iter().nth(self.filter_menu.highlighted) {
            self.select_filter(filter);
        }
        self.filter_menu.close();
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        match &self.load {
            LoadStatus::Loading => "Loading reviews...".to_string(),
            LoadStatus::Loaded { at, count } => format!(
                "{} reviews loaded at {} | Filter: {}",
                count,
                at,
                self.store.filter().label()
            ),
            LoadStatus::Failed => match &self.log_path {
                Some(path) => format!("No reviews loaded (details in {})", path.display()),
                None => "No reviews loaded".to_string(),
            },
        }
    }
}

/// Current local time in `fmt`, or `HH:MM:SS` when `fmt` does not parse.
fn load_timestamp(fmt: &str) -> String {
    let now = Local::now();
    let mut at = String::new();
    if write!(at, "{}", now.format(fmt)).is_err() {
        at = now.format("%H:%M:%S").to_string();
    }
    at
}
