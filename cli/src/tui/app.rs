use std::collections::HashMap;

use plastrack_core::{
    calculate_totals, ConsumptionTotals, LeaderboardEntry, LeaderboardService, LeaderboardStore,
    ProductCatalog, StoreKind,
};
use ratatui::widgets::TableState;

// View state is a small explicit machine: the tracker is unreachable until a
// name has been entered, and the board tab is just a tab, not a flag.
pub enum Screen {
    AwaitingName,
    Tracker,
}

#[derive(Clone, Copy, PartialEq)]
pub enum Tab {
    Tracker,
    Board,
}

pub enum Feedback {
    Success(String),
    Warning(String),
}

pub struct App {
    pub service: LeaderboardService<LeaderboardStore>,
    pub screen: Screen,
    pub tab: Tab,
    pub user_name: String,
    pub input: String,
    pub cursor_position: usize,
    pub counts: Vec<u32>,
    pub product_state: TableState,
    pub board: Vec<LeaderboardEntry>,
    pub board_state: TableState,
    pub last_submitted: Option<u64>,
    pub feedback: Option<Feedback>,
}

impl App {
    pub fn new(kind: StoreKind) -> App {
        let store =
            LeaderboardStore::open(kind, None).expect("Failed to initialize leaderboard store");
        let service = LeaderboardService::new(store);
        let product_count = service.catalog().products().len();

        let mut product_state = TableState::default();
        product_state.select(Some(0));

        App {
            service,
            screen: Screen::AwaitingName,
            tab: Tab::Tracker,
            user_name: String::new(),
            input: String::new(),
            cursor_position: 0,
            counts: vec![0; product_count],
            product_state,
            board: Vec::new(),
            board_state: TableState::default(),
            last_submitted: None,
            feedback: None,
        }
    }

    pub fn catalog(&self) -> &ProductCatalog {
        self.service.catalog()
    }

    pub fn totals(&self) -> ConsumptionTotals {
        calculate_totals(self.catalog(), &self.counts_map())
    }

    fn counts_map(&self) -> HashMap<String, u32> {
        self.catalog()
            .products()
            .iter()
            .zip(&self.counts)
            .map(|(product, &count)| (product.key.to_string(), count))
            .collect()
    }

    pub fn submit_name(&mut self) {
        let name = self.input.trim();
        if name.is_empty() {
            self.feedback = Some(Feedback::Warning("Please enter a valid name.".to_string()));
            return;
        }
        self.user_name = name.to_string();
        self.input.clear();
        self.cursor_position = 0;
        self.feedback = None;
        self.screen = Screen::Tracker;
    }

    pub fn next(&mut self) {
        let (state, len) = match self.tab {
            Tab::Tracker => (&mut self.product_state, self.counts.len()),
            Tab::Board => (&mut self.board_state, self.board.len()),
        };
        if len == 0 {
            return;
        }

        let i = match state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let (state, len) = match self.tab {
            Tab::Tracker => (&mut self.product_state, self.counts.len()),
            Tab::Board => (&mut self.board_state, self.board.len()),
        };
        if len == 0 {
            return;
        }

        let i = match state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        state.select(Some(i));
    }

    pub fn increment(&mut self) {
        if let Some(i) = self.product_state.selected() {
            if let Some(count) = self.counts.get_mut(i) {
                *count = count.saturating_add(1);
            }
        }
    }

    pub fn decrement(&mut self) {
        if let Some(i) = self.product_state.selected() {
            if let Some(count) = self.counts.get_mut(i) {
                *count = count.saturating_sub(1);
            }
        }
    }

    pub fn submit_entry(&mut self) {
        match self.service.submit(&self.user_name, &self.counts_map()) {
            Ok(entry) => {
                self.last_submitted = Some(entry.id);
                self.feedback = Some(Feedback::Success(format!(
                    "Entry added! ({:.2}kg per year)",
                    entry.per_year_kg
                )));
                self.tab = Tab::Board;
                self.reload_board();
            }
            Err(e) => {
                self.feedback = Some(Feedback::Warning(e.to_string()));
            }
        }
    }

    pub fn switch_tab(&mut self) {
        self.tab = match self.tab {
            Tab::Tracker => {
                self.reload_board();
                Tab::Board
            }
            Tab::Board => Tab::Tracker,
        };
    }

    pub fn reload_board(&mut self) {
        if let Ok(entries) = self.service.ranked() {
            self.board = entries;
        }
        if self.board.is_empty() {
            self.board_state.select(None);
        } else if self
            .board_state
            .selected()
            .map(|i| i >= self.board.len())
            .unwrap_or(true)
        {
            self.board_state.select(Some(0));
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(i) = self.board_state.selected() {
            if let Some(entry) = self.board.get(i) {
                let _ = self.service.delete(entry.id);
            }
            self.reload_board();

            // Adjust selection after reload
            if self.board.is_empty() {
                self.board_state.select(None);
            } else if i >= self.board.len() {
                self.board_state.select(Some(self.board.len() - 1));
            } else {
                self.board_state.select(Some(i));
            }
        }
    }

    pub fn clear_board(&mut self) {
        let _ = self.service.clear();
        self.reload_board();
        self.feedback = Some(Feedback::Success("Leaderboard cleared.".to_string()));
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self
            .input
            .chars()
            .take(self.cursor_position)
            .map(|c| c.len_utf8())
            .sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self
                .input
                .chars()
                .take(self.cursor_position - 1)
                .map(|c| c.len_utf8())
                .sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }
}
