//! Lead pipeline state backing the kanban page.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use widgets::kanban::{Card, KanbanBoardState};

use crate::config::ClientConfig;
use crate::net::types::Lead;

/// Loading flag, last fetch error, and the board built from the leads.
#[derive(Clone, Debug)]
pub struct LeadsState {
    pub loading: bool,
    pub error: Option<String>,
    pub board: KanbanBoardState,
}

impl Default for LeadsState {
    fn default() -> Self {
        Self { loading: true, error: None, board: KanbanBoardState::default() }
    }
}

impl LeadsState {
    /// Board with one column per configured status and the leads placed by
    /// status.
    #[must_use]
    pub fn loaded(config: &ClientConfig, leads: &[Lead]) -> Self {
        let board = KanbanBoardState::new(config.columns(), leads.iter().map(Lead::to_card))
            .with_strategy(config.failure_strategy);
        Self { loading: false, error: None, board }
    }

    /// Keep an empty board with the configured columns so the page still
    /// renders its placeholders.
    #[must_use]
    pub fn failed(config: &ClientConfig, message: impl Into<String>) -> Self {
        let board = KanbanBoardState::new(config.columns(), Vec::<Card>::new()).with_strategy(config.failure_strategy);
        Self { loading: false, error: Some(message.into()), board }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.board.columns().iter().map(|c| c.cards.len()).sum()
    }
}

/// Route of the tag form for a card.
#[must_use]
pub fn edit_path(card_id: &str) -> String {
    format!("/leads/{card_id}/edit")
}
