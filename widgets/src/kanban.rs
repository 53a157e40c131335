//! Drag-and-drop status board with optimistic moves.
//!
//! DESIGN
//! ======
//! Columns own their cards, so a card is in exactly one column by
//! construction and `card.status` is rewritten whenever the card changes
//! column. A cross-column drop moves the card immediately and returns a
//! [`StatusChange`] describing the move; nothing here waits on the network.
//! Each drop is tracked independently until [`KanbanBoardState::settle`] is
//! called with the server's answer.
//!
//! ERROR HANDLING
//! ==============
//! A failed confirmation of a card's newest move raises the blocking alert.
//! What happens to the card depends on [`FailureStrategy`]: `Keep` leaves it
//! where the user dropped it and flags it stale, `Revert` puts it back in its
//! original column and position. Answers for older moves of a card that has
//! been dragged again are [`Settlement::Superseded`] and change nothing.
//!
//! LIFECYCLE (per card)
//! ====================
//! ```text
//! idle -> dragging -> dropped on origin        -> idle
//!                  -> dropped elsewhere        -> pending -> idle   (confirmed)
//!                                                         -> stale  (failed, Keep)
//!                                                         -> idle   (failed, Revert)
//!                  -> abandoned (end_drag)     -> idle
//! ```

#[cfg(test)]
#[path = "kanban_test.rs"]
mod kanban_test;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::sync::{StatusChange, SyncError};

/// Alert text shown when the server rejects a move.
pub const STATUS_UPDATE_FAILED: &str = "The status could not be updated. Please try again.";

/// One card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    /// Status id; always equal to the owning column's status.
    pub status: String,
    /// Localized label of `status`, shown as the card's badge.
    pub badge: String,
}

impl Card {
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), status: status.into(), badge: String::new() }
    }
}

/// One status column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub status: String,
    /// Localized column heading, also used as the badge of its cards.
    pub label: String,
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(status: impl Into<String>, label: impl Into<String>) -> Self {
        Self { status: status.into(), label: label.into(), cards: Vec::new() }
    }
}

/// The card currently being dragged and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragPayload {
    pub card_id: String,
    pub origin: String,
}

/// What to do with an optimistic move the server did not confirm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStrategy {
    /// Leave the card in its new column and mark it stale.
    #[default]
    Keep,
    /// Move the card back to where it was dragged from.
    Revert,
}

/// Result of [`KanbanBoardState::drop`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// No drag was in progress.
    NoDrag,
    /// Dropped on the origin column; nothing to send.
    SameColumn,
    /// The target column or the dragged card no longer exists.
    Abandoned,
    /// The card moved; send this change to the server.
    Moved(StatusChange),
}

/// Result of [`KanbanBoardState::settle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    Confirmed,
    /// Failed; card left in place.
    Kept,
    /// Failed; card moved back.
    Reverted,
    /// Answer for a move the card has since been dragged past; only the
    /// newest move of a card decides its fate.
    Superseded,
}

/// Per-card interaction phase, for styling and `aria-grabbed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardPhase {
    #[default]
    Idle,
    Dragging,
    Pending,
    Stale,
}

#[derive(Clone, Debug)]
struct PendingMove {
    change: StatusChange,
    origin_index: usize,
}

/// Board state. See the module docs for the move lifecycle.
#[derive(Clone, Debug, Default)]
pub struct KanbanBoardState {
    columns: Vec<Column>,
    drag: Option<DragPayload>,
    highlighted: Vec<String>,
    pending: Vec<PendingMove>,
    stale: HashSet<String>,
    /// Sequence number of each card's newest move.
    latest: HashMap<String, u64>,
    alert: Option<String>,
    strategy: FailureStrategy,
    next_seq: u64,
}

impl KanbanBoardState {
    /// Build a board from column definitions and cards. Cards whose status
    /// has no column are skipped.
    pub fn new(columns: Vec<Column>, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut board = Self { columns, ..Self::default() };
        for mut card in cards {
            let Some(idx) = board.column_index(&card.status) else {
                log::warn!("card {} has unknown status {}, skipped", card.id, card.status);
                continue;
            };
            card.badge.clone_from(&board.columns[idx].label);
            board.columns[idx].cards.push(card);
        }
        board
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: FailureStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    // -----------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, status: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.status == status)
    }

    /// Card ids in `status`, in display order.
    #[must_use]
    pub fn card_ids(&self, status: &str) -> Vec<&str> {
        self.column(status)
            .map(|c| c.cards.iter().map(|card| card.id.as_str()).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn count(&self, status: &str) -> usize {
        self.column(status).map_or(0, |c| c.cards.len())
    }

    /// Whether the column should render its empty placeholder.
    #[must_use]
    pub fn is_column_empty(&self, status: &str) -> bool {
        self.count(status) == 0
    }

    #[must_use]
    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.columns.iter().flat_map(|c| c.cards.iter()).find(|card| card.id == card_id)
    }

    #[must_use]
    pub fn drag(&self) -> Option<&DragPayload> {
        self.drag.as_ref()
    }

    #[must_use]
    pub fn is_highlighted(&self, status: &str) -> bool {
        self.highlighted.iter().any(|s| s == status)
    }

    #[must_use]
    pub fn is_pending(&self, card_id: &str) -> bool {
        self.pending.iter().any(|p| p.change.card_id == card_id)
    }

    #[must_use]
    pub fn is_stale(&self, card_id: &str) -> bool {
        self.stale.contains(card_id)
    }

    #[must_use]
    pub fn phase(&self, card_id: &str) -> CardPhase {
        if self.drag.as_ref().is_some_and(|d| d.card_id == card_id) {
            CardPhase::Dragging
        } else if self.is_pending(card_id) {
            CardPhase::Pending
        } else if self.is_stale(card_id) {
            CardPhase::Stale
        } else {
            CardPhase::Idle
        }
    }

    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    #[must_use]
    pub fn strategy(&self) -> FailureStrategy {
        self.strategy
    }

    // -----------------------------------------------------------------
    // Drag gesture
    // -----------------------------------------------------------------

    /// Start dragging `card_id` out of `origin`. Rejected when the card is
    /// not in that column.
    pub fn begin_drag(&mut self, card_id: &str, origin: &str) -> bool {
        let in_origin = self
            .column(origin)
            .is_some_and(|c| c.cards.iter().any(|card| card.id == card_id));
        if !in_origin {
            log::warn!("drag of {card_id} rejected: not in column {origin}");
            return false;
        }
        self.highlighted.clear();
        self.drag = Some(DragPayload { card_id: card_id.to_owned(), origin: origin.to_owned() });
        true
    }

    /// Highlight `target` as a drop target, unless it is the origin column.
    pub fn enter_column(&mut self, target: &str) {
        let Some(drag) = &self.drag else {
            return;
        };
        if drag.origin == target || self.column_index(target).is_none() || self.is_highlighted(target) {
            return;
        }
        self.highlighted.push(target.to_owned());
    }

    pub fn leave_column(&mut self, target: &str) {
        self.highlighted.retain(|s| s != target);
    }

    /// Finish the gesture over `target`. Always clears the payload and every
    /// highlight.
    pub fn drop(&mut self, target: &str) -> DropOutcome {
        self.highlighted.clear();
        let Some(drag) = self.drag.take() else {
            return DropOutcome::NoDrag;
        };
        if drag.origin == target {
            return DropOutcome::SameColumn;
        }
        let (Some(origin_idx), Some(target_idx)) = (self.column_index(&drag.origin), self.column_index(target))
        else {
            log::warn!("drop of {} onto unknown column {target}", drag.card_id);
            return DropOutcome::Abandoned;
        };
        let Some(pos) = self.columns[origin_idx].cards.iter().position(|c| c.id == drag.card_id) else {
            return DropOutcome::Abandoned;
        };

        let mut card = self.columns[origin_idx].cards.remove(pos);
        target.clone_into(&mut card.status);
        card.badge.clone_from(&self.columns[target_idx].label);
        self.columns[target_idx].cards.push(card);

        self.next_seq += 1;
        let change = StatusChange { seq: self.next_seq, card_id: drag.card_id, from: drag.origin, to: target.to_owned() };
        self.stale.remove(&change.card_id);
        self.latest.insert(change.card_id.clone(), change.seq);
        self.pending.push(PendingMove { change: change.clone(), origin_index: pos });
        log::debug!("card {} moved {} -> {}", change.card_id, change.from, change.to);
        DropOutcome::Moved(change)
    }

    /// Abandon the gesture without moving anything.
    pub fn end_drag(&mut self) {
        self.drag = None;
        self.highlighted.clear();
    }

    // -----------------------------------------------------------------
    // Server reconciliation
    // -----------------------------------------------------------------

    /// Apply the server's answer for a move returned by [`Self::drop`].
    pub fn settle(&mut self, change: &StatusChange, result: Result<(), SyncError>) -> Settlement {
        let pending = self
            .pending
            .iter()
            .position(|p| p.change.seq == change.seq)
            .map(|idx| self.pending.remove(idx));

        if !self.is_latest(change) {
            log::debug!("card {} answer for seq {} superseded", change.card_id, change.seq);
            return Settlement::Superseded;
        }

        let err = match result {
            Ok(()) => {
                self.stale.remove(&change.card_id);
                return Settlement::Confirmed;
            }
            Err(err) => err,
        };

        log::error!("status update for card {} failed: {err}", change.card_id);
        self.alert = Some(STATUS_UPDATE_FAILED.to_owned());

        if self.strategy == FailureStrategy::Revert {
            let origin_index = pending.map_or(usize::MAX, |p| p.origin_index);
            if self.revert(change, origin_index) {
                return Settlement::Reverted;
            }
        }
        self.stale.insert(change.card_id.clone());
        Settlement::Kept
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    // -----------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------

    fn is_latest(&self, change: &StatusChange) -> bool {
        self.latest.get(&change.card_id).is_none_or(|&seq| seq == change.seq)
    }

    fn column_index(&self, status: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.status == status)
    }

    /// Move the card back to `change.from`. Only called for the card's
    /// newest move, so it still sits in `change.to`.
    fn revert(&mut self, change: &StatusChange, origin_index: usize) -> bool {
        let (Some(from_idx), Some(to_idx)) = (self.column_index(&change.from), self.column_index(&change.to)) else {
            return false;
        };
        let Some(pos) = self.columns[to_idx].cards.iter().position(|c| c.id == change.card_id) else {
            return false;
        };
        let mut card = self.columns[to_idx].cards.remove(pos);
        card.status.clone_from(&change.from);
        card.badge.clone_from(&self.columns[from_idx].label);
        let cards = &mut self.columns[from_idx].cards;
        cards.insert(origin_index.min(cards.len()), card);
        true
    }
}
