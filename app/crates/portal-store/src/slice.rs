//! Generic entity slice and its reducer.

use crate::{Lifecycle, Operation};

use portal_core::Entity;

use log::trace;
use serde::Serialize;

/// One entity collection, the currently selected entity and the lifecycle
/// flags of the last operation against them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySlice<E: Entity> {
    pub items: Vec<E>,
    pub selected: Option<E>,
    pub lifecycle: Lifecycle,
}

/// Transitions of an [`EntitySlice`]
#[derive(Debug, Clone, PartialEq)]
pub enum SliceAction<E: Entity> {
    Pending(Operation),
    FetchedAll(Vec<E>),
    FetchedOne(E),
    Created(E),
    Updated(E),
    Deleted(String),
    Rejected { operation: Operation, message: String },
    /// Clear lifecycle flags, keep data
    ResetStatus,
    ClearSelected,
    /// Drop everything (sign-out)
    Clear,
}

impl<E: Entity> Default for EntitySlice<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            lifecycle: Lifecycle::default(),
        }
    }
}

impl<E: Entity> EntitySlice<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_ref().is_some_and(|selected| selected.id() == id)
    }

    /// Apply one transition.
    pub fn reduce(&mut self, action: SliceAction<E>) {
        trace!("{} <- {}", E::PLURAL, action_name(&action));

        match action {
            SliceAction::Pending(_) => self.lifecycle.begin(),
            SliceAction::FetchedAll(items) => {
                self.items = items;
                self.lifecycle.fulfil(Operation::FetchAll.marks_success());
            }
            SliceAction::FetchedOne(entity) => {
                self.selected = Some(entity);
                self.lifecycle.fulfil(Operation::FetchOne.marks_success());
            }
            SliceAction::Created(entity) => {
                self.items.retain(|item| item.id() != entity.id());
                self.items.push(entity);
                self.lifecycle.fulfil(Operation::Create.marks_success());
            }
            SliceAction::Updated(entity) => {
                if self.is_selected(entity.id()) {
                    self.selected = Some(entity.clone());
                }
                if let Some(index) = self.position(entity.id()) {
                    self.items[index] = entity;
                }
                self.lifecycle.fulfil(Operation::Update.marks_success());
            }
            SliceAction::Deleted(id) => {
                self.items.retain(|item| item.id() != id);
                if self.is_selected(&id) {
                    self.selected = None;
                }
                self.lifecycle.fulfil(Operation::Delete.marks_success());
            }
            SliceAction::Rejected { message, .. } => self.lifecycle.reject(message),
            SliceAction::ResetStatus => self.lifecycle.reset(),
            SliceAction::ClearSelected => self.selected = None,
            SliceAction::Clear => *self = Self::default(),
        }
    }
}

fn action_name<E: Entity>(action: &SliceAction<E>) -> &'static str {
    match action {
        SliceAction::Pending(_) => "pending",
        SliceAction::FetchedAll(_) => "fetched_all",
        SliceAction::FetchedOne(_) => "fetched_one",
        SliceAction::Created(_) => "created",
        SliceAction::Updated(_) => "updated",
        SliceAction::Deleted(_) => "deleted",
        SliceAction::Rejected { .. } => "rejected",
        SliceAction::ResetStatus => "reset_status",
        SliceAction::ClearSelected => "clear_selected",
        SliceAction::Clear => "clear",
    }
}
