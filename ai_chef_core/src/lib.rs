pub mod app_config;
pub mod backend;
pub mod notice;
pub mod recent;
pub mod requester;

#[cfg(test)]
pub(crate) mod fake;

use std::cell::RefCell;

/// Somewhere a component keeps its state. Async workflows go through this between
/// suspension points so they never hold a borrow across an await.
pub trait StateSlot<T> {
    /// `None` when the state is gone, e.g. the owning component was unmounted.
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateSlot<T> for RefCell<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
