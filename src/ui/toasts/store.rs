// SPDX-License-Identifier: MPL-2.0
//! Ordered list of active toasts.
//!
//! The order is insertion order: the first element is the oldest toast and
//! sits at the back of the stack, the last element is the frontmost one.

use super::item::{ToastId, ToastItem, ToastRequest, ToastTime};
use crate::error::{Result, ToastError};

#[derive(Debug, Default)]
pub struct Store {
    toasts: Vec<ToastItem>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a toast from `request` and appends it as the new frontmost item.
    pub fn present(&mut self, request: ToastRequest, default_timing: ToastTime) -> ToastId {
        let item = request.into_item(default_timing);
        let id = item.id();
        self.toasts.push(item);
        id
    }

    /// Appends an already-built item.
    pub fn push(&mut self, item: ToastItem) -> Result<()> {
        if self.contains(item.id()) {
            return Err(ToastError::DuplicateId(item.id().value()).into());
        }
        self.toasts.push(item);
        Ok(())
    }

    /// Removes the toast with the given id.
    ///
    /// Returns `false` when it was already gone, so repeated calls are harmless.
    pub fn remove(&mut self, id: ToastId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.toasts.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn toasts(&self) -> &[ToastItem] {
        &self.toasts
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastItem> {
        self.toasts.iter().find(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn index_of(&self, id: ToastId) -> Option<usize> {
        self.toasts.iter().position(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.index_of(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(store: &mut Store, title: &str) -> ToastId {
        store.present(ToastRequest::new(title), ToastTime::Medium)
    }

    #[test]
    fn new_store_is_empty() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn presents_keep_call_order() {
        let mut store = Store::new();
        for i in 0..5 {
            present(&mut store, &format!("toast-{i}"));
        }

        let titles: Vec<&str> = store.toasts().iter().map(ToastItem::title).collect();
        assert_eq!(
            titles,
            vec!["toast-0", "toast-1", "toast-2", "toast-3", "toast-4"]
        );
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = Store::new();
        let first = present(&mut store, "first");
        present(&mut store, "second");

        assert!(store.remove(first));
        let after_first: Vec<ToastId> = store.toasts().iter().map(ToastItem::id).collect();

        assert!(!store.remove(first));
        let after_second: Vec<ToastId> = store.toasts().iter().map(ToastItem::id).collect();

        assert_eq!(after_first, after_second);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut store = Store::new();
        let a = present(&mut store, "a");
        let b = present(&mut store, "b");
        let c = present(&mut store, "c");

        store.remove(b);
        assert_eq!(store.index_of(a), Some(0));
        assert_eq!(store.index_of(c), Some(1));
        assert!(!store.contains(b));
    }

    #[test]
    fn push_rejects_duplicate_ids() {
        let mut store = Store::new();
        let item = ToastRequest::new("once").into_item(ToastTime::Short);

        store.push(item.clone()).expect("first push succeeds");
        let err = store.push(item).expect_err("second push must fail");
        assert!(matches!(
            err,
            crate::error::Error::Toast(ToastError::DuplicateId(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_finds_item_by_id() {
        let mut store = Store::new();
        let id = present(&mut store, "lookup");
        assert_eq!(store.get(id).map(ToastItem::title), Some("lookup"));
    }
}
