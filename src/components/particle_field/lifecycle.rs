//! Lifetime management for running fields.
//!
//! Browser callbacks reach a running field only through weak references or its
//! registry id. The strong references live in a [`Registry`], so stopping a
//! field drops it immediately, whether or not another animation frame fires.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use wasm_bindgen::JsValue;

/// Resources released when a running field stops.
pub(crate) trait Teardown {
	fn teardown(self);
}

/// Running values keyed by handle id.
pub(crate) struct Registry<T> {
	entries: RefCell<HashMap<u64, T>>,
	next_id: Cell<u64>,
}

impl<T> Default for Registry<T> {
	fn default() -> Self {
		Self {
			entries: RefCell::new(HashMap::new()),
			next_id: Cell::new(0),
		}
	}
}

impl<T: Teardown> Registry<T> {
	/// Id for a value that will be inserted later; callbacks built before the
	/// value exists capture it.
	pub(crate) fn reserve_id(&self) -> u64 {
		let id = self.next_id.get();
		self.next_id.set(id + 1);
		id
	}

	pub(crate) fn insert(&self, id: u64, value: T) {
		self.entries.borrow_mut().insert(id, value);
	}

	/// Runs `f` on a live entry. `None` once the entry has been released.
	pub(crate) fn with_mut<R>(&self, id: u64, f: impl FnOnce(&mut T) -> R) -> Option<R> {
		self.entries.borrow_mut().get_mut(&id).map(f)
	}

	/// Removes the entry and tears it down. Returns whether it was live.
	pub(crate) fn release(&self, id: u64) -> bool {
		// Borrow ends before teardown runs.
		let removed = self.entries.borrow_mut().remove(&id);
		match removed {
			Some(value) => {
				value.teardown();
				true
			}
			None => false,
		}
	}

	pub(crate) fn len(&self) -> usize {
		self.entries.borrow().len()
	}
}

/// An event subscription that can be attached and later detached.
pub(crate) trait Subscription {
	fn attach(&self) -> Result<(), JsValue>;
	fn detach(&self);
}

/// Attached subscriptions, detached together when the set is dropped.
///
/// Subscriptions join the set only once attached, so dropping a partially
/// built set after a failed attach detaches exactly the ones that succeeded.
pub(crate) struct ListenerSet<S: Subscription> {
	attached: Vec<S>,
}

impl<S: Subscription> ListenerSet<S> {
	pub(crate) fn new() -> Self {
		Self {
			attached: Vec::new(),
		}
	}

	pub(crate) fn attach(&mut self, subscription: S) -> Result<(), JsValue> {
		subscription.attach()?;
		self.attached.push(subscription);
		Ok(())
	}

	pub(crate) fn len(&self) -> usize {
		self.attached.len()
	}
}

impl<S: Subscription> Drop for ListenerSet<S> {
	fn drop(&mut self) {
		for subscription in self.attached.drain(..).rev() {
			subscription.detach();
		}
	}
}
