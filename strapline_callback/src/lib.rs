// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strapline Callback: shared event callbacks and callback chaining.
//!
//! Components frequently need to run more than one handler for the same
//! event: the handler a parent injects, the one the caller configured, and
//! the component's own. Any of them may be absent. [`chain`] folds such a
//! list into a single optional [`Callback`] that runs every present handler,
//! in order, with the same argument.
//!
//! ```rust
//! use core::cell::RefCell;
//! use strapline_callback::{Callback, chain};
//!
//! let log = std::rc::Rc::new(RefCell::new(Vec::new()));
//!
//! let first = {
//!     let log = log.clone();
//!     Callback::new(move |args: &(u32, u32)| log.borrow_mut().push(("first", *args)))
//! };
//! let second = {
//!     let log = log.clone();
//!     Callback::new(move |args: &(u32, u32)| log.borrow_mut().push(("second", *args)))
//! };
//!
//! let combined = chain([Some(first), None, Some(second)]).unwrap();
//! combined.call(&(1, 2));
//! assert_eq!(*log.borrow(), [("first", (1, 2)), ("second", (1, 2))]);
//!
//! // Nothing to chain: no callback at all.
//! assert!(chain::<(u32, u32)>([None, None]).is_none());
//! ```
//!
//! Callbacks receive their argument by shared reference and return nothing;
//! only side effects matter. Event types that handlers need to mutate (for
//! example "prevent default") carry interior mutability themselves.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

/// A shared, cheaply clonable event handler.
pub struct Callback<A: ?Sized> {
    f: Rc<dyn Fn(&A)>,
}

impl<A: ?Sized> Callback<A> {
    /// Wraps a closure.
    pub fn new(f: impl Fn(&A) + 'static) -> Self {
        Self { f: Rc::new(f) }
    }

    /// Invokes the handler.
    pub fn call(&self, args: &A) {
        (self.f)(args);
    }

    /// Returns `true` if both handles refer to the same handler.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.f, &other.f)
    }
}

impl<A: ?Sized> Clone for Callback<A> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone() }
    }
}

impl<A: ?Sized> fmt::Debug for Callback<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Combines optional callbacks into one that runs each present callback in
/// order.
///
/// Returns `None` when every input is absent. A single present callback is
/// returned unchanged rather than wrapped.
pub fn chain<A: ?Sized + 'static>(
    callbacks: impl IntoIterator<Item = Option<Callback<A>>>,
) -> Option<Callback<A>> {
    let mut present: Vec<Callback<A>> = callbacks.into_iter().flatten().collect();
    match present.len() {
        0 => None,
        1 => present.pop(),
        _ => Some(Callback::new(move |args: &A| {
            for cb in &present {
                cb.call(args);
            }
        })),
    }
}

/// Invokes `callback` if it is present.
pub fn call_opt<A: ?Sized>(callback: Option<&Callback<A>>, args: &A) {
    if let Some(cb) = callback {
        cb.call(args);
    }
}
