// Copyright 2026 the Strapline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An insertion-ordered set of conditional class tokens.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;

/// Most components produce four or fewer tokens.
const INLINE_CAPACITY: usize = 4;

/// A mapping from class token to inclusion flag.
///
/// Tokens keep the order in which they were first inserted. Inserting a
/// token that is already present overrides its flag in place, which lets a
/// component switch off a class contributed by an earlier step (a vertical
/// button group drops the plain `btn-group` class this way).
///
/// Equality only looks at the included tokens and ignores order.
///
/// ```
/// use strapline_style::ClassSet;
///
/// let mut classes = ClassSet::new();
/// classes.insert("table", true);
/// classes.insert("table-striped", false);
/// classes.insert("table-hover", true);
///
/// assert_eq!(classes.to_class_name(None), "table table-hover");
/// assert_eq!(classes.to_class_name(Some("mine")), "mine table table-hover");
/// ```
#[derive(Clone, Default)]
pub struct ClassSet {
    entries: SmallVec<[(Cow<'static, str>, bool); INLINE_CAPACITY]>,
}

impl ClassSet {
    /// Creates an empty class set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Creates a class set with every token in `tokens` included.
    #[must_use]
    pub fn from_tokens<T: Into<Cow<'static, str>>>(tokens: impl IntoIterator<Item = T>) -> Self {
        tokens.into_iter().map(|t| (t, true)).collect()
    }

    /// Sets the inclusion flag for `token`.
    pub fn insert(&mut self, token: impl Into<Cow<'static, str>>, included: bool) {
        let token = token.into();
        if let Some(entry) = self.entries.iter_mut().find(|(t, _)| *t == token) {
            entry.1 = included;
        } else {
            self.entries.push((token, included));
        }
    }

    /// Builder form of [`ClassSet::insert`].
    #[must_use]
    pub fn with(mut self, token: impl Into<Cow<'static, str>>, included: bool) -> Self {
        self.insert(token, included);
        self
    }

    /// Merges `other` into `self`, later flags winning.
    pub fn extend(&mut self, other: &Self) {
        for (token, included) in &other.entries {
            self.insert(token.clone(), *included);
        }
    }

    /// Returns `true` if `token` is present and included.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.entries.iter().any(|(t, inc)| *inc && t == token)
    }

    /// Iterates over the included tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(|(_, inc)| *inc)
            .map(|(t, _)| &**t)
    }

    /// Number of included tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if no token is included.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Joins the included tokens into a `class` attribute value.
    ///
    /// Caller-supplied classes in `extra` come first, matching how a
    /// component merges its own classes with a user `class_name`.
    #[must_use]
    pub fn to_class_name(&self, extra: Option<&str>) -> String {
        let mut out = String::new();
        let extra = extra.map(str::trim).filter(|e| !e.is_empty());
        for token in extra.into_iter().chain(self.iter()) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(token);
        }
        out
    }
}

impl PartialEq for ClassSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.contains(t))
    }
}

impl Eq for ClassSet {}

impl fmt::Debug for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_class_name(None))
    }
}

impl<T: Into<Cow<'static, str>>> FromIterator<(T, bool)> for ClassSet {
    fn from_iter<I: IntoIterator<Item = (T, bool)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (token, included) in iter {
            set.insert(token, included);
        }
        set
    }
}
