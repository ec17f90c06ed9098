// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card labels.
use std::fmt;

/// A card label.
///
/// A label is an opaque token like `AS` or `10S`, its content is displayed
/// as is and never parsed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CardLabel(String);

impl CardLabel {
    /// Creates a card label from a string.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for CardLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for CardLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
