// Copyright 2025 the Pointerpick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error values surfaced by the responder.
//!
//! None of these are retried. The [dispatcher](crate::dispatcher) logs each one at the point
//! it occurs and keeps its state consistent; the values are returned so hosts and tests can
//! observe what happened.

use alloc::string::String;

/// A method name outside the supported set (`"click"`, `"hover"`).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("there is no method called '{name}'")]
pub struct UnsupportedMethod {
    name: String,
}

impl UnsupportedMethod {
    pub(crate) fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    /// The rejected method name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The parent chain of a hit node never reached a registered node.
///
/// Candidates are built by flattening registered subtrees, so this only happens when the
/// scene graph is mutated (for example a node reparented) between flattening and resolution,
/// or when the scene reports a parent cycle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError<K> {
    /// The walk reached a root without finding a registered ancestor.
    #[error("no registered ancestor for hit node {hit:?}")]
    Unregistered {
        /// The intersected leaf.
        hit: K,
    },
    /// The walk exceeded the configured depth bound.
    #[error("ancestor walk from hit node {hit:?} exceeded {max_depth} levels")]
    DepthExceeded {
        /// The intersected leaf.
        hit: K,
        /// The bound that was exceeded.
        max_depth: usize,
    },
}

impl<K> ResolveError<K> {
    /// The intersected leaf the walk started from.
    pub fn hit(&self) -> &K {
        match self {
            Self::Unregistered { hit } | Self::DepthExceeded { hit, .. } => hit,
        }
    }
}

/// Failure reported by an application callback.
///
/// Callbacks return `Result<(), CallbackError>`. With the `std` feature, a panic inside a
/// callback is also converted into a `CallbackError` carrying the panic message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("callback failed: {message}")]
pub struct CallbackError {
    message: String,
}

impl CallbackError {
    /// Create an error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for CallbackError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for CallbackError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
