//! Internal graph accessors and low-level building blocks.
//!
//! This module is intentionally `pub(crate)` so graph implementations can share
//! traversal scratch (visited sets) without exposing it as part of the public API.

pub(crate) mod visited;
