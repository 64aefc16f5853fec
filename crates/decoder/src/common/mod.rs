//! Common types shared across the decoder.
//!
//! This module provides the fundamental output type of the crate:
//! 1. **Operation Descriptor:** The uniform record every decode path
//!    converges on, including the illegal-descriptor sentinel.

/// The canonical decoded-operation descriptor.
pub mod op;

pub use op::Op;
