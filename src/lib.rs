//! Slow Gram — an in-memory directed follow graph
//!
//! Models a small social network: profiles (vertices) and directed
//! "follow" edges, with creation, mutation, and relationship queries.
//! State lives for the process only; there is no persistence and no
//! concurrency inside the core.
//!
//! # Architecture
//!
//! - [`graph`] — adjacency-list store over opaque vertex identities,
//!   with explicit `VertexNotFound` / `EdgeNotFound` errors
//! - [`social`] — the [`Profile`] entity and the [`SocialGraph`] facade
//!   composing graph operations into follow/unfollow/query operations
//!
//! The interactive menu front end (`src/main.rs`) consumes only the
//! facade; all input parsing and privacy gating happens there.
//!
//! # Example
//!
//! ```rust
//! use slowgram::{Privacy, SocialGraph};
//!
//! let mut gram = SocialGraph::new();
//! let alice = gram.create_profile("Alice", "Female", "Hi there", Privacy::Public);
//! let bob = gram.create_profile("Bob", "Male", "Hello", Privacy::Private);
//!
//! gram.follow(alice, bob).unwrap();
//! assert_eq!(gram.following(alice).unwrap(), vec![bob]);
//! assert_eq!(gram.followers(bob), vec![alice]);
//!
//! gram.unfollow(alice, bob).unwrap();
//! assert!(gram.followers(bob).is_empty());
//! ```

#![warn(clippy::all)]

pub mod graph;
pub mod social;

// Re-export main types for convenience
pub use graph::{DirectedGraph, GraphError, GraphResult, VertexId};
pub use social::{ParsePrivacyError, Privacy, Profile, SocialGraph};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
