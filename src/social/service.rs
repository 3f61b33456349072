//! Social network facade
//!
//! [`SocialGraph`] is the single entry point for front ends. It owns the
//! directed graph and a profile arena indexed by vertex id; "A follows B"
//! is the edge A -> B.

use crate::graph::{DirectedGraph, GraphError, GraphResult, VertexId};
use crate::social::profile::{Privacy, Profile};
use tracing::{debug, info};

/// The social network: profiles plus who-follows-whom
///
/// Profiles are stored in a `Vec` and addressed by their creation index,
/// so a `VertexId` doubles as the arena slot. Profiles are never removed.
#[derive(Debug, Clone, Default)]
pub struct SocialGraph {
    graph: DirectedGraph,
    profiles: Vec<Profile>,
}

impl SocialGraph {
    /// Create an empty network
    pub fn new() -> Self {
        SocialGraph {
            graph: DirectedGraph::new(),
            profiles: Vec::new(),
        }
    }

    /// Create a profile and register it as a graph vertex
    ///
    /// Never fails; names are not unique.
    pub fn create_profile(
        &mut self,
        name: impl Into<String>,
        gender: impl Into<String>,
        biography: impl Into<String>,
        privacy: Privacy,
    ) -> VertexId {
        let profile = Profile::new(name, gender, biography, privacy);
        let id = VertexId::new(self.profiles.len() as u64);
        info!("Created profile {} ({})", profile.name(), id);
        self.profiles.push(profile);
        self.graph.add_vertex(id);
        id
    }

    /// Look up a profile by id
    pub fn profile(&self, id: VertexId) -> GraphResult<&Profile> {
        self.profiles
            .get(id.as_u64() as usize)
            .ok_or(GraphError::VertexNotFound(id))
    }

    /// Record that `follower` follows `followee`
    ///
    /// Re-following appends a second edge; self-follows are accepted at
    /// this layer. `VertexNotFound` only for ids not minted by this
    /// service.
    pub fn follow(&mut self, follower: VertexId, followee: VertexId) -> GraphResult<()> {
        self.graph.add_edge(follower, followee)?;
        debug!("{} now follows {}", follower, followee);
        Ok(())
    }

    /// Remove one follow edge from `follower` to `followee`
    ///
    /// `EdgeNotFound` when no such edge currently exists; never a silent
    /// no-op.
    pub fn unfollow(&mut self, follower: VertexId, followee: VertexId) -> GraphResult<()> {
        self.graph.remove_edge(follower, followee)?;
        debug!("{} unfollowed {}", follower, followee);
        Ok(())
    }

    /// All profiles in creation order
    pub fn profiles(&self) -> Vec<VertexId> {
        self.graph.vertices()
    }

    /// Profiles that `id` follows (outgoing edges, duplicates preserved)
    pub fn following(&self, id: VertexId) -> GraphResult<Vec<VertexId>> {
        self.graph.successors(id)
    }

    /// Profiles that follow `id`
    ///
    /// Reverse scan over every profile's outgoing edges; no reverse index
    /// is maintained, so this is O(V + E) per call. An unknown id simply
    /// has no followers.
    pub fn followers(&self, id: VertexId) -> Vec<VertexId> {
        self.graph
            .vertices()
            .into_iter()
            .filter(|&candidate| self.graph.has_edge(candidate, id))
            .collect()
    }

    /// Number of profiles
    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    /// Total number of follow edges (duplicates counted)
    pub fn follow_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_profiles() -> (SocialGraph, VertexId, VertexId) {
        let mut gram = SocialGraph::new();
        let alice = gram.create_profile("Alice", "Female", "First", Privacy::Public);
        let bob = gram.create_profile("Bob", "Male", "Second", Privacy::Private);
        (gram, alice, bob)
    }

    #[test]
    fn test_create_profile_registers_vertex() {
        let (gram, alice, bob) = two_profiles();

        assert_eq!(gram.profile_count(), 2);
        assert_eq!(gram.profiles(), vec![alice, bob]);
        assert_eq!(gram.profile(alice).unwrap().name(), "Alice");
        assert_eq!(gram.following(alice).unwrap(), Vec::<VertexId>::new());
    }

    #[test]
    fn test_profile_lookup_foreign_id() {
        let (gram, _, _) = two_profiles();
        let foreign = VertexId::new(99);
        assert_eq!(gram.profile(foreign), Err(GraphError::VertexNotFound(foreign)));
    }

    #[test]
    fn test_follow_and_following() {
        let (mut gram, alice, bob) = two_profiles();

        gram.follow(alice, bob).unwrap();
        assert_eq!(gram.following(alice).unwrap(), vec![bob]);
        assert_eq!(gram.followers(bob), vec![alice]);
        assert_eq!(gram.follow_count(), 1);
    }

    #[test]
    fn test_follow_foreign_id() {
        let (mut gram, alice, _) = two_profiles();
        let foreign = VertexId::new(99);

        assert_eq!(
            gram.follow(alice, foreign),
            Err(GraphError::VertexNotFound(foreign))
        );
        assert_eq!(gram.follow_count(), 0);
    }

    #[test]
    fn test_unfollow_without_follow() {
        let (mut gram, alice, bob) = two_profiles();

        assert_eq!(
            gram.unfollow(alice, bob),
            Err(GraphError::EdgeNotFound { from: alice, to: bob })
        );
        assert_eq!(gram.following(alice).unwrap(), Vec::<VertexId>::new());
    }

    #[test]
    fn test_followers_of_unknown_id_is_empty() {
        let (gram, _, _) = two_profiles();
        assert_eq!(gram.followers(VertexId::new(99)), Vec::<VertexId>::new());
    }

    #[test]
    fn test_names_are_not_identities() {
        let mut gram = SocialGraph::new();
        let first = gram.create_profile("Alex", "Male", "First Alex", Privacy::Public);
        let second = gram.create_profile("Alex", "Male", "Second Alex", Privacy::Public);

        assert_ne!(first, second);
        gram.follow(first, second).unwrap();
        assert_eq!(gram.following(first).unwrap(), vec![second]);
        assert_eq!(gram.following(second).unwrap(), Vec::<VertexId>::new());
    }
}
