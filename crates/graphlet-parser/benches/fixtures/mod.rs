//! Synthetic query fixtures for the parse benchmarks.

pub const SMALL_QUERY: &str = "query { user(id: 4) { name email } }";

pub const NESTED_QUERY: &str = "\
query FriendGraph {
  viewer {
    name
    friends {
      name
      friends {
        name
        friends {
          name
          city: homeTown
        }
      }
    }
  }
}";

pub const ARGUMENT_HEAVY_QUERY: &str = "\
query Search {
  results: search(
    terms: [\"alpha\", \"beta\", \"gamma\", \"delta\"],
    filter: { active: true, minScore: 0.75, tags: [1, 2, 3, 4, 5] },
    limit: 50,
    offset: 0,
    includeArchived: false,
  ) {
    id
    score
  }
}";
