use rand::seq::SliceRandom;

/// User-Agent strings covering desktop and mobile browsers on the platforms
/// an origin is most likely to see in real traffic.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36 Edg/123.0.0.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/123.0",
];

/// Read-only pool of browser identities, fixed for the process lifetime.
pub struct IdentityPool {
    agents: &'static [&'static str],
}

impl Default for IdentityPool {
    fn default() -> Self {
        Self::from_agents(USER_AGENTS)
    }
}

impl IdentityPool {
    /// Panics if `agents` is empty: an empty pool is a configuration error
    /// and must surface at startup, not on the first request.
    pub fn from_agents(agents: &'static [&'static str]) -> Self {
        assert!(!agents.is_empty(), "identity pool must not be empty");
        IdentityPool { agents }
    }

    /// One identity chosen uniformly at random, fresh on every call.
    pub fn select(&self) -> &'static str {
        self.agents
            .choose(&mut rand::thread_rng())
            .expect("pool is non-empty by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn select_only_yields_known_agents() {
        let pool = IdentityPool::default();
        for _ in 0..1000 {
            assert!(USER_AGENTS.contains(&pool.select()));
        }
    }

    #[test]
    fn every_agent_is_reachable() {
        let pool = IdentityPool::default();
        let seen: HashSet<&str> = (0..1000).map(|_| pool.select()).collect();
        assert_eq!(seen.len(), USER_AGENTS.len());
    }

    #[test]
    fn custom_pool_is_respected() {
        let pool = IdentityPool::from_agents(&["test-agent"]);
        for _ in 0..10 {
            assert_eq!(pool.select(), "test-agent");
        }
    }

    #[test]
    #[should_panic(expected = "identity pool must not be empty")]
    fn empty_pool_fails_at_construction() {
        IdentityPool::from_agents(&[]);
    }
}
