//! Name-keyed factory table for agents.

use rustc_hash::FxHashMap;

use crate::agents::{Agent, MatchingAgent, MatchingSpyAgent, MaxValueAgent, RandomAgent};
use crate::core::GameVariant;
use crate::error::ConfigError;

type AgentFactory = Box<dyn Fn(u64) -> Box<dyn Agent>>;

/// Builds agents by name.
///
/// The factory receives a seed so stochastic agents stay reproducible;
/// deterministic agents ignore it.
pub struct AgentRegistry {
    factories: FxHashMap<String, AgentFactory>,
}

impl AgentRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: FxHashMap::default(),
        }
    }

    /// A registry preloaded with the built-in agents.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("random", |seed| Box::new(RandomAgent::new(seed)));
        registry.register("max_value", |_| Box::new(MaxValueAgent::new()));
        registry.register("matching", |_| Box::new(MatchingAgent::new()));
        registry.register("matching_plus_spy", |_| Box::new(MatchingSpyAgent::new()));
        registry
    }

    /// Register a factory under a name, replacing any previous entry.
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(u64) -> Box<dyn Agent> + 'static,
    {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    /// Build the named agent for a variant.
    pub fn create(
        &self,
        name: &str,
        variant: GameVariant,
        seed: u64,
    ) -> Result<Box<dyn Agent>, ConfigError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| ConfigError::UnknownAgent(name.to_string()))?;
        let agent = factory(seed);
        if !agent.supports(variant) {
            return Err(ConfigError::UnsupportedVariant {
                agent: name.to_string(),
                variant: variant.to_string(),
            });
        }
        Ok(agent)
    }

    /// Registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
