use std::{
    collections::{hash_map::Entry, HashMap},
    ops::Index,
};

/// Represents a Markov decision process, defining the dynamics of an environment
/// in which an agent can operate.
///
/// This base trait represents a continuing task: there is no terminal state, so every
/// step produces a next state.
pub trait Environment {
    /// A representation of the state of the environment to be passed to an agent
    type State;

    /// A representation of an action that an agent can take to affect the environment
    type Action;

    /// Observe the current state without changing the environment
    fn observe(&self) -> Self::State;

    /// Update the environment in response to an action taken by an agent, producing a new state and associated reward
    ///
    /// **Returns** `(next_state, reward)`
    fn step(&mut self, action: Self::Action) -> (Self::State, f64);
}

/// An environment with a finite set of actions
pub trait DiscreteActionSpace: Environment {
    /// Get the available actions for the current state
    ///
    /// The returned vec should never be empty.
    fn actions(&self) -> Vec<Self::Action>;
}

/// Named counters an environment accumulates while it runs
#[derive(Debug, Clone)]
pub struct Report {
    keys: Vec<&'static str>,
    values: HashMap<&'static str, f64>,
}

impl Report {
    /// Create a report with every key set to zero
    pub fn new(keys: Vec<&'static str>) -> Self {
        let values = keys.iter().map(|&k| (k, 0.0)).collect();
        Self { keys, values }
    }

    /// The keys in the order they were declared
    pub fn keys(&self) -> &[&'static str] {
        &self.keys
    }

    /// Get the entry for `key` for in-place modification
    pub fn entry(&mut self, key: &'static str) -> Entry<'_, &'static str, f64> {
        self.values.entry(key)
    }
}

impl Index<&str> for Report {
    type Output = f64;

    fn index(&self, key: &str) -> &Self::Output {
        &self.values[key]
    }
}
