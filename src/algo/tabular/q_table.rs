use std::collections::HashMap;

use rand::{seq::SliceRandom, thread_rng};

use crate::{
    agent::Agent,
    assert_interval,
    env::{DiscreteActionSpace, Environment},
    exploration::{Choice, EpsilonGreedy},
    memory::Exp,
};

use super::Hashable;

/// Configuration for the [`QTableAgent`]
#[derive(Debug, Clone)]
pub struct QTableAgentConfig {
    /// Exploration policy
    ///
    /// **Default**: an [`EpsilonGreedy`] threshold of `100`, so roughly 10% of actions are random
    pub exploration: EpsilonGreedy,
    /// Learning rate
    ///
    /// **Default**: `0.3`
    pub alpha: f64,
    /// Discount factor
    ///
    /// **Default**: `0.8`
    pub gamma: f64,
}

impl Default for QTableAgentConfig {
    fn default() -> Self {
        Self {
            exploration: EpsilonGreedy::new(100),
            alpha: 0.3,
            gamma: 0.8,
        }
    }
}

/// A simple Q-learning agent that utilizes a Q-table to learn its environment
///
/// The table is updated after every transition with
///
/// Q(s,a) ← Q(s,a) + α(r + γ max<sub>a'</sub> Q(s',a') - Q(s,a))
///
/// Pairs that were never written read as `0.0`.
///
/// ### Generics
/// - `E` - The [`Environment`] in which the agent will learn
///     - The environment's state and action spaces must both be discrete because a Q value will be recorded for each state action pair
///     - For the same reason, the state and action types must be [`Hashable`] to be used as keys in a [`HashMap`]
pub struct QTableAgent<E>
where
    E: Environment + DiscreteActionSpace,
    E::State: Hashable,
    E::Action: Hashable,
{
    q_table: HashMap<(E::State, E::Action), f64>,
    exploration: EpsilonGreedy,
    alpha: f64, // learning rate
    gamma: f64, // discount factor
}

impl<E> QTableAgent<E>
where
    E: Environment + DiscreteActionSpace,
    E::State: Hashable,
    E::Action: Hashable,
{
    /// Initialize a new `QTableAgent` with an empty table
    ///
    /// **Panics** if `alpha` or `gamma` is not in the interval `[0,1]`
    pub fn new(config: QTableAgentConfig) -> Self {
        assert_interval!(config.alpha, 0.0, 1.0);
        assert_interval!(config.gamma, 0.0, 1.0);
        Self {
            q_table: HashMap::new(),
            exploration: config.exploration,
            alpha: config.alpha,
            gamma: config.gamma,
        }
    }

    /// The pairs that have been written so far
    pub fn get_q_table(&self) -> &HashMap<(E::State, E::Action), f64> {
        &self.q_table
    }

    /// Read a Q value, `0.0` if the pair was never written
    pub fn q_value(&self, state: E::State, action: E::Action) -> f64 {
        self.q_table.get(&(state, action)).copied().unwrap_or(0.0)
    }

    pub fn set_q_value(&mut self, state: E::State, action: E::Action, value: f64) {
        self.q_table.insert((state, action), value);
    }

    /// Highest Q value among `actions` in `state`
    pub fn max_q(&self, state: E::State, actions: &[E::Action]) -> f64 {
        actions
            .iter()
            .map(|&a| self.q_value(state, a))
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    pub fn exploration(&self) -> &EpsilonGreedy {
        &self.exploration
    }

    /// Pick uniformly among the actions tied for the highest Q value
    fn greedy(&self, state: E::State, actions: &[E::Action]) -> E::Action {
        let max = self.max_q(state, actions);
        let best = actions
            .iter()
            .copied()
            .filter(|&a| self.q_value(state, a) == max)
            .collect::<Vec<_>>();

        *best
            .choose(&mut thread_rng())
            .expect("There is always at least one action available")
    }

    /// Observe the environment, act, and learn from the resulting transition
    ///
    /// **Returns** the experience that was learned from
    pub fn tick(&mut self, env: &mut E) -> Exp<E> {
        let state = env.observe();
        let action = self.act(&state, &env.actions());
        let (next_state, reward) = env.step(action);
        let exp = Exp {
            state,
            action,
            reward,
            next_state,
        };

        self.learn(exp.clone(), &env.actions());
        exp
    }
}

impl<E> Agent<E> for QTableAgent<E>
where
    E: Environment + DiscreteActionSpace,
    E::State: Hashable,
    E::Action: Hashable,
{
    fn act(&self, state: &E::State, actions: &[E::Action]) -> E::Action {
        match self.exploration.choose() {
            Choice::Explore => *actions
                .choose(&mut thread_rng())
                .expect("There is always at least one action available"),
            Choice::Exploit => self.greedy(*state, actions),
        }
    }

    fn learn(&mut self, experience: Exp<E>, next_actions: &[E::Action]) {
        let Exp {
            state,
            action,
            reward,
            next_state,
        } = experience;

        let q_value = self.q_value(state, action);
        let max_next_q = self.max_q(next_state, next_actions);
        let updated = q_value + self.alpha * (reward + self.gamma * max_next_q - q_value);

        self.q_table.insert((state, action), updated);
    }
}
