use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::env::{DiscreteActionSpace, EnvError, Environment};

/// An agent that can take one policy step in an environment
pub trait Agent<E>
where
    E: Environment,
{
    /// Make one policy step in the given environment
    ///
    /// A failure from the environment propagates out unhandled; callers should
    /// check [`is_done`](Environment::is_done) before stepping.
    fn step(&mut self, env: &mut E) -> Result<(), EnvError>;
}

/// An agent that plays according to a uniform random policy
///
/// Collects rewards into a running total but learns nothing from them. The
/// observation is queried and then ignored; the policy is observation-blind.
pub struct RandomAgent {
    total_reward: f64,
    rng: StdRng,
}

impl RandomAgent {
    /// Initialize a new `RandomAgent` with an entropy-seeded action source
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Initialize a new `RandomAgent` with a deterministic action source
    ///
    /// Two agents built from the same seed choose identical action sequences.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            total_reward: 0.0,
            rng,
        }
    }

    /// Total reward collected so far
    pub fn total_reward(&self) -> f64 {
        self.total_reward
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Agent<E> for RandomAgent
where
    E: Environment + DiscreteActionSpace,
    E::Action: Clone + std::fmt::Debug,
{
    fn step(&mut self, env: &mut E) -> Result<(), EnvError> {
        // The random policy ignores the observation
        let _ = env.observation();

        let actions = env.actions();
        let action = actions
            .choose(&mut self.rng)
            .cloned()
            .expect("There is always at least one action available");
        debug!("chose action {:?}", action);

        let reward = env.step(action)?;
        self.total_reward += reward;

        Ok(())
    }
}
