use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::env::{DiscreteActionSpace, EnvError, Environment};

/// Number of steps in one episode
const EPISODE_LENGTH: u32 = 10;

/// Random reward environment
///
/// The simplest possible environment: a fixed-length episode where every
/// action earns a uniform random reward in `[0, 1)`. The observation carries
/// no information and the reward does not depend on the action taken, so
/// there is nothing to learn. Useful as a stand-in when exercising the
/// interaction loop itself.
pub struct RandomReward {
    steps_left: u32,
    rng: StdRng,
}

impl RandomReward {
    /// Initialize a new `RandomReward` environment with an entropy-seeded reward source
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Initialize a new `RandomReward` environment with a deterministic reward source
    ///
    /// Two environments built from the same seed produce identical reward sequences.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            steps_left: EPISODE_LENGTH,
            rng,
        }
    }

    /// Number of steps remaining in the episode
    pub fn steps_left(&self) -> u32 {
        self.steps_left
    }
}

impl Default for RandomReward {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for RandomReward {
    type Observation = [f64; 3];
    type Action = u32;

    fn observation(&self) -> Self::Observation {
        [0.0; 3]
    }

    fn is_done(&self) -> bool {
        self.steps_left == 0
    }

    /// Apply an action and collect a uniform random reward in `[0, 1)`
    ///
    /// The action is not validated against [`actions`](DiscreteActionSpace::actions);
    /// any value is accepted and ignored, as the reward is pure noise.
    fn step(&mut self, action: Self::Action) -> Result<f64, EnvError> {
        if self.is_done() {
            return Err(EnvError::EpisodeOver);
        }

        self.steps_left -= 1;
        let reward = self.rng.gen::<f64>();
        debug!(
            "action {} -> reward {:.4}, {} steps left",
            action, reward, self.steps_left
        );

        Ok(reward)
    }
}

impl DiscreteActionSpace for RandomReward {
    fn actions(&self) -> Vec<Self::Action> {
        vec![0, 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_reward_functional() {
        let mut env = RandomReward::new();
        assert_eq!(env.actions(), vec![0, 1], "Actions are correct");
        assert_eq!(env.observation(), [0.0; 3], "Observation is the zero placeholder");
        assert!(!env.is_done(), "Fresh environment is active");
        assert_eq!(env.steps_left(), 10, "Episode starts with 10 steps");

        let reward = env.step(0).unwrap();
        assert!((0.0..1.0).contains(&reward), "Reward is in [0, 1)");
        assert_eq!(env.steps_left(), 9, "Step decrements the counter by one");
    }

    #[test]
    fn episode_terminates_after_ten_steps() {
        let mut env = RandomReward::seeded(7);
        for _ in 0..10 {
            assert!(!env.is_done(), "Environment stays active through step 10");
            let reward = env.step(1).unwrap();
            assert!((0.0..1.0).contains(&reward), "Reward is in [0, 1)");
        }

        assert!(env.is_done(), "Environment is done after 10 steps");
        assert_eq!(env.steps_left(), 0, "No steps remain");

        // Done is terminal, no matter the action
        assert_eq!(env.step(0), Err(EnvError::EpisodeOver));
        assert_eq!(env.step(1), Err(EnvError::EpisodeOver));
        assert_eq!(env.step(42), Err(EnvError::EpisodeOver));
        assert_eq!(env.steps_left(), 0, "Failed step does not mutate the counter");
        assert!(env.is_done(), "Environment stays done");
    }

    #[test]
    fn queries_are_constant_in_every_state() {
        let mut env = RandomReward::seeded(3);
        while !env.is_done() {
            assert_eq!(env.observation(), [0.0; 3]);
            assert_eq!(env.actions(), vec![0, 1]);
            env.step(0).unwrap();
        }

        assert_eq!(env.observation(), [0.0; 3], "Observation is constant after done");
        assert_eq!(env.actions(), vec![0, 1], "Actions are constant after done");
    }

    #[test]
    fn equal_seeds_produce_equal_rewards() {
        let mut a = RandomReward::seeded(99);
        let mut b = RandomReward::seeded(99);
        for _ in 0..10 {
            assert_eq!(a.step(0).unwrap(), b.step(1).unwrap());
        }
    }

    #[test]
    fn out_of_set_actions_are_accepted() {
        let mut env = RandomReward::seeded(1);
        let reward = env.step(1337).unwrap();
        assert!((0.0..1.0).contains(&reward), "Unknown actions are not rejected");
        assert_eq!(env.steps_left(), 9);
    }
}
