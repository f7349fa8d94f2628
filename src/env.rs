use thiserror::Error;

/// Errors produced by an [`Environment`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvError {
    /// The episode has already terminated and can no longer accept actions
    #[error("episode is over")]
    EpisodeOver,
}

/// Represents a decision process an agent can interact with, one action at a time.
///
/// This base trait represents the common case of a discrete-time environment
/// with one agent. An instance covers a single episode: once [`is_done`](Environment::is_done)
/// returns `true`, only the read-only queries remain legal.
pub trait Environment {
    /// A representation of the signal an agent observes from the environment
    type Observation;

    /// A representation of an action that an agent can take to affect the environment
    type Action;

    /// Get the current observation
    ///
    /// Has no side effects and is callable in any state, including after termination.
    fn observation(&self) -> Self::Observation;

    /// Determine if the episode has terminated
    fn is_done(&self) -> bool;

    /// Update the environment in response to an action taken by an agent, producing a reward
    ///
    /// Fails with [`EnvError::EpisodeOver`] when called after the episode has terminated.
    fn step(&mut self, action: Self::Action) -> Result<f64, EnvError>;
}

/// An [`Environment`] with a finite, enumerable action set
pub trait DiscreteActionSpace: Environment {
    /// Get the available actions for the current state
    ///
    /// The returned vec should never be empty, instead specify an action that represents doing nothing if necessary.
    fn actions(&self) -> Vec<Self::Action>;
}
