pub mod random_reward;

pub use random_reward::RandomReward;
