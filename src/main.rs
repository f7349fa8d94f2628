use std::process;

use tinyrl::agent::{Agent, RandomAgent};
use tinyrl::env::Environment;
use tinyrl::gym::RandomReward;

/// Run a single episode of the random agent in the random reward environment
/// and report the total collected reward.
fn main() {
    let mut env = RandomReward::new();
    let mut agent = RandomAgent::new();

    while !env.is_done() {
        if let Err(e) = agent.step(&mut env) {
            eprintln!("{}", e);
            process::exit(1);
        }
    }

    println!("Total reward: {:.4}", agent.total_reward());
}
