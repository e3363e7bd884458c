//! Experience, levels and chest rewards.

pub mod leveling;
pub mod rewards;

pub use leveling::{experience_step, grant_experience};
pub use rewards::{apply_reward, choose_reward, generate_rewards_from_chest, offer_chest};
