pub mod health;
pub mod models;
pub mod series;
pub mod blobs;

pub use health::health_handler;
pub use models::{list_models_handler, specs_handler};
pub use series::{
    action_at_handler, loss_handler, reward_at_handler, reward_handler,
    selective_times_handler,
};
pub use blobs::{q_estimate_handler, q_future_handler, screen_handler};
