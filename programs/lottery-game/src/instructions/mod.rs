pub mod admin;
pub mod buy_tickets;
pub mod commit_randomness;
pub mod mega_jackpot;
pub mod reward;
pub mod start_game;
pub mod views;

pub use admin::*;
pub use buy_tickets::*;
pub use commit_randomness::*;
pub use mega_jackpot::*;
pub use reward::*;
pub use start_game::*;
pub use views::*;
