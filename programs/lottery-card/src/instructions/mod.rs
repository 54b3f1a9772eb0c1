pub mod admin;
pub mod lock;
pub mod mint;
pub mod transfer;
pub mod view;

pub use admin::*;
pub use lock::*;
pub use mint::*;
pub use transfer::*;
pub use view::*;
