pub mod audit;
pub mod delete;
pub mod dispatch;
pub mod highlights;
pub mod histogram;
pub mod notices;
pub mod resolve;
pub mod schema;
pub mod shared;
pub mod update;
