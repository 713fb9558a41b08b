mod messages;
mod migrate;
mod server;

pub use messages::list_messages;
pub use migrate::{migrate, reset};
pub use server::serve;
