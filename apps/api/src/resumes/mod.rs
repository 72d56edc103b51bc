// Manual resume records: create and list. No update or delete path.

pub mod handlers;
pub mod store;
