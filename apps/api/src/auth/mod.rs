// Email/password accounts: signup, login, bcrypt hashing, JWT issuance.
// Issued tokens are not checked by any other route.

pub mod handlers;
pub mod password;
pub mod service;
pub mod store;
pub mod token;
