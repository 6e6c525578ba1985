// Authentication: password login, Google sign-in, bearer-token sessions.

pub mod extractor;
pub mod google;
pub mod handlers;
pub mod password;
pub mod token;

pub use extractor::AuthUser;
