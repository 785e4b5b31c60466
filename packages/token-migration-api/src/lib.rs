pub mod api;
pub mod error;
pub mod msg;
pub mod response;
pub mod router;
pub mod token;
