pub mod dto;
pub mod layout;
pub mod loader;
pub mod model;
pub mod session;
pub mod sheets;
pub mod source;
