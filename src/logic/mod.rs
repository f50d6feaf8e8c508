pub mod painting;
pub mod resize;
pub mod session;
pub mod tracker;
pub mod validator;
