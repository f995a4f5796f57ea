// The credential table never leaves the session layer.
pub(crate) mod account;
pub mod catalog;
pub mod factory;
pub mod session;
