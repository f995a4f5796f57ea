pub mod api;
pub mod state;
pub mod static_files;
