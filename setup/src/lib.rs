mod app;
pub mod cli;

pub use app::Application;
