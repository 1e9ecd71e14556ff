//! UI Components

mod app;
mod generate;
mod home;
mod outlet;

pub use app::{App, Layout};
pub use generate::GenerateView;
pub use home::HomeView;
pub use outlet::{Generate, Home};
