pub mod board;
pub mod settings;

pub use board::BoardPage;
pub use settings::SettingsPage;
