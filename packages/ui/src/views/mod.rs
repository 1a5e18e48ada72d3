mod settings;
mod users;

pub use settings::SettingsView;
pub use users::UsersView;
