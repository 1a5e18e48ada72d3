mod dashboard;
mod login;
mod register;
mod reset_password;
mod settings;
mod users;

pub use dashboard::Dashboard;
pub use login::Login;
pub use register::Register;
pub use reset_password::ResetPassword;
pub use settings::Settings;
pub use users::Users;
