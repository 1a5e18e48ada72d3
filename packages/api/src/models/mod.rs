#[cfg(feature = "server")]
pub mod notification;
pub mod user;

pub use user::UserInfo;

#[cfg(feature = "server")]
pub use notification::NotificationRow;
#[cfg(feature = "server")]
pub use user::User;
