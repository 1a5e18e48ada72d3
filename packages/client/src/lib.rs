pub mod feed;
pub mod models;
pub mod password;

pub use feed::{FeedError, FeedStatus, NotificationFeed, NotificationSource};
pub use models::{Notification, NotificationPage};
pub use password::generate_password;
