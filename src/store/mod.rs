pub mod json_file;
pub mod messages;
pub mod models;
pub mod sessions;
pub mod users;

pub use messages::MessageStore;
pub use models::{ChatMessage, Page, Session, UserMap, UserRecord};
pub use sessions::SessionStore;
pub use users::CredentialStore;
