pub use credentials::{CredentialProvider, MemoryCredentials};
pub use error::{ClientError, Result};
pub use gateway::Client;
pub use notify::{Notice, NoticeKind, Notifier};
pub use session::{Session, SessionStore, default_session_path};

mod credentials;
mod error;
mod gateway;
mod notify;
mod session;

pub mod services;
