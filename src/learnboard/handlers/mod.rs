pub mod health;
pub use self::health::health;

pub mod user_login;
pub use self::user_login::{login, session};

pub mod user_logout;
pub use self::user_logout::logout;
