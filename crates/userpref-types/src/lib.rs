mod field;
mod record;

pub use field::*;
pub use record::*;

/// Storage keys for the persisted record. These are part of the on-disk
/// format and must not change.
pub const KEY_NAME: &str = "name";
pub const KEY_EMAIL: &str = "email";
pub const KEY_AGE: &str = "age";
pub const KEY_PHONE: &str = "phone";
pub const KEY_LIKES_SUBJECT: &str = "islove";
