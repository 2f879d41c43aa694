//! User ID
//!
//! Internal UUID v4 identifier. Also the `sub` claim of every token and the
//! `:id` segment of reset links.

pub use kernel::id::UserId;
