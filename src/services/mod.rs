//! Business logic services.
//!
//! Services validate domain rules and delegate persistence to a
//! [`WordRepository`](crate::storage::WordRepository).

mod container;
mod sanitize;
mod words;

pub use container::ServiceContainer;
pub use sanitize::{MASK_CHAR, SanitizeService, mask_word};
pub use words::SensitiveWordService;
