//! Pure helper functions. No side effects.

pub mod slug;
