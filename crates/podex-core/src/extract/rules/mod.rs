//! Shared rule toolkit for the field extractors.

pub mod dates;
pub mod money;
pub mod normalize;
pub mod patterns;
pub mod proximity;

pub use dates::parse_slash_date;
pub use money::{format_money, parse_money};
pub use normalize::normalize;
pub use proximity::{window_after, DEFAULT_WINDOW};
