//! Display-width character counting for Google Ads text assets.
//!
//! Google Ads limits text assets by a character count in which most
//! alphabetic scripts count 1 per character, full-width scripts (CJK, emoji)
//! count 2, and some Indic combining marks count 0. This crate reproduces
//! that count so lengths can be checked before an asset group is saved.
//!
//! ```
//! use gla_text::{character_counter, CounterKind};
//!
//! let count = character_counter(CounterKind::GoogleAds);
//! assert_eq!(count("Hello"), 5);
//! assert_eq!(count("안녕하세요"), 10);
//! ```

pub mod error;
pub mod google_ads;
pub mod kind;

pub use error::CounterError;
pub use google_ads::{google_ads_count, unit_width};
pub use kind::{character_counter, counter_for, Counter, CounterKind};
