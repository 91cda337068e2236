//! Popcorntv-Common: media records and text helpers.
//!
//! This crate provides the types the markup recipes consume:
//!
//! - **Records**: `Movie`, `Show`, `Person` and `Torrent` as supplied by a metadata source
//! - **Critic ratings**: the `CriticRating` classification used for the critic badge
//! - **Text Utilities**: markup escaping (`cleaned`) and identifier slugs (`slugged`)
//! - **Error Handling**: record validation errors and result aliases
//!
//! # Examples
//!
//! ```
//! use popcorntv_common::{Person, Error, Result};
//! use popcorntv_common::text::{cleaned, slugged};
//!
//! assert_eq!(slugged("The Office (US)"), "the-office-us");
//! assert_eq!(cleaned("Tom & Jerry"), "Tom &amp; Jerry");
//!
//! let person = Person::new("Keanu Reeves");
//! let (first, last) = person.monogram()?;
//! assert_eq!((first, last), ("Keanu", "Reeves"));
//! # Ok::<(), Error>(())
//! ```

pub mod error;
pub mod text;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
