//! An insertion-ordered collection with fluent transformation chains.
//!
//! This crate provides [`Collection`], an ordered mapping from unique keys to
//! values that supports a chain of transformation operations (map, filter,
//! group, chunk, zip, slice, ...). Every transform returns a *new* collection
//! and leaves its source untouched; the only in-place mutators are
//! [`push`](Collection::push) and [`pop`](Collection::pop).
//!
//! List-like collections use sequential `usize` keys starting at 0 and are
//! built with [`Collection::from_values`]. Map-like collections carry explicit
//! keys and are built with [`Collection::from_pairs`] (or collected from an
//! iterator of pairs). Either way, insertion order is preserved and observable
//! through iteration.
//!
//! # Example
//!
//! ```
//! use flowmap::Collection;
//!
//! let people = Collection::from_values(["Christian", "Budi", "Callista"]);
//!
//! // Transforms chain and never touch their source.
//! let shouted = people.map(|name| name.to_uppercase());
//! assert_eq!(shouted.to_vec(), ["CHRISTIAN", "BUDI", "CALLISTA"]);
//! assert_eq!(people.to_vec(), ["Christian", "Budi", "Callista"]);
//!
//! // Keys survive filtering; order is always insertion order.
//! let scores = Collection::from_pairs([("Chris", 100), ("Tian", 80), ("Budi", 90)]);
//! let passed = scores.filter(|score, _| *score >= 90);
//! assert_eq!(passed.to_pairs(), [("Chris", 100), ("Budi", 90)]);
//!
//! // Structural transforms produce nested collections.
//! let chunks = Collection::from_values([1, 2, 3, 4, 5]).chunk(2)?;
//! assert_eq!(chunks.len(), 3);
//! assert_eq!(chunks.first()?.to_vec(), [1, 2]);
//! # Ok::<(), flowmap::Error>(())
//! ```
//!
//! # Features
//!
//! - **Insertion order, unique keys** - iteration always reflects the order
//!   elements were inserted; re-assigning an existing key replaces the value
//!   without moving it.
//! - **Copy-on-transform** - transforms share no mutable backing storage with
//!   their source, so a pipeline can branch from any intermediate collection.
//! - **Typed failure modes** - precondition violations ([`pop`](Collection::pop)
//!   on empty, [`combine`](Collection::combine) with mismatched lengths, ...)
//!   surface as [`Error`] values rather than panics.
//!
//! # Implementation
//!
//! `Collection` wraps a raw backing store holding the entries in a contiguous
//! vector plus a key-to-position hash index, giving O(1) key lookup and O(1)
//! amortized append while keeping iteration a plain slice walk.

// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

mod raw;

pub mod collection;
pub mod error;

pub use collection::Collection;
pub use error::{Error, Result};
