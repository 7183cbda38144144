//! N-gram match-and-splice algorithm for token selection
//!
//! Documents are sequences of integer token ids. Given a [`Dictionary`] of
//! token n-grams, a [`DocumentFilter`] either keeps only the tokens that take
//! part in a dictionary match or removes them, optionally widening every
//! match by a context [`Window`]. Unselected positions are either dropped
//! ([`PaddingPolicy::Compact`]) or overwritten with [`PAD`]
//! ([`PaddingPolicy::Pad`]) so that document length is preserved.
//!
//! The crate is pure computation: no I/O, no threads. Fan-out across a
//! corpus lives in `tokselect-engine`.
//!
//! # Example
//!
//! ```rust
//! use tokselect_core::{Dictionary, DocumentFilter, Mode, PaddingPolicy, SelectOptions, Window};
//!
//! let dictionary = Dictionary::from_sequences([vec![1, 2], vec![5, 6], vec![10]]).unwrap();
//! let options = SelectOptions::new(Mode::Keep)
//!     .with_padding(PaddingPolicy::Pad)
//!     .with_window(Window::new(0, 1));
//!
//! let filter = DocumentFilter::new(&dictionary, options);
//! let filtered = filter.filter((1..=10).collect());
//! assert_eq!(filtered, vec![1, 2, 3, 0, 5, 6, 7, 0, 0, 10]);
//! ```

#![warn(missing_docs)]

pub mod dictionary;
pub mod error;
pub mod filter;
pub mod options;
pub mod scanner;
pub mod splice;
pub mod token;
pub mod window;

pub use dictionary::{Dictionary, Ngram};
pub use error::{CoreError, Result};
pub use filter::{filter_document, DocumentFilter};
pub use options::{Mode, PaddingPolicy, SelectOptions};
pub use scanner::{Matches, MatchScanner};
pub use splice::SpliceBuffer;
pub use token::{Document, Token, PAD};
pub use window::Window;
