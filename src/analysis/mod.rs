// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Text analysis used to derive metadata for a single document.
//!
//! Everything here is pure and synchronous: the document processor calls
//! these between its fetch and persistence suspension points.
//!
//! * `tokenizer` - lower-cased, punctuation-free word tokens
//! * `keywords` - frequency ranking with optional vocabulary bias
//! * `length` - short/medium/long bucketing by token count
//! * `summary` - leading-sentence excerpt sized by length bucket

pub mod keywords;
pub mod length;
pub mod summary;
pub mod tokenizer;

pub use keywords::extract_keywords;
pub use length::{classify, LengthCategory};
pub use summary::summarize;
pub use tokenizer::tokenize;
