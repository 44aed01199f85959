// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lineage Sage: ask a language model about a lineage node.
//!
//! - [`context_for`] and [`prompt_for`] build the two text parts of a request.
//! - [`GenerativeClient`] is the seam to the model; [`GeminiClient`] implements it
//!   with one blocking `generateContent` call.
//! - [`Sage::explain`] never fails. A missing key, an empty answer and every other
//!   error each map to a fixed user-facing message, and errors are logged.
//! - [`ChatSession`] keeps the message history of one conversation.
//!
//! ```
//! use lineage_hierarchy::LineageNode;
//! use lineage_sage::{Sage, SageConfig, MISSING_KEY_MESSAGE};
//!
//! let sage = Sage::gemini(SageConfig::default()).unwrap();
//! let answer = sage.explain(&LineageNode::new("禅宗"), None);
//! assert_eq!(answer, MISSING_KEY_MESSAGE);
//! ```

mod chat;
mod client;
mod error;
mod prompt;
mod sage;

pub use chat::{ChatMessage, ChatSession, Role};
pub use client::{DEFAULT_ENDPOINT, DEFAULT_MODEL, GeminiClient, GenerativeClient, SageConfig};
pub use error::{Result, SageError};
pub use prompt::{context_for, greeting, prompt_for};
pub use sage::{APOLOGY_MESSAGE, EMPTY_RESPONSE_MESSAGE, MISSING_KEY_MESSAGE, Sage};
