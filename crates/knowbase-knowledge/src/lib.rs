//! # Knowbase Knowledge
//!
//! Tiny in-memory knowledge base answered by keyword containment.
//!
//! ## Design
//! - **Topics** — title, ordered keyword list, content text
//! - **Immutable store** — built once at startup, shared behind `Arc`
//! - **Naive scoring** — score is the length of the first keyword found
//!   in the lower-cased query
//! - No tokenizer, no index: a linear scan over a handful of records
//!
//! ## How it works
//! ```text
//! User: "什么是AI"
//!   ↓ lower-case
//! "什么是ai"
//!   ↓ first keyword of each topic contained in the query
//! AI人工智能 ← "ai" (score 2)
//!   ↓ stable sort by score, top 5
//! [{ title: "AI人工智能", content: "...", score: 2 }]
//! ```

pub mod search;
pub mod store;
pub mod topic;

pub use search::{MAX_RESULTS, SearchResult, search_knowledge};
pub use store::KnowledgeStore;
pub use topic::Topic;
