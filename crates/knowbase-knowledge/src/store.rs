//! Immutable knowledge store.

use knowbase_core::error::{KnowbaseError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::search::{SearchResult, search_knowledge};
use crate::topic::{Topic, builtin_topics};

/// Ordered, read-only collection of topics.
///
/// Constructed once at startup and never mutated afterwards, so it can be
/// shared across request handlers behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    topics: Vec<Topic>,
}

#[derive(Deserialize)]
struct TopicTable {
    #[serde(default)]
    topics: Vec<Topic>,
}

impl KnowledgeStore {
    /// The built-in topic table.
    pub fn builtin() -> Self {
        Self {
            topics: builtin_topics(),
        }
    }

    /// Build a store from topics, keeping their order.
    pub fn new(topics: Vec<Topic>) -> Result<Self> {
        let mut seen = HashSet::new();
        for topic in &topics {
            if topic.title.is_empty() {
                return Err(KnowbaseError::InvalidTopic("empty title".into()));
            }
            if !seen.insert(topic.title.as_str()) {
                return Err(KnowbaseError::DuplicateTopic(topic.title.clone()));
            }
            // An empty keyword is a substring of every query.
            if topic.keywords.iter().any(String::is_empty) {
                return Err(KnowbaseError::InvalidTopic(format!(
                    "{}: empty keyword",
                    topic.title
                )));
            }
            if topic.keywords.is_empty() {
                tracing::warn!("Topic '{}' has no keywords and will never match", topic.title);
            }
            for kw in &topic.keywords {
                if *kw != kw.to_lowercase() {
                    tracing::warn!(
                        "Keyword {kw:?} in topic '{}' has upper-case characters and will never match",
                        topic.title
                    );
                }
            }
        }
        Ok(Self { topics })
    }

    /// Parse a TOML topic table (`[[topics]]` with title, keywords, content).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: TopicTable = toml::from_str(content)
            .map_err(|e| KnowbaseError::Config(format!("Failed to parse topics: {e}")))?;
        Self::new(table.topics)
    }

    /// Load a TOML topic table from disk.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded {} topic(s) from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Search this store. See [`search_knowledge`].
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        search_knowledge(&self.topics, query)
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn get(&self, title: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.title == title)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Total keywords across all topics.
    pub fn keyword_count(&self) -> usize {
        self.topics.iter().map(|t| t.keywords.len()).sum()
    }
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::builtin()
    }
}
