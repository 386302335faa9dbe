//! Topic records and the built-in topic table.

use serde::{Deserialize, Serialize};

/// One entry in the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    /// Matched in order; the first hit decides the score.
    pub keywords: Vec<String>,
    pub content: String,
}

impl Topic {
    pub fn new<I, S>(title: impl Into<String>, keywords: I, content: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            content: content.into(),
        }
    }
}

/// (title, keywords, content) — keyword order is significant.
pub(crate) const BUILTIN_TOPICS: &[(&str, &[&str], &str)] = &[
    (
        "AI人工智能",
        &["ai", "人工智能", "artificial intelligence", "智能", "机器智能"],
        "人工智能（AI）是计算机科学的一个分支，致力于创建能够执行通常需要人类智能的任务的系统。",
    ),
    (
        "机器学习",
        &["机器学习", "machine learning", "ml", "算法", "模型训练"],
        "机器学习是人工智能的一个子集，它使计算机能够在没有明确编程的情况下学习和改进。",
    ),
    (
        "深度学习",
        &["深度学习", "deep learning", "神经网络", "neural network"],
        "深度学习是机器学习的一个子集，使用多层神经网络来模拟人脑的工作方式。",
    ),
];

pub(crate) fn builtin_topics() -> Vec<Topic> {
    BUILTIN_TOPICS
        .iter()
        .map(|(title, keywords, content)| Topic::new(*title, keywords.iter().copied(), *content))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order_is_pinned() {
        let topics = builtin_topics();
        let titles: Vec<_> = topics.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["AI人工智能", "机器学习", "深度学习"]);
        assert_eq!(
            topics[2].keywords,
            ["深度学习", "deep learning", "神经网络", "neural network"]
        );
    }

    #[test]
    fn test_builtin_keywords_are_lowercase() {
        // Queries are lower-cased before matching, so an upper-case keyword could never hit.
        for topic in builtin_topics() {
            for kw in &topic.keywords {
                assert_eq!(kw, &kw.to_lowercase(), "keyword {kw:?} in {}", topic.title);
            }
        }
    }
}
