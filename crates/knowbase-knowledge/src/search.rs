//! Keyword containment search.

use serde::{Deserialize, Serialize};

use crate::topic::Topic;

/// Maximum number of results returned per query.
pub const MAX_RESULTS: usize = 5;

/// A topic that matched a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub content: String,
    /// Character length of the matched keyword.
    pub score: usize,
}

/// Search `topics` for keywords contained in `query`.
///
/// The query is lower-cased and nothing else. For each topic the first
/// keyword (in stored order) that is a substring of the query decides the
/// score; later keywords of the same topic are not considered. Matches are
/// stably sorted by descending score, so ties keep topic order, and cut to
/// [`MAX_RESULTS`].
pub fn search_knowledge(topics: &[Topic], query: &str) -> Vec<SearchResult> {
    let query_lower = query.to_lowercase();

    let mut results: Vec<SearchResult> = topics
        .iter()
        .filter_map(|topic| {
            topic
                .keywords
                .iter()
                .find(|kw| query_lower.contains(kw.as_str()))
                .map(|kw| SearchResult {
                    title: topic.title.clone(),
                    content: topic.content.clone(),
                    score: kw.chars().count(),
                })
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(MAX_RESULTS);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topic::builtin_topics;

    fn titles(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_chinese_query_with_ascii_keyword() {
        let results = search_knowledge(&builtin_topics(), "什么是AI");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "AI人工智能");
        assert_eq!(results[0].score, 2);
        assert!(results[0].content.starts_with("人工智能（AI）"));
    }

    #[test]
    fn test_first_keyword_wins_not_longest() {
        // "deep learning" comes before "neural network" in the keyword list.
        let results = search_knowledge(&builtin_topics(), "deep learning and neural network basics");
        assert_eq!(titles(&results), ["深度学习"]);
        assert_eq!(results[0].score, 13);
    }

    #[test]
    fn test_first_keyword_wins_even_when_shorter() {
        // "ai" (2) precedes "artificial intelligence" (23).
        let results = search_knowledge(&builtin_topics(), "AI: Artificial Intelligence");
        assert_eq!(titles(&results), ["AI人工智能"]);
        assert_eq!(results[0].score, 2);

        let results = search_knowledge(&builtin_topics(), "Artificial Intelligence");
        assert_eq!(results[0].score, 23);
    }

    #[test]
    fn test_empty_query() {
        assert!(search_knowledge(&builtin_topics(), "").is_empty());
    }

    #[test]
    fn test_no_keyword_in_query() {
        assert!(search_knowledge(&builtin_topics(), "hello world").is_empty());
        assert!(search_knowledge(&builtin_topics(), "今天天气怎么样").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let upper = search_knowledge(&builtin_topics(), "MACHINE LEARNING");
        let lower = search_knowledge(&builtin_topics(), "machine learning");
        assert_eq!(upper, lower);
        assert_eq!(titles(&upper), ["机器学习"]);
        assert_eq!(upper[0].score, 16);
    }

    #[test]
    fn test_no_trimming_or_tokenizing() {
        // Substring containment crosses word boundaries.
        let results = search_knowledge(&builtin_topics(), "html");
        assert_eq!(titles(&results), ["机器学习"]);
        assert_eq!(results[0].score, 2);
    }

    #[test]
    fn test_multiple_topics_sorted_by_score() {
        // 人工智能 (4) for AI, 深度学习 (4) for deep learning, ml (2) for machine learning.
        let results = search_knowledge(&builtin_topics(), "人工智能 深度学习 ml");
        assert_eq!(titles(&results), ["AI人工智能", "深度学习", "机器学习"]);
        assert_eq!(
            results.iter().map(|r| r.score).collect::<Vec<_>>(),
            [4, 4, 2]
        );
    }

    #[test]
    fn test_each_topic_appears_once() {
        let results = search_knowledge(
            &builtin_topics(),
            "深度学习 deep learning 神经网络 neural network",
        );
        assert_eq!(titles(&results), ["深度学习"]);
    }

    #[test]
    fn test_ties_keep_store_order() {
        let topics = vec![
            Topic::new("first", ["xy"], "1"),
            Topic::new("second", ["zz"], "2"),
            Topic::new("third", ["ab"], "3"),
        ];
        let results = search_knowledge(&topics, "ab zz xy");
        assert_eq!(titles(&results), ["first", "second", "third"]);
    }

    #[test]
    fn test_truncates_to_max_results() {
        let topics: Vec<Topic> = (0..7)
            .map(|i| Topic::new(format!("t{i}"), ["x".repeat(i + 1)], "c"))
            .collect();
        let results = search_knowledge(&topics, &"x".repeat(10));
        assert_eq!(results.len(), MAX_RESULTS);
        assert_eq!(titles(&results), ["t6", "t5", "t4", "t3", "t2"]);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_score_counts_characters_not_bytes() {
        let results = search_knowledge(&builtin_topics(), "机器智能");
        // "智能" (2 chars) is checked before "机器智能" for the AI topic.
        assert_eq!(results[0].title, "AI人工智能");
        assert_eq!(results[0].score, 2);
    }

    #[test]
    fn test_idempotent() {
        let topics = builtin_topics();
        let q = "AI 与 机器学习 以及 deep learning";
        assert_eq!(search_knowledge(&topics, q), search_knowledge(&topics, q));
    }
}
