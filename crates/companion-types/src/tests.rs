#[cfg(test)]
mod tests {
    use crate::analysis::*;
    use crate::conversation::*;
    use crate::error::*;
    use crate::message::*;
    use crate::paper::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_message_assistant() {
        let msg = Message::assistant("I can help");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "I can help");
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            r#""assistant""#
        );
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::user("test input");
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, msg);
    }

    // ─── Conversation Tests ──────────────────────────────────

    #[test]
    fn test_conversation_seeded() {
        let conv = Conversation::seeded();
        assert!(!conv.id.is_empty());
        assert_eq!(conv.title, DEFAULT_TITLE);
        assert_eq!(conv.messages.len(), 1);
        assert_eq!(conv.messages[0].role, Role::Assistant);
        assert_eq!(conv.messages[0].content, WELCOME_MESSAGE);
        assert!(!conv.created_at.is_empty());
        assert!(conv.is_fresh());
    }

    #[test]
    fn test_seeded_conversations_have_distinct_ids() {
        let a = Conversation::seeded();
        let b = Conversation::seeded();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_derive_title_short_passthrough() {
        assert_eq!(derive_title("bee decline").as_deref(), Some("bee decline"));
    }

    #[test]
    fn test_derive_title_truncates_to_fifty_chars() {
        let long = "a".repeat(80);
        let title = derive_title(&long).unwrap();
        assert_eq!(title.chars().count(), 53);
        assert!(title.ends_with("..."));
        assert!(title.starts_with(&"a".repeat(50)));
    }

    #[test]
    fn test_derive_title_exactly_fifty_chars_no_ellipsis() {
        let exact = "b".repeat(50);
        assert_eq!(derive_title(&exact).as_deref(), Some(exact.as_str()));
    }

    #[test]
    fn test_derive_title_rejects_tiny_messages() {
        assert!(derive_title("").is_none());
        assert!(derive_title("hi").is_none());
    }

    #[test]
    fn test_conversation_serialization_roundtrip() {
        let mut conv = Conversation::seeded();
        conv.messages.push(Message::user("find papers on bees"));
        let json = serde_json::to_string(&conv).unwrap();
        let deserialized: Conversation = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, conv.id);
        assert_eq!(deserialized.messages.len(), 2);
    }

    // ─── Paper Tests ─────────────────────────────────────────

    #[test]
    fn test_paper_all_fields_optional() {
        let paper: Paper = serde_json::from_str("{}").unwrap();
        assert_eq!(paper.title_or_placeholder(), "Untitled");
        assert_eq!(paper.authors_line(3), "Unknown authors");
        assert!(paper.year.is_none());
        assert!(paper.citations.is_none());
        assert!(paper.abstract_snippet(150).is_none());
    }

    #[test]
    fn test_paper_authors_line_caps_at_max() {
        let paper = Paper {
            authors: vec![
                "Smith, J.".to_string(),
                "Johnson, A.".to_string(),
                "Lee, R.".to_string(),
                "Wong, K.".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(paper.authors_line(3), "Smith, J., Johnson, A., Lee, R.");
    }

    #[test]
    fn test_paper_abstract_snippet_truncates() {
        let paper = Paper {
            r#abstract: Some("x".repeat(200)),
            ..Default::default()
        };
        let snippet = paper.abstract_snippet(150).unwrap();
        assert_eq!(snippet.chars().count(), 153);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn test_paper_abstract_snippet_short_untouched() {
        let paper = Paper {
            r#abstract: Some("Short abstract.".to_string()),
            ..Default::default()
        };
        assert_eq!(paper.abstract_snippet(150).as_deref(), Some("Short abstract."));
    }

    #[test]
    fn test_paper_abstract_snippet_multibyte_boundary() {
        let paper = Paper {
            r#abstract: Some("é".repeat(10)),
            ..Default::default()
        };
        let snippet = paper.abstract_snippet(5).unwrap();
        assert_eq!(snippet, format!("{}...", "é".repeat(5)));
    }

    #[test]
    fn test_paper_deserializes_wire_shape() {
        let json = r#"{
            "title": "Bee Population Decline and Agricultural Impacts",
            "authors": ["Smith, J.", "Johnson, A."],
            "year": 2023,
            "citations": 42,
            "abstract": "This study examines pollination."
        }"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(
            paper.title_or_placeholder(),
            "Bee Population Decline and Agricultural Impacts"
        );
        assert_eq!(paper.year, Some(2023));
        assert_eq!(paper.citations, Some(42));
    }

    // ─── Analysis Tests ──────────────────────────────────────

    #[test]
    fn test_issue_placeholders() {
        let issue = Issue::default();
        assert_eq!(issue.reason_or_placeholder(), "Issue detected");
        assert_eq!(issue.suggestion_or_placeholder(), "Review this sentence");
    }

    #[test]
    fn test_score_response_normalizes_breakdown() {
        let json = r#"{
            "score": 77,
            "breakdown": {"novelty": 80, "alignment": 60, "coherence": 70, "relevance": 90},
            "sentences": [],
            "papers": []
        }"#;
        let resp: ScoreResponse = serde_json::from_str(json).unwrap();
        let analysis = resp.into_analysis();
        assert_eq!(analysis.score, 77);
        assert!((analysis.breakdown.novelty - 0.8).abs() < 1e-6);
        assert!((analysis.breakdown.relevance - 0.9).abs() < 1e-6);
        assert!(analysis.sentences.is_empty());
        assert!(analysis.papers.is_empty());
    }

    #[test]
    fn test_score_response_missing_fields_default() {
        let resp: ScoreResponse = serde_json::from_str(r#"{"score": 50}"#).unwrap();
        let analysis = resp.into_analysis();
        assert_eq!(analysis.score, 50);
        assert_eq!(analysis.breakdown, ScoreBreakdown::default());
        assert_eq!(analysis.issue_count(), 0);
    }

    #[test]
    fn test_score_response_clamps_out_of_range() {
        let resp: ScoreResponse =
            serde_json::from_str(r#"{"score": 140, "breakdown": {"novelty": 300}}"#).unwrap();
        let analysis = resp.into_analysis();
        assert_eq!(analysis.score, 100);
        assert_eq!(analysis.breakdown.novelty, 1.0);
    }

    #[test]
    fn test_score_response_caps_papers_at_five() {
        let papers: Vec<String> = (0..8).map(|i| format!(r#"{{"title":"p{}"}}"#, i)).collect();
        let json = format!(r#"{{"score": 10, "papers": [{}]}}"#, papers.join(","));
        let analysis = serde_json::from_str::<ScoreResponse>(&json)
            .unwrap()
            .into_analysis();
        assert_eq!(analysis.papers.len(), MAX_COMPARED_PAPERS);
    }

    #[test]
    fn test_analysis_issue_count() {
        let analysis = DraftAnalysis {
            sentences: vec![
                SentenceFeedback {
                    sentence: "A.".to_string(),
                    issues: vec![Issue::default(), Issue::default()],
                },
                SentenceFeedback {
                    sentence: "B.".to_string(),
                    issues: vec![Issue::default()],
                },
            ],
            ..Default::default()
        };
        assert_eq!(analysis.issue_count(), 3);
    }

    #[test]
    fn test_breakdown_signal_order() {
        let breakdown = ScoreBreakdown {
            novelty: 0.1,
            alignment: 0.2,
            coherence: 0.3,
            relevance: 0.4,
        };
        let names: Vec<&str> = breakdown.signals().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["Novelty", "Alignment", "Coherence", "Relevance"]);
    }

    #[test]
    fn test_papers_response_defaults() {
        let resp: PapersResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.papers_count.is_none());
        assert!(resp.papers.is_empty());
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(
            CompanionError::Storage("quota".to_string()).to_string(),
            "Storage error: quota"
        );
        assert_eq!(
            CompanionError::Backend {
                status: 500,
                message: "boom".to_string()
            }
            .to_string(),
            "Backend error: HTTP 500: boom"
        );
        assert_eq!(
            CompanionError::Timeout(15000).to_string(),
            "Timeout after 15000ms"
        );
        assert_eq!(
            CompanionError::NotFound("c1".to_string()).to_string(),
            "Conversation not found: c1"
        );
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{bad}}").unwrap_err();
        let err: CompanionError = serde_err.into();
        assert!(matches!(err, CompanionError::Serialization(_)));
    }
}
