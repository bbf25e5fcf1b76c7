//! Generation Module Tests
//!
//! Covers prompt construction, provider response extraction, and the
//! credential-before-provider ordering of the generation flow.

#[cfg(test)]
mod tests {
    use crate::generation::client::{
        ChatChoice, ChatResponse, ChatResponseMessage, GenerationError, OpenAiGenerator,
        TextGenerator, build_prompt, extract_text,
    };
    use crate::generation::secrets::{
        SecretError, SecretPayload, SecretResolver, credential_from,
    };

    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Resolver that counts calls and always fails.
    struct FailingResolver {
        calls: AtomicUsize,
    }

    impl FailingResolver {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl SecretResolver for FailingResolver {
        async fn resolve(&self) -> Result<String, SecretError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(SecretError::Missing {
                id: "test-secret".to_string(),
            })
        }
    }

    fn response_with(content: Option<&str>) -> ChatResponse {
        ChatResponse {
            choices: vec![ChatChoice {
                message: ChatResponseMessage {
                    content: content.map(|s| s.to_string()),
                },
            }],
        }
    }

    // ============================================================
    // PROMPT TESTS
    // ============================================================

    #[test]
    fn test_prompt_embeds_title_and_author_verbatim() {
        let prompt = build_prompt("Dune", "Frank Herbert");

        assert!(prompt.contains("Dune"));
        assert!(prompt.contains("Frank Herbert"));
    }

    #[test]
    fn test_prompt_states_length_bound() {
        let prompt = build_prompt("Dune", "Frank Herbert");
        assert!(prompt.contains("200"));
    }

    #[test]
    fn test_prompt_does_not_escape_inputs() {
        // Inputs land in the prompt untouched, quotes and all.
        let prompt = build_prompt("\"Quoted\" Title", "O'Brien");
        assert!(prompt.contains("\"Quoted\" Title"));
        assert!(prompt.contains("O'Brien"));
    }

    // ============================================================
    // RESPONSE EXTRACTION TESTS
    // ============================================================

    #[test]
    fn test_extract_text_takes_first_choice() {
        let text = extract_text(response_with(Some("面白い一冊です。"))).unwrap();
        assert_eq!(text, "面白い一冊です。");
    }

    #[test]
    fn test_extract_text_rejects_missing_choices() {
        let result = extract_text(ChatResponse { choices: vec![] });
        assert!(matches!(result, Err(GenerationError::Provider(_))));
    }

    #[test]
    fn test_extract_text_rejects_empty_content() {
        assert!(matches!(
            extract_text(response_with(None)),
            Err(GenerationError::Provider(_))
        ));
        assert!(matches!(
            extract_text(response_with(Some(""))),
            Err(GenerationError::Provider(_))
        ));
    }

    // ============================================================
    // CREDENTIAL TESTS
    // ============================================================

    #[test]
    fn test_credential_from_nonempty_value() {
        let payload = SecretPayload {
            value: Some("api-key".to_string()),
        };
        assert_eq!(credential_from(payload, "id").unwrap(), "api-key");
    }

    #[test]
    fn test_credential_from_empty_or_absent_value_is_missing() {
        let empty = SecretPayload {
            value: Some(String::new()),
        };
        assert!(matches!(
            credential_from(empty, "id"),
            Err(SecretError::Missing { .. })
        ));

        let absent = SecretPayload { value: None };
        assert!(matches!(
            credential_from(absent, "id"),
            Err(SecretError::Missing { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolver_failure_aborts_before_provider_call() {
        let resolver = FailingResolver::new();
        // Unroutable endpoint: reaching it would fail with a transport error,
        // so a Credential error proves the provider was never contacted.
        let generator =
            OpenAiGenerator::new(resolver.clone(), "http://127.0.0.1:9/v1/chat", "test-model");

        let result = generator.generate("Dune", "Frank Herbert").await;
        assert!(matches!(result, Err(GenerationError::Credential(_))));
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_secret_is_fetched_fresh_on_every_call() {
        let resolver = FailingResolver::new();
        let generator =
            OpenAiGenerator::new(resolver.clone(), "http://127.0.0.1:9/v1/chat", "test-model");

        let _ = generator.generate("Dune", "Frank Herbert").await;
        let _ = generator.generate("Solaris", "Stanisław Lem").await;

        assert_eq!(
            resolver.calls.load(Ordering::SeqCst),
            2,
            "Each generation call must resolve the credential anew"
        );
    }
}
