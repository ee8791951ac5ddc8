//! Hosted chat assistant.
//!
//! Sends the user's question to a chat-completion API together with a fixed safety-oriented
//! system prompt, and returns the conversational reply. Every failure is surfaced as a
//! [`MediError`] so callers can tell a failed call apart from an empty offline advisory.

use crate::config::CoreConfig;
use crate::constants::SYSTEM_PROMPT;
use crate::{MediError, MediResult};
use medibot_types::{Language, NonEmptyText};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Something that can answer a health question in a given language.
pub trait ChatAssistant: Send + Sync {
    fn reply(
        &self,
        message: &NonEmptyText,
        language: &Language,
    ) -> impl Future<Output = MediResult<String>> + Send;
}

/// Chat assistant backed by an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct OpenAiAssistant {
    client: reqwest::Client,
    cfg: CoreConfig,
}

impl OpenAiAssistant {
    pub fn new(cfg: CoreConfig) -> MediResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(cfg.request_timeout())
            .build()
            .map_err(MediError::HttpClient)?;

        tracing::info!(model = %cfg.model(), base_url = %cfg.api_base_url(), "chat assistant ready");
        Ok(Self { client, cfg })
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Build the user turn sent alongside the system prompt.
pub fn build_user_prompt(message: &NonEmptyText, language: &Language) -> String {
    format!(
        "User preferred language: {language}.\n\
         Answer ONLY in this language.\n\
         User question: {message}"
    )
}

fn completion_request<'a>(model: &'a str, user_prompt: &'a str) -> ChatCompletionRequest<'a> {
    ChatCompletionRequest {
        model,
        messages: [
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT,
            },
            ChatMessage {
                role: "user",
                content: user_prompt,
            },
        ],
    }
}

fn first_reply(response: ChatCompletionResponse) -> MediResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(MediError::EmptyReply)
}

impl ChatAssistant for OpenAiAssistant {
    async fn reply(&self, message: &NonEmptyText, language: &Language) -> MediResult<String> {
        let url = format!("{}/chat/completions", self.cfg.api_base_url());
        let user_prompt = build_user_prompt(message, language);
        let body = completion_request(self.cfg.model(), &user_prompt);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.cfg.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MediError::AssistantTimeout(self.cfg.request_timeout().as_secs())
                } else {
                    MediError::AssistantRequest(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MediError::AssistantStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(MediError::AssistantResponse)?;

        first_reply(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ChatCompletionResponse {
        serde_json::from_str(json).expect("valid completion json")
    }

    #[test]
    fn user_prompt_names_language_and_question() {
        let message = NonEmptyText::new("  what helps a sore throat? ").unwrap();
        let prompt = build_user_prompt(&message, &Language::new(Some("Hindi")));
        assert_eq!(
            prompt,
            "User preferred language: Hindi.\nAnswer ONLY in this language.\nUser question: what helps a sore throat?"
        );
    }

    #[test]
    fn request_carries_system_prompt_first() {
        let body = serde_json::to_value(completion_request("gpt-test", "hello")).unwrap();
        assert_eq!(body["model"], "gpt-test");
        assert_eq!(body["messages"][0]["role"], "system");
        assert!(body["messages"][0]["content"]
            .as_str()
            .unwrap()
            .contains("You are NOT a real doctor."));
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "hello");
    }

    #[test]
    fn first_reply_trims_content() {
        let response = parse(r#"{"choices":[{"message":{"role":"assistant","content":"  Rest and fluids.\n"}}]}"#);
        assert_eq!(first_reply(response).unwrap(), "Rest and fluids.");
    }

    #[test]
    fn first_reply_rejects_missing_or_blank_content() {
        assert!(matches!(
            first_reply(parse(r#"{"choices":[]}"#)),
            Err(MediError::EmptyReply)
        ));
        assert!(matches!(
            first_reply(parse(r#"{}"#)),
            Err(MediError::EmptyReply)
        ));
        assert!(matches!(
            first_reply(parse(r#"{"choices":[{"message":{"content":null}}]}"#)),
            Err(MediError::EmptyReply)
        ));
        assert!(matches!(
            first_reply(parse(r#"{"choices":[{"message":{"content":"   "}}]}"#)),
            Err(MediError::EmptyReply)
        ));
    }

    mod hosted {
        use super::*;
        use crate::test_support::serve;
        use axum::http::StatusCode;
        use axum::routing::post;
        use axum::Router;
        use std::time::Duration;

        fn completions() -> Router {
            Router::new()
                .route(
                    "/ok/chat/completions",
                    post(|| async {
                        r#"{"choices":[{"message":{"role":"assistant","content":" Drink water.\n"}}]}"#
                    }),
                )
                .route(
                    "/failing/chat/completions",
                    post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
                )
                .route(
                    "/garbled/chat/completions",
                    post(|| async { "<html>not json</html>" }),
                )
        }

        async fn assistant_at(path: &str) -> OpenAiAssistant {
            let base = serve(completions()).await;
            let cfg = CoreConfig::new(
                "sk-test",
                None,
                Some(format!("{base}/{path}")),
                Duration::from_secs(5),
            )
            .unwrap();
            OpenAiAssistant::new(cfg).unwrap()
        }

        fn question() -> (NonEmptyText, Language) {
            (
                NonEmptyText::new("I have a headache").unwrap(),
                Language::new(None),
            )
        }

        #[tokio::test]
        async fn successful_completion_yields_trimmed_reply() {
            let (message, language) = question();
            let reply = assistant_at("ok").await.reply(&message, &language).await;
            assert_eq!(reply.unwrap(), "Drink water.");
        }

        #[tokio::test]
        async fn error_status_keeps_code_and_body() {
            let (message, language) = question();
            let err = assistant_at("failing")
                .await
                .reply(&message, &language)
                .await
                .expect_err("500 from upstream");
            assert!(matches!(
                err,
                MediError::AssistantStatus { status: 500, ref body } if body == "upstream exploded"
            ));
        }

        #[tokio::test]
        async fn undecodable_body_is_a_response_error() {
            let (message, language) = question();
            let err = assistant_at("garbled")
                .await
                .reply(&message, &language)
                .await
                .expect_err("non-json body");
            assert!(matches!(err, MediError::AssistantResponse(_)));
        }
    }
}
