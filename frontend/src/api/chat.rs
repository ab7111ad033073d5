use super::client::ApiClient;
use super::error::ApiError;
use super::types::ChatReply;

impl ApiClient {
    /// Relays one utterance to the assistant webhook. Only the first
    /// reply's text is surfaced; an empty reply array yields `None`.
    pub async fn send_chat_message(&self, text: &str) -> Result<Option<String>, ApiError> {
        let url = self.resolved_assistant_url().await;
        let body = serde_json::json!({ "message": text, "sender": "user" });
        let response = self.send(self.http_client().post(url).json(&body)).await?;

        if response.status().is_success() {
            let replies: Vec<ChatReply> = Self::parse_json(response).await?;
            Ok(replies.into_iter().next().and_then(|reply| reply.text))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}
