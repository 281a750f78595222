//! Conversations endpoints.

use reqwest::Method;
use serde_json::json;

use crate::error::ApiError;
use crate::types::{Conversation, ConversationListItem, ConversationPatch, NewConversation};

use super::ApiClient;

impl ApiClient {
    /// Fetch conversation summaries, optionally scoped to one primary
    /// person. Summaries carry an open-item count instead of the item list
    /// and never include the transcript.
    pub async fn list_conversations(
        &self,
        person_id: Option<&str>,
    ) -> Result<Vec<ConversationListItem>, ApiError> {
        let mut path = String::from("/conversations/");
        if let Some(id) = person_id {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("person_id", id)
                .finish();
            path.push('?');
            path.push_str(&query);
        }
        self.request(Method::GET, &path, None, "list conversations")
            .await
    }

    /// Fetch one full conversation, transcript included.
    pub async fn get_conversation(&self, id: &str) -> Result<Conversation, ApiError> {
        let conversation: Conversation = match self
            .request(
                Method::GET,
                &format!("/conversations/{id}"),
                None,
                "fetch conversation",
            )
            .await
        {
            Err(ApiError::Http { status: 404, .. }) => {
                return Err(ApiError::NotFound {
                    resource: "conversation",
                    id: id.to_string(),
                })
            }
            other => other?,
        };

        // Boundary check only; the record is still usable without it.
        if !conversation
            .participants
            .contains(&conversation.person_id)
        {
            log::warn!(
                "conversation {}: primary person {} missing from participants",
                conversation.id,
                conversation.person_id
            );
        }

        Ok(conversation)
    }

    /// Create a conversation; the backend assigns the id.
    pub async fn create_conversation(
        &self,
        conversation: &NewConversation,
    ) -> Result<Conversation, ApiError> {
        let body = Self::to_body(conversation, "create conversation")?;
        self.request(
            Method::POST,
            "/conversations/",
            Some(body),
            "create conversation",
        )
        .await
    }

    /// Update conversation fields; absent patch fields are left alone.
    pub async fn update_conversation(
        &self,
        id: &str,
        patch: &ConversationPatch,
    ) -> Result<Conversation, ApiError> {
        let body = Self::to_body(patch, "update conversation")?;
        self.request(
            Method::PUT,
            &format!("/conversations/{id}"),
            Some(body),
            "update conversation",
        )
        .await
    }

    /// Remove a conversation.
    pub async fn delete_conversation(&self, id: &str) -> Result<(), ApiError> {
        self.request_no_content(
            Method::DELETE,
            &format!("/conversations/{id}"),
            "delete conversation",
        )
        .await
    }

    /// Set one action item's completion state. Returns the full updated
    /// conversation; the server copy is authoritative and callers must not
    /// assume any other field changed.
    pub async fn toggle_action_item(
        &self,
        conversation_id: &str,
        item_id: &str,
        completed: bool,
    ) -> Result<Conversation, ApiError> {
        self.request(
            Method::PATCH,
            &format!("/conversations/{conversation_id}/action-items/{item_id}"),
            Some(json!({ "completed": completed })),
            "toggle action item",
        )
        .await
    }
}
