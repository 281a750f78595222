//! Application state owned by the top-level controller.
//!
//! The collections live behind mutexes and are replaced wholesale after a
//! confirmed fetch or mutation; derived views ([`crate::queries`]) only
//! ever borrow. A failed call leaves the previous collections in place,
//! records a connection error for the UI, and returns the error — the
//! only recovery offered is a manual [`AppState::refresh`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::queries;
use crate::types::{Config, ConnectionStatus, Conversation, ConversationListItem, Person};

pub struct AppState {
    pub config: Mutex<Option<Config>>,
    pub people: Mutex<Vec<Person>>,
    pub conversations: Mutex<Vec<Conversation>>,
    pub connection: Mutex<ConnectionStatus>,
}

impl AppState {
    pub fn new() -> Self {
        let config = load_config().ok();
        Self {
            config: Mutex::new(config),
            people: Mutex::new(Vec::new()),
            conversations: Mutex::new(Vec::new()),
            connection: Mutex::new(ConnectionStatus::default()),
        }
    }

    /// Install the built-in fixtures instead of talking to a backend.
    pub fn seed(&self) {
        self.replace_collections(
            crate::devtools::seed_people(),
            crate::devtools::seed_conversations(),
        );
        self.set_connection(ConnectionStatus::Ready);
    }

    /// Full reload: people, conversation summaries, then each full
    /// conversation. Nothing is replaced until every fetch succeeded, so a
    /// failure keeps the last good collections on screen.
    pub async fn refresh(&self, client: &ApiClient) -> Result<(), ApiError> {
        match fetch_all(client).await {
            Ok((people, conversations)) => {
                self.replace_collections(people, conversations);
                self.set_connection(ConnectionStatus::Ready);
                Ok(())
            }
            Err(err) => {
                log::error!("refresh failed: {err}");
                self.set_connection(ConnectionStatus::Error {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Fetch one full conversation for the detail screen. Does not touch
    /// the collections.
    pub async fn open_conversation(
        &self,
        client: &ApiClient,
        id: &str,
    ) -> Result<Conversation, ApiError> {
        client.get_conversation(id).await
    }

    /// Flip one action item: send its desired (negated) state, then adopt
    /// the server's conversation as the new local copy. On failure the
    /// local copy is untouched and the error is returned for a blocking
    /// notice.
    pub async fn toggle_action_item(
        &self,
        client: &ApiClient,
        conversation_id: &str,
        item_id: &str,
    ) -> Result<Conversation, ApiError> {
        let completed = self.conversations.lock().ok().and_then(|guard| {
            guard
                .iter()
                .find(|c| c.id == conversation_id)
                .and_then(|c| c.find_item(item_id))
                .map(|item| item.completed)
        });
        let Some(completed) = completed else {
            return Err(ApiError::NotFound {
                resource: "action item",
                id: format!("{conversation_id}/{item_id}"),
            });
        };

        let updated = client
            .toggle_action_item(conversation_id, item_id, !completed)
            .await?;
        self.apply_conversation(updated.clone());
        Ok(updated)
    }

    /// Replace the local copy of one conversation with an authoritative
    /// server response.
    pub fn apply_conversation(&self, conversation: Conversation) {
        if let Ok(mut guard) = self.conversations.lock() {
            match guard.iter_mut().find(|c| c.id == conversation.id) {
                Some(slot) => *slot = conversation,
                None => guard.push(conversation),
            }
        }
    }

    /// Conversations visible on the list screen for the given filters,
    /// as summary records.
    pub fn visible_conversations(
        &self,
        person_id: Option<&str>,
        query: &str,
    ) -> Vec<ConversationListItem> {
        let people = self.people_snapshot();
        self.conversations
            .lock()
            .map(|guard| {
                queries::filter::visible_conversations(&guard, person_id, query, &people)
                    .into_iter()
                    .map(ConversationListItem::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Timeline for a person's detail screen, most recent first.
    pub fn person_history(&self, person_id: &str) -> Vec<ConversationListItem> {
        let today = Utc::now().date_naive();
        self.conversations
            .lock()
            .map(|guard| {
                queries::history::person_history(person_id, &guard, today)
                    .into_iter()
                    .map(ConversationListItem::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn people_snapshot(&self) -> Vec<Person> {
        self.people
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn conversations_snapshot(&self) -> Vec<Conversation> {
        self.conversations
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        self.connection
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn replace_collections(&self, people: Vec<Person>, conversations: Vec<Conversation>) {
        if let Ok(mut guard) = self.people.lock() {
            *guard = people;
        }
        if let Ok(mut guard) = self.conversations.lock() {
            *guard = conversations;
        }
    }

    fn set_connection(&self, status: ConnectionStatus) {
        if let Ok(mut guard) = self.connection.lock() {
            *guard = status;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

async fn fetch_all(client: &ApiClient) -> Result<(Vec<Person>, Vec<Conversation>), ApiError> {
    let people = client.list_people().await?;
    let summaries = client.list_conversations(None).await?;

    let mut conversations = Vec::with_capacity(summaries.len());
    for summary in &summaries {
        conversations.push(client.get_conversation(&summary.id).await?);
    }
    Ok((people, conversations))
}

// =============================================================================
// Config I/O
// =============================================================================

/// Get the canonical config file path (~/.conversa/config.json)
pub fn config_path() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or("Could not find home directory")?;
    Ok(home.join(".conversa").join("config.json"))
}

/// Load configuration from ~/.conversa/config.json
pub fn load_config() -> Result<Config, String> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<Config, String> {
    if !path.exists() {
        return Err(format!(
            "Config file not found at {}. Create it with: {{ \"apiBaseUrl\": \"http://localhost:8000/api/v1\" }}",
            path.display()
        ));
    }

    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
    serde_json::from_str(&content).map_err(|e| format!("Failed to parse config: {}", e))
}

/// Create or update config.json.
///
/// If config already exists in-memory, clones it, applies the mutator, and
/// writes back. If config is None (first-run), starts from defaults,
/// ensures ~/.conversa/ exists, and writes + updates in-memory state.
pub fn create_or_update_config(
    state: &AppState,
    mutator: impl FnOnce(&mut Config),
) -> Result<Config, String> {
    let mut guard = state.config.lock().map_err(|_| "Lock poisoned")?;

    let mut config = guard.clone().unwrap_or_default();
    mutator(&mut config);

    let path = config_path()?;
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config dir: {}", e))?;
        }
    }

    let content = serde_json::to_string_pretty(&config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    fs::write(&path, content).map_err(|e| format!("Failed to write config: {}", e))?;

    *guard = Some(config.clone());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn seeded_state() -> AppState {
        let state = AppState {
            config: Mutex::new(None),
            people: Mutex::new(Vec::new()),
            conversations: Mutex::new(Vec::new()),
            connection: Mutex::new(ConnectionStatus::default()),
        };
        state.seed();
        state
    }

    #[test]
    fn test_seed_installs_fixtures() {
        let state = seeded_state();
        assert_eq!(state.people_snapshot().len(), 3);
        assert_eq!(state.conversations_snapshot().len(), 5);
        assert_eq!(state.connection_status(), ConnectionStatus::Ready);
    }

    #[test]
    fn test_visible_conversations_returns_summaries() {
        let state = seeded_state();
        let visible = state.visible_conversations(Some("p1"), "");
        let ids: Vec<&str> = visible.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c4", "c5"]);
        // c1 has two open items.
        assert_eq!(visible[0].active_action_items_count, 2);
    }

    #[test]
    fn test_apply_conversation_replaces_matching_copy() {
        let state = seeded_state();
        let mut updated = state.conversations_snapshot()[0].clone();
        assert_eq!(updated.id, "c1");
        updated.action_items[0].completed = true;

        state.apply_conversation(updated);

        let conversations = state.conversations_snapshot();
        assert_eq!(conversations.len(), 5);
        assert!(conversations[0].action_items[0].completed);
    }

    #[tokio::test]
    async fn test_toggle_unknown_item_is_not_found_without_a_request() {
        let state = seeded_state();
        let client = ApiClient::new("http://127.0.0.1:1/api/v1", Duration::from_secs(2)).unwrap();

        let err = state
            .toggle_action_item(&client, "c1", "a999")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_failed_refresh_leaves_collections_untouched() {
        let state = seeded_state();
        // Nothing listens on port 1; the refresh dies on the first fetch.
        let client = ApiClient::new("http://127.0.0.1:1/api/v1", Duration::from_secs(2)).unwrap();

        let err = state.refresh(&client).await.unwrap_err();
        assert!(err.is_network());
        assert_eq!(state.people_snapshot().len(), 3);
        assert_eq!(state.conversations_snapshot().len(), 5);
        assert!(matches!(
            state.connection_status(),
            ConnectionStatus::Error { .. }
        ));
    }

    #[tokio::test]
    async fn test_failed_toggle_leaves_item_untouched() {
        let state = seeded_state();
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/v1/conversations/c1/action-items/a1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let client = ApiClient::new(&format!("{}/api/v1", server.uri()), Duration::from_secs(5))
            .unwrap();

        let err = state
            .toggle_action_item(&client, "c1", "a1")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));

        let conversations = state.conversations_snapshot();
        assert!(!conversations[0].action_items[0].completed);
    }

    #[tokio::test]
    async fn test_refresh_hydrates_full_conversations() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/people/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/conversations/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "c1",
                "person_id": "p1",
                "participants": ["p1"],
                "title": "Q3 Beta Roadmap Review",
                "date": "Jan 16 • 2:30 PM",
                "location": "Blue Bottle Coffee",
                "summary": "Discussed the roadmap.",
                "active_action_items_count": 1
            }])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/conversations/c1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "c1",
                "person_id": "p1",
                "participants": ["p1"],
                "title": "Q3 Beta Roadmap Review",
                "date": "Jan 16 • 2:30 PM",
                "location": "Blue Bottle Coffee",
                "summary": "Discussed the roadmap.",
                "key_points": ["Sign-up has too many steps."],
                "action_items": [
                    { "id": "a1", "text": "Mock up a shortened onboarding flow", "completed": false }
                ],
                "full_transcript": "Sarah: Thanks for meeting up."
            })))
            .mount(&server)
            .await;

        let state = seeded_state();
        let client = ApiClient::new(&format!("{}/api/v1", server.uri()), Duration::from_secs(5))
            .unwrap();

        state.refresh(&client).await.unwrap();

        let conversations = state.conversations_snapshot();
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].key_points.len(), 1);
        assert!(state.people_snapshot().is_empty());
        assert_eq!(state.connection_status(), ConnectionStatus::Ready);
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "apiBaseUrl": "http://10.0.0.5:8000/api/v1", "requestTimeoutSecs": 30 }"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.5:8000/api/v1");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(&dir.path().join("config.json")).unwrap_err();
        assert!(err.contains("Config file not found"));
    }
}
