use serde::{Deserialize, Serialize};

/// Configuration stored in ~/.conversa/config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base URL of the backend, including the version prefix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Per-request timeout in seconds. Timeouts surface as network errors.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_api_base_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

fn default_request_timeout_secs() -> u64 {
    15
}

// =============================================================================
// Domain records
// =============================================================================

/// A contact record.
///
/// `last_met` and `met_count` are derived by the backend; creation payloads
/// ([`NewPerson`]) omit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar_color: String,
    #[serde(default)]
    pub last_met: Option<String>,
    #[serde(default)]
    pub met_count: u32,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub open_follow_ups: Vec<String>,
}

/// A single to-do entry attached to a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Full conversation record as returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    /// Primary person. Should also appear in `participants`; checked with
    /// a warning at the fetch boundary, never enforced.
    pub person_id: String,
    #[serde(default)]
    pub participants: Vec<String>,
    pub title: String,
    /// Display label, e.g. "Jan 16 • 2:30 PM". Parsed for history sorting
    /// by [`crate::util::parse_date_label`].
    pub date: String,
    pub location: String,
    pub summary: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_transcript: Option<String>,
}

impl Conversation {
    /// Look up one action item by id.
    pub fn find_item(&self, item_id: &str) -> Option<&ActionItem> {
        self.action_items.iter().find(|i| i.id == item_id)
    }
}

/// Summary record returned by the list endpoint: no transcript, no item
/// list, just the count of still-open action items for the badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationListItem {
    pub id: String,
    pub person_id: String,
    #[serde(default)]
    pub participants: Vec<String>,
    pub title: String,
    pub date: String,
    pub location: String,
    pub summary: String,
    #[serde(default)]
    pub active_action_items_count: u32,
}

impl From<&Conversation> for ConversationListItem {
    fn from(conversation: &Conversation) -> Self {
        Self {
            id: conversation.id.clone(),
            person_id: conversation.person_id.clone(),
            participants: conversation.participants.clone(),
            title: conversation.title.clone(),
            date: conversation.date.clone(),
            location: conversation.location.clone(),
            summary: conversation.summary.clone(),
            active_action_items_count: crate::queries::actions::active_count(
                &conversation.action_items,
            ) as u32,
        }
    }
}

// =============================================================================
// Write payloads
// =============================================================================

/// Payload for creating a person. The backend assigns `id`, `last_met`,
/// and `met_count`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    pub name: String,
    pub role: String,
    pub avatar_color: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub open_follow_ups: Vec<String>,
}

/// Partial update for a person; only present fields reach the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_met: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub met_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_follow_ups: Option<Vec<String>>,
}

/// Payload for creating a conversation. The backend assigns `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewConversation {
    pub person_id: String,
    #[serde(default)]
    pub participants: Vec<String>,
    pub title: String,
    pub date: String,
    pub location: String,
    pub summary: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_transcript: Option<String>,
}

/// Partial update for a conversation; only present fields reach the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_items: Option<Vec<ActionItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_transcript: Option<String>,
}

// =============================================================================
// UI state
// =============================================================================

/// Backend reachability as shown to the UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum ConnectionStatus {
    /// Collections reflect the last successful load.
    #[default]
    Ready,
    /// The last load or mutation failed; the previous collections are
    /// still on screen and a manual reload is offered.
    Error { message: String },
}
