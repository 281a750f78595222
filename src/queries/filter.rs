use std::collections::HashMap;

use crate::types::{Conversation, Person};

/// Keep conversations whose primary person matches `person_id`.
/// `None` means no filter; order is always preserved.
pub fn by_person<'a>(
    conversations: &'a [Conversation],
    person_id: Option<&str>,
) -> Vec<&'a Conversation> {
    conversations
        .iter()
        .filter(|c| person_matches(c, person_id))
        .collect()
}

/// Case-insensitive substring search over title, summary, key points, and
/// the resolved primary person's name. An empty query matches everything.
/// A person id that resolves to nobody simply contributes no name match;
/// the conversation's own text fields still apply.
pub fn by_text<'a>(
    conversations: &'a [Conversation],
    query: &str,
    people: &[Person],
) -> Vec<&'a Conversation> {
    if query.is_empty() {
        return conversations.iter().collect();
    }
    let query = query.to_lowercase();
    let names = name_lookup(people);
    conversations
        .iter()
        .filter(|c| text_matches(c, &query, &names))
        .collect()
}

/// Person filter and text search combined (logical AND) — the conversation
/// list screen's visible set.
pub fn visible_conversations<'a>(
    conversations: &'a [Conversation],
    person_id: Option<&str>,
    query: &str,
    people: &[Person],
) -> Vec<&'a Conversation> {
    let query = query.to_lowercase();
    let names = name_lookup(people);
    conversations
        .iter()
        .filter(|c| person_matches(c, person_id))
        .filter(|c| query.is_empty() || text_matches(c, &query, &names))
        .collect()
}

fn person_matches(conversation: &Conversation, person_id: Option<&str>) -> bool {
    person_id.map_or(true, |id| conversation.person_id == id)
}

fn name_lookup(people: &[Person]) -> HashMap<&str, String> {
    people
        .iter()
        .map(|p| (p.id.as_str(), p.name.to_lowercase()))
        .collect()
}

// `query` must already be lowercased.
fn text_matches(conversation: &Conversation, query: &str, names: &HashMap<&str, String>) -> bool {
    if conversation.title.to_lowercase().contains(query)
        || conversation.summary.to_lowercase().contains(query)
    {
        return true;
    }
    if names
        .get(conversation.person_id.as_str())
        .is_some_and(|name| name.contains(query))
    {
        return true;
    }
    conversation
        .key_points
        .iter()
        .any(|point| point.to_lowercase().contains(query))
}
