use std::cmp::Reverse;

use chrono::NaiveDate;

use crate::types::Conversation;
use crate::util::parse_date_label;

/// Conversations involving `person_id` — as primary or listed participant —
/// most recent first.
///
/// `today` anchors the year-less date labels (see
/// [`parse_date_label`]). The sort is stable: equal dates keep their
/// original relative order, and unparseable dates go last.
pub fn person_history<'a>(
    person_id: &str,
    conversations: &'a [Conversation],
    today: NaiveDate,
) -> Vec<&'a Conversation> {
    let mut history: Vec<&Conversation> = conversations
        .iter()
        .filter(|c| c.person_id == person_id || c.participants.iter().any(|p| p == person_id))
        .collect();

    // Reverse(None) sorts after every Reverse(Some(_)), so labels that
    // fail to parse end up at the bottom of the timeline.
    history.sort_by_key(|c| Reverse(parse_date_label(&c.date, today)));
    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devtools;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 20).unwrap()
    }

    fn ids(found: &[&Conversation]) -> Vec<String> {
        found.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_descending_across_a_year_boundary() {
        let conversations = devtools::seed_conversations();
        // p1: c1 "Jan 16", c4 "Dec 10", c5 "Nov 24" — December belongs to
        // the previous year, so January sorts first.
        let history = person_history("p1", &conversations, today());
        assert_eq!(ids(&history), vec!["c1", "c4", "c5"]);
    }

    #[test]
    fn test_includes_participant_only_conversations() {
        let conversations = devtools::seed_conversations();
        // p3 is primary on c3 ("Jan 12") and a participant in c1 ("Jan 16").
        let history = person_history("p3", &conversations, today());
        assert_eq!(ids(&history), vec!["c1", "c3"]);
    }

    #[test]
    fn test_mixed_month_labels_sort_most_recent_first() {
        let mut conversations = Vec::new();
        for (id, date) in [("x1", "Jan 16"), ("x2", "Dec 10"), ("x3", "Jan 12")] {
            conversations.push(Conversation {
                id: id.to_string(),
                person_id: "p1".to_string(),
                participants: vec!["p1".to_string()],
                title: format!("Sync {id}"),
                date: date.to_string(),
                location: "Virtual Call".to_string(),
                summary: String::new(),
                key_points: vec![],
                action_items: vec![],
                full_transcript: None,
            });
        }

        let history = person_history("p1", &conversations, today());
        assert_eq!(ids(&history), vec!["x1", "x3", "x2"]);
    }

    #[test]
    fn test_unparseable_dates_sort_last_and_stay_stable() {
        let template = devtools::seed_conversations();
        let mut conversations = Vec::new();
        for (id, date) in [("b1", "whenever"), ("b2", "Jan 16"), ("b3", "no date")] {
            let mut c = template[0].clone();
            c.id = id.to_string();
            c.date = date.to_string();
            conversations.push(c);
        }

        let history = person_history("p1", &conversations, today());
        assert_eq!(ids(&history), vec!["b2", "b1", "b3"]);
    }

    #[test]
    fn test_unknown_person_yields_empty_history() {
        let conversations = devtools::seed_conversations();
        let history = person_history("p999", &conversations, today());
        assert!(history.is_empty());
    }
}
