use crate::types::ActionItem;

/// Active/completed split of a conversation's action items. Relative order
/// within each side matches the original list.
#[derive(Debug, Default)]
pub struct ItemPartition<'a> {
    pub active: Vec<&'a ActionItem>,
    pub completed: Vec<&'a ActionItem>,
}

/// Split action items for the detail screen's two sections.
pub fn partition(items: &[ActionItem]) -> ItemPartition<'_> {
    let (completed, active): (Vec<_>, Vec<_>) = items.iter().partition(|item| item.completed);
    ItemPartition { active, completed }
}

/// Count of not-yet-completed items, as shown on list badges.
pub fn active_count(items: &[ActionItem]) -> usize {
    items.iter().filter(|item| !item.completed).count()
}
