use crate::models::layout::OverflowCount;

/// Hidden items for one column: everything that touches it but was not rendered.
pub fn count(total_items: usize, rendered_items: usize) -> OverflowCount {
    let hidden_count = total_items.saturating_sub(rendered_items);
    OverflowCount {
        hidden_count,
        has_overflow: hidden_count > 0,
    }
}
