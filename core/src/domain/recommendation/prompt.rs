use std::collections::HashMap;

use crate::domain::inventory::entities::InventoryItem;

/// Renders the inventory as one line per category, e.g.
/// `Produce: Tomato (3), Onion (2)`.
///
/// Categories appear in first-seen order and items keep their input order
/// inside a category. An empty inventory renders as an empty string.
pub fn render_inventory_section(items: &[InventoryItem]) -> String {
    let mut index_by_category: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&InventoryItem>)> = Vec::new();

    for item in items {
        match index_by_category.get(item.category.as_str()).copied() {
            Some(index) => groups[index].1.push(item),
            None => {
                index_by_category.insert(item.category.as_str(), groups.len());
                groups.push((item.category.as_str(), vec![item]));
            }
        }
    }

    groups
        .into_iter()
        .map(|(category, items)| {
            let items_list = items
                .iter()
                .map(|item| format!("{} ({})", item.name, item.quantity))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{category}: {items_list}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the full meal suggestion prompt sent to the model.
pub fn build_meal_suggestion_prompt(items: &[InventoryItem]) -> String {
    let inventory_list = render_inventory_section(items);

    format!(
        "Based on the following inventory of ingredients, suggest 3-4 different meals that can be prepared.
For each meal, ONLY provide:
1. A food image emoji (🍜, 🍕, 🍗, 🍲, etc.) that best represents the meal
2. The meal name

Format each suggestion exactly like this example:
🍜 | Spaghetti Carbonara

Inventory:
{inventory_list}

Please provide only the emoji and name for each meal, nothing else."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pantry() -> Vec<InventoryItem> {
        vec![
            InventoryItem::new("Tomato", "Produce", 3.0),
            InventoryItem::new("Milk", "Dairy", 1.0),
            InventoryItem::new("Onion", "Produce", 2.0),
            InventoryItem::new("Butter", "Dairy", 0.5),
        ]
    }

    #[test]
    fn test_single_category_section() {
        let items = vec![
            InventoryItem::new("Tomato", "Produce", 3.0),
            InventoryItem::new("Onion", "Produce", 2.0),
        ];
        assert_eq!(render_inventory_section(&items), "Produce: Tomato (3), Onion (2)");
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        assert_eq!(
            render_inventory_section(&pantry()),
            "Produce: Tomato (3), Onion (2)\nDairy: Milk (1), Butter (0.5)"
        );
    }

    #[test]
    fn test_one_line_per_distinct_category() {
        let section = render_inventory_section(&pantry());
        assert_eq!(section.lines().count(), 2);
    }

    #[test]
    fn test_categories_compare_exactly() {
        let items = vec![
            InventoryItem::new("Tomato", "Produce", 3.0),
            InventoryItem::new("Leek", "produce", 1.0),
            InventoryItem::new("Kale", "Produce ", 1.0),
        ];
        let section = render_inventory_section(&items);
        assert_eq!(section, "Produce: Tomato (3)\nproduce: Leek (1)\nProduce : Kale (1)");
    }

    #[test]
    fn test_prompt_mentions_every_item_once() {
        let prompt = build_meal_suggestion_prompt(&pantry());
        for entry in ["Tomato (3)", "Onion (2)", "Milk (1)", "Butter (0.5)"] {
            assert_eq!(prompt.matches(entry).count(), 1, "{entry} should appear once");
        }
    }

    #[test]
    fn test_prompt_states_format() {
        let prompt = build_meal_suggestion_prompt(&pantry());
        assert!(prompt.contains("suggest 3-4 different meals"));
        assert!(prompt.contains("🍜 | Spaghetti Carbonara"));
        assert!(prompt.contains("nothing else"));
    }

    #[test]
    fn test_empty_inventory_still_renders_template() {
        assert_eq!(render_inventory_section(&[]), "");
        let prompt = build_meal_suggestion_prompt(&[]);
        assert!(prompt.contains("Inventory:\n\n\nPlease provide only"));
    }
}
