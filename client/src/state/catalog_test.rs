use super::*;

fn item(id: i64, category: &str, available: u32, availability: bool) -> Equipment {
    Equipment {
        id,
        name: format!("item-{id}"),
        category: category.to_owned(),
        condition: "Good".to_owned(),
        description: None,
        total_quantity: 5,
        available_quantity: available,
        availability,
    }
}

#[test]
fn default_filters_send_nothing() {
    assert_eq!(CatalogFilters::default().to_filter(), EquipmentFilter::default());
    assert!(CatalogFilters::default().is_empty());
}

#[test]
fn ticked_box_and_text_become_filters() {
    let filters = CatalogFilters {
        search: "lens".to_owned(),
        category: "AV".to_owned(),
        available_only: true,
    };
    let filter = filters.to_filter();
    assert_eq!(filter.search.as_deref(), Some("lens"));
    assert_eq!(filter.category.as_deref(), Some("AV"));
    assert_eq!(filter.available_only, Some(true));
    assert!(!filters.is_empty());
}

#[test]
fn whitespace_search_is_dropped() {
    let filters = CatalogFilters { search: "   ".to_owned(), ..CatalogFilters::default() };
    assert_eq!(filters.to_filter().search, None);
}

#[test]
fn categories_are_unique_in_first_seen_order() {
    let items = [item(1, "Lab", 1, true), item(2, "AV", 1, true), item(3, "Lab", 0, false), item(4, "", 1, true)];
    assert_eq!(categories(&items), ["Lab", "AV"]);
}

#[test]
fn requestable_keeps_available_stock_only() {
    let items = vec![item(1, "Lab", 1, true), item(2, "Lab", 0, true), item(3, "Lab", 4, false)];
    let ids: Vec<i64> = requestable(items).into_iter().map(|e| e.id).collect();
    assert_eq!(ids, [1]);
}

#[test]
fn count_label_pluralizes() {
    assert_eq!(count_label(0), "Showing 0 equipments");
    assert_eq!(count_label(1), "Showing 1 equipment");
    assert_eq!(count_label(7), "Showing 7 equipments");
}
