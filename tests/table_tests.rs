//! Behavior of the selectable table through the public API.

mod common;

use std::cmp::Ordering;

use common::{abc, ids, item_columns, items, multiple, recorded, Item};
use pigpen::table::{SelectableTable, SortConfig, TableOptions, TableRow};

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_pages_and_select_all_scenario() {
    let (mut table, calls) = recorded(abc(), multiple(2));

    assert_eq!(ids(&table.page_rows()), vec!["1", "2"]);
    table.next_page();
    assert_eq!(ids(&table.page_rows()), vec!["3"]);

    table.toggle_row("3");
    table.go_to_page(1);
    table.toggle_select_all();

    assert_eq!(table.selected_ids(), ["3", "1", "2"]);
    let last = calls.borrow().last().cloned().unwrap();
    assert_eq!(last, vec!["3", "1", "2"]);
}

#[test]
fn test_filter_scenario() {
    let mut table = SelectableTable::new(item_columns(), abc());
    table.set_filter_text("B");
    let rows = table.sorted_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].code, "B");
    assert_eq!(rows[0].id(), "2");
}

#[test]
fn test_sort_toggle_scenario() {
    let mut table = SelectableTable::new(item_columns(), abc());
    table.toggle_sort("code");
    table.toggle_sort("code");
    let codes: Vec<&str> = table.sorted_rows().iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["C", "B", "A"]);
}

// ============================================================================
// Properties
// ============================================================================

fn many() -> Vec<Item> {
    items(&[
        ("Duroc", 110.0),
        ("landrace", 95.5),
        ("Pietrain", 101.0),
        ("Duroc", 87.0),
        ("Yorkshire", 120.0),
        ("hampshire", 99.0),
        ("LANDRACE", 130.0),
        ("Berkshire", 95.5),
        ("Duroc", 64.0),
    ])
}

#[test]
fn test_filtered_rows_contain_the_filter() {
    for filter in ["", "d", "LAND", "shire", "zzz"] {
        let mut table = SelectableTable::new(item_columns(), many());
        table.set_filter_text(filter);
        let needle = filter.to_lowercase();
        for row in table.sorted_rows() {
            assert!(row.code.to_lowercase().contains(&needle));
        }
        let expected = many()
            .iter()
            .filter(|r| r.code.to_lowercase().contains(&needle))
            .count();
        assert_eq!(table.filtered_count(), expected, "filter {:?}", filter);
    }
}

#[test]
fn test_sort_orders_adjacent_rows() {
    let mut table = SelectableTable::new(item_columns(), many());

    table.set_sort(Some(SortConfig::ascending("weight")));
    let rows = table.sorted_rows();
    assert!(rows.windows(2).all(|w| w[0].weight <= w[1].weight));

    table.set_sort(Some(SortConfig::descending("weight")));
    let rows = table.sorted_rows();
    assert!(rows.windows(2).all(|w| w[0].weight >= w[1].weight));
}

#[test]
fn test_sort_is_stable() {
    let mut table = SelectableTable::new(item_columns(), many());
    table.set_sort(Some(SortConfig::ascending("code")));
    let durocs: Vec<String> = table
        .sorted_rows()
        .iter()
        .filter(|r| r.code == "Duroc")
        .map(|r| r.id.clone())
        .collect();
    assert_eq!(durocs, vec!["1", "4", "9"]);

    table.set_sort(Some(SortConfig::descending("weight")));
    let ties: Vec<String> = table
        .sorted_rows()
        .iter()
        .filter(|r| r.weight.partial_cmp(&95.5) == Some(Ordering::Equal))
        .map(|r| r.id.clone())
        .collect();
    assert_eq!(ties, vec!["2", "8"]);
}

#[test]
fn test_text_sort_is_lexicographic() {
    let mut table = SelectableTable::new(item_columns(), many());
    table.set_sort(Some(SortConfig::ascending("code")));
    let first = table.sorted_rows()[0].code.clone();
    assert_eq!(first, "Berkshire");
    let last = table.sorted_rows().last().map(|r| r.code.clone()).unwrap();
    assert_eq!(last, "landrace");
}

#[test]
fn test_pages_reconstruct_the_view() {
    for rows_per_page in [1, 2, 4, 9, 20] {
        let mut table = SelectableTable::with_options(item_columns(), many(), multiple(rows_per_page));
        table.set_sort(Some(SortConfig::ascending("weight")));
        let expected = ids(&table.sorted_rows());

        let mut seen = Vec::new();
        for page in 1..=table.total_pages() {
            table.go_to_page(page);
            let rows = table.page_rows();
            let remaining = expected.len() - seen.len();
            assert_eq!(rows.len(), rows_per_page.min(remaining));
            seen.extend(ids(&rows));
        }
        assert_eq!(seen, expected);
        assert_eq!(table.total_pages(), expected.len().div_ceil(rows_per_page));
    }
}

#[test]
fn test_single_mode_never_holds_more_than_one() {
    let (mut table, calls) = recorded(many(), TableOptions::default());
    for id in ["1", "5", "5", "9", "2"] {
        table.toggle_row(id);
        assert!(table.selected_count() <= 1);
    }
    assert_eq!(table.selected_ids(), ["2"]);
    assert!(calls.borrow().iter().all(|c| c.len() == 1));
}

#[test]
fn test_select_all_twice_restores_state() {
    let (mut table, _) = recorded(many(), multiple(4));
    table.toggle_select_all();
    table.toggle_select_all();
    assert_eq!(table.selected_count(), 0);

    table.go_to_page(2);
    table.toggle_select_all();
    let page: Vec<String> = table.selected_ids().to_vec();
    table.toggle_select_all();
    table.toggle_select_all();
    assert_eq!(table.selected_ids(), page.as_slice());
}

#[test]
fn test_select_all_from_partial_page_fills_it() {
    let (mut table, _) = recorded(many(), multiple(4));
    table.toggle_row("2");
    table.toggle_select_all();
    assert!(table.is_page_selected());
    assert_eq!(table.selected_ids(), ["2", "1", "3", "4"]);
}

#[test]
fn test_selection_survives_filter_and_sort() {
    let (mut table, _) = recorded(many(), multiple(3));
    table.toggle_row("7");
    table.set_filter_text("duroc");
    table.set_sort(Some(SortConfig::descending("weight")));
    assert!(table.is_selected("7"));
    let selected: Vec<String> = table.selected_rows().into_iter().map(|r| r.id).collect();
    assert_eq!(selected, vec!["7"]);
}

#[test]
fn test_reset_trigger_change_clears() {
    let (mut table, calls) = recorded(many(), multiple(10));
    table.sync_reset_trigger("inventory-2024-05");
    table.toggle_row("1");
    table.toggle_row("2");
    table.sync_reset_trigger("inventory-2024-05");
    assert_eq!(table.selected_count(), 2);

    table.sync_reset_trigger("inventory-2024-06");
    assert_eq!(table.selected_count(), 0);
    assert_eq!(calls.borrow().last().unwrap(), &Vec::<String>::new());
}

#[test]
fn test_on_select_receives_rows_not_ids() {
    let received = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = std::rc::Rc::clone(&received);
    let mut table = SelectableTable::with_options(item_columns(), abc(), multiple(10))
        .on_select(move |rows: Vec<Item>| *sink.borrow_mut() = rows);
    table.toggle_row("2");
    assert_eq!(
        *received.borrow(),
        vec![Item {
            id: "2".to_string(),
            code: "B".to_string(),
            weight: 20.0
        }]
    );
}

#[test]
fn test_disabled_table_still_pages() {
    let options = TableOptions {
        disabled: true,
        ..multiple(2)
    };
    let (mut table, calls) = recorded(abc(), options);
    table.toggle_row("1");
    table.toggle_select_all();
    table.next_page();
    assert_eq!(ids(&table.page_rows()), vec!["3"]);
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_empty_data_set() {
    let (mut table, calls) = recorded(Vec::new(), multiple(10));
    assert_eq!(table.total_pages(), 0);
    assert!(table.page_rows().is_empty());
    table.next_page();
    assert_eq!(table.current_page(), 1);
    table.toggle_select_all();
    assert_eq!(table.selected_count(), 0);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn test_set_data_refilters() {
    let mut table = SelectableTable::with_options(item_columns(), abc(), multiple(10));
    table.set_filter_text("b");
    assert_eq!(table.filtered_count(), 1);
    table.set_data(items(&[("Boar", 1.0), ("bb", 2.0), ("Sow", 3.0)]));
    assert_eq!(table.filtered_count(), 2);
}

#[test]
fn test_numeric_filter_uses_number_text() {
    let columns = vec![pigpen::table::Column::new("Weight", "weight").filterable()];
    let mut table: SelectableTable<Item> = SelectableTable::new(columns, many());
    table.set_filter_text("95.5");
    assert_eq!(ids(&table.sorted_rows()), vec!["2", "8"]);
}
