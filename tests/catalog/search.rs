use hikari::catalog::Catalog;

fn numbers(query: &str) -> Vec<u32> {
    let catalog = Catalog::bundled().unwrap();
    catalog.search(query).iter().map(|b| b.number).collect()
}

#[test]
fn blank_query_returns_whole_catalog_in_order() {
    let catalog = Catalog::bundled().unwrap();
    let all: Vec<u32> = catalog.bottles().iter().map(|b| b.number).collect();
    assert_eq!(numbers(""), all);
    assert_eq!(numbers("   "), all);
}

#[test]
fn tag_and_name_matching_ignores_case() {
    assert_eq!(numbers("ANGEL"), vec![94, 95, 96]);
    assert_eq!(numbers("rescue"), vec![0, 1, 20, 26]);
    assert_eq!(numbers("new age"), vec![12, 13]);
}

#[test]
fn number_queries_match_exactly() {
    assert_eq!(numbers("5"), vec![5]);
    assert_eq!(numbers("B5"), vec![5]);
    assert_eq!(numbers("b30"), vec![30]);
    assert!(numbers("77").is_empty());
}

#[test]
fn unmatched_substring_is_empty() {
    assert!(numbers("zzz-no-such-bottle").is_empty());
}

#[test]
fn bundled_catalog_is_sorted_and_unique() {
    let catalog = Catalog::bundled().unwrap();
    let numbers: Vec<u32> = catalog.bottles().iter().map(|b| b.number).collect();
    let mut sorted = numbers.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(numbers, sorted);
}
