use super::BottleRecord;

/// Filter the catalog by a free-text query, preserving catalog order.
///
/// - blank query: every bottle
/// - `5` / `B5` / `b5`: the bottle whose id or number is 5 (not 15 or 50),
///   plus any bottle whose name or tags contain the query
/// - anything else: case-insensitive substring of the name, the id, or any tag
pub fn filter<'a>(bottles: &'a [BottleRecord], query: &str) -> Vec<&'a BottleRecord> {
    let query = query.trim();
    if query.is_empty() {
        return bottles.iter().collect();
    }

    let needle = query.to_lowercase();
    match parse_number_query(query) {
        Some(digits) => bottles
            .iter()
            .filter(|b| matches_number(b, digits) || matches_text(b, &needle))
            .collect(),
        None => bottles
            .iter()
            .filter(|b| matches_text(b, &needle) || b.id.to_lowercase().contains(&needle))
            .collect(),
    }
}

/// The digits of `5`, `B5` or `b5`; `None` for anything else.
fn parse_number_query(query: &str) -> Option<&str> {
    let digits = query.strip_prefix(['b', 'B']).unwrap_or(query);
    (!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())).then_some(digits)
}

fn matches_number(bottle: &BottleRecord, digits: &str) -> bool {
    bottle.id == digits || digits.parse::<u32>().is_ok_and(|n| n == bottle.number)
}

fn matches_text(bottle: &BottleRecord, needle: &str) -> bool {
    bottle.name.to_lowercase().contains(needle)
        || bottle
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ColorPair, Swatch};

    fn bottle(number: u32, name: &str, tags: &[&str]) -> BottleRecord {
        let swatch = Swatch {
            hex: "#ffffff".into(),
            label: "透明".into(),
        };
        BottleRecord {
            id: number.to_string(),
            number,
            name: name.into(),
            colors: ColorPair {
                top: swatch.clone(),
                bottom: swatch,
            },
            theme: String::new(),
            affirmation: String::new(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            extended: None,
        }
    }

    fn sample() -> Vec<BottleRecord> {
        vec![
            bottle(1, "Physical Rescue", &["Rescue"]),
            bottle(5, "Sunrise / Sunset", &[]),
            bottle(15, "Healing Bottle", &[]),
            bottle(50, "El Morya", &["Master"]),
            bottle(94, "Archangel Michael", &["Angelic", "Archangel"]),
        ]
    }

    fn numbers(found: &[&BottleRecord]) -> Vec<u32> {
        found.iter().map(|b| b.number).collect()
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let bottles = sample();
        assert_eq!(numbers(&filter(&bottles, "")), vec![1, 5, 15, 50, 94]);
        assert_eq!(numbers(&filter(&bottles, "   ")), vec![1, 5, 15, 50, 94]);
    }

    #[test]
    fn exact_number_returns_only_that_bottle() {
        let bottles = sample();
        assert_eq!(numbers(&filter(&bottles, "5")), vec![5]);
        assert_eq!(numbers(&filter(&bottles, "B5")), vec![5]);
        assert_eq!(numbers(&filter(&bottles, "b50")), vec![50]);
        assert!(filter(&bottles, "7").is_empty());
    }

    #[test]
    fn tag_match_is_case_insensitive() {
        let bottles = sample();
        assert_eq!(numbers(&filter(&bottles, "ANGEL")), vec![94]);
        assert_eq!(numbers(&filter(&bottles, "rescue")), vec![1]);
    }

    #[test]
    fn name_match_is_substring() {
        let bottles = sample();
        assert_eq!(numbers(&filter(&bottles, "sun")), vec![5]);
        assert_eq!(numbers(&filter(&bottles, "e")), vec![1, 5, 15, 50, 94]);
    }

    #[test]
    fn unmatched_query_is_empty() {
        let bottles = sample();
        assert!(filter(&bottles, "zzz-not-a-bottle").is_empty());
    }

    #[test]
    fn numeric_query_also_matches_digits_in_names_and_tags() {
        let bottles = vec![
            bottle(2, "Peace", &["Communication"]),
            bottle(20, "Star Child 2", &["2024 Edition"]),
            bottle(24, "New Message", &[]),
        ];
        assert_eq!(numbers(&filter(&bottles, "2024")), vec![20]);
        assert_eq!(numbers(&filter(&bottles, "2")), vec![2, 20]);
        assert_eq!(numbers(&filter(&bottles, "B2")), vec![2]);
    }

    #[test]
    fn numeric_query_matches_id_exactly() {
        let mut custom = bottle(108, "Custom", &[]);
        custom.id = "7".into();
        let bottles = vec![custom, bottle(17, "Other", &[])];
        assert_eq!(numbers(&filter(&bottles, "7")), vec![108]);
        assert_eq!(numbers(&filter(&bottles, "108")), vec![108]);
    }

    #[test]
    fn lone_prefix_is_a_text_query() {
        let bottles = sample();
        assert_eq!(numbers(&filter(&bottles, "b")), vec![15]);
    }
}
