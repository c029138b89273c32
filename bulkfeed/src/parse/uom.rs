//! Unit-of-measure resolution for the product master feed.

/// Resolves the base unit of measure from a pipe-separated priority list and
/// the five raw unit tokens of a product row.
///
/// The first priority token present among the units wins, with its position.
/// When no priority token matches, the last non-empty unit token is returned
/// with its index. With no units at all the result is `("", -1)`.
pub fn resolve_uom(uom_main: &str, conv_units: &[&str]) -> (String, i32) {
    let mut positions: Vec<(&str, i32)> = Vec::with_capacity(conv_units.len());
    let mut last_valid = "";
    let mut last_index = -1i32;

    for (i, unit) in conv_units.iter().enumerate() {
        let unit = unit.trim();
        if unit.is_empty() {
            continue;
        }
        if !positions.iter().any(|(u, _)| *u == unit) {
            positions.push((unit, i as i32));
        }
        last_valid = unit;
        last_index = i as i32;
    }

    for priority in uom_main.split('|') {
        let priority = priority.trim();
        if priority.is_empty() {
            continue;
        }
        if let Some((unit, idx)) = positions.iter().find(|(u, _)| *u == priority) {
            return (unit.to_string(), *idx);
        }
    }

    (last_valid.to_string(), last_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_priority_match_wins() {
        let (uom, idx) = resolve_uom("KG|PCS|CTN", &["PCS", "CTN", "KG", "", ""]);
        assert_eq!(uom, "KG");
        assert_eq!(idx, 2);
    }

    #[test]
    fn falls_back_to_last_non_empty_unit() {
        let (uom, idx) = resolve_uom("DRUM", &["PCS", "CTN", "KG", "", ""]);
        assert_eq!(uom, "KG");
        assert_eq!(idx, 2);
    }

    #[test]
    fn duplicate_units_keep_first_position() {
        let (uom, idx) = resolve_uom("PCS", &["PCS", "PCS", "", "", ""]);
        assert_eq!(uom, "PCS");
        assert_eq!(idx, 0);
    }

    #[test]
    fn empty_units_yield_sentinel() {
        let (uom, idx) = resolve_uom("KG", &["", "", "", "", ""]);
        assert_eq!(uom, "");
        assert_eq!(idx, -1);
    }
}
