//! Display helpers for furniture items and stored colours

use shared::FurnitureItem;

/// Display name for an item
pub fn item_display_name(item: &FurnitureItem) -> String {
    if item.name.trim().is_empty() {
        format!("{} ({})", item.kind, short_id(&item.id))
    } else {
        item.name.clone()
    }
}

/// Get shortened ID (first 8 characters)
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

/// Parse `#rgb` or `#rrggbb` into RGB bytes
pub fn parse_hex_color(s: &str) -> Option<[u8; 3]> {
    let hex = s.trim().strip_prefix('#')?;
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let byte = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
    Some([byte(0)?, byte(2)?, byte(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#f0ece3"), Some([0xf0, 0xec, 0xe3]));
        assert_eq!(parse_hex_color("#fff"), Some([255, 255, 255]));
        assert_eq!(parse_hex_color("f0ece3"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#12345"), None);
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id("0123456789"), "01234567");
    }

    #[test]
    fn test_display_name_falls_back_to_kind() {
        let mut item = crate::fixtures::item("0123456789", shared::FurnitureKind::Lamp, 0.0, 0.0);
        item.name = " ".into();
        assert_eq!(item_display_name(&item), "lamp (01234567)");
    }
}
