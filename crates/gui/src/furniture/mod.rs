//! Per-kind furniture styles.
//!
//! Each furniture kind has one entry here holding its floor-plan glyph, its
//! 3D volume composition and its plan draw order. Both views look styles up
//! through [`style`], so adding a kind means adding one entry.

pub mod glyphs;
pub mod volumes;

use shared::{Dimensions, FurnitureItem, FurnitureKind};

pub use glyphs::{GlyphFill, GlyphPrimitive, GlyphShape};
pub use volumes::{VolumePart, VolumeShape, VolumeTone};

/// Rendering strategy for one furniture kind
pub struct FurnitureStyle {
    /// Floor-plan glyph in item-local meters
    pub glyph: fn(&Dimensions) -> Vec<GlyphPrimitive>,
    /// 3D parts in item-local meters, base on the floor
    pub volume: fn(&Dimensions) -> Vec<VolumePart>,
    /// Plan paint order, lower first
    pub draw_order: u8,
}

static CHAIR: FurnitureStyle = FurnitureStyle {
    glyph: glyphs::chair,
    volume: volumes::chair,
    draw_order: 4,
};
static TABLE: FurnitureStyle = FurnitureStyle {
    glyph: glyphs::table,
    volume: volumes::table,
    draw_order: 1,
};
static SOFA: FurnitureStyle = FurnitureStyle {
    glyph: glyphs::sofa,
    volume: volumes::sofa,
    draw_order: 3,
};
static STORAGE: FurnitureStyle = FurnitureStyle {
    glyph: glyphs::storage,
    volume: volumes::storage,
    draw_order: 2,
};
static LAMP: FurnitureStyle = FurnitureStyle {
    glyph: glyphs::lamp,
    volume: volumes::lamp,
    draw_order: 5,
};
static DECOR: FurnitureStyle = FurnitureStyle {
    glyph: glyphs::decor,
    volume: volumes::decor,
    draw_order: 6,
};
static FALLBACK: FurnitureStyle = FurnitureStyle {
    glyph: glyphs::fallback,
    volume: volumes::fallback,
    draw_order: 99,
};

/// Style for a kind; unknown kinds get a plain box
pub fn style(kind: &FurnitureKind) -> &'static FurnitureStyle {
    match kind {
        FurnitureKind::Chair => &CHAIR,
        FurnitureKind::Table => &TABLE,
        FurnitureKind::Sofa => &SOFA,
        FurnitureKind::Storage => &STORAGE,
        FurnitureKind::Lamp => &LAMP,
        FurnitureKind::Decor => &DECOR,
        FurnitureKind::Other(_) => &FALLBACK,
    }
}

/// Items in plan paint order. The sort is stable, so insertion order still
/// decides between items of the same kind.
pub fn plan_draw_order(items: &[FurnitureItem]) -> Vec<&FurnitureItem> {
    let mut sorted: Vec<&FurnitureItem> = items.iter().collect();
    sorted.sort_by_key(|item| style(&item.kind).draw_order);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::item;

    #[test]
    fn test_every_builtin_kind_has_distinct_style() {
        let orders: Vec<u8> = FurnitureKind::BUILTIN.iter().map(|k| style(k).draw_order).collect();
        let mut unique = orders.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), orders.len());
        assert!(orders.iter().all(|o| *o < 99));
    }

    #[test]
    fn test_unknown_kind_falls_back() {
        let s = style(&FurnitureKind::Other("piano".into()));
        assert_eq!(s.draw_order, 99);
        let parts = (s.volume)(&Dimensions::new(1.0, 2.0, 3.0));
        assert_eq!(parts.len(), 1);
    }

    #[test]
    fn test_plan_draw_order() {
        let items = vec![
            item("c1", FurnitureKind::Chair, 0.0, 0.0),
            item("x", FurnitureKind::Other("bed".into()), 0.0, 0.0),
            item("t", FurnitureKind::Table, 0.0, 0.0),
            item("c2", FurnitureKind::Chair, 0.0, 0.0),
            item("l", FurnitureKind::Lamp, 0.0, 0.0),
        ];
        let ids: Vec<&str> = plan_draw_order(&items).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["t", "c1", "c2", "l", "x"]);
    }

    #[test]
    fn test_glyphs_and_volumes_non_empty() {
        let dims = Dimensions::new(1.2, 0.8, 0.9);
        for kind in FurnitureKind::BUILTIN.iter() {
            let s = style(kind);
            assert!(!(s.glyph)(&dims).is_empty(), "{kind} glyph");
            assert!((s.volume)(&dims).len() > 1, "{kind} volume");
        }
    }
}
