//! Built-in furniture and room templates

use shared::{Dimensions, FloorType, FurnitureId, FurnitureItem, FurnitureKind, RoomDimensions, RoomShape, Vec3};

/// Catalog grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sofas,
    Chairs,
    Tables,
    Storage,
    Lighting,
    Decor,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Sofas,
        Category::Chairs,
        Category::Tables,
        Category::Storage,
        Category::Lighting,
        Category::Decor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Sofas => "Sofas & Couches",
            Category::Chairs => "Chairs & Seating",
            Category::Tables => "Tables",
            Category::Storage => "Storage",
            Category::Lighting => "Lighting",
            Category::Decor => "Decor",
        }
    }
}

/// Furniture template that can be instantiated into the room
#[derive(Debug, Clone)]
pub struct FurnitureTemplate {
    pub name: &'static str,
    pub category: Category,
    pub kind: FurnitureKind,
    pub color: &'static str,
    pub material: &'static str,
    pub dimensions: Dimensions,
}

impl FurnitureTemplate {
    /// Create a placed item with a fresh id at `position`
    pub fn instantiate(&self, position: Vec3) -> FurnitureItem {
        FurnitureItem {
            id: new_item_id(),
            kind: self.kind.clone(),
            name: self.name.to_string(),
            position,
            dimensions: self.dimensions,
            rotation: Vec3::ZERO,
            color: self.color.to_string(),
            material: self.material.to_string(),
        }
    }
}

const fn dims(width: f64, depth: f64, height: f64) -> Dimensions {
    Dimensions {
        width,
        depth,
        height,
    }
}

static FURNITURE: [FurnitureTemplate; 9] = [
    FurnitureTemplate {
        name: "Modern Sectional Sofa",
        category: Category::Sofas,
        kind: FurnitureKind::Sofa,
        color: "#7a8c98",
        material: "fabric",
        dimensions: dims(2.8, 1.7, 0.8),
    },
    FurnitureTemplate {
        name: "Minimalist Loveseat",
        category: Category::Sofas,
        kind: FurnitureKind::Sofa,
        color: "#a89b8c",
        material: "fabric",
        dimensions: dims(1.8, 0.9, 0.75),
    },
    FurnitureTemplate {
        name: "Ergonomic Armchair",
        category: Category::Chairs,
        kind: FurnitureKind::Chair,
        color: "#d2c8b4",
        material: "fabric",
        dimensions: dims(0.8, 0.85, 1.0),
    },
    FurnitureTemplate {
        name: "Dining Chair",
        category: Category::Chairs,
        kind: FurnitureKind::Chair,
        color: "#8a7f72",
        material: "wood",
        dimensions: dims(0.5, 0.55, 0.9),
    },
    FurnitureTemplate {
        name: "Coffee Table",
        category: Category::Tables,
        kind: FurnitureKind::Table,
        color: "#9c8c7c",
        material: "wood",
        dimensions: dims(1.2, 0.6, 0.45),
    },
    FurnitureTemplate {
        name: "Dining Table",
        category: Category::Tables,
        kind: FurnitureKind::Table,
        color: "#b5a898",
        material: "wood",
        dimensions: dims(1.8, 0.9, 0.75),
    },
    FurnitureTemplate {
        name: "Bookshelf",
        category: Category::Storage,
        kind: FurnitureKind::Storage,
        color: "#8a7f72",
        material: "wood",
        dimensions: dims(1.2, 0.4, 1.8),
    },
    FurnitureTemplate {
        name: "Floor Lamp",
        category: Category::Lighting,
        kind: FurnitureKind::Lamp,
        color: "#6c7c74",
        material: "metal",
        dimensions: dims(0.4, 0.4, 1.6),
    },
    FurnitureTemplate {
        name: "Potted Plant",
        category: Category::Decor,
        kind: FurnitureKind::Decor,
        color: "#5b6057",
        material: "ceramic",
        dimensions: dims(0.5, 0.5, 1.1),
    },
];

/// Every furniture template
pub fn furniture_templates() -> &'static [FurnitureTemplate] {
    &FURNITURE
}

/// Templates matching a category (if any) and a case-insensitive name query
pub fn search(category: Option<Category>, query: &str) -> Vec<&'static FurnitureTemplate> {
    let query = query.trim().to_lowercase();
    FURNITURE
        .iter()
        .filter(|t| category.is_none_or(|c| t.category == c))
        .filter(|t| query.is_empty() || t.name.to_lowercase().contains(&query))
        .collect()
}

/// Fresh unique item id
pub fn new_item_id() -> FurnitureId {
    format!("furniture-{}", uuid::Uuid::new_v4())
}

/// Default colour for quick-added items of `kind`
pub fn default_color(kind: &FurnitureKind) -> &'static str {
    match kind {
        FurnitureKind::Sofa => "#7a8c98",
        FurnitureKind::Chair => "#a89b8c",
        FurnitureKind::Table => "#9c8c7c",
        _ => "#8a7f72",
    }
}

/// Generic 1×1×1 item of `kind` at the room centre
pub fn quick_item(kind: FurnitureKind) -> FurnitureItem {
    FurnitureItem {
        id: new_item_id(),
        name: format!("New {kind}"),
        color: default_color(&kind).to_string(),
        kind,
        position: Vec3::ZERO,
        dimensions: Dimensions::default(),
        rotation: Vec3::ZERO,
        material: "fabric".to_string(),
    }
}

/// Predefined room
#[derive(Debug, Clone)]
pub struct RoomTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub dimensions: RoomDimensions,
    pub floor_type: FloorType,
    pub shape: RoomShape,
}

const fn room(
    id: &'static str,
    name: &'static str,
    length: f64,
    width: f64,
    height: f64,
    floor_type: FloorType,
    shape: RoomShape,
) -> RoomTemplate {
    RoomTemplate {
        id,
        name,
        dimensions: RoomDimensions {
            length,
            width,
            height,
        },
        floor_type,
        shape,
    }
}

static ROOMS: [RoomTemplate; 8] = [
    room("living-room", "Living Room", 5.5, 4.2, 2.8, FloorType::Hardwood, RoomShape::Rectangular),
    room("bedroom", "Bedroom", 4.8, 3.6, 2.6, FloorType::Carpet, RoomShape::Rectangular),
    room("kitchen", "Kitchen", 4.2, 3.8, 2.7, FloorType::Tile, RoomShape::Rectangular),
    room("bathroom", "Bathroom", 3.0, 2.5, 2.4, FloorType::Tile, RoomShape::Rectangular),
    room("dining-room", "Dining Room", 4.5, 3.8, 2.7, FloorType::Hardwood, RoomShape::Rectangular),
    room("office", "Home Office", 3.6, 3.0, 2.6, FloorType::Laminate, RoomShape::Rectangular),
    room("l-shaped-living", "L-Shaped Living", 6.0, 5.0, 2.8, FloorType::Hardwood, RoomShape::LShaped),
    room("custom-room", "Custom Room", 5.0, 4.0, 2.7, FloorType::Hardwood, RoomShape::Custom),
];

pub fn room_templates() -> &'static [RoomTemplate] {
    &ROOMS
}

pub fn room_template(id: &str) -> Option<&'static RoomTemplate> {
    ROOMS.iter().find(|r| r.id == id)
}

/// One piece of a recommendation set
#[derive(Debug, Clone)]
pub struct RecommendedItem {
    pub name: &'static str,
    pub kind: FurnitureKind,
    pub color: &'static str,
    pub material: &'static str,
    pub dimensions: Dimensions,
}

/// Curated group of items placed together
#[derive(Debug, Clone)]
pub struct RecommendationSet {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub items: &'static [RecommendedItem],
}

impl RecommendationSet {
    /// Items with fresh ids, fanned out around the room centre. Positions are
    /// not clamped here.
    pub fn instantiate(&self) -> Vec<FurnitureItem> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, rec)| {
                let i = index as f64;
                let sx = if index % 2 == 0 { -1.0 } else { 1.0 };
                let sz = if index % 3 == 0 { -1.0 } else { 1.0 };
                FurnitureItem {
                    id: new_item_id(),
                    kind: rec.kind.clone(),
                    name: rec.name.to_string(),
                    position: Vec3::new(sx * i * 0.5, 0.0, sz * i * 0.3),
                    dimensions: rec.dimensions,
                    rotation: Vec3::ZERO,
                    color: rec.color.to_string(),
                    material: rec.material.to_string(),
                }
            })
            .collect()
    }
}

const fn rec(
    name: &'static str,
    kind: FurnitureKind,
    color: &'static str,
    material: &'static str,
    dimensions: Dimensions,
) -> RecommendedItem {
    RecommendedItem {
        name,
        kind,
        color,
        material,
        dimensions,
    }
}

static MODERN_LIVING: [RecommendedItem; 4] = [
    rec("Modern Sectional Sofa", FurnitureKind::Sofa, "#7a8c98", "fabric", dims(2.8, 1.7, 0.8)),
    rec("Glass Coffee Table", FurnitureKind::Table, "#9c8c7c", "glass", dims(1.2, 0.6, 0.45)),
    rec("Accent Chair", FurnitureKind::Chair, "#a89b8c", "fabric", dims(0.8, 0.85, 1.0)),
    rec("Floor Lamp", FurnitureKind::Lamp, "#6c7c74", "metal", dims(0.4, 0.4, 1.6)),
];

static COZY_TRADITIONAL: [RecommendedItem; 4] = [
    rec("Traditional Sofa", FurnitureKind::Sofa, "#a89b8c", "fabric", dims(2.5, 1.5, 0.9)),
    rec("Wooden Coffee Table", FurnitureKind::Table, "#9c8c7c", "wood", dims(1.3, 0.7, 0.5)),
    rec("Wingback Chair", FurnitureKind::Chair, "#8a7f72", "fabric", dims(0.9, 0.8, 1.1)),
    rec("Bookshelf", FurnitureKind::Storage, "#9c8c7c", "wood", dims(1.2, 0.4, 1.8)),
];

static MINIMALIST: [RecommendedItem; 3] = [
    rec("Minimalist Sofa", FurnitureKind::Sofa, "#7a8c98", "fabric", dims(2.2, 1.0, 0.7)),
    rec("Simple Coffee Table", FurnitureKind::Table, "#6c7c74", "wood", dims(1.0, 0.6, 0.4)),
    rec("Minimalist Chair", FurnitureKind::Chair, "#d2c8b4", "fabric", dims(0.7, 0.7, 0.8)),
];

static RECOMMENDATIONS: [RecommendationSet; 3] = [
    RecommendationSet {
        id: "modern-living",
        name: "Modern Living Room",
        description: "Clean lines and contemporary style for a modern living space",
        items: &MODERN_LIVING,
    },
    RecommendationSet {
        id: "cozy-traditional",
        name: "Cozy Traditional",
        description: "Warm and inviting traditional furniture arrangement",
        items: &COZY_TRADITIONAL,
    },
    RecommendationSet {
        id: "minimalist",
        name: "Minimalist Design",
        description: "Simple, clean, and uncluttered furniture selection",
        items: &MINIMALIST,
    },
];

pub fn recommendation_sets() -> &'static [RecommendationSet] {
    &RECOMMENDATIONS
}

pub fn recommendation_set(id: &str) -> Option<&'static RecommendationSet> {
    RECOMMENDATIONS.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantiate_gives_unique_ids() {
        let t = &furniture_templates()[0];
        let a = t.instantiate(Vec3::ZERO);
        let b = t.instantiate(Vec3::ZERO);
        assert_ne!(a.id, b.id);
        assert_eq!(a.kind, FurnitureKind::Sofa);
        assert_eq!(a.dimensions, dims(2.8, 1.7, 0.8));
        assert_eq!(a.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_search() {
        assert_eq!(search(Some(Category::Tables), "").len(), 2);
        let hits = search(None, "LAMP");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, FurnitureKind::Lamp);
        assert!(search(Some(Category::Sofas), "lamp").is_empty());
    }

    #[test]
    fn test_quick_item() {
        let item = quick_item(FurnitureKind::Chair);
        assert_eq!(item.name, "New chair");
        assert_eq!(item.color, "#a89b8c");
        assert_eq!(item.material, "fabric");
        assert_eq!(item.dimensions, Dimensions::new(1.0, 1.0, 1.0));
        assert!(item.id.starts_with("furniture-"));
    }

    #[test]
    fn test_room_templates() {
        assert_eq!(room_templates().len(), 8);
        let l = room_template("l-shaped-living").unwrap();
        assert_eq!(l.shape, RoomShape::LShaped);
        assert_eq!(l.dimensions.width, 5.0);
        assert!(room_template("garage").is_none());
    }

    #[test]
    fn test_recommendation_spread() {
        assert_eq!(recommendation_sets().len(), 3);
        let set = recommendation_set("modern-living").unwrap();
        let items = set.instantiate();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].position, Vec3::ZERO);
        assert_eq!(items[1].position, Vec3::new(0.5, 0.0, 0.3));
        assert_eq!(items[2].position, Vec3::new(-1.0, 0.0, 0.6));
        assert_eq!(items[3].position.x, 1.5);
        assert!((items[3].position.z + 0.9).abs() < 1e-12);
        assert_eq!(items[3].kind, FurnitureKind::Lamp);
        assert_eq!(items[1].material, "glass");
        assert_ne!(items[0].id, items[1].id);
        assert!(recommendation_set("baroque").is_none());
    }
}
