//! Data model shared by the editor library, the GUI binary and the design
//! store. Everything here is plain serde data; behaviour lives in the gui
//! crate.

mod numeric;

pub use numeric::parse_numeric;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque furniture identifier, stable for the item's lifetime
pub type FurnitureId = String;

/// Opaque design identifier used as the store key
pub type DesignId = String;

/// Room extents in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    /// Along the x axis
    pub length: f64,
    /// Along the z axis
    pub width: f64,
    pub height: f64,
}

impl RoomDimensions {
    /// Smallest accepted extent on any axis
    pub const MIN: f64 = 0.1;

    /// Build dimensions, flooring every axis at [`Self::MIN`].
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
        .clamped()
    }

    /// Copy with every axis floored at [`Self::MIN`]. NaN collapses to the floor.
    pub fn clamped(self) -> Self {
        Self {
            length: floor_dimension(self.length),
            width: floor_dimension(self.width),
            height: floor_dimension(self.height),
        }
    }

    /// Longer of the two horizontal extents
    pub fn max_horizontal(&self) -> f64 {
        self.length.max(self.width)
    }
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self {
            length: 6.5,
            width: 4.2,
            height: 2.8,
        }
    }
}

fn floor_dimension(v: f64) -> f64 {
    if v.is_nan() {
        RoomDimensions::MIN
    } else {
        v.max(RoomDimensions::MIN)
    }
}

/// Outline family of the room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomShape {
    #[default]
    Rectangular,
    LShaped,
    /// Approximated by a regular octagon
    Custom,
}

impl RoomShape {
    pub const ALL: [RoomShape; 3] = [RoomShape::Rectangular, RoomShape::LShaped, RoomShape::Custom];

    pub fn label(&self) -> &'static str {
        match self {
            RoomShape::Rectangular => "Rectangular",
            RoomShape::LShaped => "L-shaped",
            RoomShape::Custom => "Custom",
        }
    }
}

/// Floor surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloorType {
    #[default]
    Hardwood,
    Carpet,
    Tile,
    Laminate,
    Concrete,
    Marble,
}

impl FloorType {
    pub const ALL: [FloorType; 6] = [
        FloorType::Hardwood,
        FloorType::Carpet,
        FloorType::Tile,
        FloorType::Laminate,
        FloorType::Concrete,
        FloorType::Marble,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FloorType::Hardwood => "Hardwood",
            FloorType::Carpet => "Carpet",
            FloorType::Tile => "Tile",
            FloorType::Laminate => "Laminate",
            FloorType::Concrete => "Concrete",
            FloorType::Marble => "Marble",
        }
    }
}

/// Wall/floor colours and floor surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub wall_color: String,
    pub floor_color: String,
    pub floor_type: FloorType,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            wall_color: "#f0ece3".to_string(),
            floor_color: "#b5a898".to_string(),
            floor_type: FloorType::Hardwood,
        }
    }
}

/// Furniture kind; selects the procedural glyph and volume used by both views.
/// Unknown kinds survive a load/save cycle and render as a plain box.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FurnitureKind {
    Chair,
    Table,
    Sofa,
    Storage,
    Lamp,
    Decor,
    Other(String),
}

impl FurnitureKind {
    /// Kinds with a dedicated glyph/volume
    pub const BUILTIN: [FurnitureKind; 6] = [
        FurnitureKind::Chair,
        FurnitureKind::Table,
        FurnitureKind::Sofa,
        FurnitureKind::Storage,
        FurnitureKind::Lamp,
        FurnitureKind::Decor,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            FurnitureKind::Chair => "chair",
            FurnitureKind::Table => "table",
            FurnitureKind::Sofa => "sofa",
            FurnitureKind::Storage => "storage",
            FurnitureKind::Lamp => "lamp",
            FurnitureKind::Decor => "decor",
            FurnitureKind::Other(s) => s,
        }
    }
}

impl From<String> for FurnitureKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "chair" => FurnitureKind::Chair,
            "table" => FurnitureKind::Table,
            "sofa" => FurnitureKind::Sofa,
            "storage" => FurnitureKind::Storage,
            "lamp" => FurnitureKind::Lamp,
            "decor" => FurnitureKind::Decor,
            _ => FurnitureKind::Other(s),
        }
    }
}

impl From<&str> for FurnitureKind {
    fn from(s: &str) -> Self {
        FurnitureKind::from(s.to_string())
    }
}

impl From<FurnitureKind> for String {
    fn from(kind: FurnitureKind) -> Self {
        match kind {
            FurnitureKind::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for FurnitureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 3-vector in room-centered world coordinates (x along length, z along width, y up)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Point on the floor plane
    pub fn on_floor(x: f64, z: f64) -> Self {
        Self { x, y: 0.0, z }
    }
}

/// Item extents in meters, independent per axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Along the item's local x axis
    pub width: f64,
    /// Along the item's local z axis
    pub depth: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// Multiply every axis by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            depth: self.depth * factor,
            height: self.height * factor,
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

/// A placed piece of furniture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    pub id: FurnitureId,
    #[serde(rename = "type")]
    pub kind: FurnitureKind,
    pub name: String,
    pub position: Vec3,
    pub dimensions: Dimensions,
    /// Degrees; only `y` (yaw) is edited interactively
    #[serde(default)]
    pub rotation: Vec3,
    pub color: String,
    #[serde(default)]
    pub material: String,
}

impl FurnitureItem {
    /// Yaw in degrees
    pub fn yaw(&self) -> f64 {
        self.rotation.y
    }
}

/// Partial update merged into a [`FurnitureItem`]; `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FurniturePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
}

impl FurniturePatch {
    pub fn position(position: Vec3) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    pub fn dimensions(dimensions: Dimensions) -> Self {
        Self {
            dimensions: Some(dimensions),
            ..Default::default()
        }
    }

    pub fn rotation(rotation: Vec3) -> Self {
        Self {
            rotation: Some(rotation),
            ..Default::default()
        }
    }

    /// Shallow merge into `item`
    pub fn apply_to(&self, item: &mut FurnitureItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(position) = self.position {
            item.position = position;
        }
        if let Some(dimensions) = self.dimensions {
            item.dimensions = dimensions;
        }
        if let Some(rotation) = self.rotation {
            item.rotation = rotation;
        }
        if let Some(color) = &self.color {
            item.color = color.clone();
        }
        if let Some(material) = &self.material {
            item.material = material.clone();
        }
    }
}

/// Which view is authoritative for input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[serde(rename = "2d")]
    TwoD,
    #[default]
    #[serde(rename = "3d")]
    ThreeD,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::TwoD => "2D",
            ViewMode::ThreeD => "3D",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::TwoD => ViewMode::ThreeD,
            ViewMode::ThreeD => ViewMode::TwoD,
        }
    }
}

/// Horizontal pan descriptor
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

/// Logical pan/zoom/orbit descriptor shared between the views
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub position: PlanarPoint,
    pub scale: f64,
    /// Degrees
    pub rotation: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            position: PlanarPoint::default(),
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

/// Partial [`ViewTransform`] pushed by one of the views
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewTransformPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PlanarPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

/// Whole-design snapshot exchanged with the design store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSnapshot {
    pub id: DesignId,
    pub name: String,
    pub room_dimensions: RoomDimensions,
    pub wall_color: String,
    pub floor_color: String,
    pub floor_type: FloorType,
    pub room_shape: RoomShape,
    pub furniture_items: Vec<FurnitureItem>,
    pub last_edited: DateTime<Utc>,
    /// Path of a thumbnail image, empty when none was captured
    #[serde(default)]
    pub thumbnail: String,
}

impl DesignSnapshot {
    pub fn appearance(&self) -> Appearance {
        Appearance {
            wall_color: self.wall_color.clone(),
            floor_color: self.floor_color.clone(),
            floor_type: self.floor_type,
        }
    }
}
