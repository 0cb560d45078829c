//! Named visibility groups consulted by both renderers

use serde::{Deserialize, Serialize};
use shared::FurnitureKind;

pub const WALLS_FLOOR: &str = "walls-floor";
pub const FURNITURE: &str = "furniture";
pub const LIGHTING: &str = "lighting";
pub const DECOR: &str = "decor";
pub const MEASUREMENTS: &str = "measurements";

/// A toggleable visibility group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: String,
    pub name: String,
    pub visible: bool,
}

impl Layer {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            visible: true,
        }
    }
}

/// Ordered set of layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSet {
    layers: Vec<Layer>,
}

impl Default for LayerSet {
    fn default() -> Self {
        Self {
            layers: vec![
                Layer::new(WALLS_FLOOR, "Walls & Floor"),
                Layer::new(FURNITURE, "Furniture"),
                Layer::new(LIGHTING, "Lighting"),
                Layer::new(DECOR, "Decor"),
                Layer::new(MEASUREMENTS, "Measurements"),
            ],
        }
    }
}

impl LayerSet {
    pub fn all(&self) -> &[Layer] {
        &self.layers
    }

    /// Unknown ids count as visible
    pub fn is_visible(&self, id: &str) -> bool {
        self.layers
            .iter()
            .find(|l| l.id == id)
            .map(|l| l.visible)
            .unwrap_or(true)
    }

    pub fn toggle(&mut self, id: &str) {
        if let Some(layer) = self.layers.iter_mut().find(|l| l.id == id) {
            layer.visible = !layer.visible;
        }
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(layer) = self.layers.iter_mut().find(|l| l.id == id) {
            layer.visible = visible;
        }
    }

    /// Add a layer named `name`; returns its id, or `None` when the name is
    /// blank or the derived id already exists.
    pub fn add(&mut self, name: &str) -> Option<String> {
        let id = name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");
        if id.is_empty() || self.layers.iter().any(|l| l.id == id) {
            return None;
        }
        self.layers.push(Layer::new(&id, name.trim()));
        Some(id)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.layers.len();
        self.layers.retain(|l| l.id != id);
        self.layers.len() != before
    }

    /// Whether an item of `kind` should be drawn
    pub fn shows_kind(&self, kind: &FurnitureKind) -> bool {
        if !self.is_visible(FURNITURE) {
            return false;
        }
        match kind {
            FurnitureKind::Lamp => self.is_visible(LIGHTING),
            FurnitureKind::Decor => self.is_visible(DECOR),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layers_visible() {
        let layers = LayerSet::default();
        assert_eq!(layers.all().len(), 5);
        assert!(layers.all().iter().all(|l| l.visible));
    }

    #[test]
    fn test_toggle() {
        let mut layers = LayerSet::default();
        layers.toggle(MEASUREMENTS);
        assert!(!layers.is_visible(MEASUREMENTS));
        layers.toggle(MEASUREMENTS);
        assert!(layers.is_visible(MEASUREMENTS));
    }

    #[test]
    fn test_unknown_is_visible() {
        let layers = LayerSet::default();
        assert!(layers.is_visible("nope"));
    }

    #[test]
    fn test_add_and_remove() {
        let mut layers = LayerSet::default();
        assert_eq!(layers.add("Kids Stuff").as_deref(), Some("kids-stuff"));
        assert_eq!(layers.add("kids  stuff"), None);
        assert_eq!(layers.add("   "), None);
        assert!(layers.remove("kids-stuff"));
        assert!(!layers.remove("kids-stuff"));
    }

    #[test]
    fn test_kind_gating() {
        let mut layers = LayerSet::default();
        layers.set_visible(LIGHTING, false);
        assert!(!layers.shows_kind(&FurnitureKind::Lamp));
        assert!(layers.shows_kind(&FurnitureKind::Sofa));
        layers.set_visible(FURNITURE, false);
        assert!(!layers.shows_kind(&FurnitureKind::Sofa));
        assert!(!layers.shows_kind(&FurnitureKind::Decor));
    }
}
