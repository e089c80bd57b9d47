use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Fuel badge colours
// ---------------------------------------------------------------------------

/// Hue (degrees) reserved for the fuel types listings commonly carry.
fn fuel_hue(fuel: &str) -> Option<f32> {
    match fuel.to_lowercase().as_str() {
        "gasoline" => Some(28.0),
        "diesel" => Some(0.0),
        "electric" => Some(205.0),
        "hybrid" => Some(130.0),
        "flex-fuel" | "e85" => Some(280.0),
        _ => None,
    }
}

/// Badge colour for a hue, dark enough to carry white text.
fn badge_color(hue: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, 0.65, 0.42).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Maps each fuel type in a catalog to its badge colour.
///
/// Known fuels keep the same colour whatever else the catalog holds; any
/// other label gets a hue from the 60°–340° band not used by the fixed ones.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    pub fn new(fuels: &BTreeSet<String>) -> Self {
        let unknown: Vec<&String> = fuels.iter().filter(|f| fuel_hue(f).is_none()).collect();
        let step = 280.0 / unknown.len().max(1) as f32;

        let mut mapping = BTreeMap::new();
        for fuel in fuels {
            if let Some(hue) = fuel_hue(fuel) {
                mapping.insert(fuel.clone(), badge_color(hue));
            }
        }
        for (i, fuel) in unknown.into_iter().enumerate() {
            mapping.insert(fuel.clone(), badge_color(60.0 + step * i as f32));
        }
        ColorMap { mapping }
    }

    /// Look up the colour for a fuel; labels outside the catalog are grey.
    pub fn color_for(&self, fuel: &str) -> Color32 {
        self.mapping.get(fuel).copied().unwrap_or(Color32::GRAY)
    }

    /// Return the legend entries (fuel → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(fuel, c)| (fuel.clone(), *c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fuels(labels: &[&str]) -> BTreeSet<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn known_fuels_keep_their_colour() {
        let small = ColorMap::new(&fuels(&["Electric", "Gasoline"]));
        let large = ColorMap::new(&fuels(&["Electric", "Gasoline", "Hybrid", "Propane"]));
        assert_eq!(small.color_for("Electric"), large.color_for("Electric"));
        assert_eq!(small.color_for("Gasoline"), large.color_for("Gasoline"));
        assert_ne!(large.color_for("Electric"), large.color_for("Hybrid"));
    }

    #[test]
    fn unknown_fuels_get_distinct_colours() {
        let map = ColorMap::new(&fuels(&["Hydrogen", "Propane", "Gasoline"]));
        let colors: BTreeSet<_> = ["Hydrogen", "Propane", "Gasoline"]
            .iter()
            .map(|f| map.color_for(f).to_array())
            .collect();
        assert_eq!(colors.len(), 3);
        assert_eq!(map.legend_entries().len(), 3);
    }

    #[test]
    fn fuel_outside_the_catalog_is_grey() {
        let map = ColorMap::new(&fuels(&["Gasoline"]));
        assert_eq!(map.color_for("Diesel"), Color32::GRAY);
        assert!(ColorMap::default().legend_entries().is_empty());
    }
}
