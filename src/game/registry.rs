//! The fixed set of locations in a game and pointer hit-testing.

use std::fmt;

use serde::Serialize;

use crate::game::{ActionDefinition, Location, LocationCategory, Point};

/// Index of a location in its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LocationId(pub usize);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered list of locations, in registration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LocationRegistry {
    locations: Vec<Location>,
}

impl LocationRegistry {
    /// Create a registry from locations in registration order.
    #[must_use]
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// The game's built-in locations.
    #[must_use]
    pub fn standard() -> Self {
        let apartment = Location::new("Cramped Quarters", LocationCategory::Housing, 50, 100)
            .with_action("Rest", 0, &[("energy", 3.0), ("happiness", 1.0)])
            .with_action("Sleep", 0, &[("energy", 5.0), ("health", 1.0)]);

        let burger_joint = Location::new("Monolith Burgers", LocationCategory::Work, 300, 100)
            .with_action("Work Shift", 2, &[("money", 50.0), ("happiness", -1.0)])
            .with_action("Overtime", 3, &[("money", 80.0), ("happiness", -2.0)]);

        let university = Location::new("Metro University", LocationCategory::Education, 550, 100)
            .with_action("Study", 2, &[("education", 1.0), ("energy", -1.0)])
            .with_action("Take Class", 3, &[("education", 2.0), ("money", -100.0)]);

        Self::new(vec![apartment, burger_joint, university])
    }

    /// Number of locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the registry has no locations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Location by id.
    #[must_use]
    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    /// Action `index` at location `id`.
    #[must_use]
    pub fn action(&self, id: LocationId, index: usize) -> Option<&ActionDefinition> {
        self.get(id).and_then(|location| location.action(index))
    }

    /// Location by display name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<(LocationId, &Location)> {
        self.iter().find(|(_, location)| location.name() == name)
    }

    /// All locations with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, location)| (LocationId(i), location))
    }

    /// First location whose region contains `point`.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<LocationId> {
        self.iter()
            .find(|(_, location)| location.contains(point))
            .map(|(id, _)| id)
    }

    /// Refresh every location's hover flag from the pointer position.
    ///
    /// Every location is checked, so more than one may report hovered if
    /// regions overlap. Returns the first hovered location.
    pub fn set_hover(&mut self, point: Point) -> Option<LocationId> {
        let mut first = None;
        for (i, location) in self.locations.iter_mut().enumerate() {
            if location.update_hover(point) && first.is_none() {
                first = Some(LocationId(i));
            }
        }
        first
    }

    /// Pairs of locations whose regions overlap.
    #[must_use]
    pub fn overlapping_regions(&self) -> Vec<(LocationId, LocationId)> {
        let mut pairs = Vec::new();
        for (a, first) in self.iter() {
            for (b, second) in self.iter().skip(a.0 + 1) {
                if first.region().overlaps(&second.region()) {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Rect;

    #[test]
    fn test_standard_catalog_shape() {
        let registry = LocationRegistry::standard();
        assert_eq!(registry.len(), 3);

        let names: Vec<_> = registry.iter().map(|(_, l)| l.name()).collect();
        assert_eq!(
            names,
            vec!["Cramped Quarters", "Monolith Burgers", "Metro University"]
        );
        for (_, location) in registry.iter() {
            assert_eq!(location.actions().len(), 2);
        }
    }

    #[test]
    fn test_standard_catalog_values() {
        let registry = LocationRegistry::standard();
        let (id, work) = registry.find_by_name("Monolith Burgers").unwrap();
        assert_eq!(id, LocationId(1));
        assert_eq!(work.category(), LocationCategory::Work);
        assert_eq!(work.region(), Rect::new(300, 100, 200, 100));

        let class = registry.action(LocationId(2), 1).unwrap();
        assert_eq!(class.name(), "Take Class");
        assert_eq!(class.energy_cost(), 3);
        assert_eq!(class.effects().len(), 2);
    }

    #[test]
    fn test_standard_regions_do_not_overlap() {
        assert!(LocationRegistry::standard().overlapping_regions().is_empty());
    }

    #[test]
    fn test_hit_test() {
        let registry = LocationRegistry::standard();
        assert_eq!(registry.hit_test(Point::new(60, 110)), Some(LocationId(0)));
        assert_eq!(registry.hit_test(Point::new(400, 150)), Some(LocationId(1)));
        assert_eq!(registry.hit_test(Point::new(749, 199)), Some(LocationId(2)));
        assert_eq!(registry.hit_test(Point::new(275, 150)), None);
        assert_eq!(registry.hit_test(Point::new(60, 10)), None);
    }

    #[test]
    fn test_hit_test_prefers_registration_order() {
        let registry = LocationRegistry::new(vec![
            Location::with_region("First", LocationCategory::Work, Rect::new(0, 0, 10, 10)),
            Location::with_region("Second", LocationCategory::Work, Rect::new(5, 5, 10, 10)),
        ]);
        assert_eq!(registry.hit_test(Point::new(7, 7)), Some(LocationId(0)));
        assert_eq!(registry.overlapping_regions(), vec![(LocationId(0), LocationId(1))]);
    }

    #[test]
    fn test_set_hover_checks_every_location() {
        let mut registry = LocationRegistry::new(vec![
            Location::with_region("First", LocationCategory::Work, Rect::new(0, 0, 10, 10)),
            Location::with_region("Second", LocationCategory::Work, Rect::new(5, 5, 10, 10)),
        ]);

        assert_eq!(registry.set_hover(Point::new(7, 7)), Some(LocationId(0)));
        assert!(registry.iter().all(|(_, l)| l.is_hovered()));

        assert_eq!(registry.set_hover(Point::new(100, 100)), None);
        assert!(registry.iter().all(|(_, l)| !l.is_hovered()));
    }

    #[test]
    fn test_unknown_ids() {
        let registry = LocationRegistry::standard();
        assert!(registry.get(LocationId(3)).is_none());
        assert!(registry.action(LocationId(0), 2).is_none());
    }
}
