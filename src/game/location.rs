//! Locations and their screen regions.

use std::fmt;

use serde::Serialize;

use crate::game::ActionDefinition;

/// Default location width in screen pixels.
pub const DEFAULT_LOCATION_WIDTH: u32 = 200;

/// Default location height in screen pixels.
pub const DEFAULT_LOCATION_HEIGHT: u32 = 100;

/// A pointer position in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point lies inside.
    ///
    /// Left and top edges are inclusive, right and bottom edges exclusive.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let (px, py) = (i64::from(point.x), i64::from(point.y));
        let (left, top) = (i64::from(self.x), i64::from(self.y));
        px >= left
            && px < left + i64::from(self.width)
            && py >= top
            && py < top + i64::from(self.height)
    }

    /// Whether the two rectangles share any pixel.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        let right = i64::from(self.x) + i64::from(self.width);
        let bottom = i64::from(self.y) + i64::from(self.height);
        let other_right = i64::from(other.x) + i64::from(other.width);
        let other_bottom = i64::from(other.y) + i64::from(other.height);

        i64::from(self.x) < other_right
            && i64::from(other.x) < right
            && i64::from(self.y) < other_bottom
            && i64::from(other.y) < bottom
    }

    /// Center point, rounded toward the top-left.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn center(&self) -> Point {
        let cx = i64::from(self.x) + i64::from(self.width) / 2;
        let cy = i64::from(self.y) + i64::from(self.height) / 2;
        Point::new(cx as i32, cy as i32)
    }
}

/// What kind of place a location is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationCategory {
    /// Somewhere to rest.
    Housing,
    /// Somewhere to earn money.
    Work,
    /// Somewhere to learn.
    Education,
}

impl LocationCategory {
    /// Lowercase tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LocationCategory::Housing => "housing",
            LocationCategory::Work => "work",
            LocationCategory::Education => "education",
        }
    }
}

impl fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clickable place offering a fixed list of actions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    name: String,
    category: LocationCategory,
    region: Rect,
    actions: Vec<ActionDefinition>,
    hovered: bool,
}

impl Location {
    /// Create a location with the default size at `(x, y)`.
    #[must_use]
    pub fn new(name: impl Into<String>, category: LocationCategory, x: i32, y: i32) -> Self {
        Self::with_region(
            name,
            category,
            Rect::new(x, y, DEFAULT_LOCATION_WIDTH, DEFAULT_LOCATION_HEIGHT),
        )
    }

    /// Create a location covering `region`.
    #[must_use]
    pub fn with_region(name: impl Into<String>, category: LocationCategory, region: Rect) -> Self {
        Self {
            name: name.into(),
            category,
            region,
            actions: Vec::new(),
            hovered: false,
        }
    }

    /// Add an action; see [`ActionDefinition::new`].
    #[must_use]
    pub fn with_action(mut self, name: &str, energy_cost: u32, effects: &[(&str, f64)]) -> Self {
        self.actions
            .push(ActionDefinition::new(name, energy_cost, effects));
        self
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category tag.
    #[must_use]
    pub const fn category(&self) -> LocationCategory {
        self.category
    }

    /// Hit-test region.
    #[must_use]
    pub const fn region(&self) -> Rect {
        self.region
    }

    /// Actions in menu order.
    #[must_use]
    pub fn actions(&self) -> &[ActionDefinition] {
        &self.actions
    }

    /// Action at `index`, if any.
    #[must_use]
    pub fn action(&self, index: usize) -> Option<&ActionDefinition> {
        self.actions.get(index)
    }

    /// Action by display name.
    #[must_use]
    pub fn find_action(&self, name: &str) -> Option<(usize, &ActionDefinition)> {
        self.actions
            .iter()
            .enumerate()
            .find(|(_, action)| action.name() == name)
    }

    /// Whether the pointer was last seen over this location.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether `point` falls in this location's region.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.region.contains(point)
    }

    /// Update the hover flag from a pointer position and return it.
    pub fn update_hover(&mut self, point: Point) -> bool {
        self.hovered = self.contains(point);
        self.hovered
    }
}
