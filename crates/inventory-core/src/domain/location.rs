//! Location Registry
//!
//! The six storage tabs, in display order. `All` is a filter only: it is
//! modelled by [`LocationFilter::All`] and has no [`Location`] variant, so an
//! item can never be stored there.

use serde::{Deserialize, Serialize};

/// One registry entry: key, display name and colour tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationTab {
    pub key: &'static str,
    pub display_name: &'static str,
    pub color_tag: &'static str,
}

/// Ordered registry. Index 0 is the `All` pseudo-location.
pub const LOCATION_TABS: [LocationTab; 6] = [
    LocationTab { key: "All", display_name: "All Locations", color_tag: "gray" },
    LocationTab { key: "PantryIn", display_name: "Inside Pantry", color_tag: "lime" },
    LocationTab { key: "PantryOut", display_name: "Outside Pantry", color_tag: "lime" },
    LocationTab { key: "FreezerIn", display_name: "Inside Freezer", color_tag: "sky" },
    LocationTab { key: "FreezerOut", display_name: "Outside Freezer", color_tag: "sky" },
    LocationTab { key: "FridgeOut", display_name: "Outside Fridge", color_tag: "amber" },
];

/// Look up any registry entry (including `All`) by key
pub fn lookup(key: &str) -> Option<&'static LocationTab> {
    LOCATION_TABS.iter().find(|tab| tab.key == key)
}

/// A concrete storage location an item can live in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    PantryIn,
    PantryOut,
    FreezerIn,
    FreezerOut,
    FridgeOut,
}

impl Location {
    /// Concrete locations in registry order (the add-item choices)
    pub const ALL: [Location; 5] = [
        Location::PantryIn,
        Location::PantryOut,
        Location::FreezerIn,
        Location::FreezerOut,
        Location::FridgeOut,
    ];

    /// Registry entry for this location
    pub fn tab(self) -> &'static LocationTab {
        let index = match self {
            Location::PantryIn => 1,
            Location::PantryOut => 2,
            Location::FreezerIn => 3,
            Location::FreezerOut => 4,
            Location::FridgeOut => 5,
        };
        &LOCATION_TABS[index]
    }

    pub fn key(self) -> &'static str {
        self.tab().key
    }

    pub fn display_name(self) -> &'static str {
        self.tab().display_name
    }

    pub fn color_tag(self) -> &'static str {
        self.tab().color_tag
    }

    /// Parse a concrete key. `"All"` and unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|loc| loc.key() == key)
    }
}

/// Active tab: every location, or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocationFilter {
    #[default]
    All,
    Only(Location),
}

impl LocationFilter {
    /// All tabs in registry order, `All` first
    pub fn iter() -> impl Iterator<Item = LocationFilter> {
        std::iter::once(LocationFilter::All).chain(Location::ALL.into_iter().map(LocationFilter::Only))
    }

    pub fn tab(self) -> &'static LocationTab {
        match self {
            LocationFilter::All => &LOCATION_TABS[0],
            LocationFilter::Only(loc) => loc.tab(),
        }
    }

    pub fn key(self) -> &'static str {
        self.tab().key
    }

    pub fn display_name(self) -> &'static str {
        self.tab().display_name
    }

    pub fn color_tag(self) -> &'static str {
        self.tab().color_tag
    }

    pub fn from_key(key: &str) -> Option<Self> {
        if key == LOCATION_TABS[0].key {
            Some(LocationFilter::All)
        } else {
            Location::from_key(key).map(LocationFilter::Only)
        }
    }

    /// The concrete location behind this tab, if any
    pub fn location(self) -> Option<Location> {
        match self {
            LocationFilter::All => None,
            LocationFilter::Only(loc) => Some(loc),
        }
    }

    /// Exact key match; `All` matches everything
    pub fn matches(self, location: Location) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::Only(loc) => loc == location,
        }
    }
}

impl From<Location> for LocationFilter {
    fn from(location: Location) -> Self {
        LocationFilter::Only(location)
    }
}
