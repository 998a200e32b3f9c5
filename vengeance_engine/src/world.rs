//! The world graph.
//!
//! [`World`] owns every [`Location`] and [`Direction`]. Exits hold handles into
//! these tables, so the graph has no owning cycles even though direction pairs
//! and two-way exits point back at each other.

use std::collections::HashMap;

use log::{debug, warn};

use crate::{Direction, DirectionId, Exit, Location, LocationId};

/// Complete graph of locations and the directions connecting them.
///
/// Lookups by name return the first location or direction registered under that
/// name. The world builder guarantees names are unique; the lower level `add_*`
/// methods here do not check.
#[derive(Debug, Clone, Default)]
pub struct World {
    locations: Vec<Location>,
    directions: Vec<Direction>,
    location_index: HashMap<String, LocationId>,
    direction_index: HashMap<String, DirectionId>,
}

impl World {
    /// Create a new world with no locations or directions.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Register a pair of opposite directions, returning the handle of `name`.
    pub fn add_direction_pair(&mut self, name: &str, opposite: &str) -> DirectionId {
        let first = DirectionId(self.directions.len());
        let (forward, backward) = Direction::pair(name, opposite, first);
        self.direction_index.entry(name.to_string()).or_insert(first);
        self.direction_index
            .entry(opposite.to_string())
            .or_insert(first.opposite());
        self.directions.push(forward);
        self.directions.push(backward);
        first
    }

    pub fn add_location(&mut self, location: Location) -> LocationId {
        let id = LocationId(self.locations.len());
        self.location_index.entry(location.name().to_string()).or_insert(id);
        self.locations.push(location);
        id
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    pub fn direction(&self, id: DirectionId) -> Option<&Direction> {
        self.directions.get(id.0)
    }

    /// Name of a direction, or an empty string for a handle from another world.
    pub fn direction_name(&self, id: DirectionId) -> &str {
        self.direction(id).map_or("", Direction::name)
    }

    pub fn find_location(&self, name: &str) -> Option<LocationId> {
        self.location_index.get(name).copied()
    }

    /// Find a direction by name. Declared opposites are directions in their own right.
    pub fn find_direction(&self, name: &str) -> Option<DirectionId> {
        self.direction_index.get(name).copied()
    }

    /// Location the player starts in: the first one declared.
    pub fn first_location(&self) -> Option<LocationId> {
        (!self.locations.is_empty()).then_some(LocationId(0))
    }

    /// Connect `from` to `to` in `direction`, and `to` back to `from` in the opposite direction.
    pub fn add_exit(&mut self, from: LocationId, direction: DirectionId, to: LocationId) {
        self.add_one_way_exit(from, direction, to);
        self.add_one_way_exit(to, direction.opposite(), from);
    }

    /// Connect `from` to `to` in `direction` only.
    ///
    /// Returns false if the edge already existed (it is reused rather than
    /// duplicated) or if `from` is not a location in this world.
    pub fn add_one_way_exit(&mut self, from: LocationId, direction: DirectionId, to: LocationId) -> bool {
        let dir_name = self.direction_name(direction).to_string();
        let target_name = self.location(to).map_or_else(String::new, |loc| loc.name().to_string());
        let Some(origin) = self.locations.get_mut(from.0) else {
            return false;
        };

        let exit = Exit::new(direction, to);
        if origin.exits().contains(&exit) {
            debug!("reusing exit {dir_name} from '{}' to '{target_name}'", origin.name());
            return false;
        }
        if let Some(existing) = origin.exit_toward(direction) {
            warn!(
                "'{}' already has an exit {dir_name} (to location #{}); exit to '{target_name}' will be shadowed",
                origin.name(),
                existing.to.index()
            );
        }
        origin.push_exit(exit);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> (World, LocationId, LocationId, DirectionId) {
        let mut world = World::new();
        let up = world.add_direction_pair("up", "down");
        let attic = world.add_location(Location::with_description("Attic", "Dusty"));
        let cellar = world.add_location(Location::with_description("Cellar", "Damp"));
        (world, attic, cellar, up)
    }

    #[test]
    fn direction_pairs_are_linked() {
        let mut world = World::new();
        let east = world.add_direction_pair("east", "west");
        let west = world.find_direction("west").unwrap();

        assert_eq!(world.direction(east).unwrap().opposite(), west);
        assert_eq!(world.direction(west).unwrap().opposite(), east);
        assert_eq!(world.direction_name(east.opposite()), "west");
    }

    #[test]
    fn two_way_exit_wires_reverse_with_opposite() {
        let (mut world, attic, cellar, up) = two_rooms();
        let down = up.opposite();
        world.add_exit(attic, down, cellar);

        let attic_exits = world.location(attic).unwrap().exits();
        let cellar_exits = world.location(cellar).unwrap().exits();
        assert_eq!(attic_exits, &[Exit::new(down, cellar)]);
        assert_eq!(cellar_exits, &[Exit::new(up, attic)]);
    }

    #[test]
    fn one_way_exit_has_no_reverse() {
        let (mut world, attic, cellar, up) = two_rooms();
        assert!(world.add_one_way_exit(attic, up.opposite(), cellar));

        assert_eq!(world.location(attic).unwrap().exits().len(), 1);
        assert!(world.location(cellar).unwrap().exits().is_empty());
    }

    #[test]
    fn reverse_declaration_reuses_existing_edge() {
        let (mut world, attic, cellar, up) = two_rooms();
        world.add_exit(attic, up.opposite(), cellar);
        world.add_exit(cellar, up, attic);

        assert_eq!(world.location(attic).unwrap().exits().len(), 1);
        assert_eq!(world.location(cellar).unwrap().exits().len(), 1);
    }

    #[test]
    fn first_location_is_first_declared() {
        let (world, attic, _, _) = two_rooms();
        assert_eq!(world.first_location(), Some(attic));
        assert_eq!(World::new().first_location(), None);
    }

    #[test]
    fn lookups_by_name() {
        let (world, _, cellar, _) = two_rooms();
        assert_eq!(world.find_location("Cellar"), Some(cellar));
        assert_eq!(world.find_location("cellar"), None);
        assert!(world.find_direction("sideways").is_none());
    }
}
