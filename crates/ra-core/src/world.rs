use std::collections::{BTreeMap, HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};
use crate::item::ItemKind;
use crate::room::{Room, RoomId};

/// The world model. Owns every room and the items lying in them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    rooms: BTreeMap<RoomId, Room>,
    /// Where the player begins.
    pub start: RoomId,
    /// The locked room the player must enter to win.
    pub goal: RoomId,
    /// Seed the world was generated from.
    pub seed: u64,
}

impl World {
    /// Create an empty world. Rooms are added with [`World::add_room`].
    pub fn new(start: RoomId, goal: RoomId, seed: u64) -> Self {
        Self {
            rooms: BTreeMap::new(),
            start,
            goal,
            seed,
        }
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Add a room, replacing any room with the same key.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.insert(room.id, room);
    }

    /// Get a room by key.
    pub fn room(&self, id: RoomId) -> WorldResult<&Room> {
        self.rooms.get(&id).ok_or(WorldError::RoomNotFound(id))
    }

    /// Get a mutable room by key.
    pub fn room_mut(&mut self, id: RoomId) -> WorldResult<&mut Room> {
        self.rooms.get_mut(&id).ok_or(WorldError::RoomNotFound(id))
    }

    /// All rooms in key order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// The starting room.
    pub fn start_room(&self) -> WorldResult<&Room> {
        self.room(self.start)
    }

    /// The goal room.
    pub fn goal_room(&self) -> WorldResult<&Room> {
        self.room(self.goal)
    }

    /// Link two rooms both ways: `from` leads `direction` to `to`, and `to`
    /// leads back the opposite way.
    pub fn connect(&mut self, from: RoomId, direction: Direction, to: RoomId) -> WorldResult<()> {
        // Check both ends before touching either.
        self.room(to)?;
        self.room_mut(from)?.exits.insert(direction, to);
        self.room_mut(to)?.exits.insert(direction.opposite(), from);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lock
    // -----------------------------------------------------------------------

    /// Whether the goal room still bars entry.
    pub fn is_goal_locked(&self) -> bool {
        self.rooms.get(&self.goal).is_some_and(|room| room.locked)
    }

    /// Clear the goal's lock. The obstacle name is kept for narration.
    pub fn unlock_goal(&mut self) -> WorldResult<()> {
        self.room_mut(self.goal)?.locked = false;
        Ok(())
    }

    /// Rooms whose `locked` flag is set.
    pub fn locked_rooms(&self) -> Vec<RoomId> {
        self.rooms
            .values()
            .filter(|room| room.locked)
            .map(|room| room.id)
            .collect()
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// Room currently holding an item of the given kind.
    pub fn find_item_room(&self, kind: ItemKind) -> Option<RoomId> {
        self.rooms
            .values()
            .find(|room| room.has_item(kind))
            .map(|room| room.id)
    }

    /// Number of items lying in rooms.
    pub fn item_count(&self) -> usize {
        self.rooms.values().map(|room| room.items.len()).sum()
    }

    // -----------------------------------------------------------------------
    // Graph traversal
    // -----------------------------------------------------------------------

    /// Shortest path from `from` to `to` as the directions to walk.
    ///
    /// Rooms in `avoid` are treated as walls, except `to` itself. Returns
    /// `Some(vec![])` when `from == to`.
    pub fn route(&self, from: RoomId, to: RoomId, avoid: &[RoomId]) -> Option<Vec<Direction>> {
        if !self.rooms.contains_key(&from) || !self.rooms.contains_key(&to) {
            return None;
        }

        let mut came_from: HashMap<RoomId, (RoomId, Direction)> = HashMap::new();
        let mut queue = VecDeque::from([from]);

        while let Some(current) = queue.pop_front() {
            if current == to {
                let mut path = Vec::new();
                let mut at = to;
                while let Some(&(prev, dir)) = came_from.get(&at) {
                    path.push(dir);
                    at = prev;
                }
                path.reverse();
                return Some(path);
            }

            let Some(room) = self.rooms.get(&current) else {
                continue;
            };
            for (&dir, &next) in &room.exits {
                if next == from || came_from.contains_key(&next) {
                    continue;
                }
                if next != to && avoid.contains(&next) {
                    continue;
                }
                came_from.insert(next, (current, dir));
                queue.push_back(next);
            }
        }

        None
    }

    /// Whether `to` can be reached from `from` by following exits.
    pub fn is_reachable(&self, from: RoomId, to: RoomId) -> bool {
        self.route(from, to, &[]).is_some()
    }

    // -----------------------------------------------------------------------
    // Invariants
    // -----------------------------------------------------------------------

    /// Check the structural invariants every playable world satisfies.
    pub fn validate(&self) -> WorldResult<()> {
        self.room(self.start)?;
        self.room(self.goal)?;

        for room in self.rooms.values() {
            for (dir, target) in &room.exits {
                if !self.rooms.contains_key(target) {
                    return Err(WorldError::Invariant(format!(
                        "exit {dir} of {} leads to missing room {target}",
                        room.id
                    )));
                }
            }
        }

        let locked = self.locked_rooms();
        if locked != [self.goal] {
            return Err(WorldError::Invariant(format!(
                "expected only the goal {} to be locked, found {locked:?}",
                self.goal
            )));
        }

        if !self.is_reachable(self.start, self.goal) {
            return Err(WorldError::Invariant(format!(
                "goal {} is unreachable from start {}",
                self.goal, self.start
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    /// Three rooms in a line: r0 -east- r1 -east- r2, goal r2 locked.
    fn corridor() -> World {
        let mut world = World::new(RoomId(0), RoomId(2), 7);
        for i in 0..3 {
            world.add_room(Room::new(RoomId(i), format!("Room {i}"), "Bare walls."));
        }
        world.connect(RoomId(0), Direction::East, RoomId(1)).unwrap();
        world.connect(RoomId(1), Direction::East, RoomId(2)).unwrap();
        world.room_mut(RoomId(2)).unwrap().lock("iron gate");
        world
    }

    #[test]
    fn connect_creates_reverse_link() {
        let world = corridor();
        let middle = world.room(RoomId(1)).unwrap();
        assert_eq!(middle.exit(Direction::West), Some(RoomId(0)));
        assert_eq!(middle.exit(Direction::East), Some(RoomId(2)));
    }

    #[test]
    fn connect_to_missing_room_fails() {
        let mut world = corridor();
        let result = world.connect(RoomId(0), Direction::North, RoomId(9));
        assert!(matches!(result, Err(WorldError::RoomNotFound(RoomId(9)))));
        assert!(world.room(RoomId(0)).unwrap().exit(Direction::North).is_none());
    }

    #[test]
    fn route_finds_shortest_path() {
        let world = corridor();
        assert_eq!(
            world.route(RoomId(0), RoomId(2), &[]),
            Some(vec![Direction::East, Direction::East])
        );
        assert_eq!(world.route(RoomId(1), RoomId(1), &[]), Some(vec![]));
    }

    #[test]
    fn route_respects_avoid_list() {
        let world = corridor();
        assert_eq!(world.route(RoomId(0), RoomId(2), &[RoomId(1)]), None);
        // The destination itself is never a wall.
        assert!(world.route(RoomId(0), RoomId(1), &[RoomId(1)]).is_some());
    }

    #[test]
    fn unlock_keeps_lock_name() {
        let mut world = corridor();
        assert!(world.is_goal_locked());
        world.unlock_goal().unwrap();
        assert!(!world.is_goal_locked());
        assert_eq!(
            world.goal_room().unwrap().lock_name.as_deref(),
            Some("iron gate")
        );
    }

    #[test]
    fn validate_accepts_corridor() {
        corridor().validate().unwrap();
    }

    #[test]
    fn validate_rejects_unreachable_goal() {
        let mut world = corridor();
        world.add_room(Room::new(RoomId(3), "Island", "Nowhere to go."));
        world.goal = RoomId(3);
        world.room_mut(RoomId(2)).unwrap().locked = false;
        world.room_mut(RoomId(3)).unwrap().lock("braided thorns");
        assert!(matches!(world.validate(), Err(WorldError::Invariant(_))));
    }

    #[test]
    fn validate_rejects_second_lock() {
        let mut world = corridor();
        world.room_mut(RoomId(1)).unwrap().lock("shimmering seal");
        assert!(matches!(world.validate(), Err(WorldError::Invariant(_))));
    }

    #[test]
    fn items_are_found_by_kind() {
        let mut world = corridor();
        world
            .room_mut(RoomId(1))
            .unwrap()
            .items
            .push(Item::rusty_key());
        assert_eq!(world.find_item_room(ItemKind::RustyKey), Some(RoomId(1)));
        assert_eq!(world.find_item_room(ItemKind::PrismLens), None);
        assert_eq!(world.item_count(), 1);
    }
}
