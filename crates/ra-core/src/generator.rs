//! Procedural world generation.
//!
//! A world is a ring of rooms (east/west), two north/south cross-links, three
//! scattered tools, one locked goal and one clue. Every random draw comes from
//! a single `StdRng` seeded once, in a fixed order, so a seed always yields the
//! same world.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::catalog::{Archetype, LOCK_NAMES, LORE_SNIPPETS, ROOM_ARCHETYPES};
use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};
use crate::item::Item;
use crate::room::{Room, RoomId};
use crate::world::World;

/// Configuration for the world generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of rooms to build.
    pub room_count: usize,
    /// Room templates, drawn without replacement.
    pub archetypes: &'static [Archetype],
    /// Lore sentences, drawn with replacement.
    pub lore: &'static [&'static str],
    /// Obstacle names for the goal room.
    pub lock_names: &'static [&'static str],
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            room_count: 5,
            archetypes: ROOM_ARCHETYPES,
            lore: LORE_SNIPPETS,
            lock_names: LOCK_NAMES,
        }
    }
}

impl GeneratorConfig {
    /// Set the number of rooms.
    pub fn with_room_count(mut self, room_count: usize) -> Self {
        self.room_count = room_count;
        self
    }

    /// Use a different room catalog.
    pub fn with_archetypes(mut self, archetypes: &'static [Archetype]) -> Self {
        self.archetypes = archetypes;
        self
    }
}

/// Builds worlds from a [`GeneratorConfig`].
#[derive(Debug, Clone, Default)]
pub struct WorldGenerator {
    config: GeneratorConfig,
}

impl WorldGenerator {
    /// Create a generator with the given config.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate the world for `seed`.
    pub fn generate(&self, seed: u64) -> WorldResult<World> {
        let cfg = &self.config;
        if cfg.room_count == 0 {
            return Err(WorldError::NoRooms);
        }
        if cfg.archetypes.len() < cfg.room_count {
            return Err(WorldError::NotEnoughArchetypes {
                needed: cfg.room_count,
                available: cfg.archetypes.len(),
            });
        }
        if cfg.lore.is_empty() {
            return Err(WorldError::EmptyCatalog("lore"));
        }
        if cfg.lock_names.is_empty() {
            return Err(WorldError::EmptyCatalog("lock name"));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let n = cfg.room_count;

        let chosen = index::sample(&mut rng, cfg.archetypes.len(), n);
        let mut rooms: Vec<Room> = chosen
            .iter()
            .enumerate()
            .map(|(i, pick)| {
                let archetype = cfg.archetypes[pick];
                let lore = cfg.lore[rng.random_range(0..cfg.lore.len())];
                Room::new(
                    RoomId(i),
                    archetype.title,
                    format!("{} {lore}", archetype.description),
                )
            })
            .collect();

        for item in [Item::rusty_key(), Item::prism_lens(), Item::coiled_rope()] {
            rooms[rng.random_range(0..n)].items.push(item);
        }

        let goal = rng.random_range(0..n);
        let lock_name = cfg.lock_names[rng.random_range(0..cfg.lock_names.len())];
        rooms[goal].lock(lock_name);

        if n > 1 {
            let others: Vec<usize> = (0..n).filter(|&i| i != goal).collect();
            let clue = others[rng.random_range(0..others.len())];
            rooms[clue].items.push(Item::scribbled_note(lock_name));
        }

        let mut world = World::new(RoomId(0), RoomId(goal), seed);
        for room in rooms {
            world.add_room(room);
        }
        wire_exits(&mut world, n)?;

        if let Err(err) = world.validate() {
            warn!(seed, %err, "generated world failed validation");
            return Err(err);
        }

        debug!(
            seed,
            goal = %world.goal,
            lock = lock_name,
            rooms = n,
            "generated world"
        );
        Ok(world)
    }
}

/// Ring the rooms east/west, then cross-link 0-2 and 1-3 north/south.
fn wire_exits(world: &mut World, n: usize) -> WorldResult<()> {
    for i in 0..n {
        world.connect(RoomId(i), Direction::East, RoomId((i + 1) % n))?;
    }
    if n >= 4 {
        world.connect(RoomId(0), Direction::North, RoomId(2))?;
        world.connect(RoomId(1), Direction::South, RoomId(3))?;
    }
    Ok(())
}

/// Generate a default five-room world.
///
/// With `None` a fresh seed is drawn; the seed actually used is stored in
/// [`World::seed`] either way.
pub fn generate_world(seed: Option<u64>) -> WorldResult<World> {
    let seed = seed.unwrap_or_else(rand::random);
    WorldGenerator::default().generate(seed)
}
