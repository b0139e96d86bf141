pub mod map;
pub mod play;

use ra_core::World;

/// Generate the world for a seed, drawing a fresh seed when none is given.
pub fn build_world(seed: Option<u64>) -> Result<World, String> {
    let world = ra_core::generate_world(seed).map_err(|e| format!("cannot build world: {e}"))?;
    tracing::info!(seed = world.seed, rooms = world.room_count(), "world generated");
    Ok(world)
}
