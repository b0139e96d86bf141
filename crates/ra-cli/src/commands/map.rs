use comfy_table::{ContentArrangement, Table};
use ra_core::World;

pub fn run(seed: Option<u64>, json: bool) -> Result<(), String> {
    let world = super::build_world(seed)?;

    if json {
        let out = serde_json::to_string_pretty(&world).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("{}", room_table(&world));
    println!();
    println!(
        "  start {} | goal {} | seed {}",
        world.start, world.goal, world.seed
    );

    Ok(())
}

fn room_table(world: &World) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Title", "Exits", "Items", "Lock"]);

    for room in world.rooms() {
        let exits = room
            .exits
            .iter()
            .map(|(dir, to)| format!("{dir} \u{2192} {to}"))
            .collect::<Vec<_>>()
            .join("\n");

        let items = if room.items.is_empty() {
            "\u{2014}".to_string()
        } else {
            room.items
                .iter()
                .map(|item| item.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let lock = room.obstacle().unwrap_or("\u{2014}");

        table.add_row(vec![
            room.id.to_string(),
            room.title.clone(),
            exits,
            items,
            lock.to_string(),
        ]);
    }

    table
}
