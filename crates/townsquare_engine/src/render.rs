//! Text rendering for rooms, inventories, stats, and look results.

use std::fmt::Write as _;

use townsquare_foundation::{Result, RoomId};
use townsquare_world::{NpcCensus, Player, World};

use crate::look::Sighting;
use crate::report::ShopListing;

/// Width text is wrapped to.
pub const SCREEN_WIDTH: usize = 80;

/// How exits are listed under a room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExitStyle {
    /// One `Direction: Room` line per exit.
    #[default]
    Full,
    /// A single `Exits: North South` line.
    Brief,
}

impl ExitStyle {
    /// The other style.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Full => Self::Brief,
            Self::Brief => Self::Full,
        }
    }
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
#[must_use]
pub fn wrap(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut line_len = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if line_len > 0 && line_len + 1 + len > width {
            out.push('\n');
            line_len = 0;
        } else if line_len > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(word);
        line_len += len;
    }
    out
}

/// A room with its ground items, NPCs, and exits.
///
/// # Errors
///
/// Returns `UnknownRoom`/`UnknownItem`/`UnknownNpc` if the world is
/// inconsistent.
pub fn room(world: &World, id: &RoomId, style: ExitStyle) -> Result<String> {
    let room = world.room(id)?;
    let mut out = String::new();
    let _ = writeln!(out, "{}", room.id);
    let _ = writeln!(out, "{}", "=".repeat(room.id.as_str().chars().count()));
    if !room.description.is_empty() {
        let _ = writeln!(out, "{}", wrap(&room.description, SCREEN_WIDTH));
    }

    if !room.ground.is_empty() {
        out.push('\n');
        for item in &room.ground {
            let _ = writeln!(out, "{}", world.items().require(item)?.ground_desc);
        }
    }

    if !room.npcs.is_empty() {
        out.push('\n');
        for npc_id in &room.npcs {
            let npc = world.npc(npc_id)?;
            if npc.is_alive() {
                let _ = writeln!(out, "{} is nearby.", npc.id);
            } else {
                let _ = writeln!(out, "{}'s body is nearby.", npc.id);
            }
        }
    }

    out.push('\n');
    match style {
        ExitStyle::Full => {
            for (direction, target) in &room.exits {
                let _ = writeln!(out, "{}: {target}", direction.title());
            }
        }
        ExitStyle::Brief => {
            let names: Vec<&str> = room.exits.keys().map(|d| d.title()).collect();
            let _ = writeln!(out, "Exits: {}", names.join(" "));
        }
    }
    Ok(out.trim_end().to_string())
}

/// The inventory grouped by item with counts.
#[must_use]
pub fn inventory(world: &World) -> String {
    let inventory = world.inventory();
    if inventory.is_empty() {
        return "Inventory:\n  (nothing)".to_string();
    }
    let mut out = String::from("Inventory:");
    for (id, count) in inventory.grouped() {
        if count > 1 {
            let _ = write!(out, "\n  {id} ({count})");
        } else {
            let _ = write!(out, "\n  {id}");
        }
    }
    out
}

/// The player record.
#[must_use]
pub fn stats(player: &Player) -> String {
    let rows: [(&str, String); 8] = [
        ("Player Name", player.name.clone()),
        ("Player IP", player.address.clone()),
        ("Node", player.node.clone()),
        ("Location", player.location.to_string()),
        ("Health", player.health.to_string()),
        ("XP", player.experience.to_string()),
        ("HP", player.hit_points.to_string()),
        ("Money", player.money.to_string()),
    ];
    let mut out = String::from("User Stats:");
    for (label, value) in rows {
        let _ = write!(out, "\n  {label:<11}  {value}");
    }
    out
}

/// A shop listing.
#[must_use]
pub fn listing(listing: &ShopListing) -> String {
    let mut out = String::from("For sale:");
    for (id, detail) in &listing.entries {
        let _ = write!(out, "\n  - {id}");
        if let Some(detail) = detail {
            let _ = write!(out, "\n{}", wrap(detail, SCREEN_WIDTH));
        }
    }
    out
}

/// NPC tallies, with the victory line once everyone is dead.
#[must_use]
pub fn census(census: NpcCensus) -> String {
    let mut out = format!(
        "NPC's still alive: {}\nNPC's killed: {}",
        census.alive, census.dead
    );
    if census.all_defeated() {
        out.push_str("\nCongratulations, you have defeated all the\nenemies and have won the game!");
    }
    out
}

/// The text for a look result.
///
/// # Errors
///
/// Returns a lookup error if the world is inconsistent.
pub fn sighting(world: &World, sighting: &Sighting, style: ExitStyle) -> Result<String> {
    match sighting {
        Sighting::Room(id) => room(world, id, style),
        Sighting::Exits(exits) => Ok(exits
            .iter()
            .map(|(direction, target)| format!("{}: {target}", direction.title()))
            .collect::<Vec<_>>()
            .join("\n")),
        Sighting::Toward(_, Some(target)) => Ok(target.to_string()),
        Sighting::Toward(_, None) => Ok("There is nothing in that direction.".to_string()),
        Sighting::Item(id) => Ok(wrap(&world.items().require(id)?.long_desc, SCREEN_WIDTH)),
        Sighting::Npc(id) => {
            let npc = world.npc(id)?;
            let mut out = if npc.is_alive() {
                format!("{} ({} health)", npc.id, npc.health)
            } else {
                format!("{}'s body.", npc.id)
            };
            if npc.inventory.is_empty() && npc.money == 0 {
                out.push_str("\nCarrying nothing of value.");
            } else {
                let _ = write!(
                    out,
                    "\nCarrying {} item{} and {} coin{}.",
                    npc.inventory.len(),
                    if npc.inventory.len() == 1 { "" } else { "s" },
                    npc.money,
                    if npc.money == 1 { "" } else { "s" },
                );
            }
            Ok(out)
        }
    }
}
