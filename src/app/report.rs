use landclaim_core::{BorderLogic, World};
use landclaim_data::PlayerId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerStats {
    pub player: PlayerId,
    pub territory: usize,
    pub border: usize,
    pub regions: usize,
    pub buildings: usize,
}

/// Territory statistics for every active player, in slot order.
pub fn player_stats(world: &World) -> Vec<PlayerStats> {
    world
        .players()
        .active()
        .map(|player| PlayerStats {
            player,
            territory: world.ownership().territory_size(player),
            border: world.border_nodes(player).len(),
            regions: world.territory_regions(player),
            buildings: world.buildings().filter(|b| b.owner == player).count(),
        })
        .collect()
}

/// Renders ownership as text, one line per row. Odd rows are indented by one
/// column to show the hex offset.
///
/// Buildings print as their kind symbol, owned points as the owner digit
/// (`#` when the border flag is set), unowned points as `.`.
pub fn render_ascii(world: &World) -> String {
    let extent = world.extent();
    let mut out = String::with_capacity(extent.node_count() * 2 + extent.height as usize);
    for y in 0..extent.height {
        if y % 2 == 1 {
            out.push(' ');
        }
        for x in 0..extent.width {
            let pt = landclaim_data::MapPoint::new(x, y);
            let glyph = match (world.building_at(pt), world.owner(pt)) {
                (Some(b), _) => b.kind.symbol(),
                (None, Some(owner)) if world.is_border_node(pt, owner) => '#',
                (None, Some(owner)) => owner_digit(owner),
                (None, None) => '.',
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn owner_digit(owner: PlayerId) -> char {
    char::from_digit(u32::from(owner.get()) % 36, 36).unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;
    use landclaim_core::config::WorldConfig;
    use landclaim_core::AppConfig;
    use landclaim_data::{BuildingKind, MapPoint};

    fn world() -> World {
        World::new(AppConfig {
            world: WorldConfig {
                width: 12,
                height: 12,
                player_count: 2,
            },
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_stats_for_single_hq() {
        let mut w = world();
        let p1 = PlayerId::new(1).unwrap();
        w.place_building_with_radius(BuildingKind::Headquarters, MapPoint::new(5, 5), p1, 2)
            .unwrap();
        let stats = player_stats(&w);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].territory, 19);
        assert_eq!(stats[0].border, 12);
        assert_eq!(stats[0].regions, 1);
        assert_eq!(stats[0].buildings, 1);
        assert_eq!(stats[1].territory, 0);
    }

    #[test]
    fn test_ascii_dump_shape() {
        let mut w = world();
        let p1 = PlayerId::new(1).unwrap();
        w.place_building_with_radius(BuildingKind::Headquarters, MapPoint::new(5, 5), p1, 2)
            .unwrap();
        let dump = render_ascii(&w);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 12);
        assert!(lines[1].starts_with(' '));
        assert_eq!(lines[5].matches('H').count(), 1);
        assert_eq!(dump.matches('#').count(), 12);
        assert_eq!(dump.matches('1').count(), 6);
    }
}
