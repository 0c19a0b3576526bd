mod common;

use common::{player, WorldBuilder};
use landclaim_core::radius::ring_points;
use landclaim_core::BorderLogic;
use landclaim_data::{BuildingKind, MapPoint};

#[test]
fn test_single_hq_owns_its_disc_and_nothing_else() {
    let hq = MapPoint::new(32, 32);
    let world = WorldBuilder::new()
        .with_size(64, 64)
        .with_players(1)
        .with_building(BuildingKind::Headquarters, 32, 32, 1)
        .build();
    let radius = world.config.buildings.headquarters_radius as u32;
    let p1 = player(1);

    for pt in world.points_in_radius(hq, radius) {
        assert!(world.is_player_territory(pt), "{pt} should be owned");
        assert_eq!(world.owner(pt), Some(p1));
    }
    for pt in ring_points(&world.extent(), hq, radius) {
        assert!(world.is_border_node(pt, p1), "{pt} at radius should be border");
    }
    for pt in ring_points(&world.extent(), hq, radius + 1) {
        assert!(!world.is_player_territory(pt), "{pt} beyond radius should be unowned");
    }

    let inner = world.points_in_radius(hq, radius - 1);
    assert!(inner.iter().all(|&pt| !world.is_border_node(pt, p1)));
    assert_eq!(world.border_nodes(p1).len(), 6 * radius as usize);
    assert_eq!(world.ownership().territory_size(p1), 1 + 3 * 9 * 10);
}

#[test]
fn test_hq_in_corner_wraps_across_both_seams() {
    let world = WorldBuilder::new()
        .with_size(20, 20)
        .with_players(1)
        .with_building_radius(BuildingKind::Headquarters, 0, 0, 1, 4)
        .build();

    assert_owner!(world, 18, 0, 1);
    assert_owner!(world, 0, 18, 1);
    assert_owner!(world, 19, 19, 1);
    assert_unowned!(world, 10, 10);
    assert_eq!(world.territory_regions(player(1)), 1);
    assert_consistent!(world);
}

#[test]
fn test_border_flag_follows_ownership_changes() {
    let mut world = WorldBuilder::new()
        .with_size(40, 40)
        .with_players(2)
        .with_building_radius(BuildingKind::Headquarters, 10, 10, 1, 4)
        .build();
    let p1 = player(1);
    let inner = MapPoint::new(12, 10);
    assert!(!world.is_border_node(inner, p1));

    // The barracks takes (13, 10) on the tie, so (12, 10) now touches enemy
    // territory.
    world
        .place_building_with_radius(BuildingKind::Barracks, MapPoint::new(16, 10), player(2), 3)
        .unwrap();
    assert_owner!(world, 13, 10, 2);
    assert!(world.is_border_node(inner, p1));
    assert!(!world.is_border_node(inner, player(2)));
}

#[test]
fn test_radius_query_through_world() {
    let world = WorldBuilder::new().with_size(30, 30).build();
    let center = world.point(15, 15).unwrap();
    let disc = world.points_in_radius(center, 3);
    assert_eq!(disc.len(), 37);
    assert_eq!(disc[0], center);
    assert!(disc.iter().all(|&pt| world.calc_distance(center, pt) <= 3));
    assert_eq!(world.points_in_radius(center, 0), vec![center]);
}
