mod common;

use common::{player, WorldBuilder};
use landclaim_core::{BorderLogic, TerritoryError};
use landclaim_data::{BuildingKind, MapPoint, TerritoryEvent};
use proptest::prelude::*;
use proptest::sample::Index;

const SIDE: u16 = 24;

#[derive(Debug, Clone)]
enum Op {
    Place { x: u16, y: u16, owner: u8, radius: u16 },
    Remove(Index),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..SIDE, 0..SIDE, 1u8..=3, 1u16..8)
            .prop_map(|(x, y, owner, radius)| Op::Place { x, y, owner, radius }),
        1 => any::<Index>().prop_map(Op::Remove),
    ]
}

/// Applies `ops` to a fresh world, skipping placements on occupied points.
/// Returns the world and the events it accepted.
fn apply_ops(ops: &[Op]) -> (landclaim_core::World, Vec<TerritoryEvent>) {
    let mut world = WorldBuilder::new().with_size(SIDE, SIDE).with_players(3).build();
    let mut accepted = Vec::new();
    for op in ops {
        let event = match op {
            Op::Place { x, y, owner, radius } => TerritoryEvent::Place {
                kind: BuildingKind::Barracks,
                pos: MapPoint::new(*x, *y),
                owner: player(*owner),
                radius: Some(*radius),
            },
            Op::Remove(idx) => {
                let placed: Vec<MapPoint> = world.buildings().map(|b| b.pos).collect();
                if placed.is_empty() {
                    continue;
                }
                TerritoryEvent::Remove {
                    pos: placed[idx.index(placed.len())],
                }
            }
        };
        match world.apply(&event) {
            Ok(_) => accepted.push(event),
            Err(TerritoryError::Occupied { .. }) => {}
            Err(e) => panic!("unexpected rejection: {e}"),
        }
    }
    (world, accepted)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn incremental_ownership_equals_cold_recompute(ops in prop::collection::vec(arb_op(), 1..40)) {
        let (world, _) = apply_ops(&ops);
        prop_assert!(world.verify_consistency().is_empty());
    }

    #[test]
    fn replaying_accepted_events_reproduces_ownership(ops in prop::collection::vec(arb_op(), 1..40)) {
        let (world, events) = apply_ops(&ops);
        let mut replayed = WorldBuilder::new().with_size(SIDE, SIDE).with_players(3).build();
        replayed.replay(&events).unwrap();
        prop_assert_eq!(world.ownership(), replayed.ownership());
    }

    #[test]
    fn border_nodes_touch_foreign_points(ops in prop::collection::vec(arb_op(), 1..30)) {
        let (world, _) = apply_ops(&ops);
        for pt in world.extent().points() {
            match world.owner(pt) {
                Some(owner) => {
                    let foreign = world
                        .extent()
                        .points()
                        .filter(|&n| world.calc_distance(pt, n) == 1)
                        .any(|n| world.owner(n) != Some(owner));
                    prop_assert_eq!(world.is_border_node(pt, owner), foreign);
                }
                None => {
                    for p in 1..=3 {
                        prop_assert!(!world.is_border_node(pt, player(p)));
                    }
                }
            }
        }
    }
}
