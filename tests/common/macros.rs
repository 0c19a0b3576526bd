/// Asserts that the point at `(x, y)` is owned by the given player number.
#[macro_export]
macro_rules! assert_owner {
    ($world:expr, $x:expr, $y:expr, $player:expr) => {
        let pt = landclaim_data::MapPoint::new($x, $y);
        assert_eq!(
            $world.owner(pt),
            landclaim_data::PlayerId::new($player),
            "Owner mismatch at {}",
            pt
        );
    };
}

/// Asserts that the point at `(x, y)` is unowned.
#[macro_export]
macro_rules! assert_unowned {
    ($world:expr, $x:expr, $y:expr) => {
        let pt = landclaim_data::MapPoint::new($x, $y);
        assert_eq!($world.owner(pt), None, "Point {} should be unowned", pt);
    };
}

/// Asserts that incremental ownership matches a recompute from scratch.
#[macro_export]
macro_rules! assert_consistent {
    ($world:expr) => {
        let diff = $world.verify_consistency();
        assert!(
            diff.is_empty(),
            "{} points differ from a full recompute, first: {:?}",
            diff.len(),
            diff.first()
        );
    };
}
