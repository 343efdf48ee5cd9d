use ai_nav::{BlockPos, Path, Vec3};

fn three_nodes() -> Path {
    Path::from_positions([
        BlockPos::new(0, 0, 0),
        BlockPos::new(1, 0, 0),
        BlockPos::new(2, 0, 0),
    ])
}

#[test]
fn path_cursor_reports_start_current_last_and_finished() {
    let mut path = three_nodes();
    assert!(path.is_start());
    assert!(!path.is_finished());
    assert_eq!(path.last_node(), None);
    assert_eq!(path.current_node().map(|n| n.pos), Some(BlockPos::new(0, 0, 0)));

    path.advance();
    assert!(!path.is_start());
    assert_eq!(path.last_node().map(|n| n.pos), Some(BlockPos::new(0, 0, 0)));
    assert_eq!(path.current_node().map(|n| n.pos), Some(BlockPos::new(1, 0, 0)));

    path.advance();
    path.advance();
    assert!(path.is_finished());
    assert_eq!(path.current_node(), None);
    assert_eq!(path.last_node().map(|n| n.pos), Some(BlockPos::new(2, 0, 0)));

    path.advance();
    assert_eq!(path.next_index(), 3);
}

#[test]
fn empty_path_is_both_start_and_finished() {
    let path = Path::new(Vec::new());
    assert!(path.is_start());
    assert!(path.is_finished());
    assert_eq!(path.target(), None);
}

#[test]
fn block_distance_is_measured_from_center_and_strict() {
    let door = BlockPos::new(0, 0, 0);
    assert!(door.is_within_distance(Vec3::new(2.4, 0.5, 0.5), 2.0));
    assert!(!door.is_within_distance(Vec3::new(2.5, 0.5, 0.5), 2.0));
    assert!(!door.is_within_distance(Vec3::new(3.0, 0.5, 0.5), 2.0));
}

#[test]
fn packed_positions_differ_per_axis() {
    let a = BlockPos::new(1, 2, 3).as_packed();
    assert_ne!(a, BlockPos::new(3, 2, 1).as_packed());
    assert_ne!(a, BlockPos::new(1, 3, 2).as_packed());
    assert_eq!(a, BlockPos::new(1, 2, 3).as_packed());
}
