use cubes::level::*;

#[test]
fn default_level_block_count() {
    assert_eq!(default_blocks().len(), 19);
}

#[test]
fn last_row_is_solid_floor() {
    let blocks = default_blocks();
    let floor: Vec<_> = blocks.iter().filter(|b| b.sprite.y == 300.0).collect();
    assert_eq!(floor.len(), LEVEL_COLUMNS);
    for (col, block) in floor.iter().enumerate() {
        assert_eq!(block.sprite.x, col as f32 * 50.0);
        assert_eq!(block.sprite.y, (LEVEL_ROWS - 1) as f32 * 50.0);
        assert_eq!((block.sprite.width(), block.sprite.height()), (50.0, 50.0));
    }
}

#[test]
fn blocks_come_out_row_major() {
    let coords: Vec<(f32, f32)> = default_blocks()
        .iter()
        .take(3)
        .map(|b| (b.sprite.x, b.sprite.y))
        .collect();
    assert_eq!(coords, vec![(400.0, 200.0), (250.0, 250.0), (750.0, 250.0)]);
}

#[test]
fn custom_grid_and_cell_size() {
    let grid = vec![
        vec![Cell::Empty, Cell::Block],
        vec![Cell::Block, Cell::Empty],
    ];
    let blocks = build_blocks(&grid, 20.0, 10.0);
    let coords: Vec<(f32, f32)> = blocks.iter().map(|b| (b.sprite.x, b.sprite.y)).collect();
    assert_eq!(coords, vec![(20.0, 0.0), (0.0, 10.0)]);
    assert_eq!(blocks[0].sprite.width(), 20.0);
}

#[test]
fn empty_grid_has_no_blocks() {
    let grid = [[Cell::Empty; 4]; 3];
    assert!(build_blocks(&grid, 50.0, 50.0).is_empty());
}
