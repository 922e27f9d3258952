//! Known still lifes, oscillators and spaceships driven through the stepper.

#![allow(clippy::unwrap_used)]

use life_engine::{Grid, advance};

fn grid_from(rows: &[&str]) -> Grid {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.len());
    let mut grid = Grid::new(height, width).unwrap();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.chars().enumerate() {
            grid.set_alive(r, c, cell == '#');
        }
    }
    grid
}

/// Advance `grid` by `steps` generations using a second buffer.
fn run(grid: Grid, steps: usize) -> Grid {
    let mut current = grid;
    let mut next = Grid::new(current.height(), current.width()).unwrap();
    for _ in 0..steps {
        advance(&current, &mut next).unwrap();
        std::mem::swap(&mut current, &mut next);
    }
    current
}

#[test]
fn blinker_oscillates_with_period_two() {
    let vertical = grid_from(&[
        ".....",
        "..#..",
        "..#..",
        "..#..",
        ".....",
    ]);
    let horizontal = grid_from(&[
        ".....",
        ".....",
        ".###.",
        ".....",
        ".....",
    ]);

    assert_eq!(run(vertical.clone(), 1), horizontal);
    assert_eq!(run(vertical.clone(), 2), vertical);
    assert_eq!(run(vertical.clone(), 7), horizontal);
    assert_eq!(run(vertical.clone(), 10), vertical);
}

#[test]
fn block_is_a_still_life() {
    let block = grid_from(&[
        "....",
        ".##.",
        ".##.",
        "....",
    ]);
    assert_eq!(run(block.clone(), 5), block);
}

#[test]
fn block_in_a_corner_survives_clamped_edges() {
    let block = grid_from(&[
        "##.",
        "##.",
        "...",
    ]);
    assert_eq!(run(block.clone(), 3), block);
}

#[test]
fn beehive_is_a_still_life() {
    let beehive = grid_from(&[
        "......",
        "..##..",
        ".#..#.",
        "..##..",
        "......",
    ]);
    assert_eq!(run(beehive.clone(), 4), beehive);
}

#[test]
fn toad_oscillates_with_period_two() {
    let phase_a = grid_from(&[
        "......",
        "......",
        "..###.",
        ".###..",
        "......",
        "......",
    ]);
    let phase_b = grid_from(&[
        "......",
        "...#..",
        ".#..#.",
        ".#..#.",
        "..#...",
        "......",
    ]);
    assert_eq!(run(phase_a.clone(), 1), phase_b);
    assert_eq!(run(phase_a.clone(), 2), phase_a);
}

#[test]
fn glider_translates_diagonally_every_four_steps() {
    let start = grid_from(&[
        ".#......",
        "..#.....",
        "###.....",
        "........",
        "........",
        "........",
        "........",
        "........",
    ]);
    let shifted = grid_from(&[
        "........",
        "..#.....",
        "...#....",
        ".###....",
        "........",
        "........",
        "........",
        "........",
    ]);
    assert_eq!(run(start, 4), shifted);
}

#[test]
fn glider_dies_into_a_block_at_the_edge() {
    // With no wrap-around a glider reaching the corner settles into a block.
    let start = grid_from(&[
        "......",
        "......",
        "......",
        "...#..",
        "....#.",
        "..###.",
    ]);
    let settled = run(start, 12);
    let block = grid_from(&[
        "......",
        "......",
        "......",
        "......",
        "...##.",
        "...##.",
    ]);
    assert_eq!(settled, block);
}

#[test]
fn lonely_cells_die() {
    let sparse = grid_from(&[
        "#...#",
        ".....",
        "..#..",
        ".....",
        "#...#",
    ]);
    assert_eq!(run(sparse, 1).live_count(), 0);
}
