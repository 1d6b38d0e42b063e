// Host-side tests for the card layout table: exact tiling, cycle
// behavior, and the compact flag.

use site_core::constants::{COMPACT_AREA_MAX, GRID_COLS, GRID_ROWS};
use site_core::{expand, LayoutCycle, LAYOUTS};

#[test]
fn every_layout_tiles_the_grid_exactly() {
    for (i, spec) in LAYOUTS.iter().enumerate() {
        let cells = expand(spec);
        let mut painted = [[false; 18]; 9];

        let mut total = 0;
        for cell in &cells {
            total += cell.area();
            for row in cell.row..cell.row + cell.h {
                for col in cell.col..cell.col + cell.w {
                    assert!(
                        !painted[row as usize][col as usize],
                        "layout {i} overlaps at ({col}, {row})"
                    );
                    painted[row as usize][col as usize] = true;
                }
            }
        }

        assert_eq!(total, GRID_COLS * GRID_ROWS, "layout {i} area mismatch");
        for row in 0..GRID_ROWS as usize {
            for col in 0..GRID_COLS as usize {
                assert!(painted[row][col], "layout {i} leaves ({col}, {row}) empty");
            }
        }
    }
}

#[test]
fn splits_are_strictly_ordered() {
    for (i, spec) in LAYOUTS.iter().enumerate() {
        assert!(spec.row_split > 0 && spec.row_split < GRID_ROWS, "layout {i}");
        for splits in [spec.top_splits, spec.bottom_splits] {
            assert!(
                splits[0] > 0 && splits[0] < splits[1] && splits[1] < GRID_COLS,
                "layout {i} splits {splits:?}"
            );
        }
    }
}

#[test]
fn cycle_returns_to_start_after_a_full_pass() {
    let mut cycle = LayoutCycle::new();
    let start = cycle.index();

    let mut seen = Vec::new();
    for _ in 0..LAYOUTS.len() {
        seen.push(cycle.advance());
    }

    assert_eq!(cycle.index(), start);
    // Forward only: each advance moves to the next index, no jumps.
    for (step, &idx) in seen.iter().enumerate() {
        assert_eq!(idx, (start + step + 1) % LAYOUTS.len());
    }
}

#[test]
fn compact_flag_is_a_pure_function_of_area() {
    let mut any_compact = false;
    for spec in &LAYOUTS {
        let cells = expand(spec);
        for cell in &cells {
            assert_eq!(cell.is_compact(), cell.area() <= COMPACT_AREA_MAX);
            any_compact |= cell.is_compact();
        }
        // A layout never collapses entirely into dense cards.
        assert!(cells.iter().any(|c| !c.is_compact()));
    }
    assert!(any_compact, "table never produces a compact placement");
}
