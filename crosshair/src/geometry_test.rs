use super::*;
use crate::consts::GRID_SIZE;

// =============================================================
// Helpers
// =============================================================

fn m(length: usize, offset: usize, thickness: usize) -> AxisMeasurement {
    AxisMeasurement { length, offset, thickness }
}

/// Cells `(x, 15)` for every `x` in `xs`.
fn row(xs: impl IntoIterator<Item = usize>) -> Vec<(usize, usize)> {
    xs.into_iter().map(|x| (x, CENTER)).collect()
}

/// Cells `(15, y)` for every `y` in `ys`.
fn column(ys: impl IntoIterator<Item = usize>) -> Vec<(usize, usize)> {
    ys.into_iter().map(|y| (CENTER, y)).collect()
}

/// Deterministic xorshift stream for grid fuzzing.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn grid(&mut self, density_percent: u64) -> Grid {
        let mut grid = Grid::new();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                if self.next() % 100 < density_percent {
                    grid.set(x, y, true);
                }
            }
        }
        grid
    }
}

// =============================================================
// scan_outward
// =============================================================

#[test]
fn scan_counts_matching_run() {
    let grid = Grid::with_cells(row(17..=19));
    assert_eq!(scan_outward(&grid, Axis::Horizontal, Direction::Positive, 1, |on| !on), 1);
    assert_eq!(scan_outward(&grid, Axis::Horizontal, Direction::Positive, 2, |on| on), 3);
    assert_eq!(scan_outward(&grid, Axis::Horizontal, Direction::Negative, 2, |on| on), 0);
}

#[test]
fn scan_stops_at_grid_edge() {
    let grid = Grid::new();
    assert_eq!(scan_outward(&grid, Axis::Vertical, Direction::Negative, 1, |on| !on), CENTER);
    assert_eq!(scan_outward(&grid, Axis::Vertical, Direction::Positive, 1, |on| !on), CENTER);
}

#[test]
fn scan_starting_past_edge_is_zero() {
    let grid = Grid::new();
    assert_eq!(scan_outward(&grid, Axis::Horizontal, Direction::Positive, CENTER + 1, |on| !on), 0);
    assert_eq!(scan_outward(&grid, Axis::Horizontal, Direction::Negative, CENTER + 5, |on| !on), 0);
}

#[test]
fn scan_vertical_walks_column() {
    let grid = Grid::with_cells(column(CENTER + 1..=CENTER + 4));
    assert_eq!(scan_outward(&grid, Axis::Vertical, Direction::Positive, 1, |on| on), 4);
    assert_eq!(scan_outward(&grid, Axis::Horizontal, Direction::Positive, 1, |on| on), 0);
}

// =============================================================
// measure_axis
// =============================================================

#[test]
fn empty_grid_measures_zero_with_unit_thickness() {
    let grid = Grid::new();
    assert_eq!(measure_axis(&grid, Axis::Horizontal), m(0, 0, 1));
    assert_eq!(measure_axis(&grid, Axis::Vertical), m(0, 0, 1));
}

#[test]
fn center_dot_alone_is_not_a_line() {
    let grid = Grid::with_cells([(CENTER, CENTER)]);
    assert_eq!(measure_axis(&grid, Axis::Horizontal), m(0, 0, 1));
    assert_eq!(measure_axis(&grid, Axis::Vertical), m(0, 0, 1));
}

#[test]
fn one_sided_horizontal_run() {
    let grid = Grid::with_cells(row(17..=19));
    assert_eq!(measure_axis(&grid, Axis::Horizontal), m(3, 1, 1));
    assert_eq!(measure_axis(&grid, Axis::Vertical), m(0, 0, 1));
}

#[test]
fn upward_vertical_run() {
    let grid = Grid::with_cells(column(10..=12));
    assert_eq!(measure_axis(&grid, Axis::Vertical), m(3, 2, 1));
}

#[test]
fn tighter_gap_wins() {
    // Left arm starts 3 cells out, right arm 4 cells out.
    let mut cells = row(8..=12);
    cells.extend(row(19..=21));
    let grid = Grid::with_cells(cells);
    let h = measure_axis(&grid, Axis::Horizontal);
    assert_eq!(h.offset, 2);
    // Only the left arm is drawn at distance 3.
    assert_eq!(h.length, 5);
}

#[test]
fn longer_arm_wins() {
    let mut cells = row(10..=13);
    cells.extend(row(17..=18));
    let grid = Grid::with_cells(cells);
    assert_eq!(measure_axis(&grid, Axis::Horizontal), m(4, 1, 1));
}

#[test]
fn symmetric_plus() {
    let mut cells = Vec::new();
    cells.extend(row(9..=12));
    cells.extend(row(18..=21));
    cells.extend(column(9..=12));
    cells.extend(column(18..=21));
    let grid = Grid::with_cells(cells);
    assert_eq!(measure_axis(&grid, Axis::Horizontal), m(4, 2, 1));
    assert_eq!(measure_axis(&grid, Axis::Vertical), m(4, 2, 1));
}

#[test]
fn three_wide_stroke() {
    let cells = (17..=20).flat_map(|x| (CENTER - 1..=CENTER + 1).map(move |y| (x, y)));
    let grid = Grid::with_cells(cells);
    assert_eq!(measure_axis(&grid, Axis::Horizontal), m(4, 1, 3));
}

#[test]
fn two_wide_vertical_stroke() {
    let cells = (CENTER + 2..=CENTER + 6).flat_map(|y| [(CENTER, y), (CENTER + 1, y)]);
    let grid = Grid::with_cells(cells);
    assert_eq!(measure_axis(&grid, Axis::Vertical), m(5, 1, 2));
}

#[test]
fn thickness_sampled_on_positive_side_only() {
    let cells = (10..=13).flat_map(|x| (CENTER - 1..=CENTER + 1).map(move |y| (x, y)));
    let grid = Grid::with_cells(cells);
    let h = measure_axis(&grid, Axis::Horizontal);
    assert_eq!(h.length, 4);
    assert_eq!(h.thickness, 1);
}

#[test]
fn thickness_window_ignores_cells_off_axis_start() {
    // A stroke that only thickens further out is still thin at its start.
    let mut cells = row(17..=22);
    cells.extend([(20, CENTER - 1), (20, CENTER + 1)]);
    let grid = Grid::with_cells(cells);
    assert_eq!(measure_axis(&grid, Axis::Horizontal), m(6, 1, 1));
}

#[test]
fn run_touching_center_has_zero_offset() {
    let grid = Grid::with_cells(row(16..=18));
    assert_eq!(measure_axis(&grid, Axis::Horizontal), m(3, 0, 1));
}

#[test]
fn run_reaching_edge_counts_outermost_cell() {
    let grid = Grid::with_cells(row(CENTER + 1..GRID_SIZE));
    assert_eq!(measure_axis(&grid, Axis::Horizontal), m(CENTER, 0, 1));
}

#[test]
fn single_cell_on_far_edge() {
    let grid = Grid::with_cells([(0, CENTER)]);
    assert_eq!(measure_axis(&grid, Axis::Horizontal), m(1, CENTER - 1, 1));
}

#[test]
fn cells_off_axis_are_ignored() {
    let grid = Grid::with_cells([(0, 0), (3, 7), (29, 2)]);
    assert_eq!(measure_axis(&grid, Axis::Horizontal), m(0, 0, 1));
    assert_eq!(measure_axis(&grid, Axis::Vertical), m(0, 0, 1));
}

#[test]
fn measurements_stay_in_range_for_random_grids() {
    let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);
    for density in [5, 20, 50, 80, 100] {
        for _ in 0..50 {
            let grid = rng.grid(density);
            for axis in Axis::ALL {
                let got = measure_axis(&grid, axis);
                assert!((1..=3).contains(&got.thickness), "{axis:?} {got:?}");
                assert!(got.offset < CENTER, "{axis:?} {got:?}");
                assert!(got.offset + got.length <= CENTER, "{axis:?} {got:?}");
            }
        }
    }
}

#[test]
fn full_grid_is_solid_line() {
    let grid = XorShift(1).grid(100);
    assert_eq!(grid.count_on(), GRID_SIZE * GRID_SIZE);
    assert_eq!(measure_axis(&grid, Axis::Horizontal), m(CENTER, 0, 3));
    assert_eq!(measure_axis(&grid, Axis::Vertical), m(CENTER, 0, 3));
}

// =============================================================
// AxisMeasurement / CrosshairGeometry
// =============================================================

#[test]
fn average_rounds_down() {
    assert_eq!(AxisMeasurement::average(m(3, 1, 1), m(0, 0, 1)), m(1, 0, 1));
    assert_eq!(AxisMeasurement::average(m(5, 3, 2), m(4, 2, 3)), m(4, 2, 2));
    assert_eq!(AxisMeasurement::average(m(6, 2, 1), m(6, 2, 1)), m(6, 2, 1));
}

#[test]
fn measurement_display() {
    assert_eq!(m(3, 1, 2).to_string(), "Len=3, Off=1, Thick=2");
}

#[test]
fn measurement_serializes_fields() {
    let json = serde_json::to_value(m(4, 2, 1)).unwrap();
    assert_eq!(json, serde_json::json!({ "length": 4, "offset": 2, "thickness": 1 }));
}

#[test]
fn axis_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Axis::Horizontal).unwrap(), "\"horizontal\"");
    assert_eq!(serde_json::to_string(&Axis::Vertical).unwrap(), "\"vertical\"");
}

#[test]
fn geometry_measures_both_axes() {
    let mut cells = row(17..=19);
    cells.push((CENTER, CENTER));
    let geometry = CrosshairGeometry::measure(&Grid::with_cells(cells));
    assert!(geometry.center_dot);
    assert_eq!(geometry.axis(Axis::Horizontal), m(3, 1, 1));
    assert_eq!(geometry.axis(Axis::Vertical), m(0, 0, 1));
    assert_eq!(geometry.line(), m(1, 0, 1));
}
