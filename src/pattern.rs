//! Named seed-pattern catalogue.
//!
//! Each pattern is a bounding box plus the coordinates of its initially
//! live cells. Lookup failures are reported with the full list of names
//! so a typo aborts the launch with something actionable.

use crate::error::{LifeError, Result};
use crate::grid::Grid;

#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Materialize the pattern as a full grid on the coordinator.
    pub fn build_grid(&self) -> Grid {
        let mut grid = Grid::empty(self.height, self.width);
        for &(row, col) in self.cells {
            grid.set(row, col, true);
        }
        grid
    }
}

pub fn find(name: &str) -> Result<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| LifeError::UnknownPattern {
            name: name.to_string(),
            available: PATTERNS
                .iter()
                .map(|p| p.name)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "blinker",
        height: 5,
        width: 5,
        cells: &[(2, 1), (2, 2), (2, 3)],
    },
    Pattern {
        name: "toad",
        height: 6,
        width: 6,
        cells: &[(2, 2), (2, 3), (2, 4), (3, 3), (3, 4), (3, 5)],
    },
    Pattern {
        name: "acorn",
        height: 100,
        width: 100,
        cells: &[
            (51, 52),
            (52, 54),
            (53, 51),
            (53, 52),
            (53, 55),
            (53, 56),
            (53, 57),
        ],
    },
    Pattern {
        name: "beacon",
        height: 6,
        width: 6,
        cells: &[
            (1, 3),
            (1, 4),
            (2, 3),
            (2, 4),
            (3, 1),
            (3, 2),
            (4, 1),
            (4, 2),
        ],
    },
    Pattern {
        name: "boat",
        height: 5,
        width: 5,
        cells: &[(1, 1), (1, 2), (2, 1), (2, 3), (3, 2)],
    },
    Pattern {
        name: "glider",
        height: 100,
        width: 90,
        cells: &[(1, 1), (2, 2), (2, 3), (3, 1), (3, 2)],
    },
    Pattern {
        name: "glider_gun",
        height: 400,
        width: 400,
        cells: &[
            (51, 76),
            (52, 74),
            (52, 76),
            (53, 64),
            (53, 65),
            (53, 72),
            (53, 73),
            (53, 86),
            (53, 87),
            (54, 63),
            (54, 67),
            (54, 72),
            (54, 73),
            (54, 86),
            (54, 87),
            (55, 52),
            (55, 53),
            (55, 62),
            (55, 68),
            (55, 72),
            (55, 73),
            (56, 52),
            (56, 53),
            (56, 62),
            (56, 66),
            (56, 68),
            (56, 69),
            (56, 74),
            (56, 76),
            (57, 62),
            (57, 68),
            (57, 76),
            (58, 63),
            (58, 67),
            (59, 64),
            (59, 65),
        ],
    },
    Pattern {
        name: "space_ship",
        height: 25,
        width: 25,
        cells: &[
            (11, 13),
            (11, 14),
            (12, 11),
            (12, 12),
            (12, 14),
            (12, 15),
            (13, 11),
            (13, 12),
            (13, 13),
            (13, 14),
            (14, 12),
            (14, 13),
        ],
    },
    Pattern {
        name: "die_hard",
        height: 100,
        width: 100,
        cells: &[
            (51, 57),
            (52, 51),
            (52, 52),
            (53, 52),
            (53, 56),
            (53, 57),
            (53, 58),
        ],
    },
    Pattern {
        name: "pulsar",
        height: 17,
        width: 17,
        cells: &[
            (2, 4),
            (2, 5),
            (2, 6),
            (7, 4),
            (7, 5),
            (7, 6),
            (9, 4),
            (9, 5),
            (9, 6),
            (14, 4),
            (14, 5),
            (14, 6),
            (2, 10),
            (2, 11),
            (2, 12),
            (7, 10),
            (7, 11),
            (7, 12),
            (9, 10),
            (9, 11),
            (9, 12),
            (14, 10),
            (14, 11),
            (14, 12),
            (4, 2),
            (5, 2),
            (6, 2),
            (4, 7),
            (5, 7),
            (6, 7),
            (4, 9),
            (5, 9),
            (6, 9),
            (4, 14),
            (5, 14),
            (6, 14),
            (10, 2),
            (11, 2),
            (12, 2),
            (10, 7),
            (11, 7),
            (12, 7),
            (10, 9),
            (11, 9),
            (12, 9),
            (10, 14),
            (11, 14),
            (12, 14),
        ],
    },
    Pattern {
        name: "floraison",
        height: 40,
        width: 40,
        cells: &[
            (19, 18),
            (19, 19),
            (19, 20),
            (20, 17),
            (20, 19),
            (20, 21),
            (21, 18),
            (21, 19),
            (21, 20),
        ],
    },
    Pattern {
        name: "block_switch_engine",
        height: 400,
        width: 400,
        cells: &[
            (201, 202),
            (201, 203),
            (202, 202),
            (202, 203),
            (211, 203),
            (212, 204),
            (212, 202),
            (214, 204),
            (214, 201),
            (215, 201),
            (215, 202),
            (216, 201),
        ],
    },
    Pattern {
        name: "u",
        height: 200,
        width: 200,
        cells: &[
            (101, 101),
            (102, 102),
            (103, 102),
            (103, 101),
            (104, 103),
            (105, 103),
            (105, 102),
            (105, 101),
            (105, 105),
            (103, 105),
            (102, 105),
            (101, 105),
            (101, 104),
        ],
    },
    Pattern {
        name: "flat",
        height: 200,
        width: 400,
        cells: &[
            (80, 200),
            (81, 200),
            (82, 200),
            (83, 200),
            (84, 200),
            (85, 200),
            (86, 200),
            (87, 200),
            (89, 200),
            (90, 200),
            (91, 200),
            (92, 200),
            (93, 200),
            (97, 200),
            (98, 200),
            (99, 200),
            (106, 200),
            (107, 200),
            (108, 200),
            (109, 200),
            (110, 200),
            (111, 200),
            (112, 200),
            (114, 200),
            (115, 200),
            (116, 200),
            (117, 200),
            (118, 200),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::{find, PATTERNS};

    #[test]
    fn every_pattern_fits_its_bounding_box() {
        for pattern in PATTERNS {
            for &(row, col) in pattern.cells {
                assert!(
                    row < pattern.height && col < pattern.width,
                    "{}: ({row}, {col}) outside {}x{}",
                    pattern.name,
                    pattern.height,
                    pattern.width,
                );
            }
        }
    }

    #[test]
    fn build_grid_sets_exactly_the_listed_cells() {
        let pattern = find("blinker").unwrap();
        let grid = pattern.build_grid();
        assert_eq!(grid.population(), 3);
        assert!(grid.get(2, 1) && grid.get(2, 2) && grid.get(2, 3));
    }

    #[test]
    fn unknown_name_lists_alternatives() {
        let err = find("blinkr").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("blinkr"));
        assert!(msg.contains("blinker"));
        assert!(msg.contains("glider_gun"));
    }
}
