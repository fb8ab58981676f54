//! Puzzle piece definitions and coordinate types.
//!
//! Each piece is a named set of unit cube positions, normalized so the
//! minimum coordinates are at the origin. The catalogue covers the monocube
//! through the pentacubes: planar pieces lie in the z = 0 plane, the
//! non-planar pentacubes are a flat base plus cubes in the z = 1 layer.
//! Chiral pairs (`L1`/`J1`, ...) are exact mirror images; the solver treats
//! the two hands as unrelated pieces.

/// A 3D coordinate representing a unit cube position.
pub type Coord = (i32, i32, i32);

/// A named polycube.
pub struct Piece {
    pub name: &'static str,
    pub cubes: &'static [Coord],
}

impl Piece {
    /// Axis-aligned bounding box of the unrotated offsets.
    pub fn bounds(&self) -> (Coord, Coord) {
        let mut lo = self.cubes[0];
        let mut hi = self.cubes[0];
        for &(x, y, z) in self.cubes {
            lo = (lo.0.min(x), lo.1.min(y), lo.2.min(z));
            hi = (hi.0.max(x), hi.1.max(y), hi.2.max(z));
        }
        (lo, hi)
    }
}

/// Mirror-image piece pairs in the catalogue.
pub const CHIRAL_PAIRS: &[(&str, &str)] = &[
    ("4<", "4>"),
    ("L1", "J1"),
    ("L2", "J2"),
    ("L4", "J4"),
    ("N1", "S1"),
    ("N2", "S2"),
    ("V1", "V2"),
];

/// The closed piece catalogue. Names must match the problem file exactly.
pub static PIECES: &[Piece] = &[
    // monocube and domino
    Piece { name: "1_", cubes: &[(0, 0, 0)] },
    Piece { name: "2_", cubes: &[(0, 0, 0), (1, 0, 0)] },
    // trominoes
    Piece { name: "3I", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0)] },
    Piece { name: "3L", cubes: &[(0, 0, 0), (1, 0, 0), (0, 1, 0)] },
    // planar tetrominoes
    Piece { name: "4I", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)] },
    Piece { name: "4O", cubes: &[(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 1, 0)] },
    Piece { name: "4L", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 1, 0)] },
    Piece { name: "4S", cubes: &[(1, 0, 0), (2, 0, 0), (0, 1, 0), (1, 1, 0)] },
    Piece { name: "4T", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0)] },
    // solid tetracubes: tripod and the two screws
    Piece { name: "4^", cubes: &[(0, 0, 0), (1, 0, 0), (0, 1, 0), (0, 0, 1)] },
    Piece { name: "4<", cubes: &[(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 0, 1)] },
    Piece { name: "4>", cubes: &[(0, 0, 0), (1, 0, 0), (0, 1, 0), (0, 1, 1)] },
    // pentominoes
    Piece { name: "F_", cubes: &[(1, 0, 0), (2, 0, 0), (0, 1, 0), (1, 1, 0), (1, 2, 0)] },
    Piece { name: "I_", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0), (4, 0, 0)] },
    Piece { name: "L_", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0), (0, 1, 0)] },
    Piece { name: "N_", cubes: &[(0, 0, 0), (0, 1, 0), (1, 1, 0), (1, 2, 0), (1, 3, 0)] },
    Piece { name: "P_", cubes: &[(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 1, 0), (0, 2, 0)] },
    Piece { name: "T_", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0), (1, 2, 0)] },
    Piece { name: "U_", cubes: &[(0, 0, 0), (2, 0, 0), (0, 1, 0), (1, 1, 0), (2, 1, 0)] },
    Piece { name: "V_", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 1, 0), (0, 2, 0)] },
    Piece { name: "W_", cubes: &[(0, 0, 0), (1, 0, 0), (1, 1, 0), (2, 1, 0), (2, 2, 0)] },
    Piece { name: "X_", cubes: &[(1, 0, 0), (0, 1, 0), (1, 1, 0), (2, 1, 0), (1, 2, 0)] },
    Piece { name: "Y_", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0), (1, 1, 0)] },
    Piece { name: "Z_", cubes: &[(0, 0, 0), (1, 0, 0), (1, 1, 0), (1, 2, 0), (2, 2, 0)] },
    // solid pentacubes
    Piece { name: "Q_", cubes: &[(0, 0, 0), (1, 0, 0), (0, 1, 0), (1, 1, 0), (0, 0, 1)] },
    Piece { name: "A_", cubes: &[(0, 0, 0), (1, 0, 0), (0, 1, 0), (0, 0, 1), (1, 0, 1)] },
    Piece { name: "T1", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0), (1, 0, 1)] },
    Piece { name: "T2", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0), (1, 1, 1)] },
    Piece { name: "L3", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 1, 0), (0, 0, 1)] },
    // solid pentacube chiral pairs
    Piece { name: "L1", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 1, 0), (2, 0, 1)] },
    Piece { name: "J1", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0), (0, 0, 1)] },
    Piece { name: "L2", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 1, 0), (1, 0, 1)] },
    Piece { name: "J2", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0), (1, 0, 1)] },
    Piece { name: "L4", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (0, 1, 0), (0, 1, 1)] },
    Piece { name: "J4", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (2, 1, 0), (2, 1, 1)] },
    Piece { name: "N1", cubes: &[(0, 0, 0), (1, 0, 0), (1, 1, 0), (2, 1, 0), (1, 0, 1)] },
    Piece { name: "S1", cubes: &[(0, 1, 0), (1, 0, 0), (1, 1, 0), (2, 0, 0), (1, 0, 1)] },
    Piece { name: "N2", cubes: &[(0, 0, 0), (1, 0, 0), (1, 1, 0), (2, 1, 0), (1, 1, 1)] },
    Piece { name: "S2", cubes: &[(0, 1, 0), (1, 0, 0), (1, 1, 0), (2, 0, 0), (1, 1, 1)] },
    Piece { name: "V1", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0), (0, 0, 1)] },
    Piece { name: "V2", cubes: &[(0, 0, 0), (1, 0, 0), (2, 0, 0), (1, 1, 0), (2, 0, 1)] },
];

/// Looks up a piece by name. The catalogue is small, so a linear scan is
/// fine.
pub fn find(name: &str) -> Option<&'static Piece> {
    PIECES.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Translates a cube set so the minimum coordinates are zero, sorted.
    fn normalize(mut cubes: Vec<Coord>) -> Vec<Coord> {
        let min_x = cubes.iter().map(|c| c.0).min().unwrap();
        let min_y = cubes.iter().map(|c| c.1).min().unwrap();
        let min_z = cubes.iter().map(|c| c.2).min().unwrap();
        for c in &mut cubes {
            *c = (c.0 - min_x, c.1 - min_y, c.2 - min_z);
        }
        cubes.sort_unstable();
        cubes
    }

    #[test]
    fn test_names_are_unique() {
        let mut seen = HashSet::new();
        for piece in PIECES {
            assert!(seen.insert(piece.name), "duplicate piece name {}", piece.name);
        }
        assert_eq!(PIECES.len(), 41);
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(find("X_").unwrap().cubes.len(), 5);
        assert!(find("??").is_none());
    }

    #[test]
    fn test_cube_counts() {
        for piece in PIECES {
            let expect = match piece.name.as_bytes()[0] {
                b'1' => 1,
                b'2' => 2,
                b'3' => 3,
                b'4' => 4,
                _ => 5,
            };
            assert_eq!(piece.cubes.len(), expect, "{} has wrong cube count", piece.name);
        }
    }

    #[test]
    fn test_offsets_are_normalized_and_distinct() {
        for piece in PIECES {
            let (lo, _) = piece.bounds();
            assert_eq!(lo, (0, 0, 0), "{} is not normalized to the origin", piece.name);
            let distinct: HashSet<Coord> = piece.cubes.iter().copied().collect();
            assert_eq!(distinct.len(), piece.cubes.len(), "{} repeats a cube", piece.name);
        }
    }

    #[test]
    fn test_pieces_are_connected() {
        for piece in PIECES {
            let cells: HashSet<Coord> = piece.cubes.iter().copied().collect();
            let mut reached = HashSet::new();
            let mut frontier = vec![piece.cubes[0]];
            while let Some((x, y, z)) = frontier.pop() {
                if !reached.insert((x, y, z)) {
                    continue;
                }
                for next in [
                    (x + 1, y, z),
                    (x - 1, y, z),
                    (x, y + 1, z),
                    (x, y - 1, z),
                    (x, y, z + 1),
                    (x, y, z - 1),
                ] {
                    if cells.contains(&next) {
                        frontier.push(next);
                    }
                }
            }
            assert_eq!(reached.len(), cells.len(), "{} is disconnected", piece.name);
        }
    }

    #[test]
    fn test_chiral_pairs_are_mirror_images() {
        use crate::geometry::ROTATIONS;
        for &(left, right) in CHIRAL_PAIRS {
            let a = find(left).unwrap();
            let b = find(right).unwrap();
            let mirrored: Vec<Coord> = a.cubes.iter().map(|&(x, y, z)| (-x, y, z)).collect();
            let target = normalize(b.cubes.to_vec());
            let matched = ROTATIONS.iter().any(|rotate| {
                normalize(mirrored.iter().map(|&c| rotate(c)).collect()) == target
            });
            assert!(matched, "{left} and {right} are not mirror images");
        }
    }
}
