//! Problem records and the data-file loader.
//!
//! A problem file is line-oriented; `#` starts a comment. Directives:
//!
//! ```text
//! box W H D            # box dimensions, required
//! piece NAME           # one piece occurrence, repeatable
//! pieces NAME NAME ... # several occurrences at once
//! constrain NAME       # halve translations on all three axes
//! constrain_x NAME     # halve translations on one axis (_y, _z likewise)
//! lock NAME            # restrict NAME to its first lockcount orientations
//! lockcount N          # orientation budget for the locked piece, default 1
//! ```
//!
//! Constraint and lock directives bind to the first occurrence of the named
//! piece.

use std::fs;
use std::io;
use std::path::Path;

use log::warn;

use crate::builder::{Constrain, PuzzleMatrix};
use crate::geometry::ROTATIONS;
use crate::pieces;

/// A parsed puzzle description.
#[derive(Debug, Clone)]
pub struct Problem {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    /// Piece names in placement order; repeats are distinct occurrences.
    pub pieces: Vec<String>,
    pub constrain_x: Option<String>,
    pub constrain_y: Option<String>,
    pub constrain_z: Option<String>,
    pub lock: Option<String>,
    pub lockcount: usize,
}

impl Problem {
    /// Builds the exact-cover matrix: cell columns, then one `add_piece`
    /// call per occurrence with its derived flags.
    pub fn build(&self) -> PuzzleMatrix {
        let first = |wanted: &Option<String>| {
            wanted
                .as_deref()
                .and_then(|name| self.pieces.iter().position(|p| p == name))
        };
        let cx = first(&self.constrain_x);
        let cy = first(&self.constrain_y);
        let cz = first(&self.constrain_z);
        let locked = first(&self.lock);

        let mut puzzle = PuzzleMatrix::new(self.width, self.height, self.depth);
        for (i, name) in self.pieces.iter().enumerate() {
            let piece = pieces::find(name)
                .unwrap_or_else(|| panic!("unknown piece {name} survived validation"));
            let constrain = Constrain {
                x: cx == Some(i),
                y: cy == Some(i),
                z: cz == Some(i),
            };
            let limit = if locked == Some(i) {
                self.lockcount
            } else {
                ROTATIONS.len()
            };
            puzzle.add_piece(piece, constrain, limit);
        }
        puzzle
    }
}

/// Reads and parses a problem file.
pub fn load(path: &Path) -> io::Result<Problem> {
    parse(&fs::read_to_string(path)?)
}

fn invalid(line: usize, message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, format!("line {line}: {message}"))
}

/// Parses problem text. See the module docs for the format.
pub fn parse(text: &str) -> io::Result<Problem> {
    let mut dims: Option<(usize, usize, usize)> = None;
    let mut piece_list: Vec<String> = Vec::new();
    let mut constrain_x = None;
    let mut constrain_y = None;
    let mut constrain_z = None;
    let mut lock = None;
    let mut lockcount: Option<usize> = None;

    let known_piece = |line: usize, name: &str| -> io::Result<String> {
        if pieces::find(name).is_none() {
            return Err(invalid(line, format!("unknown piece {name}")));
        }
        Ok(name.to_string())
    };
    let set_once = |line: usize, slot: &mut Option<String>, value: String| -> io::Result<()> {
        if slot.is_some() {
            return Err(invalid(line, format!("{value}: directive already given")));
        }
        *slot = Some(value);
        Ok(())
    };

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        let mut tokens = content.split_whitespace();
        let directive = tokens.next().unwrap();
        let args: Vec<&str> = tokens.collect();

        match directive {
            "box" => {
                if dims.is_some() {
                    return Err(invalid(line, "box already given".into()));
                }
                if args.len() != 3 {
                    return Err(invalid(line, "box takes three dimensions".into()));
                }
                let mut parsed = [0usize; 3];
                for (slot, arg) in parsed.iter_mut().zip(&args) {
                    *slot = arg
                        .parse()
                        .map_err(|_| invalid(line, format!("bad dimension {arg}")))?;
                    if *slot == 0 {
                        return Err(invalid(line, "box dimensions must be at least 1".into()));
                    }
                }
                dims = Some((parsed[0], parsed[1], parsed[2]));
            }
            "piece" | "pieces" => {
                if args.is_empty() {
                    return Err(invalid(line, format!("{directive} needs a piece name")));
                }
                if directive == "piece" && args.len() != 1 {
                    return Err(invalid(line, "piece takes a single name".into()));
                }
                for &name in &args {
                    piece_list.push(known_piece(line, name)?);
                }
            }
            "constrain" | "constrain_x" | "constrain_y" | "constrain_z" => {
                if args.len() != 1 {
                    return Err(invalid(line, format!("{directive} takes a single name")));
                }
                let name = known_piece(line, args[0])?;
                match directive {
                    "constrain" => {
                        set_once(line, &mut constrain_x, name.clone())?;
                        set_once(line, &mut constrain_y, name.clone())?;
                        set_once(line, &mut constrain_z, name)?;
                    }
                    "constrain_x" => set_once(line, &mut constrain_x, name)?,
                    "constrain_y" => set_once(line, &mut constrain_y, name)?,
                    _ => set_once(line, &mut constrain_z, name)?,
                }
            }
            "lock" => {
                if args.len() != 1 {
                    return Err(invalid(line, "lock takes a single name".into()));
                }
                set_once(line, &mut lock, known_piece(line, args[0])?)?;
            }
            "lockcount" => {
                if args.len() != 1 {
                    return Err(invalid(line, "lockcount takes a single number".into()));
                }
                let value: usize = args[0]
                    .parse()
                    .map_err(|_| invalid(line, format!("bad lockcount {}", args[0])))?;
                if value == 0 {
                    return Err(invalid(line, "lockcount must be at least 1".into()));
                }
                lockcount = Some(value);
            }
            other => return Err(invalid(line, format!("unknown directive {other}"))),
        }
    }

    let Some((width, height, depth)) = dims else {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "missing box directive"));
    };
    if piece_list.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "no pieces given"));
    }
    for named in [&constrain_x, &constrain_y, &constrain_z, &lock]
        .into_iter()
        .flatten()
    {
        if !piece_list.iter().any(|p| p == named) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{named} is constrained or locked but not in the piece list"),
            ));
        }
    }
    if lockcount.is_some() && lock.is_none() {
        warn!("lockcount without lock has no effect");
    }

    let cube_total: usize = piece_list
        .iter()
        .map(|name| pieces::find(name).unwrap().cubes.len())
        .sum();
    if cube_total != width * height * depth {
        warn!(
            "piece volume {cube_total} does not match box volume {}; no covers exist",
            width * height * depth
        );
    }

    Ok(Problem {
        width,
        height,
        depth,
        pieces: piece_list,
        constrain_x,
        constrain_y,
        constrain_z,
        lock,
        lockcount: lockcount.unwrap_or(1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_problem() {
        let problem = parse(
            "# soma-style box\n\
             box 3 3 3\n\
             pieces 3L 4T 4S 4^ 4< 4>\n\
             piece 3I\n\
             constrain_x 4T\n\
             lock 3L\n\
             lockcount 4\n",
        )
        .unwrap();
        assert_eq!((problem.width, problem.height, problem.depth), (3, 3, 3));
        assert_eq!(problem.pieces.len(), 7);
        assert_eq!(problem.pieces[6], "3I");
        assert_eq!(problem.constrain_x.as_deref(), Some("4T"));
        assert_eq!(problem.constrain_y, None);
        assert_eq!(problem.lock.as_deref(), Some("3L"));
        assert_eq!(problem.lockcount, 4);
    }

    #[test]
    fn test_parse_defaults() {
        let problem = parse("box 1 1 1\npiece 1_\n").unwrap();
        assert_eq!(problem.lockcount, 1);
        assert!(problem.constrain_x.is_none() && problem.lock.is_none());
    }

    #[test]
    fn test_constrain_shorthand_sets_all_axes() {
        let problem = parse("box 2 2 2\npieces 4O 4O\nconstrain 4O\n").unwrap();
        assert_eq!(problem.constrain_x.as_deref(), Some("4O"));
        assert_eq!(problem.constrain_y.as_deref(), Some("4O"));
        assert_eq!(problem.constrain_z.as_deref(), Some("4O"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse("piece 1_\n").is_err(), "missing box");
        assert!(parse("box 0 1 1\npiece 1_\n").is_err(), "zero dimension");
        assert!(parse("box 1 1 1\npiece zz\n").is_err(), "unknown piece");
        assert!(parse("box 1 1 1\n").is_err(), "no pieces");
        assert!(parse("box 1 1 1\nbox 1 1 1\npiece 1_\n").is_err(), "duplicate box");
        assert!(parse("box 1 1 1\npiece 1_\nfrobnicate 3\n").is_err(), "unknown directive");
        assert!(parse("box 1 1 1\npiece 1_\nlockcount 0\n").is_err(), "zero lockcount");
        assert!(
            parse("box 1 1 1\npiece 1_\nconstrain_x 2_\n").is_err(),
            "constraint names a piece outside the list"
        );
    }

    #[test]
    fn test_build_dimensions() {
        let problem = parse("box 2 1 1\npieces 1_ 1_\n").unwrap();
        let puzzle = problem.build();
        assert_eq!(puzzle.cells.cols(), 4);
        assert_eq!(puzzle.cells.rows(), 4);
        assert_eq!(puzzle.names[2], "1_");
    }

    #[test]
    fn test_flags_bind_to_first_occurrence() {
        let problem = parse("box 2 1 1\npieces 1_ 1_\nconstrain_x 1_\n").unwrap();
        let puzzle = problem.build();
        // first occurrence: 1 constrained placement; second: 2 free ones
        assert_eq!(puzzle.cells.rows(), 3);
        assert_eq!(puzzle.counts[2], 1);
        assert_eq!(puzzle.counts[3], 2);
    }
}
