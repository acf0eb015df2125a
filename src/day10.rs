// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::grid::{Dir, Grid, GridError, Pos};


const START: u8 = b'S';

fn connections(tile: u8) -> Option<[Dir; 2]> {
	use Dir::*;
	match tile {
		b'|' => Some([Up, Down]),
		b'-' => Some([Left, Right]),
		b'L' => Some([Up, Right]),
		b'J' => Some([Up, Left]),
		b'7' => Some([Down, Left]),
		b'F' => Some([Down, Right]),
		_ => None,
	}
}

#[derive(Debug, thiserror::Error)]
enum LoopError {
	#[error("no start tile")]
	NoStart,
	#[error("more than one start tile")]
	MultipleStarts,
	#[error("no loop through the start tile at {0:?}")]
	NoLoop(Pos),
}

/// Follows the pipes leaving `start` towards `dir`, returning the tiles passed
/// (starting with `start`) if they lead back to it.
fn trace(tiles: &Grid<u8>, start: Pos, mut dir: Dir) -> Option<Vec<Pos>> {
	let mut path = vec![start];
	let mut pos = start;
	loop {
		pos = tiles.step(pos, dir)?;
		if pos == start { return Some(path) }
		let [a, b] = connections(tiles[pos])?;
		dir = match dir.reverse() {
			from if from == a => b,
			from if from == b => a,
			_ => return None,
		};
		path.push(pos);
	}
}

fn main_loop(tiles: &Grid<u8>) -> Result<Vec<Pos>, LoopError> {
	let mut starts = tiles.positions().filter(|&pos| tiles[pos] == START);
	let start = starts.next().ok_or(LoopError::NoStart)?;
	if starts.next().is_some() { return Err(LoopError::MultipleStarts) }
	let path = Dir::ALL.into_iter()
		.find_map(|dir| trace(tiles, start, dir))
		.ok_or(LoopError::NoLoop(start))?;

	#[cfg(LOGGING)]
	println!("Loop of {} tiles from {start:?}", path.len());

	Ok(path)
}


fn input_tiles_from_str(s: &str) -> Result<Grid<u8>, GridError> {
	Grid::try_from_str_with(s, |_, b| (b == START || b == b'.' || connections(b).is_some()).then_some(b))
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	Ok(main_loop(&input_tiles_from_str(input)?)?.len() / 2)
}


/// Draws the loop at double resolution, with a one-cell margin, so that the
/// outside can be flooded through the gaps between adjacent pipes.
pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	let tiles = input_tiles_from_str(input)?;
	let path = main_loop(&tiles)?;

	let (width, height) = (2 * tiles.width + 1, 2 * tiles.height() + 1);
	let mut walls = vec![false; width * height];
	for (&[ax, ay], &[bx, by]) in path.iter().zip(path.iter().cycle().skip(1)) {
		walls[(2 * ay + 1) * width + 2 * ax + 1] = true;
		walls[(ay + by + 1) * width + ax + bx + 1] = true;
	}
	let outside = crate::flood::fill(width, height, [0, 0], |[x, y]| !walls[y * width + x]);

	Ok(tiles.positions()
		.map(|[x, y]| (2 * y + 1) * width + 2 * x + 1)
		.filter(|&idx| !walls[idx] && !outside[idx])
		.count())
}


#[test]
fn tests() {
	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			-L|F7
			7S-7|
			L|7||
			-L-J|
			L|-JF
		" },
		indoc::indoc! { "
			7-F7-
			.FJ|7
			SJLL7
			|F--J
			LJ.LJ
		" },
	];
	assert_eq!(part1(INPUTS[0]).unwrap(), 4);
	assert_eq!(part1(INPUTS[1]).unwrap(), 8);

	const ENCLOSING_INPUTS: [&str; 2] = [
		indoc::indoc! { "
			...........
			.S-------7.
			.|F-----7|.
			.||.....||.
			.||.....||.
			.|L-7.F-J|.
			.|..|.|..|.
			.L--J.L--J.
			...........
		" },
		indoc::indoc! { "
			..........
			.S------7.
			.|F----7|.
			.||....||.
			.||....||.
			.|L-7F-J|.
			.|..||..|.
			.L--JL--J.
			..........
		" },
	];
	for input in ENCLOSING_INPUTS {
		assert_eq!(part2(input).unwrap(), 4);
	}

	assert!(matches!(main_loop(&input_tiles_from_str("F7\nLJ\n").unwrap()), Err(LoopError::NoStart)));
	assert!(matches!(main_loop(&input_tiles_from_str("SS\nLJ\n").unwrap()), Err(LoopError::MultipleStarts)));
	assert!(matches!(main_loop(&input_tiles_from_str(".S.\n...\n").unwrap()), Err(LoopError::NoLoop([1, 0]))));
}
