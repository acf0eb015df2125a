// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::grid::{Dir, Grid, GridError, Pos};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tile { Empty, Slash, Backslash, SplitVertical, SplitHorizontal }

impl Tile {
	/// Directions a beam heading in `dir` continues in after entering this tile.
	fn deflect(self, dir: Dir) -> (Dir, Option<Dir>) {
		use Dir::*;
		match (self, dir) {
			(Tile::Slash, Right) | (Tile::Backslash, Left) => (Up, None),
			(Tile::Slash, Left) | (Tile::Backslash, Right) => (Down, None),
			(Tile::Slash, Up) | (Tile::Backslash, Down) => (Right, None),
			(Tile::Slash, Down) | (Tile::Backslash, Up) => (Left, None),
			(Tile::SplitVertical, Left | Right) => (Up, Some(Down)),
			(Tile::SplitHorizontal, Up | Down) => (Left, Some(Right)),
			_ => (dir, None),
		}
	}
}

fn energized(contraption: &Grid<Tile>, start: Pos, dir: Dir) -> usize {
	let mut seen = vec![[false; 4]; contraption.cells.len()];
	let mut beams = vec![(start, dir)];
	while let Some(([x, y], dir)) = beams.pop() {
		let seen = &mut seen[y * contraption.width + x][dir as usize];
		if *seen { continue }
		*seen = true;
		let (a, b) = contraption[[x, y]].deflect(dir);
		for dir in std::iter::once(a).chain(b) {
			if let Some(next) = contraption.step([x, y], dir) { beams.push((next, dir)) }
		}
	}
	seen.iter().filter(|dirs| dirs.iter().any(|&d| d)).count()
}


fn input_contraption_from_str(s: &str) -> Result<Grid<Tile>, GridError> {
	Grid::try_from_str_with(s, |_, b| match b {
		b'.' => Some(Tile::Empty),
		b'/' => Some(Tile::Slash),
		b'\\' => Some(Tile::Backslash),
		b'|' => Some(Tile::SplitVertical),
		b'-' => Some(Tile::SplitHorizontal),
		_ => None,
	})
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	Ok(energized(&input_contraption_from_str(input)?, [0, 0], Dir::Right))
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	let contraption = input_contraption_from_str(input)?;
	let (w, h) = (contraption.width, contraption.height());
	let entries = (0..w).flat_map(|x| [([x, 0], Dir::Down), ([x, h - 1], Dir::Up)])
		.chain((0..h).flat_map(|y| [([0, y], Dir::Right), ([w - 1, y], Dir::Left)]));
	entries
		.map(|(pos, dir)| energized(&contraption, pos, dir))
		.max()
		.ok_or_else(|| anyhow::anyhow!("Empty contraption"))
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { r"
		.|...\....
		|.-.\.....
		.....|-...
		........|.
		..........
		.........\
		..../.\\..
		.-.-/..|..
		.|....-|.\
		..//.|....
	" };
	assert_eq!(part1(INPUT).unwrap(), 46);
	assert_eq!(part2(INPUT).unwrap(), 51);
	assert_eq!(part1(r"\").unwrap(), 1);
}
