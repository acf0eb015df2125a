// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{flood::{self, Quadratic}, grid::{Dir, Grid, GridError, Pos}};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tile { Plot, Rock }

struct Garden {
	tiles: Grid<Tile>,
	start: Pos,
}

#[derive(Debug, thiserror::Error)]
enum GardenError {
	#[error(transparent)]
	Grid(#[from] GridError),
	#[error("no start tile")]
	NoStart,
	#[error("more than one start tile")]
	MultipleStarts,
	#[error("extrapolation needs a square garden with the start in its centre")]
	Unsupported,
}

/// Plots reachable in exactly `steps` steps without leaving the garden. Going back
/// & forth, those are the plots at a distance of at most `steps` with the same parity.
fn reachable(garden: &Garden, steps: usize) -> usize {
	use std::collections::VecDeque;

	let tiles = &garden.tiles;
	let mut dist = vec![None; tiles.cells.len()];
	let idx = |[x, y]: Pos| y * tiles.width + x;
	dist[idx(garden.start)] = Some(0);
	let mut queue = VecDeque::from([(garden.start, 0)]);
	while let Some((pos, d)) = queue.pop_front() {
		if d == steps { continue }
		for dir in Dir::ALL {
			let Some(next) = tiles.step(pos, dir) else { continue };
			if tiles.get(next) != Some(&Tile::Plot) || dist[idx(next)].is_some() { continue }
			dist[idx(next)] = Some(d + 1);
			queue.push_back((next, d + 1));
		}
	}
	dist.iter().flatten().filter(|&&d| d % 2 == steps % 2).count()
}

/// On a square garden with the start in its centre, the counts taken every
/// garden-width steps (at the same offset) grow quadratically.
fn reachable_unbounded(garden: &Garden, steps: usize) -> Result<usize, GardenError> {
	let len = garden.tiles.width;
	if garden.tiles.height() != len || garden.start != [len / 2, len / 2] {
		return Err(GardenError::Unsupported)
	}

	let offset = steps % len;
	let samples = flood::frontier_counts(&garden.tiles, garden.start, |&tile| tile == Tile::Plot, offset + 2 * len);
	if steps <= offset + 2 * len { return Ok(samples[steps]) }
	let quadratic = Quadratic::fit([0, 1, 2].map(|n| samples[offset + n * len] as i64));
	Ok(quadratic.eval(((steps - offset) / len) as i64) as usize)
}


fn input_garden_from_str(s: &str) -> Result<Garden, GardenError> {
	let mut starts = Vec::new();
	let tiles = Grid::try_from_str_with(s, |pos, b| match b {
		b'.' => Some(Tile::Plot),
		b'#' => Some(Tile::Rock),
		b'S' => { starts.push(pos); Some(Tile::Plot) }
		_ => None,
	})?;
	match starts[..] {
		[start] => Ok(Garden { tiles, start }),
		[] => Err(GardenError::NoStart),
		_ => Err(GardenError::MultipleStarts),
	}
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	Ok(reachable(&input_garden_from_str(input)?, 64))
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	Ok(reachable_unbounded(&input_garden_from_str(input)?, 26_501_365)?)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		...........
		.....###.#.
		.###.##..#.
		..#.#...#..
		....#.#....
		.##..S####.
		.##..#...#.
		.......##..
		.##.#.####.
		.##..##.##.
		...........
	" };
	let garden = input_garden_from_str(INPUT).unwrap();
	assert_eq!(reachable(&garden, 6), 16);
	let counts = flood::frontier_counts(&garden.tiles, garden.start, |&tile| tile == Tile::Plot, 100);
	for (steps, count) in [(6, 16), (10, 50), (50, 1594), (100, 6536)] {
		assert_eq!(counts[steps], count);
	}

	let open = input_garden_from_str(".....\n.....\n..S..\n.....\n.....\n").unwrap();
	assert_eq!(reachable_unbounded(&open, 52).unwrap(), 53 * 53);
	const SQUARE: &str = indoc::indoc! { "
		...........
		.#......#..
		...#....#..
		.#.......#.
		..#........
		.....S.....
		.......#...
		.#.#.....#.
		...#..#....
		..#.....#..
		...........
	" };
	let square = input_garden_from_str(SQUARE).unwrap();
	let counts = flood::frontier_counts(&square.tiles, square.start, |&tile| tile == Tile::Plot, 225);
	for steps in [60, 82, 93, 225] {
		assert_eq!(reachable_unbounded(&square, steps).unwrap(), counts[steps]);
	}
	assert_eq!(counts[225], 44773);
	assert!(matches!(input_garden_from_str("..\n.."), Err(GardenError::NoStart)));
	assert!(matches!(input_garden_from_str("S.\n.S"), Err(GardenError::MultipleStarts)));
	let shifted = input_garden_from_str("S..\n...\n...\n").unwrap();
	assert!(matches!(reachable_unbounded(&shifted, 100), Err(GardenError::Unsupported)));
}
