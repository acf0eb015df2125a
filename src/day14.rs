// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::grid::{Dir, Grid, GridError};


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Rock { None, Rounded, Cube }

type Platform = Grid<Rock>;

/// Rolls every rounded rock as far as it goes towards `dir`.
fn tilt(platform: &mut Platform, dir: Dir) {
	let (w, h) = (platform.width, platform.height());
	let (lanes, len) = if dir.is_vertical() { (w, h) } else { (h, w) };
	// Position `k` cells away from the wall being tilted towards
	let pos = |lane: usize, k: usize| match dir {
		Dir::Up => [lane, k],
		Dir::Down => [lane, h - 1 - k],
		Dir::Left => [k, lane],
		Dir::Right => [w - 1 - k, lane],
	};
	for lane in 0..lanes {
		let mut free = 0;
		for k in 0..len {
			match platform[pos(lane, k)] {
				Rock::Cube => free = k + 1,
				Rock::Rounded => {
					platform[pos(lane, k)] = Rock::None;
					platform[pos(lane, free)] = Rock::Rounded;
					free += 1;
				}
				Rock::None => (),
			}
		}
	}
}

fn spin(platform: &mut Platform) {
	for dir in [Dir::Up, Dir::Left, Dir::Down, Dir::Right] { tilt(platform, dir) }
}

fn north_load(platform: &Platform) -> usize {
	let h = platform.height();
	platform.positions()
		.filter(|&pos| platform[pos] == Rock::Rounded)
		.map(|[_, y]| h - y)
		.sum()
}


fn input_platform_from_str(s: &str) -> Result<Platform, GridError> {
	Grid::try_from_str_with(s, |_, b| match b {
		b'.' => Some(Rock::None),
		b'O' => Some(Rock::Rounded),
		b'#' => Some(Rock::Cube),
		_ => None,
	})
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	let mut platform = input_platform_from_str(input)?;
	tilt(&mut platform, Dir::Up);
	Ok(north_load(&platform))
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	const SPINS: usize = 1_000_000_000;
	const BUDGET: usize = 1_000;

	let platform = input_platform_from_str(input)?;
	let cycle = crate::cycle::find(platform, spin, Platform::clone, north_load, BUDGET)?;
	Ok(*cycle.value_at(SPINS))
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		O....#....
		O.OO#....#
		.....##...
		OO.#O....O
		.O.....O#.
		O.#..O.#.#
		..O..#O..O
		.......O..
		#....###..
		#OO..#....
	" };
	assert_eq!(part1(INPUT).unwrap(), 136);
	assert_eq!(part2(INPUT).unwrap(), 64);

	let mut platform = input_platform_from_str(INPUT).unwrap();
	spin(&mut platform);
	assert_eq!(platform, input_platform_from_str(indoc::indoc! { "
		.....#....
		....#...O#
		...OO##...
		.OO#......
		.....OOO#.
		.O#...O#.#
		....O#....
		......OOOO
		#...O###..
		#..OO#....
	" }).unwrap());
}
