// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{grid::{Dir, Grid, GridError, Pos}, search};


fn input_heat_loss_from_str(s: &str) -> Result<Grid<u8>, GridError> {
	Grid::try_from_str_with(s, |_, b| matches!(b, b'1'..=b'9').then(|| b - b'0'))
}

fn corners(map: &Grid<u8>) -> (Pos, Pos) {
	([0, 0], [map.width - 1, map.height() - 1])
}


/// At most three blocks in a straight line.
pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let map = input_heat_loss_from_str(input)?;
	let (start, target) = corners(&map);
	let steer = |next: Dir, last: Option<Dir>, run: u32| run < 3 || Some(next) != last;
	Ok(search::min_cost(&map, start, target, steer, |pos, target, _| pos == target)?)
}


/// Four to ten blocks in a straight line, including the last stretch.
pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	let map = input_heat_loss_from_str(input)?;
	let (start, target) = corners(&map);
	let steer = |next: Dir, last: Option<Dir>, run: u32| match last {
		None => true,
		Some(last) if next == last => run < 10,
		Some(_) => run >= 4,
	};
	Ok(search::min_cost(&map, start, target, steer, |pos, target, run| pos == target && run >= 4)?)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		2413432311323
		3215453535623
		3255245654254
		3446585845452
		4546657867536
		1438598798454
		4457876987766
		3637877979653
		4654967986887
		4564679986453
		1224686865563
		2546548887735
		4322674655533
	" };
	assert_eq!(part1(INPUT).unwrap(), 102);
	assert_eq!(part2(INPUT).unwrap(), 94);
	assert_eq!(part2(indoc::indoc! { "
		111111111111
		999999999991
		999999999991
		999999999991
		999999999991
	" }).unwrap(), 71);
	assert!(part1("12\n3x\n").is_err());
}
