// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::grid::{Grid, GridError};


/// Sum of pairwise distances along one axis, after growing every empty line by
/// `factor`. `coords` holds one entry per galaxy.
fn axis_distances(mut coords: Vec<usize>, len: usize, factor: u64) -> u64 {
	let mut occupied = vec![false; len];
	for &c in &coords { occupied[c] = true }
	let expanded = occupied.iter()
		.scan(0, |at, &occupied| {
			let here = *at;
			*at += if occupied { 1 } else { factor };
			Some(here)
		})
		.collect::<Vec<u64>>();

	coords.sort_unstable();
	// Sorted, each galaxy is the far end of a pair with every galaxy before it
	let (mut total, mut preceding) = (0, 0);
	for (i, c) in (0..).zip(coords) {
		total += i * expanded[c] - preceding;
		preceding += expanded[c];
	}
	total
}


fn input_image_from_str(s: &str) -> Result<Grid<bool>, GridError> {
	Grid::try_from_str_with(s, |_, b| match b { b'#' => Some(true), b'.' => Some(false), _ => None })
}


fn part_impl(input: &str, factor: u64) -> anyhow::Result<u64> {
	let image = input_image_from_str(input)?;
	let galaxies = image.positions().filter(|&pos| image[pos]).collect::<Vec<_>>();
	Ok(axis_distances(galaxies.iter().map(|&[x, _]| x).collect(), image.width, factor)
		+ axis_distances(galaxies.iter().map(|&[_, y]| y).collect(), image.height(), factor))
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	part_impl(input, 2)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	part_impl(input, 1_000_000)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		...#......
		.......#..
		#.........
		..........
		......#...
		.#........
		.........#
		..........
		.......#..
		#...#.....
	" };
	assert_eq!(part1(INPUT).unwrap(), 374);
	assert_eq!(part_impl(INPUT, 10).unwrap(), 1030);
	assert_eq!(part_impl(INPUT, 100).unwrap(), 8410);
}
