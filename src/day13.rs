// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::grid::{Grid, GridError};


#[derive(Debug, thiserror::Error)]
#[error("pattern {pattern} has no line of reflection with {smudges} smudge(s)")]
struct NoReflection { pattern: usize, smudges: usize }

/// The first line `k` (between lines `k - 1` and `k`) across which exactly
/// `smudges` cells differ from their mirror image. `lines` & `len` give the
/// extent across and along the candidate lines.
fn reflection(lines: usize, len: usize, is_rock: impl Fn(usize, usize) -> bool, smudges: usize) -> Option<usize> {
	(1..lines).find(|&k| {
		let mut mismatches = 0;
		for d in 0..k.min(lines - k) {
			for i in 0..len {
				if is_rock(k - 1 - d, i) != is_rock(k + d, i) { mismatches += 1 }
				if mismatches > smudges { return false }
			}
		}
		mismatches == smudges
	})
}

fn summarize(pattern: &Grid<bool>, smudges: usize) -> Option<usize> {
	let (width, height) = (pattern.width, pattern.height());
	reflection(height, width, |y, x| pattern[[x, y]], smudges).map(|rows| 100 * rows)
		.or_else(|| reflection(width, height, |x, y| pattern[[x, y]], smudges))
}


fn input_patterns_from_str(s: &str) -> Result<Vec<Grid<bool>>, parsing::PatternsError> {
	parsing::try_patterns_from_str(s)
}


fn part_impl(input: &str, smudges: usize) -> anyhow::Result<usize> {
	input_patterns_from_str(input)?.iter()
		.enumerate()
		.map(|(p, pattern)| summarize(pattern, smudges)
			.ok_or_else(|| anyhow::Error::from(NoReflection { pattern: p + 1, smudges })))
		.sum()
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	part_impl(input, 0)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	part_impl(input, 1)
}


mod parsing {
	use super::{Grid, GridError};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum PatternsError {
		#[error("no patterns")]
		Empty,
		#[error("pattern {pattern}: {source}")]
		Pattern { pattern: usize, source: GridError },
	}

	pub(super) fn try_patterns_from_str(s: &str) -> Result<Vec<Grid<bool>>, PatternsError> {
		let patterns = s.split("\n\n")
			.filter(|block| !block.trim().is_empty())
			.enumerate()
			.map(|(p, block)| Grid::try_from_str_with(block, |_, b| match b {
					b'#' => Some(true),
					b'.' => Some(false),
					_ => None,
				})
				.map_err(|e| PatternsError::Pattern { pattern: p + 1, source: e }))
			.collect::<Result<Vec<_>, _>>()?;
		if patterns.is_empty() { return Err(PatternsError::Empty) }
		Ok(patterns)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		#.##..##.
		..#.##.#.
		##......#
		##......#
		..#.##.#.
		..##..##.
		#.#.##.#.

		#...##..#
		#....#..#
		..##..###
		#####.##.
		#####.##.
		..##..###
		#....#..#
	" };
	assert_eq!(part1(INPUT).unwrap(), 405);
	assert_eq!(part2(INPUT).unwrap(), 400);
	assert!(part1("#.\n.#\n").is_err());
	assert!(matches!(input_patterns_from_str("\n\n"), Err(parsing::PatternsError::Empty)));
	assert!(part1("").is_err());
	assert!(part2("").is_err());
}
