// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// Extrapolates one step past the end by summing the last value of every row of
/// differences, down to the first all-zero row.
fn extrapolate(history: &[i64]) -> i64 {
	use itertools::Itertools as _;

	let mut row = history.to_vec();
	let mut next = 0;
	while row.iter().any(|&v| v != 0) {
		next += row.last().copied().unwrap_or_default();
		row = row.iter().tuple_windows().map(|(a, b)| b - a).collect();
	}
	next
}


fn input_histories_from_str(s: &str) -> Result<Vec<Vec<i64>>, parsing::HistoriesError> {
	parsing::try_histories_from_str(s)
}


pub(crate) fn part1(input: &str) -> anyhow::Result<i64> {
	Ok(input_histories_from_str(input)?.iter().map(|h| extrapolate(h)).sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<i64> {
	Ok(input_histories_from_str(input)?.into_iter()
		.map(|mut h| { h.reverse(); extrapolate(&h) })
		.sum())
}


mod parsing {
	use std::num::ParseIntError;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum HistoriesError {
		#[error("no histories")]
		Empty,
		#[error("line {line}: {source}")]
		Line { line: usize, source: ParseIntError },
	}

	pub(super) fn try_histories_from_str(s: &str) -> Result<Vec<Vec<i64>>, HistoriesError> {
		let histories = s.lines()
			.enumerate()
			.map(|(l, line)| line.split_whitespace()
				.map(str::parse)
				.collect::<Result<_, _>>()
				.map_err(|e| HistoriesError::Line { line: l + 1, source: e }))
			.collect::<Result<Vec<Vec<i64>>, _>>()?;
		if histories.is_empty() { return Err(HistoriesError::Empty) }
		Ok(histories)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		0 3 6 9 12 15
		1 3 6 10 15 21
		10 13 16 21 30 45
	" };
	assert_eq!(part1(INPUT).unwrap(), 114);
	assert_eq!(part2(INPUT).unwrap(), 2);
	assert_eq!(extrapolate(&[]), 0);
	assert_eq!(extrapolate(&[7]), 7);
	assert!(part1("1 2 x").is_err());
	assert!(part1("").is_err());
	assert!(part2("").is_err());
}
