// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Spring { Operational, Damaged, Unknown }

struct Record {
	springs: Vec<Spring>,
	groups: Vec<usize>,
}

impl Record {
	fn unfolded(&self, copies: usize) -> Record {
		let mut springs = Vec::with_capacity(self.springs.len() * copies + copies);
		for copy in 0..copies {
			if copy > 0 { springs.push(Spring::Unknown) }
			springs.extend_from_slice(&self.springs);
		}
		Record { springs, groups: self.groups.repeat(copies) }
	}

	/// Counts arrangements bottom-up: `ways[i][j]` is the number of ways
	/// `springs[i..]` can hold `groups[j..]`.
	fn arrangements(&self) -> u64 {
		let (n, m) = (self.springs.len(), self.groups.len());
		let mut ways = vec![vec![0u64; m + 1]; n + 2];
		ways[n][m] = 1;
		ways[n + 1][m] = 1;
		for i in (0..n).rev() {
			for j in 0..=m {
				let mut count = 0;
				if self.springs[i] != Spring::Damaged {
					count += ways[i + 1][j];
				}
				if self.springs[i] != Spring::Operational && j < m {
					let end = i + self.groups[j];
					let fits = end <= n
						&& !self.springs[i..end].contains(&Spring::Operational)
						&& self.springs.get(end) != Some(&Spring::Damaged);
					// Skips the separator after the group too, hence the extra row
					if fits { count += ways[end + 1][j + 1] }
				}
				ways[i][j] = count;
			}
		}
		ways[0][0]
	}
}


fn input_records_from_str(s: &str) -> Result<Vec<Record>, parsing::RecordsError> {
	parsing::try_records_from_str(s)
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	Ok(input_records_from_str(input)?.iter().map(Record::arrangements).sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	Ok(input_records_from_str(input)?.iter().map(|r| r.unfolded(5).arrangements()).sum())
}


mod parsing {
	use std::str::FromStr;
	use super::{Record, Spring};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RecordError {
		#[error("expected “<springs> <groups>”")]
		Format,
		#[error("invalid spring {0:?}")]
		Spring(char),
		#[error("invalid group size: {0}")]
		Group(#[from] std::num::ParseIntError),
	}

	impl FromStr for Record {
		type Err = RecordError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (springs, groups) = s.split_once(' ').ok_or(RecordError::Format)?;
			let springs = springs.chars()
				.map(|c| match c {
					'.' => Ok(Spring::Operational),
					'#' => Ok(Spring::Damaged),
					'?' => Ok(Spring::Unknown),
					_ => Err(RecordError::Spring(c)),
				})
				.collect::<Result<_, _>>()?;
			let groups = groups.trim().split(',').map(str::parse).collect::<Result<_, _>>()?;
			Ok(Record { springs, groups })
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RecordsError {
		#[error("no records")]
		Empty,
		#[error("line {line}: {source}")]
		Line { line: usize, source: RecordError },
	}

	pub(super) fn try_records_from_str(s: &str) -> Result<Vec<Record>, RecordsError> {
		let records = s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| RecordsError::Line { line: l + 1, source: e }))
			.collect::<Result<Vec<Record>, _>>()?;
		if records.is_empty() { return Err(RecordsError::Empty) }
		Ok(records)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		???.### 1,1,3
		.??..??...?##. 1,1,3
		?#?#?#?#?#?#?#? 1,3,1,6
		????.#...#... 4,1,1
		????.######..#####. 1,6,5
		?###???????? 3,2,1
	" };
	assert_eq!(part1(INPUT).unwrap(), 21);
	assert_eq!(part2(INPUT).unwrap(), 525152);
	let arrangements = input_records_from_str(INPUT).unwrap().iter()
		.map(Record::arrangements)
		.collect::<Vec<_>>();
	assert_eq!(arrangements, [1, 4, 1, 1, 4, 10]);
	assert!(part1("#?x 1").is_err());
	assert!(part1("").is_err());
	assert!(part2("").is_err());
}
