// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
struct Race {
	time: u64,
	record: u64,
}

impl Race {
	fn beats_record(&self, hold: u64) -> bool {
		hold * (self.time - hold) > self.record
	}

	/// Solves `hold * (time - hold) > record` via the quadratic's roots, then
	/// nudges the lower bound to absorb floating-point error.
	fn ways_to_win(&self) -> u64 {
		let discriminant = (self.time as f64).powi(2) - 4.0 * self.record as f64;
		if discriminant < 0.0 { return 0 }
		let half = self.time / 2;
		let mut lo = ((self.time as f64 - discriminant.sqrt()) / 2.0).floor().max(0.0) as u64;
		while lo > 0 && self.beats_record(lo - 1) { lo -= 1 }
		while lo <= half && !self.beats_record(lo) { lo += 1 }
		if lo > half { return 0 }
		// Symmetric around `time / 2`
		self.time - 2 * lo + 1
	}

	#[cfg(test)]
	fn ways_to_win_brute(&self) -> u64 {
		(0..=self.time).filter(|&hold| self.beats_record(hold)).count() as u64
	}
}


fn input_races_from_str(s: &str, kerning: bool) -> Result<Vec<Race>, parsing::RacesError> {
	parsing::try_races_from_str(s, kerning)
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	Ok(input_races_from_str(input, false)?.iter().map(Race::ways_to_win).product())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	Ok(input_races_from_str(input, true)?.iter().map(Race::ways_to_win).product())
}


mod parsing {
	use std::num::ParseIntError;
	use super::Race;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum RacesError {
		#[error("missing “{0}” line")]
		Missing(&'static str),
		#[error("invalid number: {0}")]
		Number(#[from] ParseIntError),
		#[error("{times} times but {records} distances")]
		Len { times: usize, records: usize },
	}

	pub(super) fn try_races_from_str(s: &str, kerning: bool) -> Result<Vec<Race>, RacesError> {
		let mut lines = s.lines();
		let mut numbers = |label: &'static str| -> Result<Vec<u64>, RacesError> {
			let line = lines.next()
				.and_then(|line| line.strip_prefix(label))
				.ok_or(RacesError::Missing(label))?;
			if kerning {
				Ok(vec![line.split_whitespace().collect::<String>().parse()?])
			} else {
				Ok(line.split_whitespace().map(str::parse).collect::<Result<_, _>>()?)
			}
		};
		let times = numbers("Time:")?;
		let records = numbers("Distance:")?;
		if times.len() != records.len() {
			return Err(RacesError::Len { times: times.len(), records: records.len() })
		}
		Ok(times.into_iter().zip(records).map(|(time, record)| Race { time, record }).collect())
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Time:      7  15   30
		Distance:  9  40  200
	" };
	assert_eq!(part1(INPUT).unwrap(), 288);
	assert_eq!(part2(INPUT).unwrap(), 71503);
	for race in input_races_from_str(INPUT, false).unwrap().into_iter()
			.chain([Race { time: 10, record: 25 }, Race { time: 10, record: 24 }, Race { time: 3, record: 0 }]) {
		assert_eq!(race.ways_to_win(), race.ways_to_win_brute());
	}
}
