// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::ops::Range;


struct MapRange {
	src: Range<u64>,
	dst: u64,
}

impl MapRange {
	fn shift(&self, value: u64) -> u64 {
		value - self.src.start + self.dst
	}
}

/// One “x-to-y map” block.
struct Map(Vec<MapRange>);

impl Map {
	fn apply(&self, value: u64) -> u64 {
		self.0.iter()
			.find(|r| r.src.contains(&value))
			.map_or(value, |r| r.shift(value))
	}

	/// Maps every value in `ranges`; parts of a range covered by different map
	/// ranges end up in different output ranges.
	fn apply_ranges(&self, mut ranges: Vec<Range<u64>>) -> Vec<Range<u64>> {
		let mut mapped = Vec::with_capacity(ranges.len());
		'ranges: while let Some(range) = ranges.pop() {
			for r in &self.0 {
				let overlap = range.start.max(r.src.start)..range.end.min(r.src.end);
				if overlap.is_empty() { continue }
				if range.start < overlap.start { ranges.push(range.start..overlap.start) }
				if overlap.end < range.end { ranges.push(overlap.end..range.end) }
				mapped.push(r.shift(overlap.start)..r.shift(overlap.end - 1) + 1);
				continue 'ranges
			}
			mapped.push(range);
		}
		mapped
	}
}

struct Almanac {
	seeds: Vec<u64>,
	maps: Vec<Map>,
}


fn input_almanac_from_str(s: &str) -> Result<Almanac, parsing::AlmanacError> {
	s.parse()
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	let almanac = input_almanac_from_str(input)?;
	almanac.seeds.iter()
		.map(|&seed| almanac.maps.iter().fold(seed, |value, map| map.apply(value)))
		.min()
		.ok_or_else(|| anyhow::anyhow!("No seeds"))
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	use itertools::Itertools as _;

	let almanac = input_almanac_from_str(input)?;
	anyhow::ensure!(almanac.seeds.len() % 2 == 0, "Seed ranges must come in pairs");
	let seed_ranges = almanac.seeds.iter()
		.tuples()
		.map(|(&start, &len)| start..start + len)
		.filter(|range| !range.is_empty())
		.collect::<Vec<_>>();
	almanac.maps.iter()
		.fold(seed_ranges, |ranges, map| map.apply_ranges(ranges))
		.into_iter()
		.map(|range| range.start)
		.min()
		.ok_or_else(|| anyhow::anyhow!("No seeds"))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Almanac, Map, MapRange};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum AlmanacError {
		#[error("missing “seeds: …” line")]
		Seeds,
		#[error("line {line}: invalid number ({source})")]
		Number { line: usize, source: ParseIntError },
		#[error("line {line}: expected “<destination> <source> <length>”")]
		Range { line: usize },
	}

	impl FromStr for Almanac {
		type Err = AlmanacError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut lines = s.lines().enumerate();

			let seeds = lines.next()
				.and_then(|(_, line)| line.strip_prefix("seeds:"))
				.ok_or(AlmanacError::Seeds)?
				.split_whitespace()
				.map(|seed| seed.parse().map_err(|e| AlmanacError::Number { line: 1, source: e }))
				.collect::<Result<_, _>>()?;

			let mut maps = Vec::new();
			for (l, line) in lines {
				if line.trim().is_empty() { continue }
				if line.ends_with("map:") { maps.push(Map(Vec::new())); continue }
				let Some(Map(ranges)) = maps.last_mut() else {
					return Err(AlmanacError::Range { line: l + 1 })
				};
				let nums = line.split_whitespace()
					.map(|n| n.parse::<u64>().map_err(|e| AlmanacError::Number { line: l + 1, source: e }))
					.collect::<Result<Vec<_>, _>>()?;
				let &[dst, src, len] = nums.as_slice() else {
					return Err(AlmanacError::Range { line: l + 1 })
				};
				ranges.push(MapRange { src: src..src + len, dst });
			}

			Ok(Almanac { seeds, maps })
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		seeds: 79 14 55 13

		seed-to-soil map:
		50 98 2
		52 50 48

		soil-to-fertilizer map:
		0 15 37
		37 52 2
		39 0 15

		fertilizer-to-water map:
		49 53 8
		0 11 42
		42 0 7
		57 7 4

		water-to-light map:
		88 18 7
		18 25 70

		light-to-temperature map:
		45 77 23
		81 45 19
		68 64 13

		temperature-to-humidity map:
		0 69 1
		1 0 69

		humidity-to-location map:
		60 56 37
		56 93 4
	" };
	assert_eq!(part1(INPUT).unwrap(), 35);
	assert_eq!(part2(INPUT).unwrap(), 46);

	let map = Map(vec![MapRange { src: 10..20, dst: 100 }]);
	let mut ranges = map.apply_ranges(vec![5..25]);
	ranges.sort_by_key(|r| r.start);
	assert_eq!(ranges, [5..10, 20..25, 100..110]);
}
