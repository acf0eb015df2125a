// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Brick {
	min: [u32; 3],
	max: [u32; 3],
}

impl Brick {
	fn footprint(&self) -> impl Iterator<Item = [u32; 2]> {
		let Brick { min: [x0, y0, _], max: [x1, y1, _] } = *self;
		(x0..=x1).flat_map(move |x| (y0..=y1).map(move |y| [x, y]))
	}
}

/// For every brick, once settled in order of their lowest points, the bricks it
/// rests on (all of which come earlier).
fn settle(mut bricks: Vec<Brick>) -> Vec<Vec<usize>> {
	use std::collections::HashMap;

	bricks.sort_by_key(|brick| brick.min[2]);
	// Top height & brick per occupied column
	let mut tops = HashMap::<[u32; 2], (u32, usize)>::new();
	let mut supporters = Vec::with_capacity(bricks.len());
	for (i, brick) in bricks.iter().enumerate() {
		let below = brick.footprint()
			.filter_map(|xy| tops.get(&xy).copied())
			.collect::<Vec<_>>();
		let rest = below.iter().map(|&(z, _)| z).max().unwrap_or(0);
		let mut on = below.into_iter()
			.filter(|&(z, _)| z == rest)
			.map(|(_, j)| j)
			.collect::<Vec<_>>();
		on.sort_unstable();
		on.dedup();
		supporters.push(on);

		let top = rest + 1 + brick.max[2] - brick.min[2];
		for xy in brick.footprint() { tops.insert(xy, (top, i)); }
	}
	supporters
}

/// How many other bricks would fall if `removed` disappeared.
fn chain_reaction(supporters: &[Vec<usize>], removed: usize) -> usize {
	let mut fallen = vec![false; supporters.len()];
	fallen[removed] = true;
	let mut count = 0;
	for i in removed + 1..supporters.len() {
		let on = &supporters[i];
		if !on.is_empty() && on.iter().all(|&j| fallen[j]) {
			fallen[i] = true;
			count += 1;
		}
	}
	count
}


fn input_bricks_from_str(s: &str) -> Result<Vec<Brick>, parsing::BricksError> {
	parsing::try_bricks_from_str(s)
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	let supporters = settle(input_bricks_from_str(input)?);
	let mut essential = vec![false; supporters.len()];
	for on in &supporters {
		if let &[only] = on.as_slice() { essential[only] = true }
	}
	Ok(essential.iter().filter(|&&e| !e).count())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	let supporters = settle(input_bricks_from_str(input)?);
	Ok((0..supporters.len()).map(|i| chain_reaction(&supporters, i)).sum())
}


mod parsing {
	use std::str::FromStr;
	use super::Brick;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum BrickError {
		#[error("expected “x,y,z~x,y,z”")]
		Format,
		#[error("invalid coordinate: {0}")]
		Coord(#[from] std::num::ParseIntError),
		#[error("ends must not be above one another")]
		Order,
	}

	impl FromStr for Brick {
		type Err = BrickError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			fn coords(s: &str) -> Result<[u32; 3], BrickError> {
				let mut coords = s.split(',').map(|c| c.trim().parse::<u32>());
				let (Some(x), Some(y), Some(z), None) = (coords.next(), coords.next(), coords.next(), coords.next()) else {
					return Err(BrickError::Format)
				};
				Ok([x?, y?, z?])
			}
			let (min, max) = s.split_once('~').ok_or(BrickError::Format)?;
			let (min, max) = (coords(min)?, coords(max)?);
			if min.iter().zip(&max).any(|(a, b)| a > b) { return Err(BrickError::Order) }
			Ok(Brick { min, max })
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum BricksError {
		#[error("no bricks")]
		Empty,
		#[error("line {line}: {source}")]
		Line { line: usize, source: BrickError },
	}

	pub(super) fn try_bricks_from_str(s: &str) -> Result<Vec<Brick>, BricksError> {
		let bricks = s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| BricksError::Line { line: l + 1, source: e }))
			.collect::<Result<Vec<Brick>, _>>()?;
		if bricks.is_empty() { return Err(BricksError::Empty) }
		Ok(bricks)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		1,0,1~1,2,1
		0,0,2~2,0,2
		0,2,3~2,2,3
		0,0,4~0,2,4
		2,0,5~2,2,5
		0,1,6~2,1,6
		1,1,8~1,1,9
	" };
	assert_eq!(part1(INPUT).unwrap(), 5);
	assert_eq!(part2(INPUT).unwrap(), 7);
	let supporters = settle(input_bricks_from_str(INPUT).unwrap());
	assert_eq!(supporters, [vec![], vec![0], vec![0], vec![1, 2], vec![1, 2], vec![3, 4], vec![5]]);
	assert!(part1("1,0,1~1,2").is_err());
	assert!(part1("1,0,2~1,2,1").is_err());
	assert!(part1("").is_err());
	assert!(part2("").is_err());
}
