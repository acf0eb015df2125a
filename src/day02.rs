// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
enum Color { Red, Green, Blue }

/// Red, green, & blue counts.
type Cubes = [u32; 3];

struct Game {
	id: u32,
	draws: Vec<Cubes>,
}

impl Game {
	fn min_cubes(&self) -> Cubes {
		self.draws.iter().fold([0; 3], |mut min, draw| {
			for (m, &d) in min.iter_mut().zip(draw) { *m = (*m).max(d) }
			min
		})
	}

	fn is_possible_with(&self, bag: &Cubes) -> bool {
		self.min_cubes().iter().zip(bag).all(|(m, b)| m <= b)
	}
}


fn input_games_from_str(s: &str) -> Result<Vec<Game>, parsing::GamesError> {
	parsing::try_games_from_str(s)
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u32> {
	const BAG: Cubes = [12, 13, 14];
	Ok(input_games_from_str(input)?.iter()
		.filter(|game| game.is_possible_with(&BAG))
		.map(|game| game.id)
		.sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u32> {
	Ok(input_games_from_str(input)?.iter()
		.map(|game| game.min_cubes().iter().product::<u32>())
		.sum())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Color, Cubes, Game};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum GameError {
		#[error("expected “Game <id>: …”")]
		Format,
		#[error("invalid game id: {0}")]
		Id(ParseIntError),
		#[error("invalid count in “{0}”")]
		Count(String),
		#[error("unknown color “{0}”")]
		Color(String),
	}

	impl FromStr for Game {
		type Err = GameError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (id, draws) = s.strip_prefix("Game ")
				.and_then(|s| s.split_once(": "))
				.ok_or(GameError::Format)?;
			let id = id.parse().map_err(GameError::Id)?;
			let draws = draws.split("; ")
				.map(|draw| draw.split(", ").try_fold([0; 3], |mut cubes: Cubes, count_color| {
					let (count, color) = count_color.split_once(' ')
						.ok_or_else(|| GameError::Count(count_color.to_owned()))?;
					let color = match color {
						"red" => Color::Red,
						"green" => Color::Green,
						"blue" => Color::Blue,
						_ => return Err(GameError::Color(color.to_owned())),
					};
					cubes[color as usize] += count.parse::<u32>()
						.map_err(|_| GameError::Count(count_color.to_owned()))?;
					Ok(cubes)
				}))
				.collect::<Result<_, _>>()?;
			Ok(Game { id, draws })
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum GamesError {
		#[error("no games")]
		Empty,
		#[error("line {line}: {source}")]
		Line { line: usize, source: GameError },
	}

	pub(super) fn try_games_from_str(s: &str) -> Result<Vec<Game>, GamesError> {
		let games = s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| GamesError::Line { line: l + 1, source: e }))
			.collect::<Result<Vec<Game>, _>>()?;
		if games.is_empty() { return Err(GamesError::Empty) }
		Ok(games)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
		Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
		Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
		Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
		Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
	" };
	assert_eq!(part1(INPUT).unwrap(), 8);
	assert_eq!(part2(INPUT).unwrap(), 2286);
	assert!(part1("Game 1: 3 purple").is_err());
	assert!(part1("").is_err());
	assert!(part2("").is_err());
}
