// Copyright (c) 2022 Bastiaan Marinus van de Weerd


struct Card {
	winning: Vec<u32>,
	drawn: Vec<u32>,
}

impl Card {
	fn matches(&self) -> usize {
		self.drawn.iter().filter(|&d| self.winning.contains(d)).count()
	}

	fn points(&self) -> u32 {
		match self.matches() { 0 => 0, n => 1 << (n - 1) }
	}
}


fn input_cards_from_str(s: &str) -> Result<Vec<Card>, parsing::CardsError> {
	parsing::try_cards_from_str(s)
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u32> {
	Ok(input_cards_from_str(input)?.iter().map(Card::points).sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	let cards = input_cards_from_str(input)?;
	let mut copies = vec![1; cards.len()];
	for (i, card) in cards.iter().enumerate() {
		let won = i + 1..(i + 1 + card.matches()).min(cards.len());
		let n = copies[i];
		for copy in &mut copies[won] { *copy += n }
	}
	Ok(copies.iter().sum())
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Card;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum CardError {
		#[error("expected “Card <id>: <winning> | <drawn>”")]
		Format,
		#[error("invalid number: {0}")]
		Number(#[from] ParseIntError),
	}

	impl FromStr for Card {
		type Err = CardError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (_, rest) = s.strip_prefix("Card")
				.and_then(|s| s.split_once(':'))
				.ok_or(CardError::Format)?;
			let (winning, drawn) = rest.split_once('|').ok_or(CardError::Format)?;
			fn numbers(s: &str) -> Result<Vec<u32>, ParseIntError> {
				s.split_whitespace().map(str::parse).collect()
			}
			Ok(Card { winning: numbers(winning)?, drawn: numbers(drawn)? })
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum CardsError {
		#[error("no cards")]
		Empty,
		#[error("line {line}: {source}")]
		Line { line: usize, source: CardError },
	}

	pub(super) fn try_cards_from_str(s: &str) -> Result<Vec<Card>, CardsError> {
		let cards = s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| CardsError::Line { line: l + 1, source: e }))
			.collect::<Result<Vec<Card>, _>>()?;
		if cards.is_empty() { return Err(CardsError::Empty) }
		Ok(cards)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
		Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
		Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
		Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
		Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
		Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
	" };
	assert_eq!(part1(INPUT).unwrap(), 13);
	assert_eq!(part2(INPUT).unwrap(), 30);
	assert!(part1("").is_err());
	assert!(part2("").is_err());
}
