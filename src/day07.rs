// Copyright (c) 2022 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
enum HandType { HighCard, OnePair, TwoPair, ThreeOfAKind, FullHouse, FourOfAKind, FiveOfAKind }

/// Card labels, weakest first. With jokers, `J` ranks below `2`.
const LABELS: &[u8; 13] = b"23456789TJQKA";
const JOKER_LABELS: &[u8; 13] = b"J23456789TQKA";

struct Hand {
	cards: [u8; 5],
	bid: u64,
}

impl Hand {
	fn strengths(&self, jokers: bool) -> [u8; 5] {
		let labels = if jokers { JOKER_LABELS } else { LABELS };
		self.cards.map(|c| labels.iter().position(|&l| l == c).unwrap_or(0) as u8)
	}

	fn hand_type(&self, jokers: bool) -> HandType {
		let mut counts = [0u8; 13];
		let mut wild = 0;
		for (&card, strength) in self.cards.iter().zip(self.strengths(jokers)) {
			if jokers && card == b'J' { wild += 1 } else { counts[strength as usize] += 1 }
		}
		counts.sort_unstable_by(|a, b| b.cmp(a));
		// Jokers always do best by joining the largest group
		counts[0] += wild;
		match (counts[0], counts[1]) {
			(5, _) => HandType::FiveOfAKind,
			(4, _) => HandType::FourOfAKind,
			(3, 2) => HandType::FullHouse,
			(3, _) => HandType::ThreeOfAKind,
			(2, 2) => HandType::TwoPair,
			(2, _) => HandType::OnePair,
			_ => HandType::HighCard,
		}
	}
}


fn input_hands_from_str(s: &str) -> Result<Vec<Hand>, parsing::HandsError> {
	parsing::try_hands_from_str(s)
}


fn part_impl(input: &str, jokers: bool) -> anyhow::Result<u64> {
	let mut hands = input_hands_from_str(input)?;
	hands.sort_by_cached_key(|hand| (hand.hand_type(jokers), hand.strengths(jokers)));
	Ok((1..).zip(&hands).map(|(rank, hand)| rank * hand.bid).sum())
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u64> {
	part_impl(input, false)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u64> {
	part_impl(input, true)
}


mod parsing {
	use std::str::FromStr;
	use super::{Hand, LABELS};

	#[derive(Debug, thiserror::Error)]
	pub(super) enum HandError {
		#[error("expected “<cards> <bid>”")]
		Format,
		#[error("expected 5 cards, found {0}")]
		Len(usize),
		#[error("invalid card {0:?}")]
		Card(char),
		#[error("invalid bid: {0}")]
		Bid(#[from] std::num::ParseIntError),
	}

	impl FromStr for Hand {
		type Err = HandError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (cards, bid) = s.split_once(' ').ok_or(HandError::Format)?;
			let cards: [u8; 5] = cards.as_bytes().try_into()
				.map_err(|_| HandError::Len(cards.len()))?;
			if let Some(&c) = cards.iter().find(|&&c| !LABELS.contains(&c)) {
				return Err(HandError::Card(c as char))
			}
			Ok(Hand { cards, bid: bid.trim().parse()? })
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum HandsError {
		#[error("no hands")]
		Empty,
		#[error("line {line}: {source}")]
		Line { line: usize, source: HandError },
	}

	pub(super) fn try_hands_from_str(s: &str) -> Result<Vec<Hand>, HandsError> {
		let hands = s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| HandsError::Line { line: l + 1, source: e }))
			.collect::<Result<Vec<Hand>, _>>()?;
		if hands.is_empty() { return Err(HandsError::Empty) }
		Ok(hands)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		32T3K 765
		T55J5 684
		KK677 28
		KTJJT 220
		QQQJA 483
	" };
	assert_eq!(part1(INPUT).unwrap(), 6440);
	assert_eq!(part2(INPUT).unwrap(), 5905);

	let hand = |cards: &str| cards.parse::<Hand>().map(|h| (h.hand_type(false), h.hand_type(true)));
	assert_eq!(hand("JJJJJ 1").unwrap(), (HandType::FiveOfAKind, HandType::FiveOfAKind));
	assert_eq!(hand("KTJJT 1").unwrap(), (HandType::TwoPair, HandType::FourOfAKind));
	assert_eq!(hand("2345J 1").unwrap(), (HandType::HighCard, HandType::OnePair));
	assert!(hand("2345 1").is_err());
	assert!(hand("2345X 1").is_err());
	assert!(part1("").is_err());
	assert!(part2("").is_err());
}
