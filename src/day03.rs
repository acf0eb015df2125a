// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::grid::{Grid, GridError, Pos};


struct Number {
	value: u32,
	y: usize,
	xs: std::ops::Range<usize>,
}

impl Number {
	fn is_adjacent(&self, [x, y]: Pos) -> bool {
		y + 1 >= self.y && y <= self.y + 1 && x + 1 >= self.xs.start && x <= self.xs.end
	}
}

fn is_symbol(b: u8) -> bool {
	b != b'.' && !b.is_ascii_digit()
}

fn numbers(schematic: &Grid<u8>) -> impl Iterator<Item = Number> + '_ {
	use itertools::Itertools as _;
	schematic.rows().enumerate().flat_map(|(y, row)| row.iter()
		.enumerate()
		.group_by(|(_, b)| b.is_ascii_digit())
		.into_iter()
		.filter(|(is_digit, _)| *is_digit)
		.map(|(_, digits)| digits.fold((usize::MAX, 0, 0), |(start, _, value), (x, b)|
			(start.min(x), x + 1, value * 10 + (b - b'0') as u32)))
		.map(|(start, end, value)| Number { value, y, xs: start..end })
		.collect::<Vec<_>>())
}


fn input_schematic_from_str(s: &str) -> Result<Grid<u8>, GridError> {
	Grid::try_from_str_with(s, |_, b| b.is_ascii_graphic().then_some(b))
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u32> {
	let schematic = input_schematic_from_str(input)?;
	let symbols = schematic.positions()
		.filter(|&pos| is_symbol(schematic[pos]))
		.collect::<Vec<_>>();
	Ok(numbers(&schematic)
		.filter(|number| symbols.iter().any(|&pos| number.is_adjacent(pos)))
		.map(|number| number.value)
		.sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u32> {
	let schematic = input_schematic_from_str(input)?;
	let numbers = numbers(&schematic).collect::<Vec<_>>();
	Ok(schematic.positions()
		.filter(|&pos| schematic[pos] == b'*')
		.filter_map(|pos| {
			let mut adjacent = numbers.iter().filter(|n| n.is_adjacent(pos));
			match (adjacent.next(), adjacent.next(), adjacent.next()) {
				(Some(n0), Some(n1), None) => Some(n0.value * n1.value),
				_ => None,
			}
		})
		.sum())
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		467..114..
		...*......
		..35..633.
		......#...
		617*......
		.....+.58.
		..592.....
		......755.
		...$.*....
		.664.598..
	" };
	assert_eq!(part1(INPUT).unwrap(), 4361);
	assert_eq!(part2(INPUT).unwrap(), 467835);
	assert_eq!(numbers(&input_schematic_from_str(INPUT).unwrap()).map(|n| n.value).take(3).collect::<Vec<_>>(),
		[467, 114, 35]);
}
