// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::grid::Dir;


struct Instruction {
	dir: Dir,
	len: u32,
	color: u32,
}

impl Instruction {
	/// The instruction hidden in the color: five hex digits of length, then one of direction.
	fn decoded(&self) -> Option<Instruction> {
		let dir = match self.color & 0xf {
			0 => Dir::Right,
			1 => Dir::Down,
			2 => Dir::Left,
			3 => Dir::Up,
			_ => return None,
		};
		Some(Instruction { dir, len: self.color >> 4, color: self.color })
	}
}

/// Cubes dug out: the polygon's area by the shoelace formula, plus the trench's
/// own half-cells on the boundary (Pick's theorem).
fn lagoon_volume<'a>(instructions: impl IntoIterator<Item = &'a Instruction>) -> i64 {
	let ([mut x, mut y], mut twice_area, mut boundary) = ([0i64, 0], 0, 0);
	for instruction in instructions {
		let [dx, dy] = instruction.dir.delta().map(|d| d as i64 * i64::from(instruction.len));
		twice_area += x * (y + dy) - (x + dx) * y;
		boundary += i64::from(instruction.len);
		x += dx;
		y += dy;
	}
	twice_area.abs() / 2 + boundary / 2 + 1
}


fn input_instructions_from_str(s: &str) -> Result<Vec<Instruction>, parsing::InstructionsError> {
	parsing::try_instructions_from_str(s)
}


pub(crate) fn part1(input: &str) -> anyhow::Result<i64> {
	Ok(lagoon_volume(&input_instructions_from_str(input)?))
}


pub(crate) fn part2(input: &str) -> anyhow::Result<i64> {
	let instructions = input_instructions_from_str(input)?.iter()
		.enumerate()
		.map(|(i, instruction)| instruction.decoded()
			.ok_or_else(|| anyhow::anyhow!("Instruction {}: invalid direction digit in {:06x}", i + 1, instruction.color)))
		.collect::<anyhow::Result<Vec<_>>>()?;
	Ok(lagoon_volume(&instructions))
}


mod parsing {
	use std::str::FromStr;
	use crate::grid::Dir;
	use super::Instruction;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum InstructionError {
		#[error("expected “<direction> <length> (#<color>)”")]
		Format,
		#[error("invalid direction {0:?}")]
		Dir(String),
		#[error("invalid number: {0}")]
		Number(#[from] std::num::ParseIntError),
	}

	impl FromStr for Instruction {
		type Err = InstructionError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut parts = s.split_whitespace();
			let (Some(dir), Some(len), Some(color), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
				return Err(InstructionError::Format)
			};
			let dir = match dir {
				"U" => Dir::Up,
				"D" => Dir::Down,
				"L" => Dir::Left,
				"R" => Dir::Right,
				_ => return Err(InstructionError::Dir(dir.to_owned())),
			};
			let color = color.strip_prefix("(#")
				.and_then(|c| c.strip_suffix(')'))
				.filter(|c| c.len() == 6)
				.ok_or(InstructionError::Format)?;
			Ok(Instruction { dir, len: len.parse()?, color: u32::from_str_radix(color, 16)? })
		}
	}

	#[derive(Debug, thiserror::Error)]
	pub(super) enum InstructionsError {
		#[error("no instructions")]
		Empty,
		#[error("line {line}: {source}")]
		Line { line: usize, source: InstructionError },
	}

	pub(super) fn try_instructions_from_str(s: &str) -> Result<Vec<Instruction>, InstructionsError> {
		let instructions = s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|e| InstructionsError::Line { line: l + 1, source: e }))
			.collect::<Result<Vec<Instruction>, _>>()?;
		if instructions.is_empty() { return Err(InstructionsError::Empty) }
		Ok(instructions)
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		R 6 (#70c710)
		D 5 (#0dc571)
		L 2 (#5713f0)
		D 2 (#d2c081)
		R 2 (#59c680)
		D 2 (#411b91)
		L 5 (#8ceee2)
		U 2 (#caa173)
		L 1 (#1b58a2)
		U 2 (#caa171)
		R 2 (#7807d2)
		U 3 (#a77fa3)
		L 2 (#015232)
		U 2 (#7a21e3)
	" };
	assert_eq!(part1(INPUT).unwrap(), 62);
	assert_eq!(part2(INPUT).unwrap(), 952408144115);
	assert!(part2("R 6 (#70c714)").is_err());
	assert!(part1("").is_err());
	assert!(part1("R -3 (#70c710)").is_err());
}
