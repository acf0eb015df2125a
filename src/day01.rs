// Copyright (c) 2022 Bastiaan Marinus van de Weerd


const SPELLED_DIGITS: [&str; 9] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

#[derive(Debug, thiserror::Error)]
enum CalibrationError {
	#[error("empty calibration document")]
	Empty,
	#[error("line {line}: no digit found")]
	NoDigit { line: usize },
}


fn digit_at(line: &str, i: usize, spelled: bool) -> Option<u32> {
	let digit = line.as_bytes()[i];
	if digit.is_ascii_digit() { return Some((digit - b'0') as u32) }
	if !spelled { return None }
	// Spelled digits may overlap (e.g. “eightwo”), so each position is checked on its own.
	SPELLED_DIGITS.iter()
		.position(|d| line.as_bytes()[i..].starts_with(d.as_bytes()))
		.map(|p| p as u32 + 1)
}

fn calibration_value(line: &str, spelled: bool) -> Option<u32> {
	let first = (0..line.len()).find_map(|i| digit_at(line, i, spelled))?;
	let last = (0..line.len()).rev().find_map(|i| digit_at(line, i, spelled))?;
	Some(10 * first + last)
}

fn sum_calibration_values(s: &str, spelled: bool) -> Result<u32, CalibrationError> {
	if s.trim().is_empty() { return Err(CalibrationError::Empty) }
	s.lines()
		.enumerate()
		.map(|(l, line)| calibration_value(line, spelled)
			.ok_or(CalibrationError::NoDigit { line: l + 1 }))
		.sum()
}


pub(crate) fn part1(input: &str) -> anyhow::Result<u32> {
	Ok(sum_calibration_values(input, false)?)
}


pub(crate) fn part2(input: &str) -> anyhow::Result<u32> {
	Ok(sum_calibration_values(input, true)?)
}


#[test]
fn tests() {
	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			1abc2
			pqr3stu8vwx
			a1b2c3d4e5f
			treb7uchet
		" },
		indoc::indoc! { "
			two1nine
			eightwothree
			abcone2threexyz
			xtwone3four
			4nineeightseven2
			zoneight234
			7pqrstsixteen
		" },
	];
	assert_eq!(part1(INPUTS[0]).unwrap(), 142);
	assert_eq!(part2(INPUTS[0]).unwrap(), 142);
	assert_eq!(part2(INPUTS[1]).unwrap(), 281);
	assert_eq!(calibration_value("eightwo", true), Some(82));
	assert!(part1(INPUTS[1]).is_err());
	assert!(matches!(sum_calibration_values("", true), Err(CalibrationError::Empty)));
	assert!(part1("").is_err());
}
