// Copyright (c) 2022 Bastiaan Marinus van de Weerd


fn hash(s: &str) -> usize {
	s.bytes().fold(0, |h, b| (h + b as usize) * 17 % 256)
}

#[derive(Debug, PartialEq, Eq)]
enum Op<'a> {
	Remove(&'a str),
	Insert(&'a str, u8),
}

impl Op<'_> {
	fn label(&self) -> &str {
		match self { Op::Remove(label) | Op::Insert(label, _) => label }
	}
}


#[derive(Debug, thiserror::Error)]
#[error("empty initialization sequence")]
struct EmptySequence;

fn input_steps(s: &str) -> Result<impl Iterator<Item = &str>, EmptySequence> {
	if s.trim().is_empty() { return Err(EmptySequence) }
	Ok(s.split(',').map(|step| step.trim_matches(|c: char| c.is_ascii_whitespace())))
}


pub(crate) fn part1(input: &str) -> anyhow::Result<usize> {
	Ok(input_steps(input)?.map(hash).sum())
}


pub(crate) fn part2(input: &str) -> anyhow::Result<usize> {
	let mut boxes: [Vec<(&str, u8)>; 256] = std::array::from_fn(|_| Vec::new());
	for (s, step) in input_steps(input)?.enumerate() {
		let op = parsing::try_op_from_str(step)
			.map_err(|e| anyhow::anyhow!("Step {}: {e}", s + 1))?;
		let lenses = &mut boxes[hash(op.label())];
		let slot = lenses.iter().position(|&(label, _)| label == op.label());
		match (op, slot) {
			(Op::Remove(_), Some(slot)) => _ = lenses.remove(slot),
			(Op::Remove(_), None) => (),
			(Op::Insert(_, focal), Some(slot)) => lenses[slot].1 = focal,
			(Op::Insert(label, focal), None) => lenses.push((label, focal)),
		}
	}
	Ok(boxes.iter()
		.zip(1..)
		.flat_map(|(lenses, b)| lenses.iter().zip(1..).map(move |(&(_, focal), s)| b * s * focal as usize))
		.sum())
}


mod parsing {
	use super::Op;

	#[derive(Debug, thiserror::Error)]
	pub(super) enum OpError {
		#[error("expected “<label>-” or “<label>=<focal length>” in “{0}”")]
		Format(String),
		#[error("invalid focal length in “{0}”")]
		Focal(String),
	}

	pub(super) fn try_op_from_str(s: &str) -> Result<Op<'_>, OpError> {
		if let Some(label) = s.strip_suffix('-') {
			return Ok(Op::Remove(label))
		}
		let (label, focal) = s.split_once('=').ok_or_else(|| OpError::Format(s.to_owned()))?;
		let focal = focal.parse::<u8>().ok()
			.filter(|f| (1..=9).contains(f))
			.ok_or_else(|| OpError::Focal(s.to_owned()))?;
		Ok(Op::Insert(label, focal))
	}
}


#[test]
fn tests() {
	const INPUT: &str = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7\n";
	assert_eq!(hash("HASH"), 52);
	assert_eq!(part1(INPUT).unwrap(), 1320);
	assert_eq!(part2(INPUT).unwrap(), 145);
	assert!(part2("rn=x").is_err());
	assert!(part2("rn").is_err());
	assert!(part1("\n").is_err());
	assert!(part2("").is_err());
}
