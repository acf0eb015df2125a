// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


/// Dense ids for names, in order of first appearance.
#[derive(Default, Debug)]
pub(crate) struct Interner<'a> {
	ids: HashMap<&'a str, usize>,
	names: Vec<&'a str>,
}

impl<'a> Interner<'a> {
	pub(crate) fn intern(&mut self, name: &'a str) -> usize {
		if let Some(&id) = self.ids.get(name) { return id }
		let id = self.names.len();
		self.ids.insert(name, id);
		self.names.push(name);
		id
	}

	pub(crate) fn get(&self, name: &str) -> Option<usize> {
		self.ids.get(name).copied()
	}

	pub(crate) fn resolve(&self, id: usize) -> &'a str {
		self.names[id]
	}

	pub(crate) fn len(&self) -> usize {
		self.names.len()
	}

	pub(crate) fn names(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
		self.names.iter().copied().enumerate()
	}
}


#[test]
fn tests() {
	let mut interner = Interner::default();
	assert_eq!(interner.intern("jqt"), 0);
	assert_eq!(interner.intern("rhn"), 1);
	assert_eq!(interner.intern("jqt"), 0);
	assert_eq!(interner.len(), 2);
	assert_eq!(interner.resolve(1), "rhn");
	assert_eq!(interner.get("rhn"), Some(1));
	assert_eq!(interner.get("xhk"), None);
	assert_eq!(interner.names().collect::<Vec<_>>(), [(0, "jqt"), (1, "rhn")]);
}
