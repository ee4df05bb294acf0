//! Non-fatal conversion diagnostics.
//!
//! Conditions that should be reported to the operator but do not abort a
//! conversion are collected here instead of being printed on the spot. The
//! caller decides how to surface them.

use std::fmt;

/// A non-fatal condition found during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
	/// Non-transparent pixels of one tile use more than one palette group.
	///
	/// The first palette group seen in the tile is kept.
	MultiplePalettes {
		/// X coordinate of the tile's top-left pixel
		x: usize,
		/// Y coordinate of the tile's top-left pixel
		y: usize,
	},

	/// Mirror optimization was requested together with mode 7 and was turned off.
	MirrorsIgnoredInMode7,
}

impl fmt::Display for Warning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MultiplePalettes {
				x,
				y,
			} => write!(f, "more than one palette used in the tile at ({x}, {y})"),
			Self::MirrorsIgnoredInMode7 => {
				write!(f, "mirror tiles can't be optimized in mode 7 (ignoring mirror optimization)")
			}
		}
	}
}

/// Ordered list of warnings collected during a conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
	warnings: Vec<Warning>,
}

impl Diagnostics {
	/// Creates an empty diagnostics list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records a warning.
	pub fn push(&mut self, warning: Warning) {
		log::debug!("diagnostic: {warning}");
		self.warnings.push(warning);
	}

	/// Appends every warning of `other`, keeping order.
	pub fn extend(&mut self, other: Diagnostics) {
		self.warnings.extend(other.warnings);
	}

	/// Returns `true` if nothing was recorded.
	pub fn is_empty(&self) -> bool {
		self.warnings.is_empty()
	}

	/// Returns the number of recorded warnings.
	pub fn len(&self) -> usize {
		self.warnings.len()
	}

	/// Returns an iterator over recorded warnings.
	pub fn iter(&self) -> impl Iterator<Item = &Warning> {
		self.warnings.iter()
	}

	/// Returns the recorded warnings as a slice.
	pub fn as_slice(&self) -> &[Warning] {
		&self.warnings
	}
}

impl<'a> IntoIterator for &'a Diagnostics {
	type Item = &'a Warning;
	type IntoIter = std::slice::Iter<'a, Warning>;

	fn into_iter(self) -> Self::IntoIter {
		self.warnings.iter()
	}
}
