// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::time::Duration;

pub const CARD_CLASSES: [&str; 3] = ["highlight-card", "rating-card", "package-card"];
pub const FORM_GROUP_CLASS: &str = "form-group";

/// Everything that fades or slides in when scrolled into view
pub const ENTRANCE_SELECTOR: &str = ".highlight-card, .rating-card, .package-card, .form-group";
pub const ENTRANCE_THRESHOLD: f64 = 0.1;
pub const ENTRANCE_ROOT_MARGIN: &str = "0px 0px -100px 0px";

pub const HEADING_SELECTOR: &str = "h2";
pub const HEADING_THRESHOLD: f64 = 0.5;
pub const HEADING_ANIMATION: &str = "slideInLeft 0.8s cubic-bezier(0.34, 1.56, 0.64, 1) forwards";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntranceKind {
	Card,
	FormGroup,
	Other,
}

impl EntranceKind {
	pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
		let mut kind = Self::Other;
		for class in classes {
			if CARD_CLASSES.contains(&class) {
				return Self::Card;
			}
			if class == FORM_GROUP_CLASS {
				kind = Self::FormGroup;
			}
		}
		kind
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Entrance {
	pub animation: &'static str,
	pub delay: Duration,
}

/// The animation for an element coming into view. `index` is the element's position in the batch of elements that
/// became visible together, so neighbours are staggered.
pub fn entrance_for(kind: EntranceKind, index: usize) -> Entrance {
	match kind {
		EntranceKind::Card => Entrance {
			animation: "fadeInUp 0.7s cubic-bezier(0.4, 0, 0.2, 1) forwards",
			delay: Duration::from_millis((index % 4) as u64 * 100),
		},
		EntranceKind::FormGroup => Entrance {
			animation: "slideInLeft 0.6s cubic-bezier(0.4, 0, 0.2, 1) forwards",
			delay: Duration::from_millis((index % 5) as u64 * 80),
		},
		EntranceKind::Other => Entrance {
			animation: "fadeInUp 0.6s ease forwards",
			delay: Duration::ZERO,
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn classifies_by_class() {
		assert_eq!(EntranceKind::from_classes(["rating-card"]), EntranceKind::Card);
		assert_eq!(EntranceKind::from_classes(["form-group", "wide"]), EntranceKind::FormGroup);
		assert_eq!(EntranceKind::from_classes(["form-group", "package-card"]), EntranceKind::Card);
		assert_eq!(EntranceKind::from_classes(["hero"]), EntranceKind::Other);
		assert_eq!(EntranceKind::from_classes([]), EntranceKind::Other);
	}

	#[test]
	fn cards_stagger_in_groups_of_four() {
		let delays: Vec<u64> = (0..6)
			.map(|index| entrance_for(EntranceKind::Card, index).delay.as_millis() as u64)
			.collect();
		assert_eq!(delays, [0, 100, 200, 300, 0, 100]);
	}

	#[test]
	fn form_groups_stagger_in_groups_of_five() {
		assert_eq!(entrance_for(EntranceKind::FormGroup, 3).delay, Duration::from_millis(240));
		assert_eq!(entrance_for(EntranceKind::FormGroup, 5).delay, Duration::ZERO);
		assert!(entrance_for(EntranceKind::FormGroup, 0).animation.starts_with("slideInLeft"));
	}

	#[test]
	fn everything_else_fades_in_at_once() {
		let entrance = entrance_for(EntranceKind::Other, 7);
		assert_eq!(entrance.delay, Duration::ZERO);
		assert_eq!(entrance.animation, "fadeInUp 0.6s ease forwards");
	}
}
