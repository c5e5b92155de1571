// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// How far above a section's top the page can be scrolled for the section to count as current
pub const ACTIVE_SECTION_OFFSET: f64 = 200.0;

/// A page section's ID and its distance from the top of the document
#[derive(Clone, Debug, PartialEq)]
pub struct SectionPosition {
	pub id: String,
	pub top: f64,
}

/// Picks the section the nav menu should highlight: the last one (in document order) whose top has scrolled to
/// within [`ACTIVE_SECTION_OFFSET`] of the viewport top.
pub fn active_section(scroll_y: f64, sections: &[SectionPosition]) -> Option<&str> {
	sections
		.iter()
		.filter(|section| scroll_y >= section.top - ACTIVE_SECTION_OFFSET)
		.last()
		.map(|section| section.id.as_str())
		.filter(|id| !id.is_empty())
}

/// Gets the element ID an in-page link points to
pub fn anchor_target(href: &str) -> Option<&str> {
	href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sections() -> Vec<SectionPosition> {
		[("home", 0.0), ("about", 700.0), ("packages", 1500.0), ("contact", 2600.0)]
			.into_iter()
			.map(|(id, top)| SectionPosition {
				id: id.to_string(),
				top,
			})
			.collect()
	}

	#[test]
	fn top_of_page_is_first_section() {
		assert_eq!(active_section(0.0, &sections()), Some("home"));
	}

	#[test]
	fn section_activates_early() {
		let sections = sections();
		assert_eq!(active_section(499.0, &sections), Some("home"));
		assert_eq!(active_section(500.0, &sections), Some("about"));
		assert_eq!(active_section(1300.0, &sections), Some("packages"));
		assert_eq!(active_section(10_000.0, &sections), Some("contact"));
	}

	#[test]
	fn nothing_is_active_above_all_sections() {
		let sections = vec![SectionPosition {
			id: String::from("about"),
			top: 900.0,
		}];
		assert_eq!(active_section(0.0, &sections), None);
		assert_eq!(active_section(0.0, &[]), None);
	}

	#[test]
	fn section_without_id_highlights_nothing() {
		let sections = vec![SectionPosition {
			id: String::new(),
			top: 0.0,
		}];
		assert_eq!(active_section(100.0, &sections), None);
	}

	#[test]
	fn anchor_targets() {
		assert_eq!(anchor_target("#contact"), Some("contact"));
		assert_eq!(anchor_target("#"), None);
		assert_eq!(anchor_target("/about"), None);
	}
}
