// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::animation::{
	ENTRANCE_ROOT_MARGIN, ENTRANCE_SELECTOR, ENTRANCE_THRESHOLD, EntranceKind, HEADING_ANIMATION, HEADING_SELECTOR,
	HEADING_THRESHOLD, entrance_for,
};
use super::navigation::SectionPosition;
use js_sys::Array;
use leptos::logging::warn;
use leptos::prelude::set_timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
	ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

fn document() -> Option<Document> {
	web_sys::window()?.document()
}

fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
	let Ok(nodes) = document.query_selector_all(selector) else {
		return Vec::new();
	};
	(0..nodes.length())
		.filter_map(|index| nodes.get(index))
		.filter_map(|node| node.dyn_into::<T>().ok())
		.collect()
}

/// Smoothly scrolls the element with the given ID to the top of the viewport, if there is one
pub fn scroll_to_section(id: &str) {
	let Some(target) = document().and_then(|document| document.get_element_by_id(id)) else {
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	options.set_block(ScrollLogicalPosition::Start);
	target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_y() -> f64 {
	web_sys::window()
		.and_then(|window| window.scroll_y().ok())
		.unwrap_or(0.0)
}

/// Positions of the page's `<section>`s in document order
pub fn section_positions() -> Vec<SectionPosition> {
	let Some(document) = document() else {
		return Vec::new();
	};
	query_all::<HtmlElement>(&document, "section")
		.into_iter()
		.map(|section| SectionPosition {
			id: section.id(),
			top: f64::from(section.offset_top()),
		})
		.collect()
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
	if let Err(error) = element.style().set_property(property, value) {
		warn!("Couldn't set {} to {}: {:?}", property, value, error);
	}
}

fn set_animation(element: &Element, animation: &str) {
	if let Some(element) = element.dyn_ref::<HtmlElement>() {
		set_style(element, "animation", animation);
	}
}

fn hide(element: &HtmlElement) {
	set_style(element, "opacity", "0");
}

fn class_names(element: &Element) -> Vec<String> {
	let classes = element.class_list();
	(0..classes.length()).filter_map(|index| classes.item(index)).collect()
}

fn observer_options(threshold: f64, root_margin: Option<&str>) -> IntersectionObserverInit {
	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(threshold));
	if let Some(root_margin) = root_margin {
		options.set_root_margin(root_margin);
	}
	options
}

fn intersecting_entries(entries: &Array) -> impl Iterator<Item = (usize, Element)> + '_ {
	entries
		.iter()
		.enumerate()
		.filter_map(|(index, entry)| {
			let entry = entry.dyn_into::<IntersectionObserverEntry>().ok()?;
			entry.is_intersecting().then(|| (index, entry.target()))
		})
}

/// Hides the cards and form groups until they scroll into view, then animates them in
pub fn observe_entrances() {
	let Some(document) = document() else {
		return;
	};

	let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(|entries: Array, _observer: IntersectionObserver| {
		for (index, element) in intersecting_entries(&entries) {
			let classes = class_names(&element);
			let kind = EntranceKind::from_classes(classes.iter().map(String::as_str));
			let entrance = entrance_for(kind, index);
			if entrance.delay.is_zero() {
				set_animation(&element, entrance.animation);
			} else {
				set_timeout(move || set_animation(&element, entrance.animation), entrance.delay);
			}
		}
	});

	let options = observer_options(ENTRANCE_THRESHOLD, Some(ENTRANCE_ROOT_MARGIN));
	let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
		Ok(observer) => observer,
		Err(error) => {
			warn!("Couldn't set up entrance animations: {:?}", error);
			return;
		}
	};
	callback.forget();

	for element in query_all::<HtmlElement>(&document, ENTRANCE_SELECTOR) {
		hide(&element);
		observer.observe(&element);
	}
}

/// Slides section headings in the first time each one is mostly visible
pub fn observe_headings() {
	let Some(document) = document() else {
		return;
	};

	let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(|entries: Array, observer: IntersectionObserver| {
		for (_, heading) in intersecting_entries(&entries) {
			set_animation(&heading, HEADING_ANIMATION);
			observer.unobserve(&heading);
		}
	});

	let options = observer_options(HEADING_THRESHOLD, None);
	let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
		Ok(observer) => observer,
		Err(error) => {
			warn!("Couldn't set up heading animations: {:?}", error);
			return;
		}
	};
	callback.forget();

	for heading in query_all::<HtmlElement>(&document, HEADING_SELECTOR) {
		hide(&heading);
		observer.observe(&heading);
	}
}
