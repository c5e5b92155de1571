// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::web::effects::navigation::anchor_target;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// A link to a section of the page that scrolls smoothly instead of jumping
#[component]
pub fn SectionLink(
	href: &'static str,
	#[prop(optional)] class: &'static str,
	#[prop(optional, into)] active: Option<Signal<bool>>,
	children: Children,
) -> impl IntoView {
	let on_click = move |event: MouseEvent| {
		let Some(target) = anchor_target(href) else {
			return;
		};
		event.prevent_default();
		#[cfg(feature = "hydrate")]
		crate::web::effects::dom::scroll_to_section(target);
		#[cfg(not(feature = "hydrate"))]
		let _ = target;
	};

	view! {
		<a
			href=href
			class=class
			class:active=move || active.is_some_and(|active| active.get())
			on:click=on_click
		>
			{children()}
		</a>
	}
}
