// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::section_link::SectionLink;
use crate::web::effects::navigation::anchor_target;
use leptos::prelude::*;

/// Links in the nav menu, in page order
pub const NAV_LINKS: [(&str, &str); 5] = [
	("#home", "Home"),
	("#about", "About"),
	("#packages", "Packages"),
	("#testimonials", "Testimonials"),
	("#contact", "Contact"),
];

#[component]
pub fn PageHeader() -> impl IntoView {
	let (active_section, set_active_section) = signal(String::new());

	Effect::new(move |_| {
		#[cfg(feature = "hydrate")]
		{
			use crate::web::effects::dom::{scroll_y, section_positions};
			use crate::web::effects::navigation::active_section as current_section;

			let update_active_section = move || {
				let sections = section_positions();
				let current = current_section(scroll_y(), &sections).unwrap_or_default().to_string();
				set_active_section.set(current);
			};
			update_active_section();
			let _ = window_event_listener(leptos::ev::scroll, move |_| update_active_section());
		}
		#[cfg(not(feature = "hydrate"))]
		let _ = set_active_section;
	});

	view! {
		<header id="header">
			<nav class="navbar">
				<SectionLink href="#home" class="nav-logo">
					"Career Coaching"
				</SectionLink>
				<ul class="nav-menu">
					{
						NAV_LINKS
							.into_iter()
							.map(|(href, label)| {
								let is_active = move || {
									active_section.with(|active| anchor_target(href) == Some(active.as_str()))
								};
								view! {
									<li>
										<SectionLink href=href active=Signal::derive(is_active)>
											{label}
										</SectionLink>
									</li>
								}
							})
							.collect::<Vec<_>>()
					}
				</ul>
			</nav>
		</header>
	}
}
