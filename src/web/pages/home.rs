// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::contact_form::ContactForm;
use super::header::PageHeader;
use super::section_link::SectionLink;
use leptos::prelude::*;

struct Highlight {
	title: &'static str,
	body: &'static str,
}

struct Package {
	name: &'static str,
	price: &'static str,
	features: &'static [&'static str],
}

struct Rating {
	quote: &'static str,
	author: &'static str,
	stars: usize,
}

const HIGHLIGHTS: [Highlight; 3] = [
	Highlight {
		title: "Ten years in hiring",
		body: "I've sat on both sides of the interview table and know what recruiters look for.",
	},
	Highlight {
		title: "Career changers welcome",
		body: "Moving into a new field? We'll map your existing skills onto the roles you want.",
	},
	Highlight {
		title: "Practical, not generic",
		body: "Every session ends with concrete next steps tailored to your situation.",
	},
];

const PACKAGES: [Package; 3] = [
	Package {
		name: "CV Review",
		price: "£75",
		features: &["Line-by-line CV feedback", "LinkedIn profile review", "One follow-up email"],
	},
	Package {
		name: "Interview Ready",
		price: "£180",
		features: &["Two mock interviews", "Answer frameworks", "Recorded feedback"],
	},
	Package {
		name: "Career Change",
		price: "£420",
		features: &["Six coaching sessions", "Personal job search plan", "CV and cover letter rewrite"],
	},
];

const RATINGS: [Rating; 3] = [
	Rating {
		quote: "I had three offers within a month of our sessions.",
		author: "Priya, product manager",
		stars: 5,
	},
	Rating {
		quote: "The mock interviews were tougher than the real thing, which was exactly what I needed.",
		author: "Tom, graduate engineer",
		stars: 5,
	},
	Rating {
		quote: "Clear, honest advice that got me out of a career I'd outgrown.",
		author: "Helen, former teacher",
		stars: 5,
	},
];

#[component]
pub fn HomePage() -> impl IntoView {
	Effect::new(move |_| {
		#[cfg(feature = "hydrate")]
		{
			use crate::web::effects::dom::{observe_entrances, observe_headings};
			observe_entrances();
			observe_headings();
		}
	});

	view! {
		<PageHeader />
		<main>
			<section id="home" class="hero">
				<h1>"Find the job you actually want"</h1>
				<p class="hero-subtitle">
					"One-to-one career coaching for CVs, interviews, and career changes."
				</p>
				<SectionLink href="#contact" class="cta-button">
					"Book a free intro call"
				</SectionLink>
			</section>

			<section id="about" class="about">
				<h2>"About"</h2>
				<div class="highlight-grid">
					{
						HIGHLIGHTS
							.iter()
							.map(|highlight| view! {
								<div class="highlight-card">
									<h3>{highlight.title}</h3>
									<p>{highlight.body}</p>
								</div>
							})
							.collect::<Vec<_>>()
					}
				</div>
			</section>

			<section id="packages" class="packages">
				<h2>"Packages"</h2>
				<div class="package-grid">
					{
						PACKAGES
							.iter()
							.map(|package| view! {
								<div class="package-card">
									<h3>{package.name}</h3>
									<div class="package-price">{package.price}</div>
									<ul>
										{package.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect::<Vec<_>>()}
									</ul>
									<SectionLink href="#contact" class="package-button">
										"Get in touch"
									</SectionLink>
								</div>
							})
							.collect::<Vec<_>>()
					}
				</div>
			</section>

			<section id="testimonials" class="testimonials">
				<h2>"What clients say"</h2>
				<div class="rating-grid">
					{
						RATINGS
							.iter()
							.map(|rating| view! {
								<blockquote class="rating-card">
									<div class="rating-stars">{"★".repeat(rating.stars)}</div>
									<p>{rating.quote}</p>
									<footer>{rating.author}</footer>
								</blockquote>
							})
							.collect::<Vec<_>>()
					}
				</div>
			</section>

			<section id="contact" class="contact">
				<h2>"Get in touch"</h2>
				<p>"Tell me a little about where you are and where you'd like to be. I reply within two working days."</p>
				<ContactForm />
			</section>
		</main>
		<footer class="site-footer">
			<p>"Career Coaching"</p>
		</footer>
	}
}
