use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::generative_profile::{GenerativeProfile, PrivacyMode, ViewMode};

/// Address shown when the route does not name one.
pub const DEFAULT_ADDRESS: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d89A23";

/// Seed profile page: perspective and data-layer toggles around the visualizer.
#[component]
pub fn Profile() -> impl IntoView {
	let params = use_params_map();
	let address = Signal::derive(move || {
		params
			.with(|p| p.get("address"))
			.map(|a| a.trim().to_string())
			.filter(|a| !a.is_empty())
			.unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
	});
	let view_mode = RwSignal::new(ViewMode::default());
	let privacy = RwSignal::new(PrivacyMode::default());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="profile">
				<aside class="profile-controls">
					<h3>"Perspective"</h3>
					<div class="toggle-row">
						{PrivacyMode::ALL
							.into_iter()
							.map(|mode| {
								view! {
									<button
										class="toggle"
										class:active=move || privacy.get() == mode
										on:click=move |_| privacy.set(mode)
									>
										{mode.label()}
									</button>
								}
							})
							.collect_view()}
					</div>

					<h3>"Data Layer"</h3>
					<div class="toggle-column">
						{ViewMode::ALL
							.into_iter()
							.map(|mode| {
								view! {
									<button
										class="toggle"
										class:active=move || view_mode.get() == mode
										on:click=move |_| view_mode.set(mode)
									>
										{mode.label()}
									</button>
								}
							})
							.collect_view()}
					</div>
					<p class="address mono">{move || address.get()}</p>
				</aside>

				<section class="profile-surface" style="position: relative;">
					<GenerativeProfile address=address view_mode=view_mode privacy=privacy />
				</section>
			</div>
		</ErrorBoundary>
	}
}
