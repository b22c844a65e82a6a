use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"Signal lost"</h1>
			<p>"Nothing is broadcasting on this route."</p>
			<a href="/">"Back to your seed"</a>
		</div>
	}
}
