use leptos::prelude::*;
use log::{debug, info};

use super::ledger::{derive_nodes, generate_transactions, log_entries};
use super::relations::RelationGraph;
use super::seed::{AddressSeed, Stream};
use super::seed_view::SeedCanvas;
use super::types::{PrivacyMode, Transaction, ViewMode};
use super::viewport::Viewport;

/// Per-mount nonce so each visit gets fresh synthetic activity.
fn session_nonce() -> u64 {
	(js_sys::Math::random() * u32::MAX as f64) as u64
}

/// Three data layers over the owner's synthetic activity.
#[component]
pub fn GenerativeProfile(
	#[prop(into)] address: Signal<String>,
	#[prop(into)] view_mode: Signal<ViewMode>,
	#[prop(into)] privacy: Signal<PrivacyMode>,
) -> impl IntoView {
	let nonce = session_nonce();
	let viewport = RwSignal::new(Viewport::default());
	info!(
		"seed profile mounted for {} ({} / {})",
		address.get_untracked(),
		view_mode.get_untracked().as_str(),
		privacy.get_untracked().as_str()
	);

	// Any mode switch starts the graph from a clean viewport.
	Effect::new(move |_| {
		let (view, mode) = (view_mode.get(), privacy.get());
		viewport.maybe_update(|vp| vp.enter_modes(view, mode));
	});

	let transactions = Memo::new(move |_| {
		let (owner, mode) = (address.get(), privacy.get());
		let mut rng = AddressSeed::from_address(&owner).rng(nonce, mode, Stream::Transactions);
		let txs = generate_transactions(&owner, mode, js_sys::Date::now(), &mut rng);
		debug!("generated {} transactions for {owner} ({})", txs.len(), mode.as_str());
		txs
	});

	let nodes = Memo::new(move |_| {
		let (owner, mode) = (address.get(), privacy.get());
		let mut rng = AddressSeed::from_address(&owner).rng(nonce, mode, Stream::Nodes);
		transactions.with(|txs| derive_nodes(txs, &owner, mode, &mut rng))
	});

	view! {
		<div class="generative-profile" style="position: absolute; inset: 0;">
			{move || match view_mode.get() {
				ViewMode::Seed => view! { <SeedCanvas address=address privacy=privacy nonce=nonce /> }.into_any(),
				ViewMode::Transactions => {
					view! { <TransactionLog transactions=transactions owner=address /> }.into_any()
				}
				ViewMode::Relations => {
					view! { <RelationGraph nodes=nodes transactions=transactions viewport=viewport /> }
						.into_any()
				}
			}}
			<div class="layer-badge">
				{move || {
					format!(
						"{} LAYER // {}",
						view_mode.get().as_str().to_uppercase(),
						privacy.get().as_str(),
					)
				}}
			</div>
		</div>
	}
}

fn log_row(tx: &Transaction, owner: &str) -> impl IntoView + use<> {
	let time = js_sys::Date::new(&tx.timestamp_ms.into())
		.to_locale_time_string("default");
	let direction = tx.direction(owner);
	view! {
		<div class="tx-row">
			<div class="tx-method">
				<span class=tx.method.css_class()>{tx.method.label()}</span>
				<span class="tx-time">{String::from(time)}</span>
			</div>
			<div class="tx-parties">
				<div>
					<span class="tx-key">"Hash"</span>
					<span class="tx-hash">{tx.hash.clone()}</span>
				</div>
				<div>
					<span class="tx-key">{direction.counterparty_label()}</span>
					<span class="tx-peer">{tx.counterparty(owner).to_string()}</span>
				</div>
			</div>
			<div class="tx-amount">
				<span class="tx-value">{tx.value_label()}</span>
				<span class="tx-block">{format!("Block {}", tx.block)}</span>
			</div>
		</div>
	}
}

/// Reverse-chronological activity log.
#[component]
pub fn TransactionLog(
	transactions: Memo<Vec<Transaction>>,
	#[prop(into)] owner: Signal<String>,
) -> impl IntoView {
	view! {
		<div class="tx-log">
			<div class="tx-log-header">
				<span>"Recent Activity Log"</span>
				<span>{move || format!("{} entries found", transactions.with(Vec::len))}</span>
			</div>
			<div class="tx-log-entries">
				{move || {
					let owner = owner.get();
					transactions
						.with(|txs| {
							log_entries(txs).into_iter().map(|tx| log_row(tx, &owner)).collect_view()
						})
				}}
			</div>
		</div>
	}
}
