//! Synthetic activity for a profile, standing in for an indexer feed.

use std::collections::HashSet;

use rand::Rng;

use super::config::{FIRST_BLOCK, GRAPH_CENTER, MAX_TX_VALUE, NODE_COLORS, TX_SPACING_MS};
use super::types::{GraphNode, Method, PrivacyMode, Transaction};

/// Transactions that touch a selected peer.
#[derive(Clone, Debug, PartialEq)]
pub enum PeerHistory {
	Empty,
	Entries(Vec<Transaction>),
}

impl PeerHistory {
	pub fn len(&self) -> usize {
		match self {
			PeerHistory::Empty => 0,
			PeerHistory::Entries(txs) => txs.len(),
		}
	}
}

fn random_hex<R: Rng>(rng: &mut R, digits: usize) -> String {
	const HEX: &[u8; 16] = b"0123456789abcdef";
	let mut out = String::with_capacity(digits + 2);
	out.push_str("0x");
	for _ in 0..digits {
		out.push(HEX[rng.gen_range(0..16)] as char);
	}
	out
}

fn random_address<R: Rng>(rng: &mut R) -> String {
	random_hex(rng, 40)
}

/// Generate the synthetic record set for `owner`. Entry `i` is `i` spacing
/// steps older than `now_ms`.
pub fn generate_transactions<R: Rng>(
	owner: &str,
	privacy: PrivacyMode,
	now_ms: f64,
	rng: &mut R,
) -> Vec<Transaction> {
	let count = privacy.graph_config().transaction_count;
	(0..count)
		.map(|i| {
			let incoming = rng.gen_bool(0.5);
			let peer = random_address(rng);
			let (from, to) = if incoming {
				(peer, owner.to_string())
			} else {
				(owner.to_string(), peer)
			};
			Transaction {
				hash: random_hex(rng, 64),
				block: FIRST_BLOCK + i as u64,
				method: Method::ALL[rng.gen_range(0..Method::ALL.len())],
				timestamp_ms: now_ms - i as f64 * TX_SPACING_MS,
				from,
				to,
				value: rng.gen_range(0.0..MAX_TX_VALUE),
			}
		})
		.collect()
}

/// Distinct peers in first-seen order, capped by the privacy ceiling and
/// scattered around the graph centre.
pub fn derive_nodes<R: Rng>(
	txs: &[Transaction],
	owner: &str,
	privacy: PrivacyMode,
	rng: &mut R,
) -> Vec<GraphNode> {
	let limit = privacy.graph_config().node_limit;
	let mut seen = HashSet::new();
	let peers = txs
		.iter()
		.flat_map(|tx| [tx.to.as_str(), tx.from.as_str()])
		.filter(|addr| !addr.is_empty() && *addr != owner)
		.filter(|addr| seen.insert(*addr))
		.take(limit)
		.map(str::to_string)
		.collect::<Vec<_>>();

	peers
		.into_iter()
		.enumerate()
		.map(|(i, id)| GraphNode {
			id,
			x: GRAPH_CENTER + (rng.gen_range(0.0..1.0) - 0.5) * 60.0,
			y: GRAPH_CENTER + (rng.gen_range(0.0..1.0) - 0.5) * 60.0,
			radius: rng.gen_range(2.0..5.0),
			color: if i % 3 == 0 { NODE_COLORS[0] } else { NODE_COLORS[1] },
		})
		.collect()
}

/// Records in reverse-chronological order.
pub fn log_entries(txs: &[Transaction]) -> Vec<&Transaction> {
	let mut entries: Vec<&Transaction> = txs.iter().collect();
	entries.sort_by(|a, b| b.timestamp_ms.total_cmp(&a.timestamp_ms));
	entries
}

pub fn peer_history(txs: &[Transaction], peer: &str) -> PeerHistory {
	let matching: Vec<Transaction> = txs.iter().filter(|tx| tx.involves(peer)).cloned().collect();
	if matching.is_empty() {
		PeerHistory::Empty
	} else {
		PeerHistory::Entries(matching)
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::generative_profile::types::Direction;

	const OWNER: &str = "0xABCDEF0123456789abcdef0123456789ABCDEF01";
	const NOW: f64 = 1_700_000_000_000.0;

	fn rng() -> SmallRng {
		SmallRng::seed_from_u64(42)
	}

	#[test]
	fn counts_follow_privacy_mode() {
		let private = generate_transactions(OWNER, PrivacyMode::Private, NOW, &mut rng());
		let public = generate_transactions(OWNER, PrivacyMode::Public, NOW, &mut rng());
		assert_eq!(private.len(), 25);
		assert_eq!(public.len(), 100);
	}

	#[test]
	fn owner_is_on_exactly_one_side() {
		for tx in generate_transactions(OWNER, PrivacyMode::Public, NOW, &mut rng()) {
			assert!((tx.from == OWNER) ^ (tx.to == OWNER));
			assert_ne!(tx.counterparty(OWNER), OWNER);
			let expected = if tx.from == OWNER {
				Direction::Outgoing
			} else {
				Direction::Incoming
			};
			assert_eq!(tx.direction(OWNER), expected);
		}
	}

	#[test]
	fn records_have_expected_shape() {
		let txs = generate_transactions(OWNER, PrivacyMode::Private, NOW, &mut rng());
		for (i, tx) in txs.iter().enumerate() {
			assert_eq!(tx.hash.len(), 66);
			assert!(tx.hash.starts_with("0x"));
			assert_eq!(tx.block, FIRST_BLOCK + i as u64);
			assert!((0.0..MAX_TX_VALUE).contains(&tx.value));
			assert_eq!(tx.timestamp_ms, NOW - i as f64 * TX_SPACING_MS);
		}
	}

	#[test]
	fn node_ceiling_holds() {
		for (mode, ceiling) in [(PrivacyMode::Private, 8), (PrivacyMode::Public, 25)] {
			let txs = generate_transactions(OWNER, mode, NOW, &mut rng());
			let nodes = derive_nodes(&txs, OWNER, mode, &mut rng());
			assert!(nodes.len() <= ceiling);
			assert_eq!(nodes.len(), ceiling);
		}
	}

	#[test]
	fn nodes_are_unique_peers_within_bounds() {
		let txs = generate_transactions(OWNER, PrivacyMode::Public, NOW, &mut rng());
		let nodes = derive_nodes(&txs, OWNER, PrivacyMode::Public, &mut rng());
		let ids: HashSet<_> = nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids.len(), nodes.len());
		assert!(!ids.contains(OWNER));
		for node in &nodes {
			assert!((20.0..=80.0).contains(&node.x));
			assert!((20.0..=80.0).contains(&node.y));
			assert!((2.0..5.0).contains(&node.radius));
		}
		assert_eq!(nodes[0].color, NODE_COLORS[0]);
		assert_eq!(nodes[1].color, NODE_COLORS[1]);
		assert_eq!(nodes[3].color, NODE_COLORS[0]);
	}

	#[test]
	fn nodes_keep_first_seen_order() {
		let txs = generate_transactions(OWNER, PrivacyMode::Private, NOW, &mut rng());
		let nodes = derive_nodes(&txs, OWNER, PrivacyMode::Private, &mut rng());
		assert_eq!(nodes[0].id, txs[0].counterparty(OWNER));
	}

	#[test]
	fn same_seed_same_nodes() {
		let txs = generate_transactions(OWNER, PrivacyMode::Private, NOW, &mut rng());
		let a = derive_nodes(&txs, OWNER, PrivacyMode::Private, &mut rng());
		let b = derive_nodes(&txs, OWNER, PrivacyMode::Private, &mut rng());
		assert_eq!(a, b);
	}

	#[test]
	fn empty_input_degrades_to_empty_output() {
		let nodes = derive_nodes(&[], OWNER, PrivacyMode::Public, &mut rng());
		assert!(nodes.is_empty());
		assert!(log_entries(&[]).is_empty());
		assert_eq!(peer_history(&[], "0x1"), PeerHistory::Empty);
	}

	#[test]
	fn log_is_newest_first() {
		let mut txs = generate_transactions(OWNER, PrivacyMode::Private, NOW, &mut rng());
		txs.reverse();
		let entries = log_entries(&txs);
		assert!(
			entries
				.windows(2)
				.all(|w| w[0].timestamp_ms >= w[1].timestamp_ms)
		);
		assert_eq!(entries[0].block, FIRST_BLOCK);
	}

	#[test]
	fn peer_history_matches_either_side() {
		let txs = generate_transactions(OWNER, PrivacyMode::Public, NOW, &mut rng());
		let peer = txs[3].counterparty(OWNER).to_string();
		match peer_history(&txs, &peer) {
			PeerHistory::Entries(found) => {
				assert!(!found.is_empty());
				assert!(found.iter().all(|tx| tx.involves(&peer)));
			}
			PeerHistory::Empty => panic!("expected history for {peer}"),
		}
	}

	#[test]
	fn unknown_peer_yields_explicit_empty_state() {
		let txs = generate_transactions(OWNER, PrivacyMode::Public, NOW, &mut rng());
		let history = peer_history(&txs, "0xnobody");
		assert_eq!(history, PeerHistory::Empty);
		assert_eq!(history.len(), 0);
	}
}
