use super::types::PrivacyMode;

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 4.0;
pub const ZOOM_SENSITIVITY: f64 = 0.001;
/// Graph units moved per pointer pixel at zoom 1.
pub const PAN_SENSITIVITY: f64 = 0.1;
pub const LABEL_ZOOM_THRESHOLD: f64 = 1.5;
/// Extra graph units around a node that still count as a hit.
pub const HIT_SLOP: f64 = 1.0;

pub const GRAPH_CENTER: f64 = 50.0;
pub const GRAPH_EXTENT: f64 = 100.0;
pub const CENTER_NODE_RADIUS: f64 = 4.0;
pub const LINK_WIDTH: f64 = 0.2;
pub const LINK_OPACITY: f64 = 0.4;
pub const NODE_COLORS: [&str; 2] = ["#84a98c", "#354f52"];

pub const FIRST_BLOCK: u64 = 18_450_000;
pub const TX_SPACING_MS: f64 = 1_000_000.0;
pub const MAX_TX_VALUE: f64 = 1.5;

pub const FLOW_TIME_STEP: f64 = 0.01;
pub const FLOW_ACCELERATION: f64 = 0.1;
pub const CONTRACT_SPEED_FACTOR: f64 = 1.5;
pub const FLASH_PROBABILITY: f64 = 0.001;
pub const FLASH_CAPACITY: usize = 128;
pub const FLASH_GROWTH: f64 = 1.0;
pub const FLASH_FADE: f64 = 0.05;
pub const FADE_STYLE: &str = "rgba(5, 5, 8, 0.1)";
pub const BACKGROUND: &str = "#050508";

const PUBLIC_PALETTE: &[&str] = &[
	"#F59E0B", // value transfer
	"#8B5CF6", // contracts
	"#EC4899", "#06B6D4", "#10B981", "#ffffff",
];

const PRIVATE_PALETTE: &[&str] = &["#2A9D8F", "#E9C46A", "#F4A261", "#E76F51", "#84a98c"];

/// Tuning for the particle flow field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowConfig {
	pub particle_count: usize,
	pub noise_scale: f64,
	pub base_speed: f64,
	pub particle_radius: f64,
	/// Never empty; index 0 is the signal color and index 1 the contract color.
	pub palette: &'static [&'static str],
}

/// Sizing for the transaction log and relationship graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphConfig {
	pub transaction_count: usize,
	pub node_limit: usize,
}

impl PrivacyMode {
	pub fn flow_config(self) -> FlowConfig {
		match self {
			PrivacyMode::Public => FlowConfig {
				particle_count: 500,
				noise_scale: 0.005,
				base_speed: 1.5,
				particle_radius: 1.0,
				palette: PUBLIC_PALETTE,
			},
			PrivacyMode::Private => FlowConfig {
				particle_count: 300,
				noise_scale: 0.008,
				base_speed: 1.0,
				particle_radius: 1.5,
				palette: PRIVATE_PALETTE,
			},
		}
	}

	pub fn graph_config(self) -> GraphConfig {
		match self {
			PrivacyMode::Public => GraphConfig {
				transaction_count: 100,
				node_limit: 25,
			},
			PrivacyMode::Private => GraphConfig {
				transaction_count: 25,
				node_limit: 8,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn public_mode_is_busier_than_private() {
		let (public, private) = (
			PrivacyMode::Public.flow_config(),
			PrivacyMode::Private.flow_config(),
		);
		assert!(public.particle_count > private.particle_count);
		assert!(public.base_speed > private.base_speed);
		assert!(public.palette.len() > private.palette.len());
	}

	#[test]
	fn palettes_cover_signal_and_contract_slots() {
		for mode in PrivacyMode::ALL {
			assert!(mode.flow_config().palette.len() >= 2);
		}
	}

	#[test]
	fn ceilings_match_privacy_mode() {
		assert_eq!(PrivacyMode::Private.graph_config().node_limit, 8);
		assert_eq!(PrivacyMode::Public.graph_config().node_limit, 25);
		assert_eq!(PrivacyMode::Private.graph_config().transaction_count, 25);
		assert_eq!(PrivacyMode::Public.graph_config().transaction_count, 100);
	}
}
