use std::f64::consts::TAU;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::types::PrivacyMode;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Independent random streams derived from one address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
	Transactions,
	Nodes,
	Particles,
}

impl Stream {
	fn salt(self) -> u64 {
		match self {
			Stream::Transactions => 0x7478_7300,
			Stream::Nodes => 0x6e6f_6465,
			Stream::Particles => 0x7061_7274,
		}
	}
}

/// FNV-1a hash of a normalized (trimmed, ASCII-lowercased) address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressSeed(u64);

impl AddressSeed {
	pub fn from_address(address: &str) -> Self {
		let hash = address
			.trim()
			.bytes()
			.map(|b| b.to_ascii_lowercase())
			.fold(FNV_OFFSET, |acc, b| (acc ^ b as u64).wrapping_mul(FNV_PRIME));
		Self(hash)
	}

	pub fn value(self) -> u64 {
		self.0
	}

	/// Phase offset in [0, 2π) fed into the flow-field noise.
	pub fn phase(self) -> f64 {
		(self.0 as f64 / u64::MAX as f64) * TAU
	}

	pub fn rng(self, nonce: u64, privacy: PrivacyMode, stream: Stream) -> SmallRng {
		let mode = match privacy {
			PrivacyMode::Private => 0x01,
			PrivacyMode::Public => 0x02,
		};
		let mixed = self.0 ^ nonce.rotate_left(17) ^ stream.salt() ^ (mode << 56);
		SmallRng::seed_from_u64(mixed)
	}
}
