/// How much of the owner's activity the profile exposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrivacyMode {
	#[default]
	Private,
	Public,
}

impl PrivacyMode {
	pub const ALL: [PrivacyMode; 2] = [PrivacyMode::Private, PrivacyMode::Public];

	pub fn as_str(self) -> &'static str {
		match self {
			PrivacyMode::Private => "private",
			PrivacyMode::Public => "public",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			PrivacyMode::Private => "Private",
			PrivacyMode::Public => "Public",
		}
	}
}

/// Which of the three data layers is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
	Transactions,
	Relations,
	#[default]
	Seed,
}

impl ViewMode {
	pub const ALL: [ViewMode; 3] = [ViewMode::Transactions, ViewMode::Relations, ViewMode::Seed];

	pub fn as_str(self) -> &'static str {
		match self {
			ViewMode::Transactions => "transactions",
			ViewMode::Relations => "relations",
			ViewMode::Seed => "seed",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			ViewMode::Transactions => "Transactions",
			ViewMode::Relations => "Relations",
			ViewMode::Seed => "Seed",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	MintFeather,
	Transfer,
	ContractCall,
	SignMessage,
	Delegate,
}

impl Method {
	pub const ALL: [Method; 5] = [
		Method::MintFeather,
		Method::Transfer,
		Method::ContractCall,
		Method::SignMessage,
		Method::Delegate,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Method::MintFeather => "mint_feather",
			Method::Transfer => "transfer",
			Method::ContractCall => "contract_call",
			Method::SignMessage => "sign_message",
			Method::Delegate => "delegate",
		}
	}

	/// Display form, e.g. `mint feather`.
	pub fn label(self) -> String {
		self.as_str().replace('_', " ")
	}

	/// CSS class used to tint the method name in the activity log.
	pub fn css_class(self) -> &'static str {
		match self {
			Method::MintFeather => "method-accent",
			Method::Transfer => "method-transfer",
			_ => "method-muted",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	Incoming,
	Outgoing,
}

impl Direction {
	/// Label for the counterparty column ("To" for outgoing, "From" for incoming).
	pub fn counterparty_label(self) -> &'static str {
		match self {
			Direction::Incoming => "From",
			Direction::Outgoing => "To",
		}
	}
}

/// A synthetic ledger entry. Exactly one of `from`/`to` is the owner.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
	pub hash: String,
	pub block: u64,
	pub method: Method,
	/// Milliseconds since the Unix epoch.
	pub timestamp_ms: f64,
	pub from: String,
	pub to: String,
	pub value: f64,
}

impl Transaction {
	pub fn direction(&self, owner: &str) -> Direction {
		if self.from == owner {
			Direction::Outgoing
		} else {
			Direction::Incoming
		}
	}

	pub fn counterparty(&self, owner: &str) -> &str {
		match self.direction(owner) {
			Direction::Outgoing => &self.to,
			Direction::Incoming => &self.from,
		}
	}

	pub fn involves(&self, peer: &str) -> bool {
		self.from == peer || self.to == peer
	}

	pub fn value_label(&self) -> String {
		format!("{:.4} KSM", self.value)
	}
}

/// A peer in the relationship graph, positioned in the 0-100 graph space.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub color: &'static str,
}

impl GraphNode {
	pub fn short_label(&self) -> String {
		let head: String = self.id.chars().take(6).collect();
		format!("{head}...")
	}
}
