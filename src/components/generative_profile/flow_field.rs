use std::f64::consts::PI;

use rand::Rng;
use rand::rngs::SmallRng;

use super::config::{
	CONTRACT_SPEED_FACTOR, FLASH_CAPACITY, FLASH_FADE, FLASH_GROWTH, FLASH_PROBABILITY,
	FLOW_ACCELERATION, FLOW_TIME_STEP, FlowConfig,
};
use super::seed::AddressSeed;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
	Signal,
	Transfer,
	/// High-priority traffic; moves faster than the rest.
	Contract,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub color: &'static str,
	pub age: u32,
	pub life: u32,
	pub kind: ParticleKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub max_radius: f64,
	pub alpha: f64,
	pub color: &'static str,
}

impl Flash {
	fn is_spent(&self) -> bool {
		self.alpha <= 0.0 || self.radius >= self.max_radius
	}
}

/// Fixed slot arena for pulses. Spawns are dropped while every slot is busy.
#[derive(Clone, Debug)]
pub struct FlashPool {
	slots: Vec<Option<Flash>>,
}

impl FlashPool {
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			slots: vec![None; capacity],
		}
	}

	#[cfg(test)]
	pub fn capacity(&self) -> usize {
		self.slots.len()
	}

	#[cfg(test)]
	pub fn active(&self) -> usize {
		self.slots.iter().flatten().count()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Flash> {
		self.slots.iter().flatten()
	}

	pub fn spawn(&mut self, flash: Flash) -> bool {
		match self.slots.iter_mut().find(|slot| slot.is_none()) {
			Some(slot) => {
				*slot = Some(flash);
				true
			}
			None => false,
		}
	}

	fn advance(&mut self) {
		for slot in &mut self.slots {
			if let Some(flash) = slot {
				flash.radius += FLASH_GROWTH;
				flash.alpha -= FLASH_FADE;
				if flash.is_spent() {
					*slot = None;
				}
			}
		}
	}
}

/// Particle simulation behind the seed view. Owns its pools and RNG; the
/// canvas only reads it.
pub struct FlowField {
	config: FlowConfig,
	phase: f64,
	width: f64,
	height: f64,
	time: f64,
	particles: Vec<Particle>,
	flashes: FlashPool,
	rng: SmallRng,
}

impl FlowField {
	pub fn new(
		config: FlowConfig,
		seed: AddressSeed,
		width: f64,
		height: f64,
		mut rng: SmallRng,
	) -> Self {
		let (width, height) = (width.max(1.0), height.max(1.0));
		let particles = (0..config.particle_count)
			.map(|_| spawn_particle(&config, width, height, &mut rng))
			.collect();
		Self {
			config,
			phase: seed.phase(),
			width,
			height,
			time: 0.0,
			particles,
			flashes: FlashPool::with_capacity(FLASH_CAPACITY),
			rng,
		}
	}

	pub fn config(&self) -> &FlowConfig {
		&self.config
	}

	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn flashes(&self) -> &FlashPool {
		&self.flashes
	}

	/// Flow direction at a point for the current time.
	pub fn angle_at(&self, x: f64, y: f64) -> f64 {
		let noise = self.config.noise_scale;
		((x * noise + self.phase).cos() + (y * noise + self.time).sin()) * PI
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width.max(1.0);
		self.height = height.max(1.0);
		for p in &mut self.particles {
			p.x = wrap(p.x, self.width);
			p.y = wrap(p.y, self.height);
		}
	}

	/// Advance one frame.
	pub fn step(&mut self) {
		self.flashes.advance();
		self.time += FLOW_TIME_STEP;

		for i in 0..self.particles.len() {
			let angle = {
				let p = &self.particles[i];
				self.angle_at(p.x, p.y)
			};
			let limit = match self.particles[i].kind {
				ParticleKind::Contract => self.config.base_speed * CONTRACT_SPEED_FACTOR,
				_ => self.config.base_speed,
			};
			let (width, height) = (self.width, self.height);
			let p = &mut self.particles[i];

			p.vx += angle.cos() * FLOW_ACCELERATION;
			p.vy += angle.sin() * FLOW_ACCELERATION;
			let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
			if speed > limit {
				p.vx = p.vx / speed * limit;
				p.vy = p.vy / speed * limit;
			}

			p.x = wrap(p.x + p.vx, width);
			p.y = wrap(p.y + p.vy, height);
			p.age += 1;

			if self.rng.gen_bool(FLASH_PROBABILITY) {
				let flash = Flash {
					x: p.x,
					y: p.y,
					radius: 1.0,
					max_radius: self.rng.gen_range(10.0..40.0),
					alpha: 1.0,
					color: p.color,
				};
				self.flashes.spawn(flash);
			}

			if p.age > p.life {
				p.x = self.rng.gen_range(0.0..width);
				p.y = self.rng.gen_range(0.0..height);
				p.vx = 0.0;
				p.vy = 0.0;
				p.age = 0;
			}
		}
	}
}

/// Wrap into `[0, extent)`; leaving one edge re-enters at the other.
fn wrap(value: f64, extent: f64) -> f64 {
	let wrapped = value.rem_euclid(extent);
	if wrapped >= extent { 0.0 } else { wrapped }
}

fn spawn_particle(config: &FlowConfig, width: f64, height: f64, rng: &mut SmallRng) -> Particle {
	let palette = config.palette;
	let roll: f64 = rng.gen_range(0.0..1.0);
	let (kind, color) = if roll > 0.8 {
		(ParticleKind::Contract, palette[1 % palette.len()])
	} else if roll > 0.5 {
		(ParticleKind::Transfer, palette[rng.gen_range(0..palette.len())])
	} else {
		(ParticleKind::Signal, palette[0])
	};
	Particle {
		x: rng.gen_range(0.0..width),
		y: rng.gen_range(0.0..height),
		vx: 0.0,
		vy: 0.0,
		color,
		age: 0,
		life: rng.gen_range(100..300),
		kind,
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::*;
	use crate::components::generative_profile::types::PrivacyMode;

	fn field(mode: PrivacyMode, w: f64, h: f64) -> FlowField {
		FlowField::new(
			mode.flow_config(),
			AddressSeed::from_address("0xABCDEF"),
			w,
			h,
			SmallRng::seed_from_u64(9),
		)
	}

	fn flash(max_radius: f64) -> Flash {
		Flash {
			x: 0.0,
			y: 0.0,
			radius: 1.0,
			max_radius,
			alpha: 1.0,
			color: "#fff",
		}
	}

	#[test]
	fn pool_sizes_follow_config() {
		assert_eq!(field(PrivacyMode::Public, 640.0, 480.0).particles().len(), 500);
		assert_eq!(field(PrivacyMode::Private, 640.0, 480.0).particles().len(), 300);
	}

	#[test]
	fn particles_stay_in_bounds_and_recycle_on_time() {
		let mut f = field(PrivacyMode::Public, 320.0, 200.0);
		for _ in 0..1_000 {
			f.step();
			for p in f.particles() {
				assert!(p.x >= 0.0 && p.x < 320.0, "x {}", p.x);
				assert!(p.y >= 0.0 && p.y < 200.0, "y {}", p.y);
				assert!(p.age <= p.life + 1);
			}
			assert!(f.flashes().active() <= FLASH_CAPACITY);
		}
	}

	#[test]
	fn speed_respects_kind_limit() {
		let mut f = field(PrivacyMode::Private, 400.0, 400.0);
		let base = f.config().base_speed;
		for _ in 0..200 {
			f.step();
			for p in f.particles() {
				let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
				let limit = match p.kind {
					ParticleKind::Contract => base * CONTRACT_SPEED_FACTOR,
					_ => base,
				};
				assert!(speed <= limit + 1e-9);
			}
		}
	}

	#[test]
	fn contract_particles_use_contract_color() {
		let f = field(PrivacyMode::Public, 400.0, 400.0);
		let palette = f.config().palette;
		for p in f.particles() {
			match p.kind {
				ParticleKind::Contract => assert_eq!(p.color, palette[1]),
				ParticleKind::Signal => assert_eq!(p.color, palette[0]),
				ParticleKind::Transfer => assert!(palette.contains(&p.color)),
			}
		}
	}

	#[test]
	fn resize_wraps_particles_into_new_bounds() {
		let mut f = field(PrivacyMode::Public, 1000.0, 1000.0);
		f.resize(50.0, 30.0);
		assert_eq!(f.size(), (50.0, 30.0));
		for p in f.particles() {
			assert!(p.x < 50.0 && p.y < 30.0);
		}
	}

	#[test]
	fn degenerate_surface_is_clamped() {
		let mut f = field(PrivacyMode::Private, 0.0, 0.0);
		f.step();
		assert_eq!(f.size(), (1.0, 1.0));
		assert!(f.particles().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
	}

	#[test]
	fn flashes_expire_after_fading() {
		let mut pool = FlashPool::with_capacity(4);
		assert!(pool.spawn(flash(100.0)));
		for _ in 0..19 {
			pool.advance();
		}
		assert_eq!(pool.active(), 1);
		pool.advance();
		assert_eq!(pool.active(), 0);
	}

	#[test]
	fn flashes_expire_at_max_radius() {
		let mut pool = FlashPool::with_capacity(1);
		pool.spawn(flash(3.0));
		pool.advance();
		assert_eq!(pool.active(), 1);
		pool.advance();
		assert_eq!(pool.active(), 0);
	}

	#[test]
	fn full_pool_drops_spawns() {
		let mut pool = FlashPool::with_capacity(2);
		assert!(pool.spawn(flash(20.0)));
		assert!(pool.spawn(flash(20.0)));
		assert!(!pool.spawn(flash(20.0)));
		assert_eq!(pool.active(), pool.capacity());
	}

	#[test]
	fn same_address_same_field() {
		let a = field(PrivacyMode::Private, 300.0, 300.0);
		let b = field(PrivacyMode::Private, 300.0, 300.0);
		assert_eq!(a.angle_at(12.0, 34.0), b.angle_at(12.0, 34.0));
		assert_eq!(a.particles(), b.particles());
	}
}
