use consts::particles::{DECAY_MIN, DECAY_SPREAD, MAX_PARTICLES, SPEED_SPREAD};
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub life: f64,
    pub decay: f64,
}

impl Particle {
    pub fn spawn(rng: &mut impl Rng, width: f64, height: f64) -> Self {
        Self {
            x: rng.random::<f64>() * width,
            y: rng.random::<f64>() * height,
            vx: (rng.random::<f64>() - 0.5) * SPEED_SPREAD,
            vy: (rng.random::<f64>() - 0.5) * SPEED_SPREAD,
            life: 1.0,
            decay: rng.random::<f64>() * DECAY_SPREAD + DECAY_MIN,
        }
    }

    fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        self.life -= self.decay;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }
}

/// Fading dots bouncing around the page background.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            particles: Vec::with_capacity(MAX_PARTICLES),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// One animation frame: spawn if below the cap, move everything, drop the dead.
    pub fn step(&mut self, rng: &mut impl Rng) {
        if self.particles.len() < MAX_PARTICLES {
            self.particles
                .push(Particle::spawn(rng, self.width, self.height));
        }

        let (width, height) = (self.width, self.height);
        for particle in self.particles.iter_mut() {
            particle.advance(width, height);
        }
        self.particles.retain(|p| !p.is_dead());
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    #[test]
    fn spawn_stays_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..200 {
            let p = Particle::spawn(&mut rng, 800.0, 600.0);
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!(p.vx.abs() <= SPEED_SPREAD / 2.0);
            assert!(p.vy.abs() <= SPEED_SPREAD / 2.0);
            assert!((DECAY_MIN..=DECAY_MIN + DECAY_SPREAD).contains(&p.decay));
            assert_eq!(p.life, 1.0);
        }
    }

    #[test]
    fn population_is_capped() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut field = ParticleField::new(1024.0, 768.0);
        for _ in 0..(MAX_PARTICLES * 3) {
            field.step(&mut rng);
            assert!(field.particles().len() <= MAX_PARTICLES);
        }
    }

    fn resting(life: f64, decay: f64) -> Particle {
        Particle {
            x: 50.0,
            y: 50.0,
            vx: 0.0,
            vy: 0.0,
            life,
            decay,
        }
    }

    #[test]
    fn step_drops_dead_particles() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut field = ParticleField::new(100.0, 100.0);
        field.particles = vec![resting(0.001, 0.005); MAX_PARTICLES];

        field.step(&mut rng);

        assert!(field.particles().is_empty());
    }

    #[test]
    fn step_spawns_only_below_cap() {
        let mut rng = SmallRng::seed_from_u64(8);
        let mut field = ParticleField::new(100.0, 100.0);

        field.step(&mut rng);
        assert_eq!(field.particles().len(), 1);

        field.particles = vec![resting(1.0, 0.005); MAX_PARTICLES - 1];
        field.step(&mut rng);
        assert_eq!(field.particles().len(), MAX_PARTICLES);

        field.step(&mut rng);
        assert_eq!(field.particles().len(), MAX_PARTICLES);
        assert!(field.particles().iter().all(|p| p.life < 1.0));
    }

    #[test]
    fn bounces_off_edges() {
        let mut p = Particle {
            x: 99.9,
            y: 10.0,
            vx: 0.25,
            vy: -0.1,
            life: 1.0,
            decay: 0.005,
        };
        p.advance(100.0, 100.0);
        assert!(p.vx < 0.0);
        assert_eq!(p.vy, -0.1);
    }

    #[test]
    fn resize_updates_bounds() {
        let mut field = ParticleField::new(10.0, 10.0);
        field.resize(640.0, 480.0);
        assert_eq!((field.width(), field.height()), (640.0, 480.0));
    }
}
