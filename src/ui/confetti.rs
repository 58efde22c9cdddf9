use egui::{Color32, Id, LayerId, Order, Pos2, Rect, Vec2};
use rand::Rng;

const GRAVITY: f32 = 600.0;
const PARTICLE_TTL: f32 = 2.4;

const PALETTE: [Color32; 7] = [
    Color32::from_rgb(38, 204, 255),
    Color32::from_rgb(162, 90, 253),
    Color32::from_rgb(255, 94, 126),
    Color32::from_rgb(136, 255, 90),
    Color32::from_rgb(252, 255, 66),
    Color32::from_rgb(255, 166, 45),
    Color32::from_rgb(255, 54, 255),
];

struct Particle {
    pos: Pos2,
    vel: Vec2,
    color: Color32,
    size: f32,
    age: f32,
}

/// Celebration overlay painted above every panel. Fire with `burst`, then
/// keep calling `update` each frame until the shower dies out.
#[derive(Default)]
pub struct Confetti {
    particles: Vec<Particle>,
}

impl Confetti {
    /// Three cones: one low in the center and one from each side edge.
    pub fn burst(&mut self, area: Rect, rng: &mut impl Rng) {
        let center = egui::pos2(area.center().x, area.top() + area.height() * 0.6);
        let mid_left = egui::pos2(area.left(), area.top() + area.height() * 0.5);
        let mid_right = egui::pos2(area.right(), area.top() + area.height() * 0.5);

        self.spawn_cone(center, 90.0, 70.0, 120, rng);
        self.spawn_cone(mid_left, 60.0, 55.0, 80, rng);
        self.spawn_cone(mid_right, 120.0, 55.0, 80, rng);
    }

    fn spawn_cone(
        &mut self,
        origin: Pos2,
        angle: f32,
        spread: f32,
        count: usize,
        rng: &mut impl Rng,
    ) {
        for _ in 0..count {
            let theta = rng
                .gen_range((angle - spread * 0.5)..(angle + spread * 0.5))
                .to_radians();
            let speed = rng.gen_range(220.0..520.0);
            // Screen y grows downward, so "up" is negative.
            let vel = Vec2::new(theta.cos(), -theta.sin()) * speed;
            self.particles.push(Particle {
                pos: origin,
                vel,
                color: PALETTE[rng.gen_range(0..PALETTE.len())],
                size: rng.gen_range(3.0..6.0),
                age: 0.0,
            });
        }
    }

    /// Advance and repaint the shower. No-op once every particle has died.
    pub fn update(&mut self, ctx: &egui::Context) {
        if self.particles.is_empty() {
            return;
        }

        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        let floor = ctx.screen_rect().bottom() + 40.0;

        for p in &mut self.particles {
            p.vel.y += GRAVITY * dt;
            p.pos += p.vel * dt;
            p.age += dt;
        }
        self.particles
            .retain(|p| p.age < PARTICLE_TTL && p.pos.y < floor);

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("confetti")));
        for p in &self.particles {
            let fade = (1.0 - p.age / PARTICLE_TTL).clamp(0.0, 1.0);
            painter.circle_filled(p.pos, p.size, p.color.gamma_multiply(fade));
        }

        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn burst_fills_three_cones_aimed_upward() {
        let mut confetti = Confetti::default();
        let mut rng = StdRng::seed_from_u64(7);
        let area = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(460.0, 680.0));

        confetti.burst(area, &mut rng);

        assert_eq!(confetti.particles.len(), 280);
        assert!(confetti.particles.iter().all(|p| p.vel.y < 0.0));
    }
}
