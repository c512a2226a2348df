//! Renderer boundary

use ember_core::{Color, Vec2};

/// Receives one draw call per alive particle per render pass, in pool
/// slot order.
///
/// The visual handle is whatever opaque type the host registered with the
/// simulator; the simulation never looks inside it. The tint arrives with
/// its alpha already forced to fully opaque.
pub trait ParticleRenderer<H> {
    fn draw_particle(&mut self, visual: &H, position: Vec2, angle_deg: f32, scale: f32, tint: Color);
}

/// Closures work as renderers, which keeps hosts and tests short
impl<H, F> ParticleRenderer<H> for F
where
    F: FnMut(&H, Vec2, f32, f32, Color),
{
    fn draw_particle(&mut self, visual: &H, position: Vec2, angle_deg: f32, scale: f32, tint: Color) {
        self(visual, position, angle_deg, scale, tint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_implement_the_renderer_trait() {
        let mut seen = Vec::new();
        {
            let mut renderer = |visual: &u32, position: Vec2, angle: f32, scale: f32, tint: Color| {
                seen.push((*visual, position, angle, scale, tint));
            };
            renderer.draw_particle(&7, Vec2::new(1.0, 2.0), 90.0, 1.5, Color::RED);
        }
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, 7);
        assert_eq!(seen[0].4, Color::RED);
    }
}
