use glam::Vec2;

/// Per-frame player intent. Movement is a held axis; the button fields are
/// edge-triggered and must be cleared by the caller after each step.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Desired movement direction. Normalized by the simulation, so callers
    /// may pass raw key-axis sums like (1, 1).
    pub move_dir: Vec2,
    /// Use the equipped weapon this frame.
    pub attack: bool,
    /// Fling the held melee weapon as an improvised projectile.
    pub throw: bool,
    /// Try to collect a pickup under the player this frame.
    pub pickup: bool,
}

impl FrameInput {
    /// Reset the edge-triggered buttons, keeping the held movement axis.
    pub fn clear_edges(&mut self) {
        self.attack = false;
        self.throw = false;
        self.pickup = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_edges_keeps_movement() {
        let mut input = FrameInput {
            move_dir: Vec2::new(1.0, 0.0),
            attack: true,
            throw: true,
            pickup: true,
        };
        input.clear_edges();
        assert_eq!(input.move_dir, Vec2::new(1.0, 0.0));
        assert!(!input.attack && !input.throw && !input.pickup);
    }
}
