//! Key state to camera motion.

use std::collections::HashSet;

use spry_renderer::Camera;

/// Turn rate for the arrow keys, radians per second.
pub const TURN_RATE: f64 = 1.5;

/// Movement speed for WASD, world units per second.
pub const MOVE_SPEED: f64 = 5.0;

/// Keys the driver reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
}

/// Keys currently held down.
#[derive(Debug, Default, Clone)]
pub struct KeyState {
    pressed: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a key state with the given keys held.
    pub fn holding(keys: &[Key]) -> Self {
        Self {
            pressed: keys.iter().copied().collect(),
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// -1, 0 or 1 depending on which of two opposing keys is held.
    fn axis(&self, positive: Key, negative: Key) -> f64 {
        match (self.is_pressed(positive), self.is_pressed(negative)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Move the camera for `delta_seconds` of held keys.
    ///
    /// Opposing keys cancel each other out.
    pub fn apply(&self, camera: &mut Camera, delta_seconds: f64) {
        let turn = TURN_RATE * delta_seconds;
        let travel = MOVE_SPEED * delta_seconds;

        let yaw = self.axis(Key::Left, Key::Right);
        if yaw != 0.0 {
            camera.turn_left(yaw * turn);
        }

        let pitch = self.axis(Key::Up, Key::Down);
        if pitch != 0.0 {
            camera.turn_up(pitch * turn);
        }

        let forward = self.axis(Key::W, Key::S);
        if forward != 0.0 {
            camera.move_forward(forward * travel);
        }

        let left = self.axis(Key::A, Key::D);
        if left != 0.0 {
            camera.move_left(left * travel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spry_renderer::Vec3;

    #[test]
    fn test_holding() {
        let keys = KeyState::holding(&[Key::W, Key::Left]);
        assert!(keys.is_pressed(Key::W));
        assert!(keys.is_pressed(Key::Left));
        assert!(!keys.is_pressed(Key::S));
        assert!(!KeyState::new().is_pressed(Key::W));
    }

    #[test]
    fn test_forward_movement() {
        let mut camera = Camera::new();
        KeyState::holding(&[Key::W]).apply(&mut camera, 0.5);

        let expected = Vec3::new(0.0, 0.0, -2.5);
        assert!((camera.position() - expected).length() < 1e-12);
    }

    #[test]
    fn test_strafe_left() {
        let mut camera = Camera::new();
        KeyState::holding(&[Key::A]).apply(&mut camera, 1.0);

        assert!((camera.position() - Vec3::new(-5.0, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut camera = Camera::new();
        KeyState::holding(&[Key::W, Key::S, Key::Left, Key::Right, Key::A, Key::D])
            .apply(&mut camera, 1.0);

        assert_eq!(camera, Camera::new());
    }

    #[test]
    fn test_turning_matches_turn_rate() {
        let mut by_keys = Camera::new();
        KeyState::holding(&[Key::Right, Key::Up]).apply(&mut by_keys, 0.2);

        let mut direct = Camera::new();
        direct.turn_left(-TURN_RATE * 0.2);
        direct.turn_up(TURN_RATE * 0.2);

        assert_eq!(by_keys, direct);
    }
}
