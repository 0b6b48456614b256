use std::collections::VecDeque;

use glam::Vec2;

/// Bounded history of a comet's projected screen positions, oldest first.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vec2>,
}

impl Trail {
    pub const CAPACITY: usize = 20;

    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(Self::CAPACITY),
        }
    }

    /// Append a point, evicting the oldest once over capacity.
    pub fn push(&mut self, point: Vec2) {
        if self.points.len() == Self::CAPACITY {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Drop the oldest point. Used while the head is off-screen so the
    /// trail drains instead of freezing.
    pub fn shrink(&mut self) {
        self.points.pop_front();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Vec2> + ExactSizeIterator {
        self.points.iter()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_at_capacity_and_evicts_oldest() {
        let mut trail = Trail::new();
        for i in 0..50 {
            trail.push(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(trail.len(), Trail::CAPACITY);
        assert_eq!(trail.iter().next(), Some(&Vec2::new(30.0, 0.0)));
        assert_eq!(trail.iter().next_back().copied(), Some(Vec2::new(49.0, 0.0)));
    }

    #[test]
    fn shrink_drains_to_empty() {
        let mut trail = Trail::new();
        trail.push(Vec2::ZERO);
        trail.push(Vec2::ONE);
        trail.shrink();
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.iter().next_back().copied(), Some(Vec2::ONE));
        trail.shrink();
        trail.shrink();
        assert!(trail.is_empty());
    }

    #[test]
    fn never_reallocates_past_capacity() {
        let mut trail = Trail::new();
        for _ in 0..Trail::CAPACITY {
            trail.push(Vec2::ZERO);
        }
        let cap = trail.points.capacity();
        for _ in 0..100 {
            trail.push(Vec2::ONE);
        }
        assert_eq!(trail.points.capacity(), cap);
    }
}
