//! Two six-sided dice.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoller {
    faces: [u8; 2],
}

impl Default for DiceRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceRoller {
    /// Both dice start showing 1.
    pub fn new() -> Self {
        Self { faces: [1, 1] }
    }

    /// Roll both dice.
    pub fn roll<R: Rng>(&mut self, rng: &mut R) -> [u8; 2] {
        self.faces = [rng.gen_range(1..=6), rng.gen_range(1..=6)];
        self.faces
    }

    pub fn faces(&self) -> [u8; 2] {
        self.faces
    }

    pub fn total(&self) -> u8 {
        self.faces[0] + self.faces[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rolls_stay_in_range() {
        let mut dice = DiceRoller::new();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..100 {
            let faces = dice.roll(&mut rng);
            assert!(faces.iter().all(|&f| (1..=6).contains(&f)));
            assert_eq!(dice.total(), faces[0] + faces[1]);
        }
    }
}
