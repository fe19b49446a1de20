//! Gear space definition and exhaustive enumeration of gear assignments.

use rc_types::{ConfigError, GearAssignment, Skill};

/// Exhaustive grid over every skill's gear options.
///
/// Combinations are produced in lexicographic order: the first skill is the
/// outermost dimension and the last skill varies fastest. Combinations are
/// decoded on demand from a cursor instead of being materialized up front.
#[derive(Debug, Clone)]
pub struct GearEnumerator {
    axes: Vec<Vec<f64>>,
    total: usize,
    cursor: usize,
}

impl GearEnumerator {
    pub fn new(skills: &[Skill]) -> Result<Self, ConfigError> {
        let mut axes = Vec::with_capacity(skills.len());
        let mut total: usize = 1;
        for skill in skills {
            if skill.gear_options.is_empty() {
                return Err(ConfigError::NoGearOptions {
                    skill: skill.name.clone(),
                });
            }
            total = total
                .checked_mul(skill.gear_options.len())
                .ok_or(ConfigError::SearchSpaceTooLarge)?;
            axes.push(skill.gear_options.clone());
        }
        Ok(Self {
            axes,
            total,
            cursor: 0,
        })
    }

    /// Total number of gear assignments (product of option counts).
    pub fn grid_size(&self) -> usize {
        self.total
    }

    pub fn remaining(&self) -> usize {
        self.total - self.cursor
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// The combination at `index` in enumeration order.
    pub fn combination_at(&self, index: usize) -> Option<GearAssignment> {
        if index >= self.total {
            return None;
        }
        let mut percents = vec![0.0; self.axes.len()];
        let mut rest = index;
        for (slot, axis) in percents.iter_mut().zip(&self.axes).rev() {
            *slot = axis[rest % axis.len()];
            rest /= axis.len();
        }
        Some(GearAssignment::new(percents))
    }

    /// Next batch of up to `count` combinations.
    ///
    /// The batch is empty when `count` is zero or when every combination has
    /// already been handed out; only the latter is reflected by
    /// [`GearEnumerator::remaining`] reaching zero.
    pub fn suggest(&mut self, count: usize) -> Vec<GearAssignment> {
        let end = self.cursor.saturating_add(count).min(self.total);
        let batch = (self.cursor..end)
            .filter_map(|index| self.combination_at(index))
            .collect();
        self.cursor = end;
        batch
    }

    /// Every combination, independent of the cursor.
    pub fn combinations(&self) -> Vec<GearAssignment> {
        (0..self.total)
            .filter_map(|index| self.combination_at(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn skill(name: &str, gear: Vec<f64>) -> Skill {
        Skill::new(name, 1.0, 10.0, 100.0).with_gear(gear)
    }

    #[test]
    fn produces_lexicographic_product() {
        let skills = vec![skill("a", vec![0.0, 10.0]), skill("b", vec![5.0, 15.0, 25.0])];
        let grid = GearEnumerator::new(&skills).unwrap();
        assert_eq!(grid.grid_size(), 6);

        let combos: Vec<Vec<f64>> = grid
            .combinations()
            .into_iter()
            .map(|g| g.percents().to_vec())
            .collect();
        assert_eq!(
            combos,
            vec![
                vec![0.0, 5.0],
                vec![0.0, 15.0],
                vec![0.0, 25.0],
                vec![10.0, 5.0],
                vec![10.0, 15.0],
                vec![10.0, 25.0],
            ]
        );
    }

    #[test]
    fn cursor_advances() {
        let skills = vec![skill("x", vec![0.0, 1.0, 2.0, 3.0, 4.0])];
        let mut grid = GearEnumerator::new(&skills).unwrap();
        let first = grid.suggest(3);
        assert_eq!(first.len(), 3);
        assert_eq!(grid.remaining(), 2);
        let second = grid.suggest(10);
        assert_eq!(second.len(), 2); // only 2 remain
        assert_eq!(second[0].percents(), &[3.0]);
        assert!(grid.suggest(10).is_empty());

        grid.reset();
        assert_eq!(grid.remaining(), 5);
    }

    #[test]
    fn zero_count_batch_leaves_cursor_in_place() {
        let skills = vec![skill("x", vec![0.0, 1.0])];
        let mut grid = GearEnumerator::new(&skills).unwrap();
        assert!(grid.suggest(0).is_empty());
        assert_eq!(grid.remaining(), 2);
        assert_eq!(grid.suggest(1)[0].percents(), &[0.0]);
    }

    #[test]
    fn empty_gear_options_are_an_error() {
        let skills = vec![skill("a", vec![0.0]), skill("b", vec![])];
        assert_eq!(
            GearEnumerator::new(&skills).unwrap_err(),
            ConfigError::NoGearOptions { skill: "b".into() }
        );
    }

    #[test]
    fn oversized_space_is_an_error() {
        let wide: Vec<f64> = (0..=100).map(f64::from).collect();
        let skills: Vec<Skill> = (0..16).map(|i| skill(&format!("s{i}"), wide.clone())).collect();
        assert_eq!(
            GearEnumerator::new(&skills).unwrap_err(),
            ConfigError::SearchSpaceTooLarge
        );
    }

    #[test]
    fn no_skills_yields_single_empty_assignment() {
        let grid = GearEnumerator::new(&[]).unwrap();
        assert_eq!(grid.grid_size(), 1);
        assert!(grid.combinations()[0].is_empty());
    }

    #[test]
    fn out_of_range_index_is_none() {
        let grid = GearEnumerator::new(&[skill("a", vec![0.0, 50.0])]).unwrap();
        assert!(grid.combination_at(2).is_none());
    }

    proptest! {
        #[test]
        fn count_and_membership_match_option_sets(
            sizes in proptest::collection::vec(1usize..4, 1..5),
        ) {
            let skills: Vec<Skill> = sizes
                .iter()
                .enumerate()
                .map(|(i, &n)| skill(&format!("s{i}"), (0..n).map(|k| (k * 10) as f64).collect()))
                .collect();
            let grid = GearEnumerator::new(&skills).unwrap();
            let combos = grid.combinations();

            prop_assert_eq!(combos.len(), sizes.iter().product::<usize>());
            for combo in &combos {
                prop_assert_eq!(combo.len(), skills.len());
                for (pct, s) in combo.percents().iter().zip(&skills) {
                    prop_assert!(s.gear_options.contains(pct));
                }
            }
            for pair in combos.windows(2) {
                prop_assert!(pair[0] != pair[1]);
            }
        }
    }
}
