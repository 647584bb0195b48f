//! Level progress for the home screen.
//!
//! The backend reports total XP; the client derives the level, the XP
//! earned inside the current level and the progress toward the next one.

/// Cumulative XP needed to reach level `index + 1`.
pub const DEFAULT_LEVEL_XP: &[u32] = &[0, 100, 250, 450, 700, 1000, 1400, 1900, 2500, 3200];

/// Cumulative XP thresholds, one per level, starting at level 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelTable {
    thresholds: Vec<u32>,
}

impl LevelTable {
    /// Build a table from cumulative thresholds.
    ///
    /// The list is sorted and deduplicated, and a level-1 threshold of 0 is
    /// inserted if missing, so any input yields a usable table.
    pub fn new(mut thresholds: Vec<u32>) -> Self {
        thresholds.sort_unstable();
        thresholds.dedup();
        if thresholds.first() != Some(&0) {
            thresholds.insert(0, 0);
        }
        Self { thresholds }
    }

    pub fn max_level(&self) -> u32 {
        self.thresholds.len() as u32
    }

    /// Progress for a total XP amount.
    pub fn progress(&self, total_xp: u32) -> LevelProgress {
        let index = self
            .thresholds
            .partition_point(|&t| t <= total_xp)
            .saturating_sub(1);
        let level_start = self.thresholds[index];
        let level = index as u32 + 1;

        match self.thresholds.get(index + 1) {
            Some(&next) => LevelProgress {
                level,
                total_xp,
                xp_into_level: total_xp - level_start,
                xp_for_level: next - level_start,
                is_max: false,
            },
            None => LevelProgress {
                level,
                total_xp,
                xp_into_level: total_xp - level_start,
                xp_for_level: 0,
                is_max: true,
            },
        }
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL_XP.to_vec())
    }
}

/// Where a user stands within their level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    pub total_xp: u32,
    pub xp_into_level: u32,
    /// XP span of the current level; 0 at max level.
    pub xp_for_level: u32,
    pub is_max: bool,
}

impl LevelProgress {
    /// Fraction of the current level completed, in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.is_max || self.xp_for_level == 0 {
            return 1.0;
        }
        (self.xp_into_level as f64 / self.xp_for_level as f64).clamp(0.0, 1.0)
    }

    /// Whole percent for display.
    pub fn percent(&self) -> u8 {
        (self.fraction() * 100.0).floor() as u8
    }

    pub fn xp_to_next(&self) -> Option<u32> {
        (!self.is_max).then(|| self.xp_for_level - self.xp_into_level)
    }

    /// Whether gaining `gained` XP from here crosses into a new level.
    pub fn levels_up_with(&self, table: &LevelTable, gained: u32) -> bool {
        table.progress(self.total_xp.saturating_add(gained)).level > self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_of_table() {
        let p = LevelTable::default().progress(0);
        assert_eq!(p.level, 1);
        assert_eq!(p.xp_into_level, 0);
        assert_eq!(p.xp_for_level, 100);
        assert_eq!(p.percent(), 0);
        assert_eq!(p.xp_to_next(), Some(100));
    }

    #[test]
    fn test_mid_level() {
        let p = LevelTable::default().progress(325);
        assert_eq!(p.level, 3);
        assert_eq!(p.xp_into_level, 75);
        assert_eq!(p.xp_for_level, 200);
        assert_eq!(p.percent(), 37);
    }

    #[test]
    fn test_exact_threshold_is_next_level() {
        let p = LevelTable::default().progress(250);
        assert_eq!(p.level, 3);
        assert_eq!(p.xp_into_level, 0);
    }

    #[test]
    fn test_max_level_clamps() {
        let table = LevelTable::default();
        let p = table.progress(99_999);
        assert_eq!(p.level, table.max_level());
        assert!(p.is_max);
        assert_eq!(p.percent(), 100);
        assert_eq!(p.xp_to_next(), None);
    }

    #[test]
    fn test_unsorted_input_is_normalized() {
        let table = LevelTable::new(vec![50, 20, 20]);
        assert_eq!(table.max_level(), 3);
        assert_eq!(table.progress(30).level, 2);
    }

    #[test]
    fn test_levels_up_with() {
        let table = LevelTable::default();
        let p = table.progress(90);
        assert!(p.levels_up_with(&table, 10));
        assert!(!p.levels_up_with(&table, 9));
    }
}
