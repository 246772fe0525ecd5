//! Per-player score sheet.

use crate::error::GameError;
use crate::score_group::{ScoreGroup, NUM_GROUPS};
use crate::scoring::upper_total_with_bonus;

/// One player's scores. A group is `None` until played; a played group never
/// changes again. Totals are derived on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSheet {
    scores: [Option<i32>; NUM_GROUPS],
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored score for `group`, or `None` if it has not been played.
    pub fn get_group_score(&self, group: ScoreGroup) -> Option<i32> {
        self.scores[group.index()]
    }

    pub fn is_scored(&self, group: ScoreGroup) -> bool {
        self.scores[group.index()].is_some()
    }

    /// Groups still open on this sheet, in sheet order.
    pub fn open_groups(&self) -> impl Iterator<Item = ScoreGroup> + '_ {
        ScoreGroup::ALL.into_iter().filter(move |&g| !self.is_scored(g))
    }

    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(Option::is_some)
    }

    /// Raw sum of the upper section.
    pub fn upper_sub_total(&self) -> i32 {
        self.section_total(ScoreGroup::is_upper)
    }

    /// Upper subtotal plus the bonus, if earned.
    pub fn upper_total(&self) -> i32 {
        upper_total_with_bonus(self.upper_sub_total())
    }

    pub fn lower_total(&self) -> i32 {
        self.section_total(ScoreGroup::is_lower)
    }

    pub fn total_score(&self) -> i32 {
        self.upper_total() + self.lower_total()
    }

    /// Store `points` for `group`. Fails if the group was already played.
    pub(crate) fn record(&mut self, group: ScoreGroup, points: i32) -> Result<(), GameError> {
        let slot = &mut self.scores[group.index()];
        if slot.is_some() {
            return Err(GameError::GroupAlreadyScored(group));
        }
        *slot = Some(points);
        Ok(())
    }

    fn section_total(&self, in_section: fn(ScoreGroup) -> bool) -> i32 {
        ScoreGroup::ALL
            .into_iter()
            .filter(|&g| in_section(g))
            .filter_map(|g| self.get_group_score(g))
            .sum()
    }
}
