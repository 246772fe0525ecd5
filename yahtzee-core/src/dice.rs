//! The five dice of the active turn and the keep/re-roll rule.

use crate::error::GameError;
use crate::generator::DieGenerator;

pub const NUM_DICE: usize = 5;

/// Five die slots. Either all unset (turn not rolled yet) or all set and
/// sorted ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiceHand {
    slots: [Option<u8>; NUM_DICE],
}

impl DiceHand {
    /// A hand at the start of a turn, before any roll.
    pub fn unrolled() -> Self {
        Self::default()
    }

    /// A rolled hand holding `values`, sorted.
    ///
    /// # Panics
    /// Panics if a value is outside 1..=6.
    pub fn from_values(mut values: [u8; NUM_DICE]) -> Self {
        assert!(
            values.iter().all(|d| (1..=6).contains(d)),
            "dice values must be in 1..=6: {:?}",
            values
        );
        values.sort_unstable();
        Self {
            slots: values.map(Some),
        }
    }

    pub fn slots(&self) -> [Option<u8>; NUM_DICE] {
        self.slots
    }

    /// The face values, or `None` if the turn has not been rolled yet.
    pub fn values(&self) -> Option<[u8; NUM_DICE]> {
        if !self.is_rolled() {
            return None;
        }
        let mut out = [0u8; NUM_DICE];
        for (o, s) in out.iter_mut().zip(self.slots.iter()) {
            *o = (*s)?;
        }
        Some(out)
    }

    pub fn is_rolled(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// True if `keep` could be passed to [`DiceHand::reroll`].
    pub fn can_keep(&self, keep: &[u8]) -> bool {
        keep.len() <= NUM_DICE && check_keep(self, keep).is_ok()
    }

    /// Produce the next hand: the `keep` values plus fresh dice from `generator`,
    /// sorted ascending.
    ///
    /// `keep` must be a sub-multiset of this hand. `self` is left untouched; on
    /// error the generator may have been advanced but no hand is produced.
    pub fn reroll(
        &self,
        keep: &[u8],
        generator: &mut dyn DieGenerator,
    ) -> Result<DiceHand, GameError> {
        if keep.len() > NUM_DICE {
            return Err(GameError::TooManyKept(keep.len()));
        }
        check_keep(self, keep)?;

        let mut next = [0u8; NUM_DICE];
        next[..keep.len()].copy_from_slice(keep);
        for slot in next[keep.len()..].iter_mut() {
            let d = generator.next_die();
            if !(1..=6).contains(&d) {
                return Err(GameError::InvalidDieValue(d));
            }
            *slot = d;
        }
        Ok(DiceHand::from_values(next))
    }
}

/// Every kept value must be removable one-for-one from the hand.
fn check_keep(hand: &DiceHand, keep: &[u8]) -> Result<(), GameError> {
    let Some(values) = hand.values() else {
        return if keep.is_empty() {
            Ok(())
        } else {
            Err(GameError::KeepBeforeFirstRoll)
        };
    };

    let mut unused = [0u8; 6];
    for &d in &values {
        unused[(d - 1) as usize] += 1;
    }
    for &k in keep {
        if !(1..=6).contains(&k) || unused[(k - 1) as usize] == 0 {
            return Err(GameError::DieNotPresent(k));
        }
        unused[(k - 1) as usize] -= 1;
    }
    Ok(())
}
