#[cfg(test)]
mod tests {
    use crate::{face_counts, score, scores_for_dice, upper_total_with_bonus, ScoreGroup};

    #[test]
    fn three_sixes_scored_as_three_of_a_kind_and_sixes() {
        let dice = [6, 6, 6, 2, 3];
        assert_eq!(score(dice, ScoreGroup::ThreeOfAKind), 23);
        assert_eq!(score(dice, ScoreGroup::Sixes), 18);
        assert_eq!(score(dice, ScoreGroup::FourOfAKind), 0);
    }

    #[test]
    fn low_straight_counts_as_small_and_large() {
        let dice = [1, 2, 3, 4, 5];
        assert_eq!(score(dice, ScoreGroup::SmallStraight), 30);
        assert_eq!(score(dice, ScoreGroup::LargeStraight), 40);
    }

    #[test]
    fn yahtzee_is_not_a_full_house() {
        let dice = [2, 2, 2, 2, 2];
        assert_eq!(score(dice, ScoreGroup::Yahtzee), 50);
        assert_eq!(score(dice, ScoreGroup::FullHouse), 0);
        assert_eq!(score(dice, ScoreGroup::FourOfAKind), 10);
        assert_eq!(score(dice, ScoreGroup::Twos), 10);
    }

    #[test]
    fn small_straight_with_a_pair_in_any_order() {
        assert_eq!(score([4, 3, 6, 5, 3], ScoreGroup::SmallStraight), 30);
        assert_eq!(score([4, 3, 6, 5, 3], ScoreGroup::LargeStraight), 0);
        assert_eq!(score([1, 2, 4, 5, 6], ScoreGroup::SmallStraight), 0);
    }

    #[test]
    fn full_house_needs_exactly_three_and_two() {
        assert_eq!(score([1, 1, 2, 2, 2], ScoreGroup::FullHouse), 25);
        assert_eq!(score([1, 1, 2, 2, 3], ScoreGroup::FullHouse), 0);
        assert_eq!(score([3, 3, 3, 3, 5], ScoreGroup::FullHouse), 0);
    }

    #[test]
    fn chance_is_the_plain_sum() {
        assert_eq!(score([1, 1, 2, 3, 4], ScoreGroup::Chance), 11);
    }

    #[test]
    fn table_matches_single_group_scoring_exhaustive() {
        // 6^5 = 7776 hands.
        for a in 1u8..=6 {
            for b in 1u8..=6 {
                for c in 1u8..=6 {
                    for d in 1u8..=6 {
                        for e in 1u8..=6 {
                            let dice = [a, b, c, d, e];
                            let table = scores_for_dice(dice);
                            for g in ScoreGroup::ALL {
                                assert_eq!(table[g.index()], score(dice, g), "{:?} {}", dice, g);
                            }
                            let counts = face_counts(&dice);
                            assert_eq!(counts.iter().map(|&c| c as u32).sum::<u32>(), 5);
                            let sum: i32 = dice.iter().map(|&d| d as i32).sum();
                            assert_eq!(table[ScoreGroup::Chance.index()], sum);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn bonus_applies_at_63() {
        assert_eq!(upper_total_with_bonus(62), 62);
        assert_eq!(upper_total_with_bonus(63), 88);
        assert_eq!(upper_total_with_bonus(0), 0);
    }
}
