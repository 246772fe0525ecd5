#[cfg(test)]
mod tests {
    use crate::{
        can_roll, can_score, is_legal, open_groups, Action, Player, ScoreGroup, SequenceGenerator,
        YahtzeeGame, NUM_GROUPS,
    };

    fn solo(faces: Vec<u8>) -> YahtzeeGame {
        YahtzeeGame::new(&[Player::human("solo")])
            .unwrap()
            .with_generator(Box::new(SequenceGenerator::new(faces)))
    }

    #[test]
    fn fresh_turn_can_only_roll_everything() {
        let game = solo(vec![1]);
        assert!(can_roll(&game));
        assert!(is_legal(&game, &Action::roll_all()));
        assert!(!is_legal(&game, &Action::keep([1])));
        for g in ScoreGroup::ALL {
            assert!(!can_score(&game, g));
            assert!(!is_legal(&game, &Action::Score(g)));
        }
        assert_eq!(open_groups(&game).len(), NUM_GROUPS);
    }

    #[test]
    fn keep_legality_follows_the_hand() {
        let mut game = solo(vec![2, 3, 3, 6, 6]);
        game.roll_dice().unwrap();
        assert!(is_legal(&game, &Action::keep([3, 3, 6])));
        assert!(is_legal(&game, &Action::keep([2, 3, 3, 6, 6])));
        assert!(!is_legal(&game, &Action::keep([2, 2])));
        assert!(!is_legal(&game, &Action::keep([1])));
        assert!(!is_legal(&game, &Action::keep([2, 3, 3, 6, 6, 6])));
    }

    #[test]
    fn no_roll_after_the_third() {
        let mut game = solo(vec![4]);
        for _ in 0..3 {
            assert!(can_roll(&game));
            game.roll_dice().unwrap();
        }
        assert!(!can_roll(&game));
        assert!(!is_legal(&game, &Action::roll_all()));
        assert!(is_legal(&game, &Action::Score(ScoreGroup::Yahtzee)));
    }

    #[test]
    fn scored_groups_close() {
        let mut game = solo(vec![1, 2, 3, 4, 5]);
        game.roll_dice().unwrap();
        game.apply_dice_to_group(ScoreGroup::LargeStraight).unwrap();
        game.roll_dice().unwrap();

        assert!(!can_score(&game, ScoreGroup::LargeStraight));
        assert!(can_score(&game, ScoreGroup::SmallStraight));
        let open = open_groups(&game);
        assert_eq!(open.len(), NUM_GROUPS - 1);
        assert!(!open.contains(&ScoreGroup::LargeStraight));
    }

    #[test]
    fn finished_game_allows_nothing() {
        let mut game = solo(vec![6]);
        for g in ScoreGroup::ALL {
            game.roll_dice().unwrap();
            game.apply_dice_to_group(g).unwrap();
        }
        assert!(game.is_finished());
        assert!(!can_roll(&game));
        assert!(!is_legal(&game, &Action::roll_all()));
        assert!(open_groups(&game).is_empty());
    }
}
