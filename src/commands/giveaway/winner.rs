use rand::seq::SliceRandom;
use serenity::model::id::UserId;

use crate::error::{Error, Result};

pub const NO_ELIGIBLE_REACTORS: &str = "Nobody entered the giveaway, so there is no winner.";

/// Picks a winner uniformly at random from the reactor list. The bot reacts
/// to its own announcement, so its account is never eligible.
pub fn pick_winner(reactor_ids: &[UserId], bot_user_id: UserId) -> Result<UserId> {
    let eligible: Vec<UserId> = reactor_ids
        .iter()
        .copied()
        .filter(|user_id| *user_id != bot_user_id)
        .collect();

    eligible
        .choose(&mut rand::thread_rng())
        .copied()
        .ok_or_else(|| Error::Giveaway(NO_ELIGIBLE_REACTORS.to_string()))
}

#[cfg(test)]
mod tests {
    use serenity::model::id::UserId;

    use crate::commands::giveaway::winner::pick_winner;
    use crate::error::Error;

    #[test]
    fn test_winner_is_always_an_eligible_reactor() {
        let bot = UserId::new(1);
        let reactors = vec![bot, UserId::new(2), UserId::new(3)];

        for _ in 0..100 {
            let winner = pick_winner(&reactors, bot).unwrap();
            assert!(winner == UserId::new(2) || winner == UserId::new(3));
        }
    }

    #[test]
    fn test_single_eligible_reactor_always_wins() {
        let bot = UserId::new(1);
        let reactors = vec![bot, UserId::new(2)];

        let winner = pick_winner(&reactors, bot).unwrap();
        assert_eq!(winner, UserId::new(2));
    }

    #[test]
    fn test_get_error_when_only_the_bot_reacted() {
        let bot = UserId::new(1);
        let reactors = vec![bot];

        let result = pick_winner(&reactors, bot);
        assert!(matches!(result, Err(Error::Giveaway(_))));
    }

    #[test]
    fn test_get_error_for_an_empty_reactor_list() {
        let result = pick_winner(&[], UserId::new(1));
        assert!(matches!(result, Err(Error::Giveaway(_))));
    }
}
