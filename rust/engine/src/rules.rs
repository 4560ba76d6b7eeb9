use crate::player::Player;
use crate::session::Winner;

/// Decides whether the game is over after `eliminated` left the table.
///
/// Evaluates the whole roster from scratch every time; `players` must already
/// reflect the elimination.
///
/// # Rules
///
/// 1. An eliminated jester wins alone, and nothing else is checked.
/// 2. No imposter alive: [`Winner::Agents`].
/// 3. Imposters at parity or majority with everyone else alive
///    (a living jester counts on the agent side): [`Winner::Imposters`].
/// 4. Otherwise the game goes on and `None` is returned.
///
/// # Examples
///
/// ```
/// use imposter_engine::player::{ExtraRole, Player, Role};
/// use imposter_engine::rules::evaluate_win;
/// use imposter_engine::session::Winner;
///
/// let players = vec![
///     Player::new("Ann", Role::Imposter, ExtraRole::None),
///     Player::new("Bo", Role::Agent, ExtraRole::None),
///     Player::new("Cy", Role::Agent, ExtraRole::None),
/// ];
/// // Nobody eliminated yet: one imposter against two agents
/// assert_eq!(evaluate_win(&players, &players[1]), None);
/// ```
pub fn evaluate_win(players: &[Player], eliminated: &Player) -> Option<Winner> {
    if eliminated.is_jester() {
        return Some(Winner::Jester);
    }

    let (live_imposters, live_agents) =
        players
            .iter()
            .filter(|p| p.is_alive())
            .fold((0usize, 0usize), |(imp, agt), p| {
                if p.is_imposter() {
                    (imp + 1, agt)
                } else {
                    (imp, agt + 1)
                }
            });

    if live_imposters == 0 {
        Some(Winner::Agents)
    } else if live_imposters >= live_agents {
        Some(Winner::Imposters)
    } else {
        None
    }
}
