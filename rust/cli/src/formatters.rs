//! Role card, round result, and debrief formatters for terminal display.
//!
//! Pure functions from engine types to text. Nothing here writes to a stream,
//! so every screen of the game can be checked as a plain string.
//!
//! ## Example
//!
//! ```rust
//! use imposter_cli::formatters::{format_time, format_winner};
//! use imposter_engine::session::Winner;
//!
//! assert_eq!(format_time(75), "1:15");
//! assert!(format_winner(Winner::Jester, Some("Bo")).contains("Bo"));
//! ```

use imposter_engine::engine::{Disclosure, Knowledge, RoleCard, RoundResult};
use imposter_engine::player::{ExtraRole, Player, Role};
use imposter_engine::session::{Session, Winner};

const RULE: &str = "========================================";

/// Display label of a player's secret identity.
pub fn role_label(role: Role, extra: ExtraRole) -> &'static str {
    match (role, extra) {
        (Role::Imposter, _) => "IMPOSTER",
        (Role::Agent, ExtraRole::Jester) => "JESTER",
        (Role::Agent, ExtraRole::None) => "AGENT",
    }
}

/// The private screen for one player.
///
/// Agents get the category and word. Imposters and the jester get the category
/// only when hints are on; imposters also see their allies when teaming is on.
pub fn format_role_card(card: &RoleCard) -> String {
    let mut lines = vec![
        RULE.to_string(),
        format!("{}  ({}/{})", card.name, card.position, card.total),
        format!("You are: {}", role_label(card.role, card.extra_role)),
    ];

    match &card.knowledge {
        Knowledge::Word { category, word } => {
            lines.push(format!("Category: {}", category));
            lines.push(format!("Secret word: {}", word));
        }
        Knowledge::Category { category } => {
            lines.push(format!("Category hint: {}", category));
        }
        Knowledge::Nothing => lines.push("No hint this game.".to_string()),
    }

    if card.extra_role == ExtraRole::Jester {
        lines.push("Get yourself voted out to win alone.".to_string());
    } else if card.role == Role::Imposter {
        lines.push("Blend in. Survive until you match the agents.".to_string());
        if !card.allies.is_empty() {
            lines.push(format!("Fellow imposters: {}", card.allies.join(", ")));
        }
    }
    lines.push(RULE.to_string());
    lines.join("\n")
}

pub fn format_round_result(result: &RoundResult) -> String {
    match result {
        RoundResult::Skipped => "Vote skipped. Nobody was eliminated.".to_string(),
        RoundResult::Eliminated(report) => match report.disclosure {
            Disclosure::Revealed {
                role,
                extra_role,
                imposters_left,
                agents_left,
            } => format!(
                "{} was eliminated. They were {}.\nRemaining: {} imposter(s), {} agent(s)",
                report.name,
                role_label(role, extra_role),
                imposters_left,
                agents_left
            ),
            Disclosure::Undisclosed => {
                format!("{} was eliminated. Their role stays secret.", report.name)
            }
        },
    }
}

/// Winner banner. `decided_by` names the player whose elimination ended the game.
pub fn format_winner(winner: Winner, decided_by: Option<&str>) -> String {
    let headline = match winner {
        Winner::Agents => "AGENTS WIN! Every imposter has been found.".to_string(),
        Winner::Imposters => "IMPOSTERS WIN! They now match the agents.".to_string(),
        Winner::Jester => match decided_by {
            Some(name) => format!("JESTER WINS! {} fooled everyone.", name),
            None => "JESTER WINS!".to_string(),
        },
    };
    format!("{}\n{}\n{}", RULE, headline, RULE)
}

/// Seat-numbered list of players; eliminated seats are marked and keep their number.
pub fn format_roster(players: &[Player]) -> String {
    players
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if p.is_alive() {
                format!("  {:>2}. {}", i + 1, p.name())
            } else {
                format!("  {:>2}. {} (out)", i + 1, p.name())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_time(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Post-game reveal: the topic and everyone's role.
pub fn format_debrief(session: &Session) -> String {
    let topic = session.topic();
    let mut lines = vec![format!(
        "The word was: {} ({})",
        topic.word, topic.category
    )];
    for p in session.players() {
        let status = if p.is_alive() { "" } else { " (out)" };
        lines.push(format!(
            "  {:<12} {}{}",
            p.name(),
            role_label(p.role(), p.extra_role()),
            status
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use imposter_engine::engine::EliminationReport;
    use imposter_engine::player::PlayerId;

    fn card(role: Role, extra: ExtraRole, knowledge: Knowledge, allies: &[&str]) -> RoleCard {
        RoleCard {
            player_id: PlayerId::new(),
            name: "Ann".into(),
            role,
            extra_role: extra,
            knowledge,
            allies: allies.iter().map(|s| s.to_string()).collect(),
            position: 1,
            total: 4,
        }
    }

    #[test]
    fn agent_card_shows_word() {
        let text = format_role_card(&card(
            Role::Agent,
            ExtraRole::None,
            Knowledge::Word {
                category: "Zoo".into(),
                word: "Lion".into(),
            },
            &[],
        ));
        assert!(text.contains("Ann  (1/4)"));
        assert!(text.contains("You are: AGENT"));
        assert!(text.contains("Secret word: Lion"));
    }

    #[test]
    fn imposter_card_hides_word_and_lists_allies() {
        let text = format_role_card(&card(
            Role::Imposter,
            ExtraRole::None,
            Knowledge::Category {
                category: "Zoo".into(),
            },
            &["Bo"],
        ));
        assert!(text.contains("You are: IMPOSTER"));
        assert!(text.contains("Category hint: Zoo"));
        assert!(!text.contains("Secret word"));
        assert!(text.contains("Fellow imposters: Bo"));
    }

    #[test]
    fn jester_card_states_goal() {
        let text = format_role_card(&card(
            Role::Agent,
            ExtraRole::Jester,
            Knowledge::Nothing,
            &[],
        ));
        assert!(text.contains("You are: JESTER"));
        assert!(text.contains("No hint this game."));
        assert!(text.contains("voted out to win alone"));
    }

    #[test]
    fn round_results() {
        assert!(format_round_result(&RoundResult::Skipped).contains("Nobody"));

        let revealed = RoundResult::Eliminated(EliminationReport {
            player_id: PlayerId::new(),
            name: "Cy".into(),
            disclosure: Disclosure::Revealed {
                role: Role::Imposter,
                extra_role: ExtraRole::None,
                imposters_left: 0,
                agents_left: 3,
            },
        });
        let text = format_round_result(&revealed);
        assert!(text.contains("Cy was eliminated. They were IMPOSTER."));
        assert!(text.contains("0 imposter(s), 3 agent(s)"));

        let hidden = RoundResult::Eliminated(EliminationReport {
            player_id: PlayerId::new(),
            name: "Cy".into(),
            disclosure: Disclosure::Undisclosed,
        });
        assert!(format_round_result(&hidden).contains("stays secret"));
    }

    #[test]
    fn roster_marks_eliminated() {
        let players = vec![
            Player::new("Ann", Role::Agent, ExtraRole::None),
            Player::new("Bo", Role::Imposter, ExtraRole::None),
        ];
        assert_eq!(format_roster(&players), "   1. Ann\n   2. Bo");
    }

    #[test]
    fn time_is_minutes_and_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(180), "3:00");
    }

    #[test]
    fn winner_banners() {
        assert!(format_winner(Winner::Agents, None).contains("AGENTS WIN"));
        assert!(format_winner(Winner::Imposters, Some("Di")).contains("IMPOSTERS WIN"));
        assert!(format_winner(Winner::Jester, Some("Di")).contains("Di fooled everyone"));
    }
}
