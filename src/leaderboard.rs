// File: ./src/leaderboard.rs
// Score table for the exercise-session game.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub matches: Vec<u32>,
}

impl Player {
    pub fn new(name: &str, matches: &[u32]) -> Self {
        Self {
            name: name.to_string(),
            matches: matches.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub rank: usize,
    pub name: String,
    pub total_matches: usize,
    /// Matches in which the player scored at all.
    pub scoring_matches: usize,
    pub total_score: u32,
}

pub const NOT_FOUND: &str = "Player not found";

pub fn default_players() -> Vec<Player> {
    vec![
        Player::new("Alice", &[10, 0, 15, 0, 5]),
        Player::new("Bob", &[0, 20, 0, 10, 5]),
        Player::new("Charlie", &[5, 5, 5, 5, 5]),
        Player::new("Diana", &[0, 0, 10, 0, 20]),
        Player::new("Eve", &[10, 10, 10, 10, 10]),
    ]
}

/// Ranks by total score, highest first. Ties keep input order.
pub fn standings(players: &[Player]) -> Vec<Standing> {
    let mut rows: Vec<Standing> = players
        .iter()
        .map(|p| Standing {
            rank: 0,
            name: p.name.clone(),
            total_matches: p.matches.len(),
            scoring_matches: p.matches.iter().filter(|s| **s != 0).count(),
            total_score: p.matches.iter().sum(),
        })
        .collect();
    rows.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
    rows
}

/// Case-insensitive lookup. An empty query matches nobody.
pub fn find<'a>(standings: &'a [Standing], name: &str) -> Option<&'a Standing> {
    let query = name.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    standings.iter().find(|s| s.name.to_lowercase() == query)
}
