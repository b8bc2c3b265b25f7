use crate::dto::analytics::PlaylistStat;
use crate::models::stat_card::format_one_decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistRow {
    pub name: String,
    pub stats: String,
    /// Bar width as a CSS percentage with one decimal, e.g. `"62.5"`.
    pub bar_width: String,
}

/// Rows in the order the server sent them. The first entry is taken as the
/// most played and sets the 100% bar.
pub fn playlist_rows(playlists: &[PlaylistStat]) -> Vec<PlaylistRow> {
    let max_count = playlists.first().map(|p| p.play_count).unwrap_or(0);

    playlists
        .iter()
        .map(|p| {
            let width = if max_count == 0 {
                0.0
            } else {
                p.play_count as f64 / max_count as f64 * 100.0
            };
            PlaylistRow {
                name: p.name.clone(),
                stats: format!("{} games ({}%)", p.play_count, p.percentage),
                bar_width: format_one_decimal(width),
            }
        })
        .collect()
}
