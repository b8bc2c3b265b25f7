use shared::{playlist_rows, PlaylistStat};
use yew::prelude::*;

use crate::i18n::use_i18n;

#[derive(Properties, PartialEq)]
pub struct PlaylistListProps {
    pub playlists: Vec<PlaylistStat>,
}

/// Names are rendered as text nodes, never parsed as markup.
#[function_component(PlaylistList)]
pub fn playlist_list(props: &PlaylistListProps) -> Html {
    let i18n = use_i18n();
    let rows = playlist_rows(&props.playlists);
    let is_empty = rows.is_empty();

    html! {
        <>
            <div id="playlist-list" class="playlist-list">
                { for rows.into_iter().map(|row| html! {
                    <div class="playlist-row">
                        <div class="playlist-info">
                            <span class="playlist-name">{ row.name }</span>
                            <span class="playlist-stats">{ row.stats }</span>
                        </div>
                        <div class="playlist-bar-container">
                            <div class="playlist-bar" style={format!("width: {}%;", row.bar_width)}></div>
                        </div>
                    </div>
                }) }
            </div>
            <p id="playlist-empty" class={classes!("playlist-empty", (!is_empty).then_some("hidden"))}>
                { i18n.t_or("analytics.noPlaylists", "No playlist data yet") }
            </p>
        </>
    }
}
