mod contributor;
pub mod create;
mod delete;
mod follow;
pub mod get;
mod list;
mod search;
mod song;
mod update;

use axum::Router;
use axum::routing::{delete, get, put};

use crate::app::state::App;

pub fn router() -> Router<App> {
    Router::new()
        .route(
            "/playlists",
            get(list::list_playlists_handler).post(create::create_playlist_handler),
        )
        .route(
            "/playlists/{id}",
            get(get::get_playlist_handler).put(update::update_playlist_handler),
        )
        .route("/playlists/{id}/{user_id}", delete(delete::delete_playlist_handler))
        .route("/playlists/MyPlaylists/{user_id}", get(list::my_playlists_handler))
        .route("/playlists/addSong/{id}/{song_id}", put(song::add_song_handler))
        .route("/playlists/removeSong/{id}/{song_id}", put(song::remove_song_handler))
        .route("/playlists/follow/{id}", put(follow::follow_handler))
        .route("/playlists/unfollow/{id}", put(follow::unfollow_handler))
        .route(
            "/playlists/addContributor/{id}/{contributor_id}",
            put(contributor::add_contributor_handler),
        )
        .route(
            "/playlists/removeContributor/{id}/{contributor_id}",
            put(contributor::remove_contributor_handler),
        )
        .route("/feed/search/playlists", get(search::search_playlists_handler))
}
