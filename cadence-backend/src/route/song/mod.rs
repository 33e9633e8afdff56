pub mod create;
mod delete;
pub mod get;
mod hot;
mod list;
mod search;
mod update;

use axum::Router;
use axum::routing::get;

use crate::app::state::App;

pub fn router() -> Router<App> {
    Router::new()
        .route("/songs", get(list::list_songs_handler).post(create::create_song_handler))
        .route(
            "/songs/{id}",
            get(get::get_song_handler)
                .put(update::update_song_handler)
                .delete(delete::delete_song_handler),
        )
        .route("/feed/search/songs", get(search::search_songs_handler))
        .route("/feed/hot", get(hot::hot_songs_handler))
}
