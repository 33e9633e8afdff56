use axum::Router;
use cadence_api::history::History;
use cadence_api::playlist::Playlist;
use cadence_api::song::Song;
use fake::faker::internet::en::SafeEmail;
use fake::{Fake, Faker};
use rstest::fixture;
use time::OffsetDateTime;

use crate::app::{self, state};
use crate::config;
use crate::database::{Database, users};

pub struct Mock {
    pub state: state::App,
}

#[fixture]
pub fn mock() -> Mock {
    Mock::new()
}

#[bon::bon]
impl Mock {
    fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .with_test_writer()
            .try_init();

        Self { state: state::App { database: Database::default(), feed: config::Feed::default() } }
    }

    pub fn database(&self) -> &Database {
        &self.state.database
    }

    pub fn router(&self) -> Router {
        app::router(self.state.clone())
    }

    #[builder]
    pub async fn song(
        &self,
        #[builder(default = Faker.fake())] title: String,
        #[builder(default = Faker.fake())] artist: String,
        #[builder(default = Faker.fake())] genre: String,
        #[builder(default = (1..600).fake())] duration: u32,
        #[builder(default)] times_ever_played: u32,
    ) -> Song {
        self.database()
            .insert(Song { id: String::new(), title, artist, genre, duration, times_ever_played })
            .await
            .unwrap()
    }

    #[builder]
    pub async fn user(
        &self,
        #[builder(default = SafeEmail().fake())] email: String,
        #[builder(default = Faker.fake())] password: String,
        #[builder(default = true)] history_tracking: bool,
    ) -> users::User {
        self.database()
            .insert(users::User {
                id: String::new(),
                name: Faker.fake(),
                email,
                password,
                history_tracking,
            })
            .await
            .unwrap()
    }

    #[builder]
    pub async fn history(
        &self,
        #[builder(into)] user_id: String,
        #[builder(into)] song_id: String,
    ) -> History {
        self.database()
            .insert(History {
                id: String::new(),
                user_id,
                song_id,
                played_at: OffsetDateTime::now_utc(),
            })
            .await
            .unwrap()
    }

    #[builder]
    pub async fn playlist(
        &self,
        #[builder(into)] created_by: String,
        #[builder(default)] songs: Vec<String>,
        #[builder(default)] private: bool,
        #[builder(default)] contributors: Vec<String>,
    ) -> Playlist {
        self.database()
            .insert(Playlist {
                id: String::new(),
                name: Faker.fake(),
                created_by,
                songs,
                private,
                followers: vec![],
                contributors,
            })
            .await
            .unwrap()
    }
}
