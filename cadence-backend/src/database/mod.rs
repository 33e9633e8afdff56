pub mod seed;
pub mod table;
pub mod users;

use std::sync::Arc;

use cadence_api::history::History;
use cadence_api::playlist::Playlist;
use cadence_api::song::Song;
pub use table::Table;
use tokio::sync::RwLock;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Entity {
    Song,
    User,
    History,
    Playlist,
}

/// Every collection of the store, each kept in insertion order.
#[derive(Debug, Default, Clone)]
pub struct Data {
    pub songs: Vec<Song>,
    pub users: Vec<users::User>,
    pub histories: Vec<History>,
    pub playlists: Vec<Playlist>,
}

#[derive(Debug, Clone, Default)]
pub struct Database {
    data: Arc<RwLock<Data>>,
}

impl Database {
    pub fn new(data: Data) -> Self {
        Self { data: Arc::new(RwLock::new(data)) }
    }

    pub async fn read<R>(&self, f: impl FnOnce(&Data) -> R) -> R {
        f(&*self.data.read().await)
    }

    pub async fn write<R>(&self, f: impl FnOnce(&mut Data) -> R) -> R {
        f(&mut *self.data.write().await)
    }

    pub async fn insert<T: Table>(&self, row: T) -> Result<T, Error> {
        self.write(|data| table::insert(T::rows_mut(data), row)).await
    }

    pub async fn get<T: Table>(&self, id: &str) -> Result<T, Error> {
        self.read(|data| table::get(T::rows(data), id).cloned()).await
    }

    pub async fn all<T: Table>(&self) -> Vec<T> {
        self.read(|data| T::rows(data).clone()).await
    }

    pub async fn filter<T: Table>(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.read(|data| T::rows(data).iter().filter(|row| predicate(row)).cloned().collect())
            .await
    }

    /// Apply `mutate` to a copy of the row and store it only if the mutation succeeds.
    pub async fn update<T: Table>(
        &self,
        id: &str,
        mutate: impl FnOnce(&mut T) -> Result<(), Error>,
    ) -> Result<T, Error> {
        self.write(|data| table::update(T::rows_mut(data), id, mutate)).await
    }

    pub async fn delete<T: Table>(&self, id: &str) -> Result<T, Error> {
        self.write(|data| table::delete(T::rows_mut(data), id)).await
    }

    pub async fn delete_where<T: Table>(&self, predicate: impl Fn(&T) -> bool) -> usize {
        self.write(|data| {
            let rows = T::rows_mut(data);
            let len = rows.len();
            rows.retain(|row| !predicate(row));
            len - rows.len()
        })
        .await
    }
}
