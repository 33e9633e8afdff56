use cadence_api::history::History;
use cadence_api::playlist::Playlist;
use cadence_api::song::Song;

use super::{Data, Entity, users};
use crate::Error;

pub trait Table: Clone + Send + Sync + 'static {
    const ENTITY: Entity;

    fn id(&self) -> &str;
    fn id_mut(&mut self) -> &mut String;

    fn rows(data: &Data) -> &Vec<Self>;
    fn rows_mut(data: &mut Data) -> &mut Vec<Self>;
}

pub fn insert<T: Table>(rows: &mut Vec<T>, mut row: T) -> Result<T, Error> {
    if row.id().is_empty() {
        *row.id_mut() = uuid::Uuid::new_v4().to_string();
    } else if rows.iter().any(|existing| existing.id() == row.id()) {
        return Err(Error::AlreadyExists(T::ENTITY));
    }
    rows.push(row.clone());
    Ok(row)
}

pub fn get<'a, T: Table>(rows: &'a [T], id: &str) -> Result<&'a T, Error> {
    rows.iter().find(|row| row.id() == id).ok_or(Error::NotFound(T::ENTITY))
}

pub fn update<T: Table>(
    rows: &mut [T],
    id: &str,
    mutate: impl FnOnce(&mut T) -> Result<(), Error>,
) -> Result<T, Error> {
    let row = rows.iter_mut().find(|row| row.id() == id).ok_or(Error::NotFound(T::ENTITY))?;
    let mut updated = row.clone();
    mutate(&mut updated)?;
    // The id is owned by the store.
    id.clone_into(updated.id_mut());
    *row = updated.clone();
    Ok(updated)
}

pub fn delete<T: Table>(rows: &mut Vec<T>, id: &str) -> Result<T, Error> {
    let index = rows.iter().position(|row| row.id() == id).ok_or(Error::NotFound(T::ENTITY))?;
    Ok(rows.remove(index))
}

macro_rules! impl_table {
    ($ty:ty, $entity:ident, $field:ident) => {
        impl Table for $ty {
            const ENTITY: Entity = Entity::$entity;

            fn id(&self) -> &str {
                &self.id
            }

            fn id_mut(&mut self) -> &mut String {
                &mut self.id
            }

            fn rows(data: &Data) -> &Vec<Self> {
                &data.$field
            }

            fn rows_mut(data: &mut Data) -> &mut Vec<Self> {
                &mut data.$field
            }
        }
    };
}

impl_table!(Song, Song, songs);
impl_table!(users::User, User, users);
impl_table!(History, History, histories);
impl_table!(Playlist, Playlist, playlists);
