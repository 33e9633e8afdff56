use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use cadence_api::history::History;
use cadence_api::history::most_played::MostPlayed;
use cadence_api::history::statistics::Statistics;
use cadence_api::song::Song;
use itertools::Itertools;

/// Count occurrences and order them by count, descending. Ties keep the order in which
/// each key was first seen.
fn rank<K: Copy + Eq + Hash>(keys: impl IntoIterator<Item = K>) -> Vec<(K, u32)> {
    let mut counts: Vec<(K, u32)> = Vec::new();
    let mut positions: HashMap<K, usize> = HashMap::new();
    for key in keys {
        match positions.entry(key) {
            Entry::Occupied(entry) => counts[*entry.get()].1 += 1,
            Entry::Vacant(entry) => {
                entry.insert(counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts.sort_by(|(_, a), (_, b)| b.cmp(a));
    counts
}

pub fn most_played(histories: &[History]) -> Vec<MostPlayed> {
    rank(histories.iter().map(|history| history.song_id.as_str()))
        .into_iter()
        .map(|(song_id, times_played)| MostPlayed { song_id: song_id.to_owned(), times_played })
        .collect()
}

fn index(songs: &[Song]) -> HashMap<&str, &Song> {
    songs.iter().map(|song| (song.id.as_str(), song)).collect()
}

fn top_genre<'a>(histories: &[History], songs: &HashMap<&str, &'a Song>) -> Option<&'a str> {
    rank(
        histories
            .iter()
            .filter_map(|history| songs.get(history.song_id.as_str()).copied())
            .map(|song| song.genre.as_str()),
    )
    .into_iter()
    .next()
    .map(|(genre, _)| genre)
}

pub fn statistics(histories: &[History], songs: &[Song]) -> Statistics {
    let songs = index(songs);

    let time_played = histories
        .iter()
        .filter_map(|history| songs.get(history.song_id.as_str()))
        .map(|song| u64::from(song.duration))
        .sum();
    let most_played_genre = top_genre(histories, &songs).map(str::to_owned);
    let most_played_song = most_played(histories)
        .into_iter()
        .find_map(|played| songs.get(played.song_id.as_str()).map(|song| song.title.clone()));

    Statistics { time_played, most_played_genre, most_played_song }
}

pub fn hot<'a>(
    songs: impl IntoIterator<Item = &'a Song>,
    genre: Option<&str>,
    limit: usize,
) -> Vec<Song> {
    songs
        .into_iter()
        .filter(|song| genre.is_none_or(|genre| song.is_genre(genre)))
        .sorted_by(|a, b| b.times_ever_played.cmp(&a.times_ever_played))
        .take(limit)
        .cloned()
        .collect()
}

/// Unplayed songs of the favourite genre first, then the rest of the unplayed catalogue,
/// each group ordered by global popularity.
pub fn recommendations(histories: &[History], songs: &[Song], limit: usize) -> Vec<Song> {
    let played: HashSet<_> = histories.iter().map(|history| history.song_id.as_str()).collect();
    let genre = top_genre(histories, &index(songs));

    let (favourite, rest): (Vec<_>, Vec<_>) = hot(
        songs.iter().filter(|song| !played.contains(song.id.as_str())),
        None,
        usize::MAX,
    )
    .into_iter()
    .partition(|song| genre.is_some_and(|genre| song.is_genre(genre)));

    favourite.into_iter().chain(rest).take(limit).collect()
}
