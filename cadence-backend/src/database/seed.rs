use cadence_api::history::History;
use cadence_api::playlist::Playlist;
use cadence_api::song::Song;
use time::Duration;
use time::macros::datetime;

use super::{Data, users};

fn song(id: &str, title: &str, artist: &str, genre: &str, duration: u32, played: u32) -> Song {
    Song {
        id: id.to_owned(),
        title: title.to_owned(),
        artist: artist.to_owned(),
        genre: genre.to_owned(),
        duration,
        times_ever_played: played,
    }
}

fn user(id: &str, name: &str, email: &str, password: &str) -> users::User {
    users::User {
        id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        history_tracking: true,
    }
}

fn playlist(id: &str, name: &str, created_by: &str, songs: &[&str], private: bool) -> Playlist {
    Playlist {
        id: id.to_owned(),
        name: name.to_owned(),
        created_by: created_by.to_owned(),
        songs: songs.iter().map(|&song| song.to_owned()).collect(),
        private,
        followers: vec![],
        contributors: vec![],
    }
}

pub fn data() -> Data {
    let songs = vec![
        song("1", "Peanut", "Spongebob", "Rock", 45, 42),
        song("2", "Watermelon", "Spongebob", "MPB", 23, 30),
        song("3", "Apple", "Spongebob", "MPB", 78, 20),
        song("4", "Borboletas", "Victo e Leo", "MPB", 78, 12),
        song("5", "Faroeste Caboclo", "Legião Urbana", "MPB", 600, 0),
        song("6", "Anunciação", "Alceu Valença", "MPB", 78, 8),
        song("7", "Californication", "Red Hot Chili Peppers", "Rock", 78, 14),
        song("8", "Selvagem", "Legião Urbana", "MPB", 78, 5),
        song("9", "Many Men", "50 cent", "Rap", 78, 22),
        song("10", "Numa sala de reboco", "Luiz Gonzaga", "Forró", 78, 500),
        song("11", "Country roads", "John Dever", "Country", 78, 16),
        song("12", "abc", "def", "Country", 78, 1),
        song("13", "xyz", "Pip", "Country", 78, 0),
        song("14", "Umbrella", "Rihanna", "Pop", 78, 90),
        song("15", "Halo theme song", "Unknown", "Classical", 78, 50),
    ];

    let users = vec![
        user("1", "Alfonso", "alfonso@gmail.com", "123456"),
        user("2", "João", "joao@gmail.com", "789456"),
    ];

    let start = datetime!(2024-01-01 12:00 UTC);
    let plays =
        [("1", "2"), ("1", "2"), ("1", "2"), ("2", "3"), ("2", "1"), ("1", "2"), ("1", "3")];
    let histories = plays
        .into_iter()
        .zip(1i64..)
        .map(|((user_id, song_id), index)| History {
            id: index.to_string(),
            user_id: user_id.to_owned(),
            song_id: song_id.to_owned(),
            played_at: start + Duration::minutes(index),
        })
        .collect();

    let playlists = vec![
        playlist("1", "My Favorites", "1", &["1", "2", "3"], false),
        playlist("2", "Road Trip Playlist", "2", &["1", "2", "3"], false),
        playlist("3", "Chill Vibes", "1", &["2", "3"], false),
        playlist("4", "Workout Beats", "2", &["1", "3"], true),
        playlist("ce6f5c66-1967-4b21-9929-51ca7d652151", "Afternoon Sessions", "Pedro", &[], true),
        playlist("12345", "Breakfast and Furious", "999", &[], true),
    ];

    Data { songs, users, histories, playlists }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_unique_ids() {
        let data = data();
        assert!(data.songs.iter().map(|song| &song.id).all_unique());
        assert!(data.users.iter().map(|user| &user.id).all_unique());
        assert!(data.histories.iter().map(|history| &history.id).all_unique());
        assert!(data.playlists.iter().map(|playlist| &playlist.id).all_unique());
    }

    #[test]
    fn test_history_in_play_order() {
        let data = data();
        assert!(data.histories.iter().tuple_windows().all(|(a, b)| a.played_at < b.played_at));
    }
}
