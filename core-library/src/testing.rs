//! Test fixtures for seeding a corpus database
//!
//! Available to this crate's tests and, through the `test-utils` feature, to
//! downstream test suites.

use crate::Result;
use sqlx::SqlitePool;

/// An album to seed, with its songs
#[derive(Debug, Clone)]
pub struct FixtureAlbum {
    pub id: i64,
    pub name: String,
    pub explicit: bool,
    pub songs: Vec<FixtureSong>,
}

impl FixtureAlbum {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            explicit: false,
            songs: Vec::new(),
        }
    }

    pub fn explicit(mut self, explicit: bool) -> Self {
        self.explicit = explicit;
        self
    }

    pub fn with_songs(mut self, songs: Vec<FixtureSong>) -> Self {
        self.songs = songs;
        self
    }
}

/// A song to seed; lines are numbered from 1 in order
#[derive(Debug, Clone)]
pub struct FixtureSong {
    pub id: i64,
    pub name: String,
    pub song_number: i64,
    pub explicit: bool,
    pub lines: Vec<String>,
}

impl FixtureSong {
    pub fn new(id: i64, name: &str, song_number: i64, lines: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            song_number,
            explicit: false,
            lines: lines.iter().map(|line| line.to_string()).collect(),
        }
    }

    pub fn explicit(mut self, explicit: bool) -> Self {
        self.explicit = explicit;
        self
    }
}

/// Lyric id assigned to `line_number` of `song_id` by [`seed_corpus`]
pub fn fixture_lyric_id(song_id: i64, line_number: i64) -> i64 {
    song_id * 1000 + line_number
}

/// Insert albums, songs and lyric lines into a migrated database
pub async fn seed_corpus(pool: &SqlitePool, albums: &[FixtureAlbum]) -> Result<()> {
    for album in albums {
        sqlx::query("INSERT INTO albums (id, name, explicit) VALUES (?, ?, ?)")
            .bind(album.id)
            .bind(&album.name)
            .bind(album.explicit)
            .execute(pool)
            .await?;

        for song in &album.songs {
            sqlx::query(
                "INSERT INTO songs (id, name, album_id, song_number, explicit) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(song.id)
            .bind(&song.name)
            .bind(album.id)
            .bind(song.song_number)
            .bind(song.explicit)
            .execute(pool)
            .await?;

            for (index, line) in song.lines.iter().enumerate() {
                let line_number = index as i64 + 1;
                sqlx::query(
                    "INSERT INTO lyrics (id, song_id, line_number, lyric_text) VALUES (?, ?, ?, ?)",
                )
                .bind(fixture_lyric_id(song.id, line_number))
                .bind(song.id)
                .bind(line_number)
                .bind(line)
                .execute(pool)
                .await?;
            }
        }
    }

    Ok(())
}

/// A small two-album corpus covering every match mode
pub fn sample_corpus() -> Vec<FixtureAlbum> {
    vec![
        FixtureAlbum::new(1, "Morning Tapes").with_songs(vec![
            FixtureSong::new(
                1,
                "Hello World",
                1,
                &[
                    "Hello World, are you listening",
                    "I am cold today",
                    "walking the coldly lit street",
                ],
            ),
            FixtureSong::new(
                2,
                "Pattern Games",
                2,
                &["a.b*c", "aXbYc is not the same", "dance until the morning"],
            ),
        ]),
        FixtureAlbum::new(2, "Night Letters").explicit(true).with_songs(vec![
            FixtureSong::new(
                3,
                "Letters",
                1,
                &[
                    "hello again my old friend",
                    "HELLO from the other room",
                    "Cold coffee on the table",
                ],
            )
            .explicit(true),
            FixtureSong::new(
                4,
                "Last Call",
                2,
                &["the last call of the evening", "we said hello and goodbye"],
            ),
        ]),
    ]
}
