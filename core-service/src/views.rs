//! Read models for song and album pages

use core_library::{Album, Lyric, Song, SongDetails};
use core_search::highlight::{self, Segment};
use serde::Serialize;

/// Lines shown either side of the highlighted line in a preview
pub const PREVIEW_CONTEXT_LINES: usize = 1;

/// One lyric line prepared for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongLine {
    pub lyric_id: i64,
    pub line_number: i64,
    pub text: String,
    /// `text` split around occurrences of the page query
    pub segments: Vec<Segment>,
    /// This is the line the user navigated from
    pub highlighted: bool,
}

/// A song with its lyrics, optionally focused on one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongView {
    pub song: SongDetails,
    pub lines: Vec<SongLine>,
    /// Set only when the requested lyric belongs to this song
    pub highlight_id: Option<i64>,
    pub query: Option<String>,
}

impl SongView {
    /// Assemble the page from repository rows
    ///
    /// A `highlight` id that is not one of this song's lines is dropped.
    /// An empty `query` is treated as no query.
    pub fn new(
        song: SongDetails,
        lyrics: Vec<Lyric>,
        highlight: Option<i64>,
        query: Option<&str>,
    ) -> Self {
        let query = query.filter(|q| !q.is_empty());
        let highlight_id = highlight.filter(|id| lyrics.iter().any(|l| l.lyric_id == *id));

        let lines = lyrics
            .into_iter()
            .map(|lyric| SongLine {
                segments: highlight::segments(&lyric.text, query.unwrap_or("")),
                highlighted: highlight_id == Some(lyric.lyric_id),
                lyric_id: lyric.lyric_id,
                line_number: lyric.line_number,
                text: lyric.text,
            })
            .collect();

        Self {
            song,
            lines,
            highlight_id,
            query: query.map(str::to_string),
        }
    }

    pub fn highlighted_line(&self) -> Option<&SongLine> {
        self.highlight_id
            .and_then(|id| self.lines.iter().find(|line| line.lyric_id == id))
    }

    /// A short window of lines for link previews
    ///
    /// Centred on the highlighted line with `context` lines either side, or
    /// the first `2 * context + 1` lines when nothing is highlighted.
    pub fn excerpt(&self, context: usize) -> Excerpt<'_> {
        let (start, end) = match self
            .highlight_id
            .and_then(|id| self.lines.iter().position(|line| line.lyric_id == id))
        {
            Some(index) => (
                index.saturating_sub(context),
                (index + context + 1).min(self.lines.len()),
            ),
            None => (0, (2 * context + 1).min(self.lines.len())),
        };

        Excerpt {
            lines: &self.lines[start..end],
            more_before: start > 0,
            more_after: end < self.lines.len(),
        }
    }

    pub fn preview(&self) -> Excerpt<'_> {
        self.excerpt(PREVIEW_CONTEXT_LINES)
    }
}

/// A contiguous slice of a song's lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Excerpt<'a> {
    pub lines: &'a [SongLine],
    /// Lines were omitted above the excerpt
    pub more_before: bool,
    /// Lines were omitted below the excerpt
    pub more_after: bool,
}

/// An album with its track listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumView {
    pub album: Album,
    pub songs: Vec<Song>,
}

impl AlbumView {
    pub fn explicit_songs(&self) -> usize {
        self.songs.iter().filter(|song| song.explicit).count()
    }
}
