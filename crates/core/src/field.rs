// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Track fields that search expressions can constrain.
//!
//! [`Field::for_name`] maps user-typed names (`artist`, `bpm`, `size`, ...)
//! to canonical fields, and [`Field::kind`] tells the compiler how a value
//! for that field is interpreted.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A canonical track attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Url,
    Title,
    Artist,
    AlbumArtist,
    Album,
    Composer,
    Genre,
    Year,
    Comment,
    Label,
    TrackNumber,
    DiscNumber,
    Bpm,
    Length,
    Bitrate,
    SampleRate,
    FileSize,
    Format,
    Score,
    Rating,
    PlayCount,
    FirstPlayed,
    LastPlayed,
    Created,
    Modified,
}

/// How the compiler interprets a value for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text, substring or anchored match.
    Text,
    /// Plain integer.
    Number,
    /// Star rating as typed by the user, stored at twice the scale.
    Rating,
    /// Seconds as typed, stored in milliseconds.
    Length,
    /// Megabytes as typed, stored in bytes.
    FileSize,
    /// File type name, stored as a [`FileType`](crate::FileType) discriminant.
    Format,
    /// Absolute or relative date, stored as a Unix timestamp.
    Date,
}

impl Field {
    /// Every field, in declaration order.
    pub const ALL: [Field; 25] = [
        Field::Url,
        Field::Title,
        Field::Artist,
        Field::AlbumArtist,
        Field::Album,
        Field::Composer,
        Field::Genre,
        Field::Year,
        Field::Comment,
        Field::Label,
        Field::TrackNumber,
        Field::DiscNumber,
        Field::Bpm,
        Field::Length,
        Field::Bitrate,
        Field::SampleRate,
        Field::FileSize,
        Field::Format,
        Field::Score,
        Field::Rating,
        Field::PlayCount,
        Field::FirstPlayed,
        Field::LastPlayed,
        Field::Created,
        Field::Modified,
    ];

    /// Fields searched by an element without a `field:` qualifier, in the
    /// order the filters are emitted.
    pub const DEFAULT_TEXT: [Field; 9] = [
        Field::Title,
        Field::Url,
        Field::Album,
        Field::Artist,
        Field::AlbumArtist,
        Field::Composer,
        Field::Genre,
        Field::Year,
        Field::Label,
    ];

    /// Returns the canonical short name, the form shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Url => "url",
            Field::Title => "title",
            Field::Artist => "artist",
            Field::AlbumArtist => "albumartist",
            Field::Album => "album",
            Field::Composer => "composer",
            Field::Genre => "genre",
            Field::Year => "year",
            Field::Comment => "comment",
            Field::Label => "label",
            Field::TrackNumber => "tracknumber",
            Field::DiscNumber => "discnumber",
            Field::Bpm => "bpm",
            Field::Length => "length",
            Field::Bitrate => "bitrate",
            Field::SampleRate => "samplerate",
            Field::FileSize => "filesize",
            Field::Format => "format",
            Field::Score => "score",
            Field::Rating => "rating",
            Field::PlayCount => "playcount",
            Field::FirstPlayed => "firstplayed",
            Field::LastPlayed => "lastplayed",
            Field::Created => "added",
            Field::Modified => "modified",
        }
    }

    /// Looks up a field by a user-typed name or alias, ignoring case.
    pub fn for_name(name: &str) -> Option<Field> {
        let field = match name.to_lowercase().as_str() {
            "url" | "filename" | "path" => Field::Url,
            "title" => Field::Title,
            "artist" => Field::Artist,
            "albumartist" | "album-artist" => Field::AlbumArtist,
            "album" => Field::Album,
            "composer" => Field::Composer,
            "genre" => Field::Genre,
            "year" => Field::Year,
            "comment" => Field::Comment,
            "label" => Field::Label,
            "tracknumber" | "track" => Field::TrackNumber,
            "discnumber" | "disc" => Field::DiscNumber,
            "bpm" => Field::Bpm,
            "length" => Field::Length,
            "bitrate" => Field::Bitrate,
            "samplerate" => Field::SampleRate,
            "filesize" | "size" => Field::FileSize,
            "format" | "type" | "filetype" => Field::Format,
            "score" => Field::Score,
            "rating" => Field::Rating,
            "playcount" => Field::PlayCount,
            "firstplayed" | "first" => Field::FirstPlayed,
            "lastplayed" | "played" => Field::LastPlayed,
            "added" | "created" | "createdate" => Field::Created,
            "modified" => Field::Modified,
            _ => return None,
        };
        Some(field)
    }

    /// Returns the interpretation of values for this field.
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Url
            | Field::Title
            | Field::Artist
            | Field::AlbumArtist
            | Field::Album
            | Field::Composer
            | Field::Genre
            | Field::Comment
            | Field::Label => FieldKind::Text,
            Field::Year
            | Field::TrackNumber
            | Field::DiscNumber
            | Field::Bpm
            | Field::Bitrate
            | Field::SampleRate
            | Field::Score
            | Field::PlayCount => FieldKind::Number,
            Field::Rating => FieldKind::Rating,
            Field::Length => FieldKind::Length,
            Field::FileSize => FieldKind::FileSize,
            Field::Format => FieldKind::Format,
            Field::FirstPlayed | Field::LastPlayed | Field::Created | Field::Modified => {
                FieldKind::Date
            }
        }
    }

    /// Returns the mask bit a backend sets to declare support for this field.
    pub fn flag(&self) -> FilterMask {
        FilterMask::from_bits_truncate(1 << (*self as u32))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Field::for_name(s).ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Rating => "rating",
            FieldKind::Length => "length",
            FieldKind::FileSize => "filesize",
            FieldKind::Format => "format",
            FieldKind::Date => "date",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

bitflags! {
    /// The set of fields a query backend can filter on.
    ///
    /// Bit positions follow [`Field::ALL`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FilterMask: u32 {
        const URL = 1 << 0;
        const TITLE = 1 << 1;
        const ARTIST = 1 << 2;
        const ALBUM_ARTIST = 1 << 3;
        const ALBUM = 1 << 4;
        const COMPOSER = 1 << 5;
        const GENRE = 1 << 6;
        const YEAR = 1 << 7;
        const COMMENT = 1 << 8;
        const LABEL = 1 << 9;
        const TRACK_NUMBER = 1 << 10;
        const DISC_NUMBER = 1 << 11;
        const BPM = 1 << 12;
        const LENGTH = 1 << 13;
        const BITRATE = 1 << 14;
        const SAMPLE_RATE = 1 << 15;
        const FILE_SIZE = 1 << 16;
        const FORMAT = 1 << 17;
        const SCORE = 1 << 18;
        const RATING = 1 << 19;
        const PLAY_COUNT = 1 << 20;
        const FIRST_PLAYED = 1 << 21;
        const LAST_PLAYED = 1 << 22;
        const CREATED = 1 << 23;
        const MODIFIED = 1 << 24;
    }
}

impl FilterMask {
    /// Returns true if the mask includes `field`.
    pub fn supports(&self, field: Field) -> bool {
        self.contains(field.flag())
    }

    /// Builds a mask from field names, as written in configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] for the first name that is not a field.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().try_fold(FilterMask::empty(), |mask, name| {
            let field: Field = name.as_ref().parse()?;
            Ok(mask | field.flag())
        })
    }

    /// The fields in this mask, in [`Field::ALL`] order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(move |f| self.supports(*f))
    }
}

impl Default for FilterMask {
    fn default() -> Self {
        FilterMask::all()
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
