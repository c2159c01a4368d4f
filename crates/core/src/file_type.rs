// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Audio file types, as matched by the `format:` field.
//!
//! Backends store the type as an integer, so the discriminants are stable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A known audio container or codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    #[default]
    Unknown = 0,
    Mp3 = 1,
    Ogg = 2,
    Flac = 3,
    Mp4 = 4,
    Wma = 5,
    Aiff = 6,
    Mpc = 7,
    TrueAudio = 8,
    Wav = 9,
    WavPack = 10,
    M4a = 11,
    M4v = 12,
    Mod = 13,
    S3m = 14,
    It = 15,
    Xm = 16,
    Spx = 17,
    Opus = 18,
}

impl FileType {
    /// Every known type, excluding [`FileType::Unknown`].
    pub const KNOWN: [FileType; 18] = [
        FileType::Mp3,
        FileType::Ogg,
        FileType::Flac,
        FileType::Mp4,
        FileType::Wma,
        FileType::Aiff,
        FileType::Mpc,
        FileType::TrueAudio,
        FileType::Wav,
        FileType::WavPack,
        FileType::M4a,
        FileType::M4v,
        FileType::Mod,
        FileType::S3m,
        FileType::It,
        FileType::Xm,
        FileType::Spx,
        FileType::Opus,
    ];

    /// Returns the extension-style name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Unknown => "unknown",
            FileType::Mp3 => "mp3",
            FileType::Ogg => "ogg",
            FileType::Flac => "flac",
            FileType::Mp4 => "mp4",
            FileType::Wma => "wma",
            FileType::Aiff => "aiff",
            FileType::Mpc => "mpc",
            FileType::TrueAudio => "tta",
            FileType::Wav => "wav",
            FileType::WavPack => "wv",
            FileType::M4a => "m4a",
            FileType::M4v => "m4v",
            FileType::Mod => "mod",
            FileType::S3m => "s3m",
            FileType::It => "it",
            FileType::Xm => "xm",
            FileType::Spx => "spx",
            FileType::Opus => "opus",
        }
    }

    /// Looks up a type by name, ignoring case. Unrecognized names map to
    /// [`FileType::Unknown`].
    pub fn for_name(name: &str) -> FileType {
        let lower = name.to_lowercase();
        FileType::KNOWN
            .into_iter()
            .find(|t| t.as_str() == lower)
            .unwrap_or_default()
    }

    /// The integer a backend stores for this type.
    pub fn code(&self) -> i64 {
        *self as i64
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "file_type_tests.rs"]
mod tests;
