/// Album configuration: the fixed content the book reveals
///
/// An `Album` bundles the captioned memories together with the text on the
/// right-hand pages (greeting, flip hint, closing message). It is built once
/// at startup and never mutated afterwards. A reader can replace the built-in
/// album by dropping a JSON file into their config directory; anything wrong
/// with that file falls back to the built-in album with a warning.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One captioned photo, revealed on the left page after a flip.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Memory {
    /// Path to the photo file
    pub image: String,
    /// Caption overlaid along the bottom of the photo
    pub caption: String,
}

/// Ways an album file can be unusable.
#[derive(Debug, Error)]
pub enum AlbumError {
    #[error("album has no memories")]
    Empty,
    #[error("memory {index} has a blank {field}")]
    BlankField { index: usize, field: &'static str },
    #[error("failed to read album file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse album file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The complete static content of the book.
///
/// Every text field is optional in the album file and inherits the built-in
/// wording when absent; only `memories` must be supplied.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Album {
    /// Headline on the untouched first page
    #[serde(default = "defaults::greeting_heading")]
    pub greeting_heading: String,
    /// Line under the headline
    #[serde(default = "defaults::greeting_subtext")]
    pub greeting_subtext: String,
    /// Bottom-right nudge shown between memories
    #[serde(default = "defaults::hint")]
    pub hint: String,
    /// Heading once every memory is revealed
    #[serde(default = "defaults::closing_heading")]
    pub closing_heading: String,
    /// Sign-off under the closing heading
    #[serde(default = "defaults::closing_message")]
    pub closing_message: String,
    /// The ordered memories, one per flip
    pub memories: Vec<Memory>,
}

mod defaults {
    pub fn greeting_heading() -> String {
        "Happy Birthday, Wifey!".to_string()
    }

    pub fn greeting_subtext() -> String {
        "Flip the page to begin your little love story.".to_string()
    }

    pub fn hint() -> String {
        "Flip for the next surprise".to_string()
    }

    pub fn closing_heading() -> String {
        "All done!".to_string()
    }

    pub fn closing_message() -> String {
        "I love you, today and always.".to_string()
    }
}

impl Album {
    /// The album compiled into the binary: three memories and the default
    /// page text. Photo paths are relative to the working directory so the
    /// pictures can be swapped without rebuilding.
    pub fn builtin() -> Self {
        Album {
            greeting_heading: defaults::greeting_heading(),
            greeting_subtext: defaults::greeting_subtext(),
            hint: defaults::hint(),
            closing_heading: defaults::closing_heading(),
            closing_message: defaults::closing_message(),
            memories: vec![
                Memory {
                    image: "photos/sunrise.jpg".to_string(),
                    caption: "The way your smile lights up every room is my favorite kind of sunrise."
                        .to_string(),
                },
                Memory {
                    image: "photos/adventure.jpg".to_string(),
                    caption: "Every little adventure with you becomes a forever memory in my heart."
                        .to_string(),
                },
                Memory {
                    image: "photos/hello.jpg".to_string(),
                    caption: "You are my safe place, my favorite person, and my happiest hello."
                        .to_string(),
                },
            ],
        }
    }

    /// Number of memories, which is also the number of flips the book allows.
    pub fn memory_count(&self) -> usize {
        self.memories.len()
    }

    /// Convert to JSON (pretty-printed, ready to drop into the config dir)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse and validate an album from JSON
    pub fn from_json(json: &str) -> Result<Self, AlbumError> {
        let album: Album = serde_json::from_str(json)?;
        album.validate()?;
        Ok(album)
    }

    /// Content is trusted, so validation stops at "nothing is blank".
    pub fn validate(&self) -> Result<(), AlbumError> {
        if self.memories.is_empty() {
            return Err(AlbumError::Empty);
        }
        for (index, memory) in self.memories.iter().enumerate() {
            if memory.image.trim().is_empty() {
                return Err(AlbumError::BlankField { index, field: "image" });
            }
            if memory.caption.trim().is_empty() {
                return Err(AlbumError::BlankField { index, field: "caption" });
            }
        }
        Ok(())
    }

    /// Where a user album override lives:
    /// - Linux: ~/.config/flip-book/album.json
    /// - macOS: ~/Library/Application Support/flip-book/album.json
    /// - Windows: %APPDATA%\flip-book\album.json
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("flip-book");
        path.push("album.json");
        Some(path)
    }

    /// Read and validate an album file.
    pub fn load(path: &Path) -> Result<Self, AlbumError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The album the book opens with: the user override when present and
    /// well-formed, the built-in one otherwise.
    pub fn load_or_default() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match Self::load(&path) {
                    Ok(album) => {
                        println!("📂 Loaded album from {}", path.display());
                        return album;
                    }
                    Err(e) => {
                        eprintln!("⚠️  Ignoring album at {}: {}", path.display(), e);
                    }
                }
            }
        }
        Album::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_album_is_valid() {
        let album = Album::builtin();
        assert_eq!(album.memory_count(), 3);
        assert!(album.validate().is_ok());
    }

    #[test]
    fn test_blank_caption_is_rejected() {
        let mut album = Album::builtin();
        album.memories[1].caption = "   ".to_string();
        assert!(matches!(
            album.validate(),
            Err(AlbumError::BlankField { index: 1, field: "caption" })
        ));
    }

    #[test]
    fn test_empty_album_is_rejected() {
        let mut album = Album::builtin();
        album.memories.clear();
        assert!(matches!(album.validate(), Err(AlbumError::Empty)));
    }

    #[test]
    fn test_json_round_trip() {
        let album = Album::builtin();
        let json = album.to_json().unwrap();
        let restored = Album::from_json(&json).unwrap();
        assert_eq!(album, restored);
    }

    #[test]
    fn test_partial_file_inherits_builtin_text() {
        let json = r#"{ "memories": [ { "image": "us.jpg", "caption": "hello" } ] }"#;
        let album = Album::from_json(json).unwrap();
        assert_eq!(album.greeting_heading, Album::builtin().greeting_heading);
        assert_eq!(album.hint, Album::builtin().hint);
        assert_eq!(album.memory_count(), 1);
    }

    #[test]
    fn test_blank_image_in_file_is_rejected() {
        let json = r#"{ "memories": [ { "image": "", "caption": "hello" } ] }"#;
        assert!(Album::from_json(json).is_err());
    }
}
