//! Data model: release tags, languages and the media entities.
//!
//! Tags ([`Quality`], [`Source`], [`Codec`], [`MiscTag`]) are bundled into
//! [`Metadata`], which every entity carries. The entities themselves
//! ([`Movie`], [`Episode`], [`Subtitle`]) share the [`MediaItem`] behaviour
//! and are unified by the [`Media`] sum type.

mod codec;
mod episode;
pub(crate) mod language;
mod media;
mod metadata;
mod misc;
mod movie;
mod quality;
#[cfg(feature = "serde")]
mod serialize;
mod subtitle;

pub use codec::Codec;
pub use episode::Episode;
pub use language::Language;
pub use media::{Media, MediaItem, MediaKind};
pub use metadata::{Metadata, Tag};
pub use misc::{Misc, MiscTag};
pub use movie::Movie;
pub use quality::{Quality, Source};
pub use subtitle::Subtitle;
