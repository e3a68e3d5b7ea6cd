//! JSON representations of the media entities.
//!
//! Tags serialize as their canonical strings and every entity carries its
//! identity under `id`.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{Episode, Media, MediaItem, Metadata, Movie, Subtitle};

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let misc: Vec<String> = self.misc().iter().map(ToString::to_string).collect();
        let mut state = serializer.serialize_struct("Metadata", 5)?;
        state.serialize_field("quality", &self.quality().map(|q| q.to_string()))?;
        state.serialize_field("source", &self.source().map(|s| s.to_string()))?;
        state.serialize_field("codec", &self.codec().map(|c| c.to_string()))?;
        state.serialize_field("group", self.group())?;
        state.serialize_field("misc", &misc)?;
        state.end()
    }
}

impl Serialize for Movie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Movie", 4)?;
        state.serialize_field("metadata", self.metadata())?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("year", &self.year())?;
        state.serialize_field("id", &self.identity())?;
        state.end()
    }
}

impl Serialize for Episode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Episode", 6)?;
        state.serialize_field("metadata", self.metadata())?;
        state.serialize_field("name", self.show())?;
        state.serialize_field("title", &self.title())?;
        state.serialize_field("season", &self.season())?;
        state.serialize_field("episode", &self.episode())?;
        state.serialize_field("id", &self.identity())?;
        state.end()
    }
}

impl Serialize for Subtitle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Subtitle", 5)?;
        state.serialize_field("media", self.target())?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("language", &self.to_string())?;
        state.serialize_field("hearing_impaired", &self.hearing_impaired())?;
        state.serialize_field("id", &self.identity())?;
        state.end()
    }
}

impl Serialize for Media {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Media::Movie(m) => m.serialize(serializer),
            Media::Episode(e) => e.serialize(serializer),
            Media::Subtitle(s) => s.serialize(serializer),
        }
    }
}
