//! Video codec tag.

use crate::ParseError;

/// Video codec or encoder named in the release.
///
/// Encoder names (x264) and standard names (H.264) are kept apart because
/// release groups use them to signal different things.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    /// x264 encoder
    X264,
    /// x265 encoder
    X265,
    /// H.264 / AVC
    H264,
    /// H.265 / HEVC
    H265,
    /// XviD
    Xvid,
    /// DivX
    Divx,
    /// AV1
    Av1,
    /// VP9
    Vp9,
}

impl std::fmt::Display for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Codec::X264 => write!(f, "x264"),
            Codec::X265 => write!(f, "x265"),
            Codec::H264 => write!(f, "H.264"),
            Codec::H265 => write!(f, "H.265"),
            Codec::Xvid => write!(f, "XviD"),
            Codec::Divx => write!(f, "DivX"),
            Codec::Av1 => write!(f, "AV1"),
            Codec::Vp9 => write!(f, "VP9"),
        }
    }
}

impl std::str::FromStr for Codec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x264" => Ok(Codec::X264),
            "x265" => Ok(Codec::X265),
            "h264" | "h.264" | "avc" => Ok(Codec::H264),
            "h265" | "h.265" | "hevc" => Ok(Codec::H265),
            "xvid" => Ok(Codec::Xvid),
            "divx" => Ok(Codec::Divx),
            "av1" => Ok(Codec::Av1),
            "vp9" => Ok(Codec::Vp9),
            _ => Err(ParseError::invalid_tag("codec", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_aliases() {
        assert_eq!("HEVC".parse::<Codec>().unwrap(), Codec::H265);
        assert_eq!("h264".parse::<Codec>().unwrap(), Codec::H264);
        assert_eq!("X264".parse::<Codec>().unwrap(), Codec::X264);
        assert!("mpeg2".parse::<Codec>().is_err());
    }

    #[test]
    fn codec_display() {
        assert_eq!(Codec::H264.to_string(), "H.264");
        assert_eq!(Codec::Xvid.to_string(), "XviD");
    }
}
