//! Quality-related tags: video resolution and release source.

use crate::ParseError;

/// Video quality (resolution) of the release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quality {
    /// 360p
    _360p,
    /// 480p SD
    _480p,
    /// 576p PAL SD
    _576p,
    /// 720p HD
    _720p,
    /// 1080p Full HD
    _1080p,
    /// 1440p QHD
    _1440p,
    /// 2160p Ultra HD (4K)
    _2160p,
    /// 4320p (8K)
    _4320p,
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quality::_360p => write!(f, "360p"),
            Quality::_480p => write!(f, "480p"),
            Quality::_576p => write!(f, "576p"),
            Quality::_720p => write!(f, "720p"),
            Quality::_1080p => write!(f, "1080p"),
            Quality::_1440p => write!(f, "1440p"),
            Quality::_2160p => write!(f, "2160p"),
            Quality::_4320p => write!(f, "4320p"),
        }
    }
}

impl std::str::FromStr for Quality {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Interlaced markers describe the same resolution.
        let lower = s.to_lowercase();
        let lower = lower.strip_suffix('i').map_or(lower.as_str(), |r| r);
        match lower.trim_end_matches('p') {
            "360" => Ok(Quality::_360p),
            "480" => Ok(Quality::_480p),
            "576" => Ok(Quality::_576p),
            "720" => Ok(Quality::_720p),
            "1080" => Ok(Quality::_1080p),
            "1440" => Ok(Quality::_1440p),
            "2160" | "4k" => Ok(Quality::_2160p),
            "4320" | "8k" => Ok(Quality::_4320p),
            _ => Err(ParseError::invalid_tag("quality", s)),
        }
    }
}

/// Source/origin of the media release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// Blu-ray disc rip
    BluRay,
    /// Blu-ray rip (re-encoded)
    BdRip,
    /// Web download
    WebDl,
    /// Web rip
    WebRip,
    /// Bare WEB marker
    Web,
    /// HDTV broadcast capture
    Hdtv,
    /// Pure digital source TV
    Pdtv,
    /// Standard definition TV
    Sdtv,
    /// DVD rip
    DvdRip,
    /// Full DVD
    Dvd,
    /// HD Rip (generic HD source)
    HdRip,
    /// Camera recording from theater
    Cam,
    /// HD camera recording from theater
    HdCam,
    /// Telesync
    Telesync,
    /// Screener copy
    Screener,
    /// VHS rip
    VhsRip,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::BluRay => write!(f, "BluRay"),
            Source::BdRip => write!(f, "BDRip"),
            Source::WebDl => write!(f, "WEB-DL"),
            Source::WebRip => write!(f, "WEBRip"),
            Source::Web => write!(f, "WEB"),
            Source::Hdtv => write!(f, "HDTV"),
            Source::Pdtv => write!(f, "PDTV"),
            Source::Sdtv => write!(f, "SDTV"),
            Source::DvdRip => write!(f, "DVDRip"),
            Source::Dvd => write!(f, "DVD"),
            Source::HdRip => write!(f, "HDRip"),
            Source::Cam => write!(f, "CAM"),
            Source::HdCam => write!(f, "HDCAM"),
            Source::Telesync => write!(f, "TELESYNC"),
            Source::Screener => write!(f, "SCREENER"),
            Source::VhsRip => write!(f, "VHSRip"),
        }
    }
}

impl std::str::FromStr for Source {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bluray" | "blu-ray" => Ok(Source::BluRay),
            "bdrip" | "brrip" => Ok(Source::BdRip),
            "web-dl" | "webdl" => Ok(Source::WebDl),
            "webrip" | "web-rip" => Ok(Source::WebRip),
            "web" => Ok(Source::Web),
            "hdtv" => Ok(Source::Hdtv),
            "pdtv" => Ok(Source::Pdtv),
            "sdtv" => Ok(Source::Sdtv),
            "dvdrip" | "dvd-rip" => Ok(Source::DvdRip),
            "dvd" => Ok(Source::Dvd),
            "hdrip" | "hd-rip" => Ok(Source::HdRip),
            "cam" | "camrip" | "cam-rip" => Ok(Source::Cam),
            "hdcam" => Ok(Source::HdCam),
            "ts" | "telesync" | "hdts" => Ok(Source::Telesync),
            "scr" | "screener" | "dvdscr" => Ok(Source::Screener),
            "vhsrip" | "vhs-rip" => Ok(Source::VhsRip),
            _ => Err(ParseError::invalid_tag("source", s)),
        }
    }
}
