//! Subtitle language table.

use crate::ParseError;

/// Language of a subtitle track.
///
/// Lookup accepts ISO 639-1 codes, ISO 639-2 terminology and bibliographic
/// codes, and the English language name, all case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    French,
    German,
    Spanish,
    Italian,
    Portuguese,
    Russian,
    Japanese,
    Korean,
    Chinese,
    Mandarin,
    Cantonese,
    Arabic,
    Hindi,
    Turkish,
    Polish,
    Dutch,
    Swedish,
    Norwegian,
    Danish,
    Finnish,
    Icelandic,
    Czech,
    Hungarian,
    Romanian,
    Bulgarian,
    Greek,
    Hebrew,
    Thai,
    Vietnamese,
    Indonesian,
    Malay,
    Filipino,
    Ukrainian,
    Croatian,
    Serbian,
    Slovenian,
    Slovak,
    Lithuanian,
    Latvian,
    Estonian,
    Bengali,
    Tamil,
    Telugu,
    Persian,
    Urdu,
    Catalan,
    Basque,
    Galician,
    Latin,
}

static LOOKUP: phf::Map<&'static str, Language> = phf::phf_map! {
    "en" => Language::English, "eng" => Language::English, "english" => Language::English,
    "fr" => Language::French, "fra" => Language::French, "fre" => Language::French, "french" => Language::French,
    "de" => Language::German, "deu" => Language::German, "ger" => Language::German, "german" => Language::German,
    "es" => Language::Spanish, "spa" => Language::Spanish, "spanish" => Language::Spanish,
    "it" => Language::Italian, "ita" => Language::Italian, "italian" => Language::Italian,
    "pt" => Language::Portuguese, "por" => Language::Portuguese, "portuguese" => Language::Portuguese,
    "ru" => Language::Russian, "rus" => Language::Russian, "russian" => Language::Russian,
    "ja" => Language::Japanese, "jpn" => Language::Japanese, "japanese" => Language::Japanese,
    "ko" => Language::Korean, "kor" => Language::Korean, "korean" => Language::Korean,
    "zh" => Language::Chinese, "zho" => Language::Chinese, "chi" => Language::Chinese, "chinese" => Language::Chinese,
    "cmn" => Language::Mandarin, "mandarin" => Language::Mandarin,
    "yue" => Language::Cantonese, "cantonese" => Language::Cantonese,
    "ar" => Language::Arabic, "ara" => Language::Arabic, "arabic" => Language::Arabic,
    "hi" => Language::Hindi, "hin" => Language::Hindi, "hindi" => Language::Hindi,
    "tr" => Language::Turkish, "tur" => Language::Turkish, "turkish" => Language::Turkish,
    "pl" => Language::Polish, "pol" => Language::Polish, "polish" => Language::Polish,
    "nl" => Language::Dutch, "nld" => Language::Dutch, "dut" => Language::Dutch, "dutch" => Language::Dutch,
    "sv" => Language::Swedish, "swe" => Language::Swedish, "swedish" => Language::Swedish,
    "no" => Language::Norwegian, "nor" => Language::Norwegian, "nb" => Language::Norwegian, "nob" => Language::Norwegian, "norwegian" => Language::Norwegian,
    "da" => Language::Danish, "dan" => Language::Danish, "danish" => Language::Danish,
    "fi" => Language::Finnish, "fin" => Language::Finnish, "finnish" => Language::Finnish,
    "is" => Language::Icelandic, "isl" => Language::Icelandic, "ice" => Language::Icelandic, "icelandic" => Language::Icelandic,
    "cs" => Language::Czech, "ces" => Language::Czech, "cze" => Language::Czech, "czech" => Language::Czech,
    "hu" => Language::Hungarian, "hun" => Language::Hungarian, "hungarian" => Language::Hungarian,
    "ro" => Language::Romanian, "ron" => Language::Romanian, "rum" => Language::Romanian, "romanian" => Language::Romanian,
    "bg" => Language::Bulgarian, "bul" => Language::Bulgarian, "bulgarian" => Language::Bulgarian,
    "el" => Language::Greek, "ell" => Language::Greek, "gre" => Language::Greek, "greek" => Language::Greek,
    "he" => Language::Hebrew, "heb" => Language::Hebrew, "hebrew" => Language::Hebrew,
    "th" => Language::Thai, "tha" => Language::Thai, "thai" => Language::Thai,
    "vi" => Language::Vietnamese, "vie" => Language::Vietnamese, "vietnamese" => Language::Vietnamese,
    "id" => Language::Indonesian, "ind" => Language::Indonesian, "indonesian" => Language::Indonesian,
    "ms" => Language::Malay, "msa" => Language::Malay, "may" => Language::Malay, "malay" => Language::Malay,
    "fil" => Language::Filipino, "tl" => Language::Filipino, "tgl" => Language::Filipino, "filipino" => Language::Filipino,
    "uk" => Language::Ukrainian, "ukr" => Language::Ukrainian, "ukrainian" => Language::Ukrainian,
    "hr" => Language::Croatian, "hrv" => Language::Croatian, "croatian" => Language::Croatian,
    "sr" => Language::Serbian, "srp" => Language::Serbian, "serbian" => Language::Serbian,
    "sl" => Language::Slovenian, "slv" => Language::Slovenian, "slovenian" => Language::Slovenian,
    "sk" => Language::Slovak, "slk" => Language::Slovak, "slo" => Language::Slovak, "slovak" => Language::Slovak,
    "lt" => Language::Lithuanian, "lit" => Language::Lithuanian, "lithuanian" => Language::Lithuanian,
    "lv" => Language::Latvian, "lav" => Language::Latvian, "latvian" => Language::Latvian,
    "et" => Language::Estonian, "est" => Language::Estonian, "estonian" => Language::Estonian,
    "bn" => Language::Bengali, "ben" => Language::Bengali, "bengali" => Language::Bengali,
    "ta" => Language::Tamil, "tam" => Language::Tamil, "tamil" => Language::Tamil,
    "te" => Language::Telugu, "tel" => Language::Telugu, "telugu" => Language::Telugu,
    "fa" => Language::Persian, "fas" => Language::Persian, "per" => Language::Persian, "persian" => Language::Persian, "farsi" => Language::Persian,
    "ur" => Language::Urdu, "urd" => Language::Urdu, "urdu" => Language::Urdu,
    "ca" => Language::Catalan, "cat" => Language::Catalan, "catalan" => Language::Catalan,
    "eu" => Language::Basque, "eus" => Language::Basque, "baq" => Language::Basque, "basque" => Language::Basque,
    "gl" => Language::Galician, "glg" => Language::Galician, "galician" => Language::Galician,
    "la" => Language::Latin, "lat" => Language::Latin, "latin" => Language::Latin,
};

/// Code used when a subtitle language could not be determined.
pub const UNDETERMINED_CODE: &str = "und";

/// Display name used when a subtitle language could not be determined.
pub const UNDETERMINED_NAME: &str = "Undetermined";

impl Language {
    /// Look a language up by code or name.
    ///
    /// A two-letter code with a region suffix (`pt-BR`, `en_US`) resolves to
    /// its base language.
    pub fn lookup(text: &str) -> Option<Language> {
        let lower = text.to_ascii_lowercase();
        if let Some(lang) = LOOKUP.get(lower.as_str()) {
            return Some(*lang);
        }
        let (base, region) = lower.split_once(['-', '_'])?;
        if base.len() == 2 && region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic())
        {
            return LOOKUP.get(base).copied();
        }
        None
    }

    /// Shortest standard code: ISO 639-1 where one exists, ISO 639-2/3 otherwise.
    pub fn code(&self) -> &'static str {
        self.entry().0
    }

    /// English display name.
    pub fn name(&self) -> &'static str {
        self.entry().1
    }

    fn entry(&self) -> (&'static str, &'static str) {
        match self {
            Language::English => ("en", "English"),
            Language::French => ("fr", "French"),
            Language::German => ("de", "German"),
            Language::Spanish => ("es", "Spanish"),
            Language::Italian => ("it", "Italian"),
            Language::Portuguese => ("pt", "Portuguese"),
            Language::Russian => ("ru", "Russian"),
            Language::Japanese => ("ja", "Japanese"),
            Language::Korean => ("ko", "Korean"),
            Language::Chinese => ("zh", "Chinese"),
            Language::Mandarin => ("cmn", "Mandarin"),
            Language::Cantonese => ("yue", "Cantonese"),
            Language::Arabic => ("ar", "Arabic"),
            Language::Hindi => ("hi", "Hindi"),
            Language::Turkish => ("tr", "Turkish"),
            Language::Polish => ("pl", "Polish"),
            Language::Dutch => ("nl", "Dutch"),
            Language::Swedish => ("sv", "Swedish"),
            Language::Norwegian => ("no", "Norwegian"),
            Language::Danish => ("da", "Danish"),
            Language::Finnish => ("fi", "Finnish"),
            Language::Icelandic => ("is", "Icelandic"),
            Language::Czech => ("cs", "Czech"),
            Language::Hungarian => ("hu", "Hungarian"),
            Language::Romanian => ("ro", "Romanian"),
            Language::Bulgarian => ("bg", "Bulgarian"),
            Language::Greek => ("el", "Greek"),
            Language::Hebrew => ("he", "Hebrew"),
            Language::Thai => ("th", "Thai"),
            Language::Vietnamese => ("vi", "Vietnamese"),
            Language::Indonesian => ("id", "Indonesian"),
            Language::Malay => ("ms", "Malay"),
            Language::Filipino => ("fil", "Filipino"),
            Language::Ukrainian => ("uk", "Ukrainian"),
            Language::Croatian => ("hr", "Croatian"),
            Language::Serbian => ("sr", "Serbian"),
            Language::Slovenian => ("sl", "Slovenian"),
            Language::Slovak => ("sk", "Slovak"),
            Language::Lithuanian => ("lt", "Lithuanian"),
            Language::Latvian => ("lv", "Latvian"),
            Language::Estonian => ("et", "Estonian"),
            Language::Bengali => ("bn", "Bengali"),
            Language::Tamil => ("ta", "Tamil"),
            Language::Telugu => ("te", "Telugu"),
            Language::Persian => ("fa", "Persian"),
            Language::Urdu => ("ur", "Urdu"),
            Language::Catalan => ("ca", "Catalan"),
            Language::Basque => ("eu", "Basque"),
            Language::Galician => ("gl", "Galician"),
            Language::Latin => ("la", "Latin"),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::lookup(s).ok_or_else(|| ParseError::invalid_tag("language", s))
    }
}
