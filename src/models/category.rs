use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of thematic tags for educational spots. Each category owns a
/// fixed keyword set used for nearby searches; a subset additionally carries
/// a search priority weight (see [`SpotCategory::search_priorities`]).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SpotCategory {
    // Era-specific heritage
    Ancient,
    NaraHeian,
    Kamakura,
    Muromachi,
    Sengoku,
    Edo,
    Meiji,

    // Geography / nature
    Geography,

    // Cultural asset categories
    Temples,
    Shrines,
    Castles,

    // People and events
    HistoricalFigures,
    Battles,

    // Industry and culture
    Industry,
    Culture,
}

impl SpotCategory {
    /// Search keywords owned by this category. Non-empty, static, never
    /// mutated at runtime.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            SpotCategory::Ancient => &["古墳", "遺跡", "貝塚", "縄文", "弥生", "古代"],
            SpotCategory::NaraHeian => &["奈良時代", "平安時代", "都", "国分寺", "荘園跡"],
            SpotCategory::Kamakura => &["鎌倉時代", "武家", "御家人", "執権", "守護", "地頭"],
            SpotCategory::Muromachi => &["室町時代", "足利", "南北朝", "応仁の乱"],
            SpotCategory::Sengoku => &["戦国時代", "城", "城跡", "武将", "合戦場", "古戦場"],
            SpotCategory::Edo => &["江戸時代", "宿場", "街道", "関所", "藩", "代官所", "陣屋"],
            SpotCategory::Meiji => &["明治", "文明開化", "鉄道", "洋館", "近代化遺産"],
            SpotCategory::Geography => &["山", "川", "湖", "海岸", "峠", "渓谷", "温泉", "火山"],
            SpotCategory::Temples => &["寺", "寺院", "本堂", "五重塔", "仏像", "国宝"],
            SpotCategory::Shrines => &["神社", "大社", "神宮", "鳥居", "本殿"],
            SpotCategory::Castles => &["城", "天守", "城址", "城跡", "砦", "要塞"],
            SpotCategory::HistoricalFigures => {
                &["生誕地", "終焉の地", "墓", "菩提寺", "屋敷跡"]
            }
            SpotCategory::Battles => &["古戦場", "合戦", "戦跡", "陣地跡"],
            SpotCategory::Industry => &["宿場町", "港", "市場跡", "鉱山", "製鉄", "窯跡"],
            SpotCategory::Culture => &["歌舞伎", "能楽", "茶室", "庭園", "美術館", "博物館"],
        }
    }

    /// Categories tried during candidate search, highest weight first.
    /// Weight ties keep declaration order (temples before shrines, sengoku
    /// before historical figures).
    pub fn search_priorities() -> &'static [(SpotCategory, f64)] {
        &[
            (SpotCategory::Castles, 1.0),
            (SpotCategory::Battles, 0.95),
            (SpotCategory::Temples, 0.9),
            (SpotCategory::Shrines, 0.9),
            (SpotCategory::Sengoku, 0.85),
            (SpotCategory::HistoricalFigures, 0.85),
            (SpotCategory::Edo, 0.8),
            (SpotCategory::Geography, 0.7),
        ]
    }

    /// Significance label shown with a finalized spot.
    pub fn significance(&self) -> &'static str {
        match self {
            SpotCategory::Castles => "軍事・政治の中心地",
            SpotCategory::Temples => "仏教文化の伝承地",
            SpotCategory::Shrines => "神道信仰の聖地",
            SpotCategory::Battles => "歴史的転換点",
            SpotCategory::HistoricalFigures => "偉人ゆかりの地",
            SpotCategory::Edo => "江戸文化の遺産",
            SpotCategory::Sengoku => "戦国時代の舞台",
            SpotCategory::Geography => "自然と歴史の交差点",
            SpotCategory::Industry => "産業発展の礎",
            SpotCategory::Culture => "日本文化の発信地",
            _ => "歴史的重要地点",
        }
    }

    /// Additional score the offline catalog path grants per category. Live
    /// candidates carry ratings instead.
    pub fn catalog_bonus(&self) -> i32 {
        match self {
            SpotCategory::Ancient => 80,
            SpotCategory::Battles => 75,
            SpotCategory::Castles => 70,
            SpotCategory::Temples => 60,
            SpotCategory::Shrines => 60,
            SpotCategory::HistoricalFigures => 55,
            SpotCategory::Edo => 50,
            SpotCategory::Meiji => 45,
            _ => 0,
        }
    }
}

impl fmt::Display for SpotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SpotCategory::Ancient => "ancient",
            SpotCategory::NaraHeian => "nara_heian",
            SpotCategory::Kamakura => "kamakura",
            SpotCategory::Muromachi => "muromachi",
            SpotCategory::Sengoku => "sengoku",
            SpotCategory::Edo => "edo",
            SpotCategory::Meiji => "meiji",
            SpotCategory::Geography => "geography",
            SpotCategory::Temples => "temples",
            SpotCategory::Shrines => "shrines",
            SpotCategory::Castles => "castles",
            SpotCategory::HistoricalFigures => "historical_figures",
            SpotCategory::Battles => "battles",
            SpotCategory::Industry => "industry",
            SpotCategory::Culture => "culture",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SpotCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ancient" => Ok(SpotCategory::Ancient),
            "nara_heian" => Ok(SpotCategory::NaraHeian),
            "kamakura" => Ok(SpotCategory::Kamakura),
            "muromachi" => Ok(SpotCategory::Muromachi),
            "sengoku" => Ok(SpotCategory::Sengoku),
            "edo" => Ok(SpotCategory::Edo),
            "meiji" => Ok(SpotCategory::Meiji),
            "geography" => Ok(SpotCategory::Geography),
            "temples" => Ok(SpotCategory::Temples),
            "shrines" => Ok(SpotCategory::Shrines),
            "castles" => Ok(SpotCategory::Castles),
            "historical_figures" => Ok(SpotCategory::HistoricalFigures),
            "battles" => Ok(SpotCategory::Battles),
            "industry" => Ok(SpotCategory::Industry),
            "culture" => Ok(SpotCategory::Culture),
            _ => Err(format!("Invalid spot category: {}", s)),
        }
    }
}
