//! Curated offline spot catalog, used when no places collaborator is
//! configured. Guarantees the app is demonstrable without external API keys:
//! known route corridors get hand-curated spot sets, everything else falls
//! back to a metropolitan default set.

use crate::constants::SEGMENT_COUNT;
use crate::models::{Coordinates, Spot, SpotCategory};
use crate::services::relevance;
use rand::Rng;

pub struct SpotCatalog {
    min_separation_deg: f64,
}

impl SpotCatalog {
    pub fn new(min_separation_deg: f64) -> Self {
        SpotCatalog { min_separation_deg }
    }

    /// Catalog spots for a route, scored and geographically distributed.
    pub fn find_spots(&self, origin: &str, destination: &str) -> Vec<Spot> {
        let spots = corridor_spots(origin, destination);
        tracing::info!(
            origin = origin,
            destination = destination,
            catalog_size = spots.len(),
            "Serving {} catalog spots for {} -> {}",
            spots.len(),
            origin,
            destination
        );
        select_distributed(spots, self.min_separation_deg)
    }

    /// Fabricated (distance, duration) summary for the sample route. Known
    /// corridors use fixed values; unknown pairs get a plausible estimate.
    pub fn route_summary(&self, origin: &str, destination: &str) -> (String, String) {
        let summary = match (origin, destination) {
            ("東京駅", "鎌倉駅") => Some(("51.2 km", "1時間 12分")),
            ("東京駅", "京都駅") => Some(("476.3 km", "6時間 23分")),
            ("東京駅", "大阪駅") => Some(("515.4 km", "7時間 12分")),
            ("京都駅", "奈良駅") => Some(("45.7 km", "1時間 15分")),
            ("広島駅", "松山駅") => Some(("156.2 km", "2時間 45分")),
            _ => None,
        };

        if let Some((distance, duration)) = summary {
            return (distance.to_string(), duration.to_string());
        }

        let mut rng = rand::rng();
        (
            format!("{} km", rng.random_range(50..250)),
            format!(
                "{}時間 {}分",
                rng.random_range(2..6),
                rng.random_range(0..60)
            ),
        )
    }
}

/// Sort by educational score, then greedily select up to [`SEGMENT_COUNT`]
/// spots keeping a minimum pairwise separation; if the constraint leaves
/// slots unfilled, relax it and fill by score order. A catalog of at most
/// [`SEGMENT_COUNT`] entries is returned unchanged.
pub fn select_distributed(spots: Vec<Spot>, min_separation_deg: f64) -> Vec<Spot> {
    if spots.len() <= SEGMENT_COUNT {
        return spots;
    }

    let mut sorted = spots;
    // Stable sort: equal scores keep catalog order.
    sorted.sort_by_key(|spot| std::cmp::Reverse(catalog_score(spot)));

    let mut selected: Vec<Spot> = Vec::with_capacity(SEGMENT_COUNT);
    for spot in &sorted {
        if selected.len() >= SEGMENT_COUNT {
            break;
        }
        let too_close = selected.iter().any(|chosen| {
            chosen.coordinates.flat_distance_deg(&spot.coordinates) < min_separation_deg
        });
        if !too_close {
            selected.push(spot.clone());
        }
    }

    // Relax the spacing constraint to fill remaining slots.
    if selected.len() < SEGMENT_COUNT {
        for spot in &sorted {
            if selected.len() >= SEGMENT_COUNT {
                break;
            }
            if !selected.iter().any(|chosen| chosen.place_id == spot.place_id) {
                selected.push(spot.clone());
            }
        }
    }

    selected
}

/// Offline score: the live name-scoring rule plus a per-category bonus in
/// place of collaborator ratings.
pub fn catalog_score(spot: &Spot) -> i32 {
    relevance::name_score(&spot.name) + spot.category.catalog_bonus()
}

fn corridor_spots(origin: &str, destination: &str) -> Vec<Spot> {
    let mentions = |term: &str| origin.contains(term) || destination.contains(term);

    if mentions("鎌倉") {
        tokyo_kamakura()
    } else if mentions("京都") && mentions("奈良") {
        // Checked before the Tokyo-Kyoto corridor so the intra-Kansai pair
        // is not shadowed by the broader Kyoto match.
        kyoto_nara()
    } else if mentions("京都") || mentions("大阪") {
        tokyo_kyoto()
    } else if mentions("広島") || mentions("松山") {
        hiroshima_matsuyama()
    } else {
        tokyo_default()
    }
}

#[allow(clippy::too_many_arguments)]
fn spot(
    place_id: &str,
    name: &str,
    address: &str,
    lat: f64,
    lng: f64,
    description: &str,
    category: SpotCategory,
    historical_period: &str,
    significance: &str,
) -> Spot {
    Spot {
        place_id: place_id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        coordinates: Coordinates { lat, lng },
        description: description.to_string(),
        category,
        historical_period: historical_period.to_string(),
        significance: significance.to_string(),
    }
}

fn tokyo_kamakura() -> Vec<Spot> {
    vec![
        spot(
            "catalog_kamakura_1",
            "鎌倉大仏（高徳院）",
            "神奈川県鎌倉市長谷4-2-28",
            35.3169,
            139.5359,
            "1252年に建立された高さ11.3mの阿弥陀如来坐像。鎌倉時代の仏教文化と青銅鋳造技術の最高峰を示す国宝です。",
            SpotCategory::Temples,
            "鎌倉時代（1185年〜1333年）",
            "鎌倉仏教文化の象徴",
        ),
        spot(
            "catalog_kamakura_2",
            "鶴岡八幡宮",
            "神奈川県鎌倉市雪ノ下2-1-31",
            35.3249,
            139.5565,
            "源頼朝が1180年に現在地に遷座した鎌倉幕府の守護神。武家政権の成立と発展を象徴する重要な神社です。",
            SpotCategory::Shrines,
            "鎌倉時代（1185年〜1333年）",
            "武家政権の精神的支柱",
        ),
        spot(
            "catalog_kamakura_3",
            "建長寺",
            "神奈川県鎌倉市山ノ内8",
            35.3374,
            139.5526,
            "1253年創建の日本最古の禅寺。北条時頼が蘭渓道隆を招いて開山。禅宗の日本伝来と発展の拠点となりました。",
            SpotCategory::Temples,
            "鎌倉時代（1185年〜1333年）",
            "日本禅宗の発祥地",
        ),
        spot(
            "catalog_kamakura_4",
            "江島神社",
            "神奈川県藤沢市江島2-3-8",
            35.3006,
            139.4778,
            "552年創建と伝わる海の神を祀る神社。江戸時代には庶民の信仰を集め、江島詣が大流行しました。",
            SpotCategory::Shrines,
            "古代〜現代",
            "庶民信仰の聖地",
        ),
        spot(
            "catalog_kamakura_5",
            "小田原城",
            "神奈川県小田原市城内6-1",
            35.2559,
            139.1547,
            "戦国時代に北条氏の本拠地として栄えた平山城。豊臣秀吉の小田原征伐（1590年）の舞台となり、戦国時代の終焉を告げる歴史的舞台です。",
            SpotCategory::Castles,
            "戦国時代（1467年〜1615年）",
            "戦国時代終焉の舞台",
        ),
        spot(
            "catalog_kamakura_6",
            "太田道灌墓所（大慈寺）",
            "神奈川県伊勢原市上粕屋1762",
            35.4014,
            139.2937,
            "江戸城築城で知られる太田道灌の墓所。室町時代後期の関東管領上杉氏の重臣で、江戸発展の礎を築いた武将です。",
            SpotCategory::HistoricalFigures,
            "室町時代（1336年〜1573年）",
            "江戸発展の礎を築いた武将",
        ),
        spot(
            "catalog_kamakura_7",
            "頼朝の墓（法華堂跡）",
            "神奈川県鎌倉市西御門2-6",
            35.3255,
            139.5582,
            "鎌倉幕府初代将軍源頼朝の墓所。日本初の武家政権を確立し、以後約700年続く武士の時代の礎を築いた歴史的人物の眠る地です。",
            SpotCategory::HistoricalFigures,
            "鎌倉時代（1185年〜1333年）",
            "武家政権の創始者",
        ),
        spot(
            "catalog_kamakura_8",
            "箱根関所跡",
            "神奈川県足柄下郡箱根町箱根1",
            35.2104,
            139.0240,
            "江戸時代の重要な関所跡。「入り鉄砲に出女」で有名な厳しい検問が行われ、江戸幕府の治安維持政策の象徴的存在でした。",
            SpotCategory::Edo,
            "江戸時代（1603年〜1868年）",
            "江戸幕府統制政策の象徴",
        ),
    ]
}

fn tokyo_kyoto() -> Vec<Spot> {
    vec![
        spot(
            "catalog_kyoto_1",
            "関ヶ原古戦場",
            "岐阜県不破郡関ケ原町関ケ原",
            35.3627,
            136.4664,
            "1600年、徳川家康と石田三成が激突した天下分け目の戦い。この戦いで江戸幕府成立の基礎が築かれました。",
            SpotCategory::Battles,
            "安土桃山時代（1573年〜1603年）",
            "日本統一の決戦地",
        ),
        spot(
            "catalog_kyoto_2",
            "東海道品川宿跡",
            "東京都品川区北品川2丁目",
            35.6197,
            139.7404,
            "江戸時代の東海道五十三次の第一番目の宿場町。江戸の玄関口として多くの人々が往来し、宿場町文化が栄えました。",
            SpotCategory::Edo,
            "江戸時代（1603年〜1868年）",
            "江戸時代交通の要衝",
        ),
        spot(
            "catalog_kyoto_3",
            "富士山",
            "静岡県・山梨県",
            35.3606,
            138.7274,
            "古来より信仰の対象とされてきた日本最高峰の成層火山。富士講など独特の山岳信仰を育み、日本文化の象徴となっています。",
            SpotCategory::Geography,
            "古代〜現代",
            "日本文化の象徴的存在",
        ),
        spot(
            "catalog_kyoto_4",
            "駿府城跡",
            "静岡県静岡市葵区駿府城公園1-1",
            34.9777,
            138.3836,
            "徳川家康が大御所として晩年を過ごした城。江戸幕府の実質的な政治中枢として機能し、家康の天下統一事業の完成を見届けた場所です。",
            SpotCategory::Castles,
            "江戸時代（1603年〜1868年）",
            "徳川政権の完成地",
        ),
        spot(
            "catalog_kyoto_5",
            "本能寺跡",
            "京都府京都市中京区寺町通御池下る下本能寺前町522",
            35.0087,
            135.7695,
            "1582年、織田信長が明智光秀の謀反により自害した本能寺の変の舞台。戦国時代の終焉と近世への転換点となった日本史上最も有名な事件の現場です。",
            SpotCategory::Battles,
            "安土桃山時代（1573年〜1603年）",
            "戦国時代終焉の転換点",
        ),
        spot(
            "catalog_kyoto_6",
            "東海道川崎宿跡",
            "神奈川県川崎市川崎区本町1丁目",
            35.5308,
            139.6970,
            "東海道五十三次の2番目の宿場町。江戸と京都を結ぶ重要な交通路の要所として栄え、庶民の旅や物流の拠点となりました。",
            SpotCategory::Edo,
            "江戸時代（1603年〜1868年）",
            "東海道交通の要衝",
        ),
    ]
}

fn kyoto_nara() -> Vec<Spot> {
    vec![
        spot(
            "catalog_kansai_1",
            "清水寺",
            "京都府京都市東山区清水1-294",
            34.9949,
            135.7849,
            "778年創建の法相宗の寺院。「清水の舞台」で有名な本堂は釘を一本も使わない懸造り建築の傑作で、国宝に指定されています。",
            SpotCategory::Temples,
            "奈良時代〜現代",
            "古都京都の象徴",
        ),
        spot(
            "catalog_kansai_2",
            "東大寺大仏殿",
            "奈良県奈良市雑司町406-1",
            34.6890,
            135.8396,
            "743年に聖武天皇の発願で建立開始。752年開眼供養が行われた盧舎那仏は奈良時代の国家仏教政策の象徴です。",
            SpotCategory::Temples,
            "奈良時代（710年〜794年）",
            "古代日本の国家仏教の中心",
        ),
        spot(
            "catalog_kansai_3",
            "春日大社",
            "奈良県奈良市春日野町160",
            34.6818,
            135.8479,
            "768年創建の藤原氏の氏神を祀る神社。約3000基の石燈籠と約1000基の釣燈籠で知られ、古代貴族文化を今に伝えます。",
            SpotCategory::Shrines,
            "奈良時代（710年〜794年）",
            "古代貴族文化の遺産",
        ),
        spot(
            "catalog_kansai_4",
            "法隆寺",
            "奈良県生駒郡斑鳩町法隆寺山内1-1",
            34.6142,
            135.7342,
            "607年に聖徳太子と推古天皇により建立された世界最古の木造建築群。仏教伝来と古代日本の国際化を象徴する世界文化遺産です。",
            SpotCategory::Temples,
            "飛鳥時代（593年〜710年）",
            "仏教文化東漸の象徴",
        ),
        spot(
            "catalog_kansai_5",
            "平城宮跡",
            "奈良県奈良市佐紀町",
            34.6911,
            135.7956,
            "710年から784年まで日本の都として栄えた平城京の中心部。律令国家の政治中枢として機能し、古代日本の国家形成を物語る特別史跡です。",
            SpotCategory::Ancient,
            "奈良時代（710年〜794年）",
            "古代律令国家の中心地",
        ),
        spot(
            "catalog_kansai_6",
            "二条城",
            "京都府京都市中京区二条通堀川西入二条城町541",
            35.0142,
            135.7481,
            "1603年に徳川家康が築城し、1867年に大政奉還が行われた江戸幕府の象徴的建造物。江戸時代の始まりと終わりを見届けた歴史の舞台です。",
            SpotCategory::Castles,
            "江戸時代（1603年〜1868年）",
            "幕末維新の歴史的舞台",
        ),
    ]
}

fn hiroshima_matsuyama() -> Vec<Spot> {
    vec![
        spot(
            "catalog_setouchi_1",
            "厳島神社",
            "広島県廿日市市宮島町1-1",
            34.2964,
            132.3198,
            "推古天皇元年（593年）創建と伝わる海中の神社。平清盛の庇護により現在の規模となり、平家の栄華を物語ります。",
            SpotCategory::Shrines,
            "平安時代（794年〜1185年）",
            "平家政権の象徴",
        ),
        spot(
            "catalog_setouchi_2",
            "松山城",
            "愛媛県松山市丸之内1",
            33.8464,
            132.7658,
            "1602年から加藤嘉明が築城開始。現存12天守の一つで、江戸時代の城郭建築技術の粋を集めた平山城です。",
            SpotCategory::Castles,
            "江戸時代（1603年〜1868年）",
            "現存天守の貴重な遺構",
        ),
    ]
}

fn tokyo_default() -> Vec<Spot> {
    vec![
        spot(
            "catalog_tokyo_1",
            "皇居東御苑（江戸城跡）",
            "東京都千代田区千代田1-1",
            35.6852,
            139.7528,
            "徳川将軍家の居住地として260年間日本の政治中枢だった江戸城の遺構。天守台や富士見櫓など江戸幕府の威容を偲ばせます。",
            SpotCategory::Castles,
            "江戸時代（1603年〜1868年）",
            "江戸幕府政治の中心地",
        ),
        spot(
            "catalog_tokyo_2",
            "靖国神社",
            "東京都千代田区九段北3-1-1",
            35.6946,
            139.7444,
            "1869年創建の戊辰戦争戦没者を祀る神社。明治維新から太平洋戦争までの日本近代史と戦争の記憶を伝える重要な場所です。",
            SpotCategory::Shrines,
            "明治時代〜現代",
            "近代日本の戦争史の象徴",
        ),
        spot(
            "catalog_tokyo_3",
            "浅草寺",
            "東京都台東区浅草2-3-1",
            35.7148,
            139.7967,
            "645年創建の東京最古の寺院。江戸時代には庶民の信仰と娯楽の中心地として栄え、江戸文化形成の拠点となりました。",
            SpotCategory::Temples,
            "飛鳥時代〜現代",
            "江戸庶民文化の中心地",
        ),
        spot(
            "catalog_tokyo_4",
            "東京国立博物館",
            "東京都台東区上野公園13-9",
            35.7188,
            139.7753,
            "1872年創設の日本最古の博物館。国宝・重要文化財を多数収蔵し、日本の文化史と美術史を体系的に学習できる施設です。",
            SpotCategory::Culture,
            "明治時代〜現代",
            "日本文化史の宝庫",
        ),
        spot(
            "catalog_tokyo_5",
            "増上寺",
            "東京都港区芝公園4-7-35",
            35.6570,
            139.7489,
            "1393年創建の浄土宗大本山。徳川家の菩提寺として6人の将軍が眠り、江戸幕府の宗教政策と徳川家の権威を象徴します。",
            SpotCategory::Temples,
            "室町時代〜現代",
            "徳川家菩提寺",
        ),
        spot(
            "catalog_tokyo_6",
            "湯島聖堂",
            "東京都文京区湯島1-4-25",
            35.7026,
            139.7684,
            "1690年に5代将軍綱吉が創建した孔子廟。江戸時代の儒学教育の中心地として昌平坂学問所が併設され、近世日本の学問振興の象徴です。",
            SpotCategory::Culture,
            "江戸時代（1603年〜1868年）",
            "江戸時代学問の中心地",
        ),
        spot(
            "catalog_tokyo_7",
            "品川台場跡",
            "東京都港区台場1",
            35.6297,
            139.7704,
            "1853年のペリー来航を受けて江戸幕府が築いた砲台跡。幕末の攘夷論と開国論の対立、江戸幕府の軍事近代化を物語る史跡です。",
            SpotCategory::Battles,
            "江戸時代末期（1853年〜1868年）",
            "幕末開国の象徴",
        ),
        spot(
            "catalog_tokyo_8",
            "東京駅丸の内駅舎",
            "東京都千代田区丸の内1-9-1",
            35.6812,
            139.7671,
            "1914年竣工の赤煉瓦駅舎。大正時代の近代建築技術と西洋様式導入を示し、日本の鉄道史と近代化の象徴的建造物です。",
            SpotCategory::Meiji,
            "大正時代（1912年〜1926年）",
            "日本近代化の象徴",
        ),
        spot(
            "catalog_tokyo_9",
            "築地本願寺",
            "東京都中央区築地3-15-1",
            35.6654,
            139.7707,
            "1617年創建の浄土真宗本願寺派の寺院。関東大震災後の復興建築として古代インド様式を採用し、近代日本の宗教建築史上重要な建物です。",
            SpotCategory::Temples,
            "江戸時代〜現代",
            "近代復興建築の傑作",
        ),
        spot(
            "catalog_tokyo_10",
            "神田神社（神田明神）",
            "東京都千代田区外神田2-16-2",
            35.7019,
            139.7717,
            "730年創建の江戸総鎮守。江戸時代は将軍家の崇敬を受け、江戸の商工業発展の守護神として庶民の信仰を集めました。",
            SpotCategory::Shrines,
            "奈良時代〜現代",
            "江戸商業文化の守護神",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_spot(place_id: &str, name: &str, lat: f64, lng: f64, category: SpotCategory) -> Spot {
        spot(place_id, name, "", lat, lng, "", category, "", "")
    }

    #[test]
    fn test_small_catalog_returned_unchanged() {
        let spots = hiroshima_matsuyama();
        let selected = select_distributed(spots.clone(), 0.01);
        assert_eq!(selected.len(), spots.len());
        assert_eq!(selected[0].place_id, spots[0].place_id);
    }

    #[test]
    fn test_selection_caps_at_segment_count() {
        // 12 well-separated spots, scores descending by construction
        let spots: Vec<Spot> = (0..12)
            .map(|i| {
                minimal_spot(
                    &format!("p{}", i),
                    "名城",
                    35.0 + i as f64 * 0.1,
                    139.0,
                    SpotCategory::Castles,
                )
            })
            .collect();

        let selected = select_distributed(spots, 0.01);
        assert_eq!(selected.len(), SEGMENT_COUNT);
    }

    #[test]
    fn test_spacing_constraint_relaxes_to_fill() {
        // 11 spots all at the same coordinate: the spacing pass admits one,
        // the relaxation pass fills the rest up to the cap.
        let spots: Vec<Spot> = (0..11)
            .map(|i| {
                minimal_spot(&format!("p{}", i), "史跡", 35.0, 139.0, SpotCategory::Ancient)
            })
            .collect();

        let selected = select_distributed(spots, 0.01);
        assert_eq!(selected.len(), SEGMENT_COUNT);

        // No duplicate identities even after relaxation
        let mut ids: Vec<&str> = selected.iter().map(|s| s.place_id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SEGMENT_COUNT);
    }

    #[test]
    fn test_higher_scored_spot_selected_first() {
        let mut spots = vec![
            minimal_spot("low", "広場", 35.0, 139.0, SpotCategory::Geography),
            minimal_spot("high", "国宝の城 史跡", 36.0, 140.0, SpotCategory::Castles),
        ];
        // Pad beyond the cap so sorting actually runs
        for i in 0..10 {
            spots.push(minimal_spot(
                &format!("pad{}", i),
                "旧跡",
                30.0 + i as f64,
                130.0,
                SpotCategory::Geography,
            ));
        }

        let selected = select_distributed(spots, 0.01);
        assert_eq!(selected[0].place_id, "high");
    }

    #[test]
    fn test_catalog_score_combines_name_and_category() {
        let castle = minimal_spot("c", "小田原城", 35.0, 139.0, SpotCategory::Castles);
        // 城 (+70) plus castles bonus (+70)
        assert_eq!(catalog_score(&castle), 140);

        let plain = minimal_spot("g", "大きな山", 35.0, 139.0, SpotCategory::Geography);
        assert_eq!(catalog_score(&plain), 0);
    }

    #[test]
    fn test_corridor_matching() {
        assert_eq!(corridor_spots("東京駅", "鎌倉駅").len(), 8);
        assert_eq!(corridor_spots("京都駅", "奈良駅")[0].place_id, "catalog_kansai_1");
        assert_eq!(corridor_spots("東京駅", "京都駅")[0].place_id, "catalog_kyoto_1");
        assert_eq!(corridor_spots("広島駅", "松山駅").len(), 2);
        assert_eq!(corridor_spots("新宿駅", "横浜駅").len(), 10);
    }

    #[test]
    fn test_route_summary_known_pair() {
        let catalog = SpotCatalog::new(0.01);
        let (distance, duration) = catalog.route_summary("東京駅", "鎌倉駅");
        assert_eq!(distance, "51.2 km");
        assert_eq!(duration, "1時間 12分");
    }

    #[test]
    fn test_route_summary_unknown_pair_is_plausible() {
        let catalog = SpotCatalog::new(0.01);
        let (distance, duration) = catalog.route_summary("札幌駅", "函館駅");
        assert!(distance.ends_with(" km"));
        assert!(duration.contains("時間"));
    }
}
