//! Label derivation for finalized spots: description text, historical-period
//! label, significance label. All derivations are pure functions of
//! (name, category, keyword) - deterministic and idempotent, no external
//! calls.

use crate::models::SpotCategory;

/// Fallback when neither a keyword nor a category template applies.
const GENERIC_TEMPLATE: &str = "{name}は日本の歴史と文化を学ぶ上で重要な場所です。";

/// Era substrings checked in order against the name, then the keyword.
/// First match wins.
const ERA_TABLE: &[(&str, &str)] = &[
    ("古墳", "古墳時代（3世紀〜7世紀）"),
    ("奈良", "奈良時代（710年〜794年）"),
    ("平安", "平安時代（794年〜1185年）"),
    ("鎌倉", "鎌倉時代（1185年〜1333年）"),
    ("室町", "室町時代（1336年〜1573年）"),
    ("戦国", "戦国時代（1467年〜1615年）"),
    ("江戸", "江戸時代（1603年〜1868年）"),
    ("明治", "明治時代（1868年〜1912年）"),
    ("大正", "大正時代（1912年〜1926年）"),
    ("昭和", "昭和時代（1926年〜1989年）"),
];

/// Label used when no era substring matches.
const ERA_DEFAULT: &str = "複数の時代にわたる";

fn keyword_template(category: SpotCategory, keyword: &str) -> Option<&'static str> {
    let template = match (category, keyword) {
        (SpotCategory::Castles, "城") => {
            "{name}は戦国時代から江戸時代にかけての日本の軍事・政治の中心地でした。"
        }
        (SpotCategory::Castles, "天守") => {
            "{name}の天守は、当時の建築技術と防御思想を現代に伝える貴重な文化財です。"
        }
        (SpotCategory::Castles, "城跡") => "{name}は往時の城郭の姿を偲ばせる重要な遺跡です。",
        (SpotCategory::Temples, "寺") => {
            "{name}は長い歴史を持ち、地域の信仰の中心として栄えてきました。"
        }
        (SpotCategory::Temples, "国宝") => {
            "{name}には国宝に指定された貴重な文化財が保存されています。"
        }
        (SpotCategory::Temples, "五重塔") => "{name}の五重塔は、日本建築の美と技術の結晶です。",
        (SpotCategory::Shrines, "神社") => {
            "{name}は古来より地域の守り神として崇敬されてきました。"
        }
        (SpotCategory::Shrines, "大社") => "{name}は全国に分社を持つ、格式高い神社です。",
        (SpotCategory::Battles, "古戦場") => {
            "{name}では歴史を変えた重要な合戦が繰り広げられました。"
        }
        (SpotCategory::Battles, "合戦") => {
            "{name}の戦いは、その後の日本の歴史に大きな影響を与えました。"
        }
        (SpotCategory::Edo, "宿場") => {
            "{name}は江戸時代の五街道の要所として栄えた宿場町でした。"
        }
        (SpotCategory::Edo, "街道") => "{name}は江戸と地方を結ぶ重要な交通路でした。",
        (SpotCategory::Geography, "山") => {
            "{name}は古来より信仰の対象となり、日本の山岳文化を育んできました。"
        }
        (SpotCategory::Geography, "川") => {
            "{name}は流域の文化と産業の発展に重要な役割を果たしてきました。"
        }
        _ => return None,
    };
    Some(template)
}

fn category_template(category: SpotCategory) -> Option<&'static str> {
    let template = match category {
        SpotCategory::Castles => "{name}は日本の城郭建築の歴史を物語る重要な史跡です。",
        SpotCategory::Temples => "{name}は日本の仏教文化と建築技術の粋を集めた寺院です。",
        SpotCategory::Shrines => "{name}は日本の神道文化と地域の歴史を今に伝える神社です。",
        SpotCategory::Battles => "{name}は日本史上の重要な戦いが行われた場所です。",
        SpotCategory::Edo => "{name}は江戸時代の日本の姿を今に伝える貴重な史跡です。",
        SpotCategory::Geography => {
            "{name}は日本の自然地理と人々の暮らしの関わりを学べる場所です。"
        }
        _ => return None,
    };
    Some(template)
}

/// Derive a human-readable description for a spot. Lookup order:
/// (category, keyword) template, category default, generic template.
pub fn describe(name: &str, category: SpotCategory, keyword: &str) -> String {
    keyword_template(category, keyword)
        .or_else(|| category_template(category))
        .unwrap_or(GENERIC_TEMPLATE)
        .replace("{name}", name)
}

/// Derive a historical-period label by scanning the name and the keyword
/// for era substrings.
pub fn historical_period(name: &str, keyword: &str) -> &'static str {
    for (substring, period) in ERA_TABLE {
        if name.contains(substring) || keyword.contains(substring) {
            return period;
        }
    }
    ERA_DEFAULT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_keyword_template() {
        let description = describe("小田原城", SpotCategory::Castles, "城");
        assert!(description.starts_with("小田原城"));
        assert!(description.contains("軍事・政治の中心地"));
    }

    #[test]
    fn test_describe_falls_back_to_category_default() {
        // "砦" has no keyword-level template
        let description = describe("石垣山一夜城", SpotCategory::Castles, "砦");
        assert!(description.contains("城郭建築の歴史"));
    }

    #[test]
    fn test_describe_falls_back_to_generic() {
        let description = describe("旧鉱山跡", SpotCategory::Industry, "鉱山");
        assert_eq!(description, "旧鉱山跡は日本の歴史と文化を学ぶ上で重要な場所です。");
    }

    #[test]
    fn test_historical_period_matches_name() {
        assert_eq!(
            historical_period("五稜郭 明治維新の舞台", "城"),
            "明治時代（1868年〜1912年）"
        );
    }

    #[test]
    fn test_historical_period_matches_keyword() {
        assert_eq!(
            historical_period("高徳院", "鎌倉時代"),
            "鎌倉時代（1185年〜1333年）"
        );
    }

    #[test]
    fn test_historical_period_first_match_wins() {
        // 古墳 appears before 江戸 in the era table
        assert_eq!(
            historical_period("江戸袋古墳", ""),
            "古墳時代（3世紀〜7世紀）"
        );
    }

    #[test]
    fn test_historical_period_default() {
        assert_eq!(historical_period("厳島神社", "神社"), "複数の時代にわたる");
    }

    #[test]
    fn test_derivations_are_idempotent() {
        let first = (
            describe("建長寺", SpotCategory::Temples, "寺"),
            historical_period("建長寺", "寺"),
            SpotCategory::Temples.significance(),
        );
        let second = (
            describe("建長寺", SpotCategory::Temples, "寺"),
            historical_period("建長寺", "寺"),
            SpotCategory::Temples.significance(),
        );
        assert_eq!(first, second);
    }
}
