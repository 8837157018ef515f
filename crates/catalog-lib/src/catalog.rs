use std::cmp::Ordering;

use crate::{classification::Classification, models::SourceDescriptor};

pub const LOADING_MESSAGE: &str = "Loading sources...";
pub const FAILURE_MESSAGE: &str = "Failed to load sources. Please try refreshing the page.";
pub const REGION_BADGE: &str = "FR";
pub const ACTIVE_BADGE: &str = "✅ Active";
pub const OFFLINE_BADGE: &str = "❌ Offline";
pub const NSFW_BADGE: &str = "NSFW";

pub const VISIBILITY_THRESHOLD: f64 = 0.1;
pub const VISIBILITY_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Everything needed to draw one source card
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub index: usize,
    pub id: String,
    pub name: String,
    pub icon: String,
    pub is_offline: bool,
    pub nsfw: bool,
    pub version: String,
    pub type_label: String,
}

impl Card {
    pub fn new(source: &SourceDescriptor, classification: &Classification, index: usize) -> Self {
        Self {
            index,
            id: source.id.clone(),
            name: source.name.clone(),
            icon: source.icon(),
            is_offline: classification.is_offline(&source.id),
            nsfw: source.is_nsfw(),
            version: source.version.to_string(),
            type_label: classification.type_label(&source.id).to_string(),
        }
    }

    pub fn status_badge(&self) -> &'static str {
        if self.is_offline {
            OFFLINE_BADGE
        } else {
            ACTIVE_BADGE
        }
    }

    pub fn status_class(&self) -> &'static str {
        if self.is_offline {
            "badge-offline"
        } else {
            "badge-active"
        }
    }

    pub fn version_line(&self) -> String {
        format!("Version {} · {}", self.version, self.type_label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub active: usize,
    pub offline: usize,
}

impl Summary {
    pub fn new(sources: &[SourceDescriptor], classification: &Classification) -> Self {
        let total = sources.len();
        let active = sources
            .iter()
            .filter(|source| !classification.is_offline(&source.id))
            .count();

        Self {
            total,
            active,
            offline: total - active,
        }
    }

    pub fn description(&self) -> String {
        format!(
            "{} French sources for Aidoku ({} active, {} offline)",
            self.total, self.active, self.offline
        )
    }

    pub fn title(&self) -> String {
        format!("JohanDevl's French Sources - {} Sources Available", self.total)
    }
}

/// Active sources first, then offline ones, each group ordered by name.
/// `sort_by` is stable so equal names keep their manifest order.
pub fn sort_sources<F>(sources: &mut [SourceDescriptor], classification: &Classification, compare: F)
where
    F: Fn(&str, &str) -> Ordering,
{
    sources.sort_by(|a, b| {
        let a_offline = classification.is_offline(&a.id);
        let b_offline = classification.is_offline(&b.id);

        a_offline
            .cmp(&b_offline)
            .then_with(|| compare(&a.name, &b.name))
    });
}

fn fold(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        c => c,
    }
}

fn rank(c: char) -> u8 {
    if c.is_numeric() {
        1
    } else if c.is_alphabetic() {
        2
    } else {
        0
    }
}

fn primary_key(s: &str) -> Vec<(u8, char)> {
    s.chars()
        .flat_map(char::to_lowercase)
        .flat_map(|c| match c {
            'æ' => vec!['a', 'e'],
            'œ' => vec!['o', 'e'],
            c => vec![fold(c)],
        })
        .map(|c| (rank(c), c))
        .collect()
}

/// Collation close to a browser's default `localeCompare` for latin names:
/// punctuation and spaces before digits before letters, base letters first,
/// then accents, then lowercase before uppercase.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| {
            let case = |s: &str| s.chars().map(|c| c.is_uppercase()).collect::<Vec<_>>();
            case(a).cmp(&case(b))
        })
}

#[cfg(test)]
mod test {
    use super::*;

    fn source(id: &str, name: &str) -> SourceDescriptor {
        SourceDescriptor::new(id, name)
    }

    fn ids(sources: &[SourceDescriptor]) -> Vec<&str> {
        sources.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_offline_sorted_last() {
        let classification = Classification::default();
        let mut sources = vec![
            source("fr.sushiscan", "B"),
            source("fr.astralmanga", "A"),
        ];

        sort_sources(&mut sources, &classification, locale_cmp);

        assert_eq!(ids(&sources), vec!["fr.astralmanga", "fr.sushiscan"]);
    }

    #[test]
    fn test_partitions_sorted_by_name() {
        let classification = Classification::new(["b.off", "a.off"], []);
        let mut sources = vec![
            source("a.off", "Zeta"),
            source("c", "Mango"),
            source("b.off", "Alpha"),
            source("d", "apple"),
            source("e", "Écho"),
        ];

        sort_sources(&mut sources, &classification, locale_cmp);

        assert_eq!(ids(&sources), vec!["d", "e", "c", "b.off", "a.off"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let classification = Classification::new([], []);
        let mut sources = vec![source("second", "Same"), source("first", "Same")];

        sort_sources(&mut sources, &classification, locale_cmp);

        assert_eq!(ids(&sources), vec!["second", "first"]);
    }

    #[test]
    fn test_locale_cmp() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("e", "é"), Ordering::Less);
        assert_eq!(locale_cmp("é", "f"), Ordering::Less);
        assert_eq!(locale_cmp("Lelmanga", "LelManga"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_locale_cmp_punctuation_before_digits() {
        assert_eq!(locale_cmp("_x", "1x"), Ordering::Less);
        assert_eq!(locale_cmp("scan_fr", "scan1fr"), Ordering::Less);
        assert_eq!(locale_cmp("Scan 2", "Scan10"), Ordering::Less);
        assert_eq!(locale_cmp("9lives", "alpha"), Ordering::Less);
    }

    #[test]
    fn test_card() {
        let classification = Classification::default();
        let mut sushi = source("fr.sushiscan", "SushiScan");
        sushi.nsfw = 1;
        sushi.version = "4".into();

        let card = Card::new(&sushi, &classification, 3);

        assert_eq!(card.index, 3);
        assert!(card.is_offline);
        assert!(card.nsfw);
        assert_eq!(card.status_badge(), OFFLINE_BADGE);
        assert_eq!(card.status_class(), "badge-offline");
        assert_eq!(card.icon, "./icons/fr.sushiscan.png");
        assert_eq!(card.version_line(), "Version 4 · MangaStream");
    }

    #[test]
    fn test_card_unknown_type() {
        let card = Card::new(&source("fr.raijinscans", "Raijin"), &Classification::default(), 0);

        assert!(!card.is_offline);
        assert!(!card.nsfw);
        assert_eq!(card.status_badge(), ACTIVE_BADGE);
        assert_eq!(card.type_label, "Unknown");
    }

    #[test]
    fn test_summary() {
        let classification = Classification::default();
        let sources = vec![
            source("fr.fmteam", "FMTeam"),
            source("fr.mangascan", "MangaScan"),
            source("fr.lelmanga", "LelManga"),
        ];

        let summary = Summary::new(&sources, &classification);

        assert_eq!(summary, Summary { total: 3, active: 2, offline: 1 });
        assert_eq!(
            summary.description(),
            "3 French sources for Aidoku (2 active, 1 offline)"
        );
        assert_eq!(
            summary.title(),
            "JohanDevl's French Sources - 3 Sources Available"
        );
    }

    #[test]
    fn test_summary_counts_add_up() {
        let classification = Classification::default();
        let pool = [
            source("fr.sushiscan", "SushiScan"),
            source("fr.fmteam", "FMTeam"),
            source("fr.legacyscans", "Legacy"),
            source("fr.animesama", "AnimeSama"),
        ];

        for len in 0..=pool.len() {
            let summary = Summary::new(&pool[..len], &classification);
            assert_eq!(summary.total, len);
            assert_eq!(summary.active + summary.offline, summary.total);
        }
    }
}
