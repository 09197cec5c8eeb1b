//! Location index for the city autocomplete.
//!
//! The source dataset is a region → province → city hierarchy. It is
//! flattened once into [`GeoRecord`]s, kept in source order, and queried
//! with a case-insensitive substring match over city, province and region.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::error::DatasetError;

/// Queries need strictly more characters than this before matching starts.
pub const MIN_QUERY_LEN: usize = 2;
pub const MAX_SUGGESTIONS: usize = 8;

/// Italian regions, provinces and cities served to the autocomplete.
pub const BUNDLED_DATASET: &str = include_str!("../data/italy.json");

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RegionEntry {
    pub region: String,
    #[serde(default)]
    pub provinces: Vec<ProvinceEntry>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ProvinceEntry {
    pub name: String,
    #[serde(default)]
    pub cities: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeoRecord {
    pub city: String,
    pub province: String,
    pub region: String,
    pub display_label: String,
    pub search_key: String,
}

impl GeoRecord {
    pub fn new(city: &str, province: &str, region: &str) -> Self {
        Self {
            city: city.to_string(),
            province: province.to_string(),
            region: region.to_string(),
            display_label: format!("{}, {}", city, region),
            search_key: format!("{}, {}, {}", city, province, region).to_lowercase(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocationIndex {
    records: Vec<GeoRecord>,
}

impl LocationIndex {
    pub fn build(regions: &[RegionEntry]) -> Self {
        let records: Vec<GeoRecord> = regions
            .iter()
            .flat_map(|region| {
                region.provinces.iter().flat_map(move |province| {
                    province
                        .cities
                        .iter()
                        .map(move |city| GeoRecord::new(city, &province.name, &region.region))
                })
            })
            .collect();

        tracing::debug!(records = records.len(), "location index built");
        Self { records }
    }

    pub fn try_from_json(raw: &str) -> Result<Self, DatasetError> {
        let regions: Vec<RegionEntry> = serde_json::from_str(raw)?;
        let index = Self::build(&regions);
        if index.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(index)
    }

    /// Like [`LocationIndex::try_from_json`], but a broken dataset degrades to
    /// an empty index so the search widget keeps working without suggestions.
    pub fn from_json(raw: &str) -> Self {
        match Self::try_from_json(raw) {
            Ok(index) => index,
            Err(e) => {
                tracing::warn!(error = %e, "location dataset unavailable, autocomplete disabled");
                Self::default()
            }
        }
    }

    pub fn records(&self) -> &[GeoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ranked suggestions for `input`, at most [`MAX_SUGGESTIONS`].
    ///
    /// Exact city matches come first, then cities starting with the input,
    /// then everything else. Ties are broken alphabetically by city.
    pub fn query(&self, input: &str) -> Vec<&GeoRecord> {
        if input.chars().count() <= MIN_QUERY_LEN {
            return Vec::new();
        }

        let needle = input.to_lowercase();
        let mut matches: Vec<(&GeoRecord, String)> = self
            .records
            .iter()
            .filter(|record| record.search_key.contains(&needle))
            .map(|record| (record, record.city.to_lowercase()))
            .collect();

        matches.sort_by(|(a, a_city), (b, b_city)| {
            rank(a_city, &needle)
                .cmp(&rank(b_city, &needle))
                .then_with(|| compare_city(a_city, &a.city, b_city, &b.city))
        });

        matches
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(record, _)| record)
            .collect()
    }
}

fn rank(city: &str, needle: &str) -> u8 {
    if city == needle {
        0
    } else if city.starts_with(needle) {
        1
    } else {
        2
    }
}

fn compare_city(a_lower: &str, a: &str, b_lower: &str, b: &str) -> Ordering {
    a_lower.cmp(b_lower).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<RegionEntry> {
        vec![
            RegionEntry {
                region: "Lazio".to_string(),
                provinces: vec![
                    ProvinceEntry {
                        name: "Roma".to_string(),
                        cities: vec![
                            "Roma".to_string(),
                            "Fiumicino".to_string(),
                            "Ciampino".to_string(),
                        ],
                    },
                    ProvinceEntry {
                        name: "Latina".to_string(),
                        cities: vec!["Latina".to_string(), "Gaeta".to_string()],
                    },
                ],
            },
            RegionEntry {
                region: "Emilia-Romagna".to_string(),
                provinces: vec![ProvinceEntry {
                    name: "Ravenna".to_string(),
                    cities: vec!["Ravenna".to_string(), "Cervia".to_string()],
                }],
            },
            RegionEntry {
                region: "Toscana".to_string(),
                provinces: vec![ProvinceEntry {
                    name: "Grosseto".to_string(),
                    cities: vec!["Roccastrada".to_string(), "Orbetello".to_string()],
                }],
            },
        ]
    }

    fn cities(results: &[&GeoRecord]) -> Vec<String> {
        results.iter().map(|r| r.city.clone()).collect()
    }

    #[test]
    fn test_build_keeps_source_order() {
        let index = LocationIndex::build(&sample());
        let all: Vec<&str> = index.records().iter().map(|r| r.city.as_str()).collect();
        assert_eq!(
            all,
            vec!["Roma", "Fiumicino", "Ciampino", "Latina", "Gaeta", "Ravenna", "Cervia", "Roccastrada", "Orbetello"]
        );
    }

    #[test]
    fn test_record_labels() {
        let record = GeoRecord::new("Fiumicino", "Roma", "Lazio");
        assert_eq!(record.display_label, "Fiumicino, Lazio");
        assert_eq!(record.search_key, "fiumicino, roma, lazio");
    }

    #[test]
    fn test_malformed_dataset_yields_empty_index() {
        assert!(LocationIndex::from_json("not json").is_empty());
        assert!(LocationIndex::from_json("").is_empty());
        assert!(LocationIndex::from_json("[]").is_empty());
        assert!(matches!(
            LocationIndex::try_from_json("{\"region\": 1}"),
            Err(DatasetError::Parse(_))
        ));
        assert!(matches!(LocationIndex::try_from_json("[]"), Err(DatasetError::Empty)));
    }

    #[test]
    fn test_from_json() {
        let raw = r#"[{"region": "Puglia", "provinces": [{"name": "Bari", "cities": ["Bari", "Monopoli"]}]}]"#;
        let index = LocationIndex::from_json(raw);
        assert_eq!(index.len(), 2);
        assert_eq!(index.records()[1].display_label, "Monopoli, Puglia");
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let index = LocationIndex::try_from_json(BUNDLED_DATASET).unwrap();
        assert_eq!(index.len(), 149);
        assert_eq!(index.records()[0].display_label, "Torino, Piemonte");
    }

    #[test]
    fn test_short_queries_return_nothing() {
        let index = LocationIndex::build(&sample());
        assert!(index.query("").is_empty());
        assert!(index.query("r").is_empty());
        assert!(index.query("ro").is_empty());
        assert!(!index.query("rom").is_empty());
    }

    #[test]
    fn test_every_result_contains_input() {
        let index = LocationIndex::build(&sample());
        for input in ["rom", "ROMA", "lazio", "ina", "enna"] {
            let results = index.query(input);
            assert!(results.len() <= MAX_SUGGESTIONS);
            for record in results {
                assert!(record.search_key.contains(&input.to_lowercase()));
            }
        }
    }

    #[test]
    fn test_matches_province_and_region() {
        let index = LocationIndex::build(&sample());
        // "lazio" only appears at region level
        assert_eq!(index.query("lazio").len(), 5);
        // Cervia matches through its province
        assert!(cities(&index.query("ravenna")).contains(&"Cervia".to_string()));
    }

    #[test]
    fn test_exact_match_first() {
        let index = LocationIndex::build(&sample());
        let results = cities(&index.query("Roma"));
        assert_eq!(results[0], "Roma");
        // The rest of the province and Emilia-Romagna follow alphabetically
        assert_eq!(results[1..], ["Cervia", "Ciampino", "Fiumicino", "Ravenna"]);
    }

    #[test]
    fn test_prefix_before_contains() {
        let index = LocationIndex::build(&sample());
        // "Roccastrada" starts with "roc"; nothing else contains it
        let results = cities(&index.query("roc"));
        assert_eq!(results, vec!["Roccastrada"]);

        // "Ravenna" is a prefix match, "Cervia" only matches by province
        let results = cities(&index.query("raven"));
        assert_eq!(results, vec!["Ravenna", "Cervia"]);
    }

    #[test]
    fn test_alphabetical_tie_break() {
        let index = LocationIndex::build(&sample());
        let results = cities(&index.query("lazio"));
        assert_eq!(results, vec!["Ciampino", "Fiumicino", "Gaeta", "Latina", "Roma"]);
    }

    #[test]
    fn test_truncates_to_max_suggestions() {
        let regions = vec![RegionEntry {
            region: "Sardegna".to_string(),
            provinces: vec![ProvinceEntry {
                name: "Sud Sardegna".to_string(),
                cities: (0..20).map(|i| format!("Borgo {:02}", i)).collect(),
            }],
        }];
        let index = LocationIndex::build(&regions);
        let results = index.query("borgo");
        assert_eq!(results.len(), MAX_SUGGESTIONS);
        assert_eq!(results[0].city, "Borgo 00");
        assert_eq!(results[7].city, "Borgo 07");
    }
}
