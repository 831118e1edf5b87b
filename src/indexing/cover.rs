use std::collections::HashMap;
use crate::indexing::lexicon::{CoverTable, DEFAULT_COVER};

/// Total mapping from category label to cover artwork.
pub struct CoverMapper {
    covers: HashMap<String, String>,
    default_asset: String,
}

impl CoverMapper {
    pub fn new(table: &CoverTable) -> Self {
        let default_asset = if table.default_asset.trim().is_empty() {
            DEFAULT_COVER.to_string()
        } else {
            table.default_asset.clone()
        };
        let covers = table
            .entries
            .iter()
            .filter(|entry| !entry.asset.trim().is_empty())
            .map(|entry| (entry.category.clone(), entry.asset.clone()))
            .collect();
        Self { covers, default_asset }
    }

    pub fn map_cover(&self, category: &str) -> &str {
        self.covers
            .get(category)
            .map(String::as_str)
            .unwrap_or(self.default_asset.as_str())
    }
}

impl Default for CoverMapper {
    fn default() -> Self {
        Self::new(&CoverTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexing::lexicon::{CoverEntry, DEFAULT_CATEGORY};
    use pretty_assertions::assert_eq;

    #[test]
    fn known_category_maps_to_its_cover() {
        assert_eq!(CoverMapper::default().map_cover("Stress & émotions"), "/covers/emotions.png");
    }

    #[test]
    fn unknown_category_maps_to_default() {
        let mapper = CoverMapper::default();
        assert_eq!(mapper.map_cover("Cuisine"), DEFAULT_COVER);
        assert_eq!(mapper.map_cover(""), DEFAULT_COVER);
    }

    #[test]
    fn default_category_is_stable() {
        let mapper = CoverMapper::default();
        let first = mapper.map_cover(DEFAULT_CATEGORY).to_string();
        assert_eq!(mapper.map_cover(DEFAULT_CATEGORY), first);
    }

    #[test]
    fn blank_assets_never_leak_out() {
        let mapper = CoverMapper::new(&CoverTable {
            entries: vec![CoverEntry {
                category: "Vide".into(),
                asset: " ".into(),
            }],
            default_asset: String::new(),
        });
        assert_eq!(mapper.map_cover("Vide"), DEFAULT_COVER);
        assert_eq!(mapper.map_cover("Autre"), DEFAULT_COVER);
    }
}
