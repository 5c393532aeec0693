use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Result;
use ron::ser::PrettyConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::Grammar;

/// A named set of grammars, e.g. a user's own preset file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub grammars: Vec<Grammar>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog {
            grammars: Vec::new(),
        }
    }

    pub fn add(&mut self, grammar: Grammar) {
        self.grammars.push(grammar);
    }

    /// Case-insensitive lookup by display name, like [`super::presets::by_name`].
    pub fn get(&self, name: &str) -> Option<&Grammar> {
        self.grammars.iter().find(|g| g.is_named(name))
    }

    pub fn to_file(&self, path: &Path) -> Result<()> {
        write_ron(self, path)
    }

    pub fn from_file(path: &Path) -> Result<Catalog> {
        read_ron(path)
    }
}

impl Grammar {
    pub fn to_ron_string(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(self, PrettyConfig::default())?)
    }

    pub fn from_ron_str(data: &str) -> Result<Grammar> {
        Ok(ron::from_str(data)?)
    }

    pub fn to_file(&self, path: &Path) -> Result<()> {
        write_ron(self, path)
    }

    pub fn from_file(path: &Path) -> Result<Grammar> {
        read_ron(path)
    }
}

/// Writes a sibling temp file, then renames it over the target.
fn write_ron<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let path: PathBuf = path.with_extension("ron");
    let tmp_path = path.with_extension(format!("ron.tmp-{}", rand::random::<usize>()));
    let content = ron::ser::to_string_pretty(value, PrettyConfig::default())?;
    std::fs::write(&tmp_path, content)?;
    std::fs::rename(&tmp_path, &path)?;
    Ok(())
}

fn read_ron<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let mut reader = std::fs::File::open(path)?;
    let mut data = String::new();
    reader.read_to_string(&mut data)?;
    Ok(ron::from_str(data.as_str())?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::l_system::presets;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}-{}", name, rand::random::<u32>()))
    }

    #[test]
    fn test_grammar_file() {
        let path = scratch("dragon").with_extension("ron");
        let dragon = presets::dragon();
        dragon.to_file(&path).expect("write grammar");
        let loaded = Grammar::from_file(&path).expect("read grammar");
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, dragon);
    }

    #[test]
    fn test_catalog_file() {
        let path = scratch("catalog").with_extension("ron");
        let mut catalog = Catalog::new();
        for g in presets::all() {
            catalog.add(g);
        }
        catalog.to_file(&path).expect("write catalog");
        let loaded = Catalog::from_file(&path).expect("read catalog");
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.grammars.len(), presets::all().len());
        assert_eq!(loaded.get("Fractal plant"), Some(&presets::plant()));
    }

    #[test]
    fn test_catalog_get_ignores_case() {
        let mut catalog = Catalog::new();
        catalog.add(presets::dragon());
        catalog.add(Grammar::new(Default::default(), "f", 90.0));
        assert_eq!(catalog.get("  dragon CURVE "), Some(&presets::dragon()));
        assert_eq!(
            catalog.get("Dragon curve").and_then(|g| g.name()),
            presets::by_name("dragon curve").as_ref().and_then(|g| g.name())
        );
        assert_eq!(catalog.get("f"), None);
    }

    #[test]
    fn test_hand_written_ron() {
        let g = Grammar::from_ron_str(
            r#"(rules: {'f': "f-f+f"}, seed: "f", angle: 60.0)"#,
        )
        .expect("parse");
        assert_eq!(g.rules().get('f'), Some("f-f+f"));
        assert_eq!(g.iterations(), None);
        assert_eq!(g.name(), None);
        assert!(Grammar::from_ron_str("(seed: 3)").is_err());
    }

    #[test]
    fn test_ron_string() {
        let g = presets::hilbert();
        let text = g.to_ron_string().unwrap();
        assert_eq!(Grammar::from_ron_str(&text).unwrap(), g);
    }
}
