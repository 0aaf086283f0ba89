use crate::io::atomic_write_str;
use crate::paths::{ConfigError, TonadaPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;

/// Usa toml_edit para escritura preservando comentarios
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: TonadaPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: TonadaPaths) -> Self {
    Self { paths }
  }

  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    use std::io::ErrorKind;

    let path = self.paths.config_file();
    let content = match std::fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        return Ok(T::default());
      }
      Err(e) => return Err(e.into()),
    };

    let toml_val: toml::Value = toml::from_str(&content)?;

    let Some(table) = toml_val.get(section) else {
      return Ok(T::default());
    };

    let t: T = table
      .clone()
      .try_into()
      .map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))?;

    Ok(t)
  }
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = fs::read_to_string(&path)?;
    let toml_val: toml::Value = toml::from_str(&content)?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    let t: T = table
      .clone()
      .try_into()
      .map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))?;

    Ok(t)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    use std::io::ErrorKind;

    let path = self.paths.config_file();

    // 1) Leer config actual como DocumentMut o crear doc vacío si no existe.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        // documento nuevo
        DocumentMut::new()
      }
      Err(e) => return Err(e.into()),
    };

    // 2) Serializar el valor de la sección con `toml` normal (serde) a string.
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    // 3) Parsear esa representación parcial a `toml_edit::Item`.
    //    Ojo: `section_str` suele tener formato:
    //      "foo = 1\nbar = 2\n"
    //    que es una tabla "inline" sin cabecera.
    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
      .into_item();

    // 4) Insertar / reemplazar la sección en la raíz preservando comentarios externos.
    doc[section] = section_item;

    // 5) Serializar el documento completo preservando comentarios/espacios.
    let serialized = doc.to_string();

    // 6) Escritura atómica.
    atomic_write_str(&path, &serialized)?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct DemoSection {
    db_path: String,
    verbose: bool,
  }

  fn backend_in(dir: &std::path::Path) -> TomlConfigBackend {
    let paths = TonadaPaths {
      base_dir: dir.to_path_buf(),
      config_dir: dir.to_path_buf(),
      data_dir: dir.to_path_buf(),
      cache_dir: dir.to_path_buf(),
    };
    TomlConfigBackend::new(paths)
  }

  #[test]
  fn save_then_load_round_trips_a_section() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());

    let section = DemoSection { db_path: "store.db".into(), verbose: true };
    backend.save_section("storage", &section).unwrap();

    let loaded: DemoSection = backend.load_section("storage").unwrap();
    assert_eq!(loaded, section);
  }

  #[test]
  fn missing_file_falls_back_to_default() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());

    let loaded: DemoSection = backend.load_section_with_default("storage").unwrap();
    assert_eq!(loaded, DemoSection::default());
  }

  #[test]
  fn saving_one_section_keeps_the_others() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());

    backend
      .save_section("storage", &DemoSection { db_path: "a.db".into(), verbose: false })
      .unwrap();
    backend
      .save_section("reports", &DemoSection { db_path: "b.db".into(), verbose: true })
      .unwrap();

    let storage: DemoSection = backend.load_section("storage").unwrap();
    let reports: DemoSection = backend.load_section("reports").unwrap();
    assert_eq!(storage.db_path, "a.db");
    assert_eq!(reports.db_path, "b.db");
  }
}
