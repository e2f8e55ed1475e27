//! JSON point-set documents: `{ "dim": 2, "coords": [x0, y0, x1, y1, ...] }`.

use anyhow::{bail, Context, Result};
use layout_prims::points::PointSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointDoc {
    pub dim: usize,
    pub coords: Vec<f64>,
}

impl PointDoc {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let doc: PointDoc = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing point set {}", path.display()))?;
        doc.view()?;
        Ok(doc)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating output dir {}", parent.display()))?;
            }
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }

    pub fn len(&self) -> usize {
        if self.dim == 0 {
            0
        } else {
            self.coords.len() / self.dim
        }
    }

    pub fn view(&self) -> Result<PointSet<'_>> {
        if self.dim == 0 {
            bail!("point set has dim 0");
        }
        Ok(PointSet::from_flat(&self.coords, self.dim)?)
    }
}

/// Read a JSON array of numbers.
pub fn read_values(path: &Path) -> Result<Vec<f64>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing number array {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/points.json");
        let doc = PointDoc {
            dim: 2,
            coords: vec![0.0, 0.0, 3.0, 4.0],
        };
        doc.write(&path).unwrap();
        let back = PointDoc::read(&path).unwrap();
        assert_eq!(back, doc);
        assert_eq!(back.len(), 2);
    }

    #[test]
    fn ragged_document_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"dim": 2, "coords": [1.0, 2.0, 3.0]}"#).unwrap();
        let err = PointDoc::read(&path).unwrap_err();
        assert!(format!("{err:#}").contains("buffer too short"));
    }
}
