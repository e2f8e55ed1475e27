use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use layout_prims::api::scale_flat_to_box;
use layout_prims::prelude::*;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod doc;
mod provenance;

use doc::{read_values, PointDoc};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Drive the layout primitives on JSON inputs")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print a random permutation of 0..n as JSON
    Perm {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        /// Rejection-sampled bounded draws instead of modulo reduction
        #[arg(long)]
        unbiased: bool,
    },
    /// Print the ascending ranking of a JSON number array
    Rank {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print the distance between two points of a point-set document
    Dist {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        i: usize,
        #[arg(long)]
        j: usize,
        /// Clamp below by the distance floor
        #[arg(long)]
        floored: bool,
        /// Floor used with --floored
        #[arg(long, default_value_t = MIN_DIST, requires = "floored")]
        min_dist: f64,
    },
    /// Scale a point-set document into a box and write it with a provenance sidecar
    Scale {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Target box as xmin,ymin,xmax,ymax
        #[arg(long, value_parser = parse_bbox, allow_hyphen_values = true)]
        bbox: BBox2,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = match cmd.action {
        Action::Perm { n, seed, unbiased } => perm(n, seed, unbiased),
        Action::Rank { input } => rank(&input)?,
        Action::Dist {
            input,
            i,
            j,
            floored,
            min_dist,
        } => dist(&input, i, j, floored.then_some(DistanceCfg { min_dist }))?,
        Action::Scale { input, out, bbox } => scale(&input, &out, bbox)?,
        Action::Report => report(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn parse_bbox(s: &str) -> Result<BBox2, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<_, _>>()?;
    let [xmin, ymin, xmax, ymax] = parts[..] else {
        return Err(format!("expected 4 comma-separated numbers, got {}", parts.len()));
    };
    if !(xmin <= xmax && ymin <= ymax) {
        return Err("box needs xmin <= xmax and ymin <= ymax".to_string());
    }
    Ok(BBox2::new(xmin, ymin, xmax, ymax))
}

fn perm(n: usize, seed: u64, unbiased: bool) -> Value {
    let bounded = if unbiased {
        BoundedDraw::Unbiased
    } else {
        BoundedDraw::Modulo
    };
    tracing::info!(n, seed, ?bounded, "perm");
    let mut stream = RandomStream::new(StreamCfg { seed, bounded });
    json!(random_permutation(n, &mut stream))
}

fn rank(input: &Path) -> Result<Value> {
    let values = read_values(input)?;
    tracing::info!(input = %input.display(), n = values.len(), "rank");
    Ok(json!(rank_ascending(&values)))
}

fn dist(input: &Path, i: usize, j: usize, floor: Option<DistanceCfg>) -> Result<Value> {
    let doc = PointDoc::read(input)?;
    let ps = doc.view()?;
    tracing::info!(input = %input.display(), i, j, floored = floor.is_some(), "dist");
    let d = match floor {
        Some(cfg) => distance_floored_with(&ps, i, j, cfg),
        None => distance(&ps, i, j),
    }
    .with_context(|| format!("distance between points {i} and {j}"))?;
    Ok(json!(d))
}

fn scale(input: &Path, out: &Path, bbox: BBox2) -> Result<Value> {
    let mut doc = PointDoc::read(input)?;
    if doc.dim < 2 {
        bail!("scale needs dim >= 2, {} has dim {}", input.display(), doc.dim);
    }
    let n = doc.len();
    let factor = scale_flat_to_box(
        bbox.min.x,
        bbox.min.y,
        bbox.max.x,
        bbox.max.y,
        n,
        doc.dim,
        &mut doc.coords,
    )?;
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        n,
        scale = factor,
        "scale"
    );
    doc.write(out)?;
    let params = json!({
        "bbox": [bbox.min.x, bbox.min.y, bbox.max.x, bbox.max.y],
        "dim": doc.dim,
        "n": n,
        "scale": factor,
    });
    let sidecar = provenance::write_sidecar(out, Payload::new("scale", params).with_input(input))?;
    Ok(json!({
        "scale": factor,
        "out": out.to_string_lossy(),
        "provenance": sidecar.to_string_lossy(),
    }))
}

fn report() -> Value {
    provenance::document(&Payload::new("report", json!({ "min_dist": MIN_DIST })), &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn bbox_parsing() {
        assert_eq!(parse_bbox("0,-1,10,5").unwrap(), BBox2::new(0.0, -1.0, 10.0, 5.0));
        assert!(parse_bbox("0,0,1").is_err());
        assert!(parse_bbox("0,0,x,1").is_err());
        assert!(parse_bbox("5,0,1,1").is_err());
    }

    #[test]
    fn min_dist_requires_floored() {
        let base = ["cli", "dist", "--input", "p.json", "--i", "0", "--j", "1"];
        let bare = [&base[..], &["--min-dist", "0.5"][..]].concat();
        assert!(Cmd::try_parse_from(bare).is_err());
        let floored = [&base[..], &["--floored", "--min-dist", "0.5"][..]].concat();
        match Cmd::try_parse_from(floored).unwrap().action {
            Action::Dist {
                floored, min_dist, ..
            } => {
                assert!(floored);
                assert_eq!(min_dist, 0.5);
            }
            _ => panic!("expected dist"),
        }
        let defaulted = Cmd::try_parse_from(base).unwrap();
        assert!(matches!(defaulted.action, Action::Dist { floored: false, .. }));
    }

    #[test]
    fn perm_is_seeded() {
        assert_eq!(perm(20, 3, false), perm(20, 3, false));
        let v: Vec<usize> = serde_json::from_value(perm(20, 3, true)).unwrap();
        assert!(is_permutation(&v));
    }

    #[test]
    fn rank_and_dist_from_files() {
        let dir = tempdir().unwrap();
        let values = dir.path().join("v.json");
        fs::write(&values, "[3.0, 1.0, 2.0]").unwrap();
        assert_eq!(rank(&values).unwrap(), json!([1, 2, 0]));

        let pts = dir.path().join("p.json");
        fs::write(&pts, r#"{"dim": 2, "coords": [0, 0, 3, 4, 0, 0]}"#).unwrap();
        assert_eq!(dist(&pts, 0, 1, None).unwrap(), json!(5.0));
        let floor = DistanceCfg { min_dist: 0.25 };
        assert_eq!(dist(&pts, 0, 2, Some(floor)).unwrap(), json!(0.25));
        assert!(dist(&pts, 0, 3, None).is_err());
    }

    #[test]
    fn scale_writes_output_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("raw.json");
        let out = dir.path().join("out/scaled.json");
        fs::write(&input, r#"{"dim": 2, "coords": [0, 0, 10, 0, 0, 10]}"#).unwrap();
        let res = scale(&input, &out, BBox2::new(0.0, 0.0, 100.0, 100.0)).unwrap();
        assert_eq!(res["scale"], json!(10.0));
        let doc = PointDoc::read(&out).unwrap();
        assert_eq!(doc.coords, vec![0.0, 0.0, 100.0, 0.0, 0.0, 100.0]);
        assert!(dir.path().join("out/scaled.provenance.json").exists());
    }
}
