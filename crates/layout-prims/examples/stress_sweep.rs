//! One stochastic stress-style sweep over a ring graph, then fit to a canvas.
//!
//! Run: `cargo run -p layout-prims --example stress_sweep`

use layout_prims::prelude::*;

fn main() -> Result<(), PrimError> {
    let n = 12;
    let mut stream = RandomStream::seeded(DEFAULT_SEED);
    let mut coords: Vec<f64> = (0..2 * n).map(|_| stream.uniform01()).collect();

    // Ideal distance 1 between ring neighbours; move both endpoints halfway.
    for _sweep in 0..50 {
        for &i in &random_permutation(n, &mut stream) {
            let j = (i + 1) % n;
            let d = distance_floored(&PointSet::from_flat(&coords, 2)?, i, j)?;
            let r = (d - 1.0) / (2.0 * d);
            let (pi, pj) = (
                [coords[2 * i], coords[2 * i + 1]],
                [coords[2 * j], coords[2 * j + 1]],
            );
            let mut delta = pj;
            subtract_in_place(&pi, &mut delta)?; // delta = pi - pj
            saxpy_into_x(&mut coords[2 * i..2 * i + 2], &delta, -r)?;
            saxpy_into_x(&mut coords[2 * j..2 * j + 2], &delta, r)?;
        }
    }

    let mut ps = PointSetMut::new(&mut coords, n, 2)?;
    let out = scale_to_box(BBox2::new(0.0, 0.0, 400.0, 400.0), &mut ps)?;
    println!("scale={:.4}", out.scale);
    println!("{}", VecFmt { label: "coords=", values: &coords });
    Ok(())
}
