//! Classification demo: two overlapping discs and a cut half-plane,
//! printed as an ASCII raster.
//!
//! ```text
//! cargo run --example classify
//! RUST_LOG=conic_csg=debug cargo run --example classify
//! ```

use conic_csg::csg::{BooleanOp, Region};
use conic_csg::domain::{Geometry, NO_REGION};
use conic_csg::geometry::QuadraticSurface;
use conic_csg::math::Point2;

const GLYPHS: [char; 3] = ['#', 'o', '+'];

fn main() -> conic_csg::Result<()> {
    // Default: WARN for everything, INFO for conic_csg.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("conic_csg=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut geometry = Geometry::new(-4.0, 4.0, -2.0, 2.0)?;

    let mut left = Region::new();
    left.append_surface(
        QuadraticSurface::circle(Point2::new(-1.0, 0.0), 1.5)?,
        true,
        BooleanOp::Union,
    );
    left.append_surface(QuadraticSurface::y_plane(0.5)?, true, BooleanOp::Intersection);
    geometry.add_region(left);

    let mut right = Region::new();
    right.append_surface(
        QuadraticSurface::ellipse(Point2::new(1.5, 0.0), 2.0, 1.0)?,
        true,
        BooleanOp::Union,
    );
    right.append_surface(
        QuadraticSurface::circle(Point2::new(2.0, 0.0), 0.5)?,
        true,
        BooleanOp::Difference,
    );
    geometry.add_region(right);

    let (nx, ny) = (64, 24);
    let grid = geometry.sample_grid(nx, ny)?;
    let map = geometry.classify_par(&grid);

    // Top row first so +y points up.
    for j in (0..ny).rev() {
        let line: String = (0..nx)
            .map(|i| match map[(i, j)] {
                NO_REGION => '.',
                k => usize::try_from(k)
                    .ok()
                    .and_then(|k| GLYPHS.get(k).copied())
                    .unwrap_or('?'),
            })
            .collect();
        println!("{line}");
    }
    Ok(())
}
