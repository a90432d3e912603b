//! The batch pipeline: load both collections, index the transects once, match
//! every shoreline against its spatial candidates, and serialize the gradient
//! features.

use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, info};

use shore_common::geometry::bounding_box;
use shore_geojson::{Feature, FeatureCollection};
use shore_gradient::{
    build_gradient, trend_color, GradientConfig, Intersection, IntersectionEngine,
};
use shore_index::GridIndex;

/// Counters summarizing one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Shoreline features considered (after any limit).
    pub shorelines: usize,
    /// Transect features loaded.
    pub transects: usize,
    /// Shoreline features skipped for not being processable polylines.
    pub skipped_shorelines: usize,
    /// Pairs that reached the exact intersection test.
    pub exact_checks: usize,
    /// Accepted intersections across all shorelines.
    pub intersections: usize,
    /// Gradient features written to the output.
    pub gradients: usize,
}

/// Per-shoreline result collected from the parallel region.
struct ShorelineOutcome {
    feature: Option<Feature>,
    intersections: usize,
    skipped: bool,
}

/// Run the batch: read `shorelines_path` and `transects_path`, write the
/// gradient collection to `output_path`.
///
/// `limit` truncates the shoreline list for partial-dataset runs. Failing to
/// load either input is the only fatal error; malformed individual features
/// are skipped.
pub fn run(
    shorelines_path: &Path,
    transects_path: &Path,
    output_path: &Path,
    limit: Option<usize>,
    config: GradientConfig,
) -> Result<PipelineStats> {
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    let mut shorelines = FeatureCollection::from_file(shorelines_path)
        .context("failed to load shorelines collection")?;
    let transects = FeatureCollection::from_file(transects_path)
        .context("failed to load transects collection")?;

    if let Some(limit) = limit {
        shorelines.features.truncate(limit);
        info!(limit, "limiting shoreline count");
    }

    info!(
        shorelines = shorelines.len(),
        transects = transects.len(),
        "loaded feature collections"
    );

    let index = GridIndex::build(
        transects.features.iter().enumerate().filter_map(|(i, f)| {
            f.line_coordinates()
                .and_then(bounding_box)
                .map(|bbox| (i, bbox))
        }),
        config.cell_size,
    );
    info!(
        cells = index.cell_count(),
        indexed = index.entry_count(),
        cell_size = config.cell_size,
        "built transect grid index"
    );

    let engine = IntersectionEngine::new(&config);

    // Shorelines are independent once the index exists; the index and engine
    // are shared immutably across the pool and results are concatenated.
    let outcomes: Vec<ShorelineOutcome> = shorelines
        .features
        .par_iter()
        .map(|shore| process_shoreline(shore, &transects.features, &index, &engine))
        .collect();

    let mut stats = PipelineStats {
        shorelines: shorelines.len(),
        transects: transects.len(),
        exact_checks: engine.exact_tests(),
        ..Default::default()
    };

    let mut output = FeatureCollection::new();
    for outcome in outcomes {
        stats.intersections += outcome.intersections;
        if outcome.skipped {
            stats.skipped_shorelines += 1;
        }
        if let Some(feature) = outcome.feature {
            stats.gradients += 1;
            output.features.push(feature);
        }
    }

    output
        .to_file(output_path)
        .context("failed to write gradient collection")?;

    info!(
        shorelines = stats.shorelines,
        skipped = stats.skipped_shorelines,
        exact_checks = stats.exact_checks,
        intersections = stats.intersections,
        gradients = stats.gradients,
        output = %output_path.display(),
        "batch complete"
    );

    Ok(stats)
}

/// Match one shoreline against its candidate transects and build its
/// gradient. Shorelines without a usable polyline are skipped, and a
/// shoreline with fewer than two valid intersections simply yields no
/// feature; neither case is an error.
fn process_shoreline(
    shore: &Feature,
    transects: &[Feature],
    index: &GridIndex,
    engine: &IntersectionEngine,
) -> ShorelineOutcome {
    let skipped = ShorelineOutcome {
        feature: None,
        intersections: 0,
        skipped: true,
    };

    let coords = match shore.line_coordinates() {
        Some(coords) => coords,
        None => return skipped,
    };
    let bbox = match bounding_box(coords) {
        Some(bbox) => bbox,
        None => return skipped,
    };

    let candidates = index.query(&bbox);
    let mut intersections = Vec::new();

    for idx in candidates {
        let transect = &transects[idx];
        let transect_coords = match transect.line_coordinates() {
            Some(c) => c,
            None => continue,
        };

        if let Some(distance) = engine.find_intersection(coords, transect_coords) {
            let trend = transect.trend();
            intersections.push(Intersection {
                distance,
                color: trend_color(trend, Some(transect.sample_count())),
                transect_id: transect.transect_id(),
                trend,
            });
        }
    }

    let found = intersections.len();
    debug!(intersections = found, "shoreline matched");

    ShorelineOutcome {
        feature: build_gradient(coords, intersections)
            .map(|g| g.into_feature(shore.properties.clone())),
        intersections: found,
        skipped: false,
    }
}
