//! Classification entry points.
//!
//! Each call runs the configured rule families against one pillar and
//! unions their hits. Families are independent, so the result does not
//! depend on the order they are listed in.

use ganzhi_base::Pillar;
use tracing::{debug, trace};

use crate::chart::{Chart, PillarPosition};
use crate::engine_types::{Classification, ShenShaConfig};
use crate::error::ShenShaError;
use crate::label::ShenShaSet;
use crate::rules::RuleContext;

/// Labels for the pillar at `position` under the default configuration.
///
/// Returns [`ShenShaError::MissingPillar`] when the hour is queried on a
/// chart without one.
pub fn classify(chart: &Chart, position: PillarPosition) -> Result<ShenShaSet, ShenShaError> {
    classify_with(chart, position, &ShenShaConfig::default()).map(|c| c.labels)
}

/// Labels for the pillar at `position` under `config`.
pub fn classify_with(
    chart: &Chart,
    position: PillarPosition,
    config: &ShenShaConfig,
) -> Result<Classification, ShenShaError> {
    let pillar = chart
        .pillar(position)
        .ok_or(ShenShaError::MissingPillar(position))?;

    Ok(run(chart, position, pillar, config))
}

/// Classify every present pillar, in Year → Month → Day → Hour order.
pub fn classify_chart(chart: &Chart, config: &ShenShaConfig) -> Vec<Classification> {
    chart
        .pillars()
        .map(|(position, pillar)| run(chart, position, pillar, config))
        .collect()
}

fn run(
    chart: &Chart,
    position: PillarPosition,
    pillar: Pillar,
    config: &ShenShaConfig,
) -> Classification {
    let ctx = RuleContext {
        chart,
        position,
        pillar,
        san_qi_scope: config.san_qi_scope,
    };

    let labels: ShenShaSet = config
        .families
        .iter()
        .flat_map(|family| {
            let hits = family.evaluate(&ctx);
            trace!(?family, ?hits, position = position.name(), "rule family evaluated");
            hits
        })
        .collect();

    debug!(
        position = position.name(),
        %pillar,
        count = labels.len(),
        "pillar classified"
    );

    Classification {
        position,
        pillar,
        labels,
    }
}
