use tracing::debug;

use super::rules::DecorationRule;
use super::types::{CaptureRegion, RegionContext};
use crate::window::WindowDescriptor;

/// Compute the content rectangle of a window
///
/// Applies [`DecorationRule::ORDERED`] (fullscreen, system surface, title
/// bar) and removes the chosen decoration height from the top of the
/// window bounds. Pure: the same descriptor and context always give the
/// same region. Never fails and never yields a negative height; a window
/// shorter than its decoration collapses to an empty region at its bottom
/// edge.
pub fn resolve_content_region(window: &WindowDescriptor, context: &RegionContext) -> CaptureRegion {
    let bounds = window.bounds();

    let (rule, decoration_height) = DecorationRule::ORDERED
        .iter()
        .find_map(|rule| {
            rule.decoration_height(window, context)
                .map(|height| (*rule, height.max(0.0)))
        })
        .unwrap_or((DecorationRule::SystemSurface, 0.0));

    let removed = decoration_height.min(bounds.height);
    let region = CaptureRegion {
        x: bounds.x,
        y: bounds.y + removed,
        width: bounds.width,
        height: (bounds.height - decoration_height).max(0.0),
        decoration_height,
        rule: rule.kind(),
    };

    debug!(
        event = "core.region.resolved",
        window_id = window.id(),
        rule = ?region.rule,
        decoration_height = decoration_height,
        height = region.height
    );
    region
}
