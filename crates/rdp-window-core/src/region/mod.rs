pub mod handler;
pub mod rules;
pub mod types;

pub use handler::resolve_content_region;
pub use rules::{DecorationRule, RuleKind};
pub use types::{CaptureRegion, DecorationHeights, OsTier, RegionContext, ScreenSize};
