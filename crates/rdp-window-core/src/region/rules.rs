//! Ordered decoration-height rules.
//!
//! The window server does not report title bar thickness, so the
//! decoration height is guessed from the window's size, layer and title.
//! Rules are evaluated in [`DecorationRule::ORDERED`] order and the first
//! rule that applies decides.

use serde::{Deserialize, Serialize};

use super::types::RegionContext;
use crate::window::WindowDescriptor;

/// Titles of system surfaces that never have a title bar
pub const SYSTEM_SURFACE_TITLES: &[&str] = &["Dock", "Desktop", "Wallpaper"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Fullscreen,
    SystemSurface,
    TitleBar,
}

/// One decoration-height rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationRule {
    /// Window covers the screen (within tolerance): no title bar
    Fullscreen,
    /// Non-normal layer, untitled, or a known system surface: no title bar
    SystemSurface,
    /// Ordinary window: the OS tier's title bar height
    TitleBar,
}

impl DecorationRule {
    pub const ORDERED: [DecorationRule; 3] = [
        DecorationRule::Fullscreen,
        DecorationRule::SystemSurface,
        DecorationRule::TitleBar,
    ];

    pub fn kind(&self) -> RuleKind {
        match self {
            DecorationRule::Fullscreen => RuleKind::Fullscreen,
            DecorationRule::SystemSurface => RuleKind::SystemSurface,
            DecorationRule::TitleBar => RuleKind::TitleBar,
        }
    }

    /// Decoration height this rule assigns, or `None` if it does not apply.
    pub fn decoration_height(
        &self,
        window: &WindowDescriptor,
        context: &RegionContext,
    ) -> Option<f64> {
        match self {
            DecorationRule::Fullscreen => is_fullscreen(window, context).then_some(0.0),
            DecorationRule::SystemSurface => is_system_surface(window).then_some(0.0),
            DecorationRule::TitleBar => Some(context.decoration.for_tier(context.os_tier)),
        }
    }
}

fn is_fullscreen(window: &WindowDescriptor, context: &RegionContext) -> bool {
    let Some(screen) = context.screen else {
        return false;
    };
    let bounds = window.bounds();
    bounds.width >= screen.width - context.fullscreen_tolerance
        && bounds.height >= screen.height - context.fullscreen_tolerance
}

fn is_system_surface(window: &WindowDescriptor) -> bool {
    !window.is_normal_layer()
        || window.title().is_empty()
        || SYSTEM_SURFACE_TITLES
            .iter()
            .any(|name| window.title().contains(name))
}
