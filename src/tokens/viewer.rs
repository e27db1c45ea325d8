use std::time::{Duration, Instant};

use serde::Serialize;

use crate::tokens::catalog::{
    DURATIONS, EASINGS, FONT_SIZES, FONT_WEIGHTS, LETTER_SPACING, LINE_HEIGHTS, PRIMITIVE_COLORS,
    RADII, SEMANTIC_COLORS, SHADOWS, SPACING, TYPE_PRESETS, TokenGroup, TypePreset,
};
use crate::tokens::clipboard::Clipboard;
use crate::tokens::export::css_reference;
use crate::tokens::keyframes::{Keyframe, Pose};
use crate::tokens::search::{GroupView, Query, filter_groups, filter_presets};

/// How long the "copied" badge stays up.
pub const COPY_ACK: Duration = Duration::from_millis(1200);
/// How long a keyframe preview stays selected.
pub const PREVIEW: Duration = Duration::from_millis(1200);

/// Navigation entries of the reference app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    /// Primitive and semantic colors.
    #[default]
    Colors,
    /// Spacing and radius scales.
    Spacing,
    /// Sizes, weights, presets, line heights and letter spacing.
    Typography,
    /// Shadow scale.
    Shadows,
    /// Durations, easings and keyframes.
    Animation,
    /// Button components.
    Buttons,
    /// Input components.
    Inputs,
    /// Card components.
    Cards,
    /// Badges and tags.
    Badges,
    /// Navigation components.
    Nav,
    /// Page layout patterns.
    Patterns,
    /// Bento grid section.
    Bento,
}

impl PageId {
    /// Every page in sidebar order.
    pub const ALL: [PageId; 12] = [
        Self::Colors,
        Self::Spacing,
        Self::Typography,
        Self::Shadows,
        Self::Animation,
        Self::Buttons,
        Self::Inputs,
        Self::Cards,
        Self::Badges,
        Self::Nav,
        Self::Patterns,
        Self::Bento,
    ];

    /// Route id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Spacing => "spacing",
            Self::Typography => "typography",
            Self::Shadows => "shadows",
            Self::Animation => "animation",
            Self::Buttons => "buttons",
            Self::Inputs => "inputs",
            Self::Cards => "cards",
            Self::Badges => "badges",
            Self::Nav => "nav",
            Self::Patterns => "patterns",
            Self::Bento => "bento",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Colors => "Colors",
            Self::Spacing => "Spacing & Radius",
            Self::Typography => "Typography",
            Self::Shadows => "Shadows",
            Self::Animation => "Animation",
            Self::Buttons => "Buttons",
            Self::Inputs => "Inputs",
            Self::Cards => "Cards",
            Self::Badges => "Badges & Tags",
            Self::Nav => "Navigation",
            Self::Patterns => "Page Patterns",
            Self::Bento => "Bento Section",
        }
    }

    /// Sidebar glyph.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Colors => "\u{25C6}",
            Self::Spacing => "\u{25A6}",
            Self::Typography => "Aa",
            Self::Shadows => "\u{25D0}",
            Self::Animation => "\u{25CE}",
            Self::Buttons => "\u{25B6}",
            Self::Inputs => "\u{25AD}",
            Self::Cards => "\u{25A2}",
            Self::Badges => "\u{25CF}",
            Self::Nav => "\u{2630}",
            Self::Patterns => "\u{229E}",
            Self::Bento => "\u{2593}",
        }
    }

    /// Page with route id `id`.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Like [`PageId::parse`], falling back to [`PageId::Colors`].
    pub fn from_id(id: &str) -> Self {
        Self::parse(id).unwrap_or_default()
    }

    /// Token pages come first in the sidebar; the rest show components.
    pub fn is_token_page(self) -> bool {
        matches!(
            self,
            Self::Colors | Self::Spacing | Self::Typography | Self::Shadows | Self::Animation
        )
    }

    /// Token groups listed on this page.
    pub fn groups(self) -> Vec<&'static TokenGroup> {
        match self {
            Self::Colors => PRIMITIVE_COLORS.iter().chain(SEMANTIC_COLORS.iter()).collect(),
            Self::Spacing => vec![&SPACING, &RADII],
            Self::Typography => vec![&FONT_SIZES, &FONT_WEIGHTS, &LINE_HEIGHTS, &LETTER_SPACING],
            Self::Shadows => vec![&SHADOWS],
            Self::Animation => vec![&DURATIONS, &EASINGS],
            _ => Vec::new(),
        }
    }
}

/// The "copied" badge of one token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyAck {
    /// Copied token name.
    pub token: String,
    /// Instant the badge disappears.
    pub until: Instant,
}

/// A running keyframe preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preview {
    /// Previewed keyframe.
    pub keyframe: Keyframe,
    /// Click instant.
    pub started: Instant,
}

/// View-model of the token reference app.
///
/// Every transition is an explicit method; time-dependent state stores its expiry instant.
#[derive(Clone, Debug, Default)]
pub struct ViewerState {
    page: PageId,
    search: String,
    copied: Option<CopyAck>,
    preview: Option<Preview>,
}

impl ViewerState {
    /// Colors page, empty search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Active page.
    pub fn page(&self) -> PageId {
        self.page
    }

    /// Navigate to route `id`; unknown ids show the colors page.
    pub fn select_page(&mut self, id: &str) {
        self.page = PageId::from_id(id);
    }

    /// Current search text as typed.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Groups of the active page narrowed by the search text.
    pub fn visible_groups(&self) -> Vec<GroupView> {
        filter_groups(self.page.groups(), &Query::new(&self.search))
    }

    /// Typography presets shown on the typography page.
    pub fn visible_presets(&self) -> Vec<&'static TypePreset> {
        if self.page != PageId::Typography {
            return Vec::new();
        }
        filter_presets(TYPE_PRESETS.iter(), &Query::new(&self.search))
    }

    /// Copy `var(<token>)` and show the badge until `now + COPY_ACK`.
    ///
    /// Clipboard failures are swallowed and leave no badge. A newer copy replaces an older badge.
    pub fn copy(&mut self, token: &str, clipboard: &mut dyn Clipboard, now: Instant) -> bool {
        match clipboard.write_text(&css_reference(token)) {
            Ok(()) => {
                self.copied = Some(CopyAck {
                    token: token.to_owned(),
                    until: now + COPY_ACK,
                });
                true
            }
            Err(e) => {
                tracing::debug!(token, error = %e, "clipboard write failed");
                false
            }
        }
    }

    /// Token whose badge is visible at `now`.
    pub fn copied_token(&self, now: Instant) -> Option<&str> {
        self.copied
            .as_ref()
            .filter(|ack| now < ack.until)
            .map(|ack| ack.token.as_str())
    }

    /// Start previewing `keyframe`, replacing any running preview.
    pub fn play_preview(&mut self, keyframe: Keyframe, now: Instant) {
        self.preview = Some(Preview {
            keyframe,
            started: now,
        });
    }

    /// Keyframe being previewed at `now`.
    pub fn playing(&self, now: Instant) -> Option<Keyframe> {
        self.preview
            .filter(|p| now.saturating_duration_since(p.started) < PREVIEW)
            .map(|p| p.keyframe)
    }

    /// Pose of the `keyframe` swatch at `now`; swatches not being previewed rest.
    pub fn preview_pose(&self, keyframe: Keyframe, now: Instant) -> Pose {
        match self.preview {
            Some(p) if p.keyframe == keyframe && self.playing(now).is_some() => {
                keyframe.pose(now.saturating_duration_since(p.started))
            }
            _ => Pose::REST,
        }
    }

    /// Drop the badge and preview once they have expired.
    pub fn tick(&mut self, now: Instant) {
        if self.copied.as_ref().is_some_and(|ack| now >= ack.until) {
            self.copied = None;
        }
        if self.playing(now).is_none() {
            self.preview = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tokens/viewer.rs"]
mod tests;
