use serde::Serialize;

/// One named design constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    /// CSS custom property name, `--` prefixed.
    pub name: &'static str,
    /// Concrete CSS value.
    pub value: &'static str,
    /// Token this one aliases, when it is defined in terms of another token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<&'static str>,
    /// Short usage note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<&'static str>,
    /// Pixel magnitude for spacing and radius tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub px: Option<u32>,
}

const fn tok(name: &'static str, value: &'static str) -> Token {
    Token {
        name,
        value,
        reference: None,
        usage: None,
        px: None,
    }
}

const fn alias(
    name: &'static str,
    reference: &'static str,
    value: &'static str,
    usage: &'static str,
) -> Token {
    Token {
        name,
        value,
        reference: Some(reference),
        usage: Some(usage),
        px: None,
    }
}

const fn literal(name: &'static str, value: &'static str, usage: &'static str) -> Token {
    Token {
        name,
        value,
        reference: None,
        usage: Some(usage),
        px: None,
    }
}

const fn px(name: &'static str, value: &'static str, px: u32) -> Token {
    Token {
        name,
        value,
        reference: None,
        usage: None,
        px: Some(px),
    }
}

/// Kind of a token group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Raw palette colors.
    PrimitiveColor,
    /// Colors named by role, aliasing primitives.
    SemanticColor,
    /// Spacing scale.
    Spacing,
    /// Corner radii.
    Radius,
    /// Box shadows.
    Shadow,
    /// Font sizes.
    FontSize,
    /// Font weights.
    FontWeight,
    /// Line heights.
    LineHeight,
    /// Letter spacing.
    LetterSpacing,
    /// Animation durations.
    Duration,
    /// Easing curves.
    Easing,
}

/// Titled list of tokens of one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TokenGroup {
    /// Group kind.
    pub category: Category,
    /// Display title.
    pub title: &'static str,
    /// Tokens in display order.
    pub tokens: &'static [Token],
}

const fn group(category: Category, title: &'static str, tokens: &'static [Token]) -> TokenGroup {
    TokenGroup {
        category,
        title,
        tokens,
    }
}

/// Primitive palette.
pub static PRIMITIVE_COLORS: [TokenGroup; 7] = [
    group(
        Category::PrimitiveColor,
        "Neutral",
        &[
            tok("--color-neutral-0", "#FFFFFF"),
            tok("--color-neutral-50", "#FAFAFA"),
            tok("--color-neutral-100", "#F5F5F5"),
            tok("--color-neutral-200", "#E5E5E5"),
            tok("--color-neutral-300", "#D4D4D4"),
            tok("--color-neutral-400", "#A3A3A3"),
            tok("--color-neutral-500", "#727272"),
            tok("--color-neutral-600", "#515151"),
            tok("--color-neutral-700", "#252525"),
            tok("--color-neutral-800", "#1C1C1E"),
            tok("--color-neutral-900", "#0C0C0C"),
            tok("--color-neutral-1000", "#000000"),
        ],
    ),
    group(
        Category::PrimitiveColor,
        "Purple",
        &[
            tok("--color-purple-100", "#EDE9FE"),
            tok("--color-purple-200", "#BEB4FF"),
            tok("--color-purple-300", "#A87CFF"),
            tok("--color-purple-400", "#947AFC"),
            tok("--color-purple-500", "#925BFF"),
            tok("--color-purple-600", "#7C3AED"),
            tok("--color-purple-700", "#6D28D9"),
        ],
    ),
    group(
        Category::PrimitiveColor,
        "Blue",
        &[
            tok("--color-blue-100", "#BAE0FF"),
            tok("--color-blue-200", "#7EC8FF"),
            tok("--color-blue-300", "#45B0FF"),
            tok("--color-blue-400", "#1A9EFF"),
            tok("--color-blue-500", "#008CFF"),
            tok("--color-blue-600", "#0070CC"),
            tok("--color-blue-700", "#005499"),
        ],
    ),
    group(
        Category::PrimitiveColor,
        "Green",
        &[
            tok("--color-green-100", "#DCFCE7"),
            tok("--color-green-500", "#22C55E"),
            tok("--color-green-600", "#16A34A"),
        ],
    ),
    group(
        Category::PrimitiveColor,
        "Red",
        &[
            tok("--color-red-100", "#FEE2E2"),
            tok("--color-red-500", "#EF4444"),
            tok("--color-red-600", "#DC2626"),
        ],
    ),
    group(
        Category::PrimitiveColor,
        "Yellow",
        &[
            tok("--color-yellow-100", "#FEF9C3"),
            tok("--color-yellow-400", "#F2CB45"),
            tok("--color-yellow-500", "#EAB308"),
        ],
    ),
    group(
        Category::PrimitiveColor,
        "Accent",
        &[
            tok("--color-orange-500", "#FF630F"),
            tok("--color-pink-400", "#FF5FB0"),
        ],
    ),
];

/// Role-based colors.
pub static SEMANTIC_COLORS: [TokenGroup; 3] = [
    group(
        Category::SemanticColor,
        "Text",
        &[
            alias("--text-primary", "--color-neutral-0", "#FFFFFF", "Main text on dark"),
            alias("--text-secondary", "--color-neutral-400", "#A3A3A3", "Supporting text"),
            alias("--text-tertiary", "--color-neutral-500", "#727272", "Subtle / labels"),
            alias("--text-disabled", "--color-neutral-400", "#A3A3A3", "Disabled state"),
            alias("--text-inverse", "--color-neutral-1000", "#000000", "Text on light bg"),
            alias("--text-link", "--color-neutral-300", "#D4D4D4", "Links"),
            alias("--text-brand", "--color-purple-400", "#947AFC", "Brand accent text"),
            alias("--text-success", "--color-green-600", "#16A34A", "Success messages"),
            alias("--text-warning", "--color-yellow-500", "#EAB308", "Warning messages"),
            alias("--text-error", "--color-red-600", "#DC2626", "Error messages"),
        ],
    ),
    group(
        Category::SemanticColor,
        "Background",
        &[
            alias("--bg-primary", "--color-neutral-1000", "#000000", "Main background"),
            alias("--bg-secondary", "--color-neutral-900", "#0C0C0C", "Cards / sections"),
            alias("--bg-tertiary", "--color-neutral-800", "#1C1C1E", "Subtle surfaces"),
            alias("--bg-inverse", "--color-neutral-0", "#FFFFFF", "Light surfaces"),
            alias("--bg-elevated", "--color-neutral-700", "#252525", "Elevated layers"),
            alias("--bg-sunken", "--color-neutral-900", "#0C0C0C", "Recessed areas"),
            literal("--bg-glass", "rgba(12,12,12,0.8)", "Glass overlay"),
            literal("--bg-glass-light", "rgba(255,255,255,0.08)", "Hover glass"),
            alias("--bg-brand", "--color-purple-400", "#947AFC", "Brand surface"),
        ],
    ),
    group(
        Category::SemanticColor,
        "Border",
        &[
            alias("--border-primary", "--color-neutral-700", "#252525", "Visible borders"),
            alias("--border-secondary", "--color-neutral-600", "#515151", "Emphasis borders"),
            alias("--border-tertiary", "--color-neutral-800", "#1C1C1E", "Subtle borders"),
            alias("--border-card", "--border-primary", "#252525", "Card borders"),
            literal("--border-transparent", "rgba(255,255,255,0.12)", "Glass borders"),
            literal("--border-transparent-subtle", "rgba(255,255,255,0.08)", "Faint borders"),
            alias("--border-focus", "--color-blue-400", "#1A9EFF", "Focus ring"),
            alias("--border-brand", "--color-purple-400", "#947AFC", "Brand border"),
            alias("--border-success", "--color-green-500", "#22C55E", "Success border"),
            alias("--border-warning", "--color-yellow-500", "#EAB308", "Warning border"),
            alias("--border-error", "--color-red-500", "#EF4444", "Error border"),
        ],
    ),
];

/// Spacing scale (8 px grid).
pub static SPACING: TokenGroup = group(
    Category::Spacing,
    "Spacing Scale",
    &[
        px("--space-0", "0px", 0),
        px("--space-1", "8px", 8),
        px("--space-2", "16px", 16),
        px("--space-3", "24px", 24),
        px("--space-4", "32px", 32),
        px("--space-5", "40px", 40),
        px("--space-6", "48px", 48),
        px("--space-7", "56px", 56),
        px("--space-8", "64px", 64),
        px("--space-9", "72px", 72),
        px("--space-10", "80px", 80),
        px("--space-12", "96px", 96),
        px("--space-14", "112px", 112),
        px("--space-15", "120px", 120),
        px("--space-16", "128px", 128),
        px("--space-20", "160px", 160),
        px("--space-24", "192px", 192),
    ],
);

/// Corner radii.
pub static RADII: TokenGroup = group(
    Category::Radius,
    "Border Radius",
    &[
        px("--radius-0", "0px", 0),
        px("--radius-1", "8px", 8),
        px("--radius-2", "16px", 16),
        px("--radius-3", "24px", 24),
        px("--radius-4", "32px", 32),
        px("--radius-5", "40px", 40),
        px("--radius-6", "48px", 48),
        px("--radius-full", "9999px", 9999),
    ],
);

/// Elevation shadows.
pub static SHADOWS: TokenGroup = group(
    Category::Shadow,
    "Shadow Scale",
    &[
        tok("--shadow-none", "none"),
        tok("--shadow-sm", "0 1px 2px 0 rgba(0,0,0,0.05)"),
        tok("--shadow-md", "0 4px 8px -2px rgba(0,0,0,0.1)"),
        tok("--shadow-lg", "0 8px 16px -4px rgba(0,0,0,0.1)"),
        tok("--shadow-xl", "0 16px 32px -8px rgba(0,0,0,0.15)"),
    ],
);

/// Font sizes.
pub static FONT_SIZES: TokenGroup = group(
    Category::FontSize,
    "Font Sizes",
    &[
        tok("--font-size-10", "10px"),
        tok("--font-size-12", "12px"),
        tok("--font-size-14", "14px"),
        tok("--font-size-16", "16px"),
        tok("--font-size-18", "18px"),
        tok("--font-size-20", "20px"),
        tok("--font-size-24", "24px"),
        tok("--font-size-32", "32px"),
        tok("--font-size-40", "40px"),
        tok("--font-size-48", "48px"),
        tok("--font-size-56", "56px"),
        tok("--font-size-64", "64px"),
        tok("--font-size-80", "80px"),
    ],
);

/// Font weights; the usage note carries the weight's display name.
pub static FONT_WEIGHTS: TokenGroup = group(
    Category::FontWeight,
    "Font Weights",
    &[
        literal("--font-weight-regular", "400", "Regular"),
        literal("--font-weight-book", "450", "Book"),
        literal("--font-weight-medium", "500", "Medium"),
        literal("--font-weight-semibold", "600", "Semibold"),
    ],
);

/// Line heights.
pub static LINE_HEIGHTS: TokenGroup = group(
    Category::LineHeight,
    "Line Heights",
    &[
        tok("--line-height-none", "1"),
        tok("--line-height-tight", "1.2"),
        tok("--line-height-snug", "1.3"),
        tok("--line-height-normal", "1.4"),
        tok("--line-height-relaxed", "1.5"),
        tok("--line-height-loose", "1.6"),
    ],
);

/// Letter spacing.
pub static LETTER_SPACING: TokenGroup = group(
    Category::LetterSpacing,
    "Letter Spacing",
    &[
        tok("--letter-spacing-tighter", "-0.04em"),
        tok("--letter-spacing-tight", "-0.02em"),
        tok("--letter-spacing-normal", "0"),
        tok("--letter-spacing-wide", "0.02em"),
        tok("--letter-spacing-wider", "0.08em"),
        tok("--letter-spacing-widest", "0.16em"),
    ],
);

/// Animation durations.
pub static DURATIONS: TokenGroup = group(
    Category::Duration,
    "Duration",
    &[
        tok("--duration-0", "0ms"),
        tok("--duration-1", "80ms"),
        tok("--duration-2", "160ms"),
        tok("--duration-3", "240ms"),
        tok("--duration-4", "320ms"),
        tok("--duration-5", "480ms"),
    ],
);

/// Easing curves.
pub static EASINGS: TokenGroup = group(
    Category::Easing,
    "Easing Curves",
    &[
        tok("--easing-linear", "linear"),
        tok("--easing-in", "cubic-bezier(0.4, 0, 1, 1)"),
        tok("--easing-out", "cubic-bezier(0, 0, 0.2, 1)"),
        tok("--easing-in-out", "cubic-bezier(0.4, 0, 0.2, 1)"),
        tok("--easing-spring", "cubic-bezier(0.34, 1.56, 0.64, 1)"),
    ],
);

/// Named typography style.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TypePreset {
    /// Preset name (`display-lg`, `body-sm`, ...).
    pub name: &'static str,
    /// Font size in px.
    pub size_px: u32,
    /// Font weight.
    pub weight: u16,
    /// Unitless line height.
    pub line_height: f64,
    /// CSS letter spacing.
    pub letter_spacing: &'static str,
    /// Set in the monospace family.
    pub mono: bool,
    /// Uppercased.
    pub upper: bool,
}

const fn preset(
    name: &'static str,
    size_px: u32,
    weight: u16,
    line_height: f64,
    letter_spacing: &'static str,
) -> TypePreset {
    TypePreset {
        name,
        size_px,
        weight,
        line_height,
        letter_spacing,
        mono: false,
        upper: false,
    }
}

/// Typography presets, largest first.
pub static TYPE_PRESETS: [TypePreset; 12] = [
    preset("display-lg", 80, 400, 1.2, "-0.04em"),
    preset("display-md", 64, 400, 1.2, "-0.04em"),
    preset("display-sm", 48, 500, 1.2, "-0.02em"),
    preset("heading-lg", 40, 500, 1.3, "-0.02em"),
    preset("heading-md", 32, 500, 1.3, "-0.02em"),
    preset("heading-sm", 24, 500, 1.3, "0"),
    preset("heading-xs", 20, 500, 1.4, "0"),
    preset("body-lg", 20, 400, 1.5, "0"),
    preset("body-md", 16, 400, 1.4, "0"),
    preset("body-sm", 14, 400, 1.4, "0"),
    preset("body-xs", 12, 400, 1.4, "0"),
    TypePreset {
        mono: true,
        upper: true,
        ..preset("overline", 12, 500, 1.4, "0.16em")
    },
];

/// Every token group in catalog order.
pub fn all_groups() -> impl Iterator<Item = &'static TokenGroup> {
    PRIMITIVE_COLORS.iter().chain(SEMANTIC_COLORS.iter()).chain([
        &SPACING,
        &RADII,
        &SHADOWS,
        &FONT_SIZES,
        &FONT_WEIGHTS,
        &LINE_HEIGHTS,
        &LETTER_SPACING,
        &DURATIONS,
        &EASINGS,
    ])
}

/// Every token in catalog order.
pub fn all_tokens() -> impl Iterator<Item = &'static Token> {
    all_groups().flat_map(|g| g.tokens.iter())
}

/// Token named `name` (with the `--` prefix).
pub fn find(name: &str) -> Option<&'static Token> {
    all_tokens().find(|t| t.name == name)
}

#[cfg(test)]
#[path = "../../tests/unit/tokens/catalog.rs"]
mod tests;
