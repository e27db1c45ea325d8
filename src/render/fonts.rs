use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};

use usvg::fontdb::{Database, Family, ID, Query, Stretch, Style, Weight};

type DbCache = Mutex<HashMap<Option<PathBuf>, Arc<Database>>>;

static FONT_DBS: OnceLock<DbCache> = OnceLock::new();
static LAYOUT_FONTS_DIR: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Named families of the sans stack, in preference order.
pub const SANS_FAMILIES: [&str; 4] = ["Suisse Intl", "Inter", "Helvetica Neue", "Arial"];
/// Named families of the mono stack, in preference order.
pub const MONO_FAMILIES: [&str; 3] = ["Geist Mono", "SF Mono", "DejaVu Sans Mono"];

/// Font database with the system fonts plus every font file in `fonts_dir`.
///
/// Databases are built once per directory and shared afterwards, so parallel workers do not each
/// rescan the system fonts.
pub fn shared_fontdb(fonts_dir: Option<&Path>) -> Arc<Database> {
    let key = fonts_dir.map(Path::to_path_buf);
    let cache = FONT_DBS.get_or_init(DbCache::default);
    let mut dbs = cache.lock().unwrap_or_else(PoisonError::into_inner);
    dbs.entry(key)
        .or_insert_with(|| build_fontdb(fonts_dir))
        .clone()
}

/// Build a fresh font database without consulting the cache.
///
/// The `sans-serif` and `monospace` generics point at the first installed family of each stack,
/// or at a plausible installed face when none of them is present.
pub fn build_fontdb(fonts_dir: Option<&Path>) -> Arc<Database> {
    let mut db = Database::new();
    db.load_system_fonts();
    if let Some(dir) = fonts_dir {
        let loaded = load_fonts_from_dir(&mut db, dir);
        tracing::debug!(dir = %dir.display(), loaded, "loaded extra fonts");
    }
    pick_default_families(&mut db);
    tracing::debug!(faces = db.len(), "font database ready");
    Arc::new(db)
}

/// Use the database for `dir` when compositions measure and wrap text.
///
/// Call before building compositions so layout and rasterization agree on faces.
pub fn set_layout_fonts_dir(dir: Option<&Path>) {
    let mut slot = LAYOUT_FONTS_DIR
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *slot = dir.map(Path::to_path_buf);
}

/// Database that text layout currently measures with.
pub(crate) fn layout_fontdb() -> Arc<Database> {
    let dir = LAYOUT_FONTS_DIR
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    shared_fontdb(dir.as_deref())
}

/// Load `.ttf`, `.otf` and `.ttc` files directly inside `dir`; returns how many were read.
///
/// A missing directory or an unreadable file is skipped.
pub(crate) fn load_fonts_from_dir(db: &mut Database, dir: &Path) -> usize {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "fonts directory is not readable");
        return 0;
    };

    let mut loaded = 0;
    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() || !is_font_file(&path) {
            continue;
        }
        if db.load_font_file(&path).is_ok() {
            loaded += 1;
        }
    }
    loaded
}

pub(crate) fn is_font_file(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return false;
    };
    matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc")
}

pub(crate) fn pick_default_families(db: &mut Database) {
    if let Some(name) = installed_family(db, &SANS_FAMILIES).or_else(|| fallback_family(db, false))
    {
        tracing::debug!(family = %name, "sans-serif family");
        db.set_sans_serif_family(name);
    }
    if let Some(name) = installed_family(db, &MONO_FAMILIES).or_else(|| fallback_family(db, true)) {
        tracing::debug!(family = %name, "monospace family");
        db.set_monospace_family(name);
    }
}

fn installed_family(db: &Database, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find(|name| {
            db.faces()
                .any(|f| f.families.iter().any(|(fam, _)| fam.eq_ignore_ascii_case(name)))
        })
        .map(|name| (*name).to_owned())
}

/// Best upright family of the wanted pitch, preferring names that say what they are.
fn fallback_family(db: &Database, monospaced: bool) -> Option<String> {
    let hint = if monospaced { "mono" } else { "sans" };
    let mut best: Option<(u8, &str)> = None;
    for face in db.faces() {
        if face.monospaced != monospaced || face.style != Style::Normal {
            continue;
        }
        let Some((name, _)) = face.families.first() else {
            continue;
        };
        let lower = name.to_ascii_lowercase();
        if ["math", "symbol", "emoji", "dingbat"]
            .iter()
            .any(|s| lower.contains(s))
        {
            continue;
        }
        let mut rank = 0;
        if lower.contains(hint) {
            rank += 2;
        }
        if !monospaced && !lower.contains("mono") && !lower.contains("serif") {
            rank += 1;
        }
        if face.weight == Weight::NORMAL {
            rank += 1;
        }
        if best.is_none_or(|(r, _)| rank > r) {
            best = Some((rank, name));
        }
    }
    best.map(|(_, name)| name.to_owned())
}

/// Face for `families`, then the sans and mono generics.
pub(crate) fn resolve_face(
    db: &Database,
    families: &[Family<'_>],
    weight: u16,
    stretch: Stretch,
    style: Style,
) -> Option<ID> {
    let mut stack = families.to_vec();
    for generic in [Family::SansSerif, Family::Monospace] {
        if !stack.contains(&generic) {
            stack.push(generic);
        }
    }
    db.query(&Query {
        families: &stack,
        weight: Weight(weight),
        stretch,
        style,
    })
}

fn to_family(family: &usvg::FontFamily) -> Family<'_> {
    match family {
        usvg::FontFamily::Serif => Family::Serif,
        usvg::FontFamily::SansSerif => Family::SansSerif,
        usvg::FontFamily::Cursive => Family::Cursive,
        usvg::FontFamily::Fantasy => Family::Fantasy,
        usvg::FontFamily::Monospace => Family::Monospace,
        usvg::FontFamily::Named(s) => Family::Name(s),
    }
}

fn to_stretch(stretch: usvg::FontStretch) -> Stretch {
    match stretch {
        usvg::FontStretch::UltraCondensed => Stretch::UltraCondensed,
        usvg::FontStretch::ExtraCondensed => Stretch::ExtraCondensed,
        usvg::FontStretch::Condensed => Stretch::Condensed,
        usvg::FontStretch::SemiCondensed => Stretch::SemiCondensed,
        usvg::FontStretch::Normal => Stretch::Normal,
        usvg::FontStretch::SemiExpanded => Stretch::SemiExpanded,
        usvg::FontStretch::Expanded => Stretch::Expanded,
        usvg::FontStretch::ExtraExpanded => Stretch::ExtraExpanded,
        usvg::FontStretch::UltraExpanded => Stretch::UltraExpanded,
    }
}

fn to_style(style: usvg::FontStyle) -> Style {
    match style {
        usvg::FontStyle::Normal => Style::Normal,
        usvg::FontStyle::Italic => Style::Italic,
        usvg::FontStyle::Oblique => Style::Oblique,
    }
}

/// Resolver that walks the CSS font stack, then the sans and mono generics.
pub(crate) fn font_resolver() -> usvg::FontResolver<'static> {
    usvg::FontResolver {
        select_font: Box::new(|font, fontdb| {
            let families: Vec<Family<'_>> = font.families().iter().map(to_family).collect();
            resolve_face(
                fontdb,
                &families,
                font.weight(),
                to_stretch(font.stretch()),
                to_style(font.style()),
            )
        }),
        select_fallback: usvg::FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fonts.rs"]
mod tests;
