//! Symbolic icon names to terminal glyphs.

use unicode_width::UnicodeWidthStr;

/// Glyph drawn for names with no known mapping.
pub const FALLBACK_GLYPH: &str = "•";

const GLYPHS: &[(&str, &str)] = &[
	("xmark", "✕"),
	("xmark.circle", "⊗"),
	("xmark.circle.fill", "⊗"),
	("checkmark", "✓"),
	("checkmark.circle", "✓"),
	("checkmark.circle.fill", "✔"),
	("exclamationmark.circle", "!"),
	("exclamationmark.circle.fill", "❗"),
	("exclamationmark.triangle", "⚠"),
	("exclamationmark.triangle.fill", "⚠"),
	("info.circle", "ℹ"),
	("info.circle.fill", "ℹ"),
	("bell", "♪"),
	("bell.fill", "♪"),
];

/// Resolves a symbolic icon name to the glyph drawn for it.
///
/// Known names map to a glyph. Anything already at most two columns wide is
/// taken to be a glyph and returned unchanged; other names fall back to
/// [`FALLBACK_GLYPH`].
///
/// ```
/// use overlay_toast::icon::resolve_icon;
///
/// assert_eq!(resolve_icon("xmark"), "✕");
/// assert_eq!(resolve_icon("★"), "★");
/// assert_eq!(resolve_icon("no.such.symbol"), "•");
/// ```
pub fn resolve_icon(name: &str) -> &str {
	if let Some((_, glyph)) = GLYPHS.iter().find(|(known, _)| *known == name) {
		return glyph;
	}
	if !name.is_empty() && name.width() <= 2 {
		return name;
	}
	FALLBACK_GLYPH
}
