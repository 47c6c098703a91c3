//! Font selection and text layout styles.
//!
//! Draw primitives carry a nominal font size in points; the cluster only has a handful
//! of monospace bitmap fonts. [`font_for`] maps a requested size onto the closest font
//! that does not overshoot the label's slot, so tick labels scaled by their emphasis
//! still line up with the dial.
//!
//! | Requested size | Regular              | Bold               |
//! |----------------|----------------------|--------------------|
//! | up to 14       | `FONT_6X10`          | `FONT_7X13_BOLD`   |
//! | up to 24       | `FONT_10X20`         | `FONT_9X18_BOLD`   |
//! | up to 30       | `PROFONT_18_POINT`   | `PROFONT_18_POINT` |
//! | larger         | `PROFONT_24_POINT`   | `PROFONT_24_POINT` |

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_7X13_BOLD, FONT_9X18_BOLD, FONT_10X20};
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Text centered both ways on its anchor point. Every cluster label uses this.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Font Lookup
// =============================================================================

const SMALL_LIMIT: u32 = 14;
const MEDIUM_LIMIT: u32 = 24;
const LARGE_LIMIT: u32 = 30;

/// Bitmap font for a nominal point size.
pub fn font_for(
    size: u32,
    bold: bool,
) -> &'static MonoFont<'static> {
    match (size, bold) {
        (0..=SMALL_LIMIT, false) => &FONT_6X10,
        (0..=SMALL_LIMIT, true) => &FONT_7X13_BOLD,
        (_, false) if size <= MEDIUM_LIMIT => &FONT_10X20,
        (_, true) if size <= MEDIUM_LIMIT => &FONT_9X18_BOLD,
        _ if size <= LARGE_LIMIT => &PROFONT_18_POINT,
        _ => &PROFONT_24_POINT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn height(font: &MonoFont<'_>) -> u32 { font.character_size.height }

    #[test]
    fn test_small_sizes() {
        assert_eq!(height(font_for(14, false)), FONT_6X10.character_size.height);
        assert_eq!(height(font_for(14, true)), FONT_7X13_BOLD.character_size.height);
    }

    #[test]
    fn test_default_label_size() {
        assert_eq!(height(font_for(24, false)), FONT_10X20.character_size.height);
        assert_eq!(height(font_for(24, true)), FONT_9X18_BOLD.character_size.height);
    }

    #[test]
    fn test_emphasised_fuel_ticks_grow() {
        // 14pt base, medium and strong emphasis.
        assert!(height(font_for(28, true)) >= height(font_for(14, true)));
        assert!(height(font_for(42, true)) >= height(font_for(28, true)));
        assert_eq!(height(font_for(42, true)), PROFONT_24_POINT.character_size.height);
    }
}
