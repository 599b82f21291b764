//! Static theme: fonts and color constants for `live_design!` blocks.
//!
//! Import with `use sportlens_widgets::theme::*;`.

use makepad_widgets::*;

live_design! {
    use link::theme::*;

    // Fonts
    pub FONT_REGULAR = <THEME_FONT_REGULAR> {}
    pub FONT_SEMIBOLD = <THEME_FONT_BOLD> {}

    // Neutrals
    pub WHITE = #ffffff
    pub PAGE_BG = #f5f7fa
    pub BORDER = #d1d5db
    pub GRAY_700 = #374151
    pub TEXT_PRIMARY = #1f2937
    pub TEXT_MUTED = #9ca3af

    // Accents
    pub ACCENT = #0066ff
    pub ACCENT_HOVER = #1d4fd8
    pub BLUE_50 = #eff6ff
}
