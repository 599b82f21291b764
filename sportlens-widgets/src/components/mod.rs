use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;
    use crate::theme::*;

    // ========================================================================
    // SHARED TEXT STYLES
    // ========================================================================

    // Page heading: semibold, 24px
    pub PageTitle = <Label> {
        draw_text: {
            color: (TEXT_PRIMARY)
            text_style: <FONT_SEMIBOLD>{ font_size: 24.0 }
        }
    }

    // Body text: regular, 13px, secondary gray
    pub BodyText = <Label> {
        width: Fill
        draw_text: {
            color: (GRAY_700)
            text_style: <FONT_REGULAR>{ font_size: 13.0 }
            wrap: Word
        }
    }

    // Hint/muted text: regular, 11px
    pub HintText = <Label> {
        width: Fill
        draw_text: {
            color: (TEXT_MUTED)
            text_style: <FONT_REGULAR>{ font_size: 11.0 }
            wrap: Word
        }
    }

    // ========================================================================
    // BUTTONS
    // ========================================================================

    // Primary (blue) action button
    pub PrimaryButton = <Button> {
        width: Fit, height: 34
        padding: {left: 16, right: 16, top: 8, bottom: 8}
        animator: {
            hover = {
                default: off,
                off = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 0.0} } }
                on  = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 1.0} } }
            }
        }
        draw_bg: {
            instance hover: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, 6.0);
                sdf.fill(mix((ACCENT), (ACCENT_HOVER), self.hover));
                return sdf.result;
            }
        }
        draw_text: {
            text_style: <FONT_SEMIBOLD>{ font_size: 13.0 }
            color: (WHITE)
        }
    }

    // Secondary (gray) action button
    pub SecondaryButton = <Button> {
        width: Fit, height: 34
        padding: {left: 16, right: 16, top: 8, bottom: 8}
        animator: {
            hover = {
                default: off,
                off = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 0.0} } }
                on  = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 1.0} } }
            }
        }
        draw_bg: {
            instance hover: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, 6.0);
                sdf.fill(mix(#f3f4f6, #e5e7eb, self.hover));
                return sdf.result;
            }
        }
        draw_text: {
            text_style: <FONT_SEMIBOLD>{ font_size: 13.0 }
            color: (GRAY_700)
        }
    }

    // Text-only navigation link
    pub LinkButton = <Button> {
        width: Fit, height: Fit
        padding: {left: 0, right: 0, top: 4, bottom: 4}
        draw_bg: {
            fn pixel(self) -> vec4 {
                return vec4(0.0, 0.0, 0.0, 0.0);
            }
        }
        draw_text: {
            text_style: <FONT_SEMIBOLD>{ font_size: 14.0 }
            color: (ACCENT)
        }
    }
}
