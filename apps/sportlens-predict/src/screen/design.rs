use makepad_widgets::*;

use super::PredictScreen;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;
    use sportlens_widgets::theme::*;
    use sportlens_widgets::components::*;

    // Dashed drop target; `hover` lights up while a file is dragged over it
    DropZone = <View> {
        width: Fill, height: 260
        flow: Down
        align: {x: 0.5, y: 0.5}
        spacing: 12
        show_bg: true
        draw_bg: {
            instance hover: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(1.0, 1.0, self.rect_size.x - 2.0, self.rect_size.y - 2.0, 8.0);
                sdf.fill(mix((WHITE), (BLUE_50), self.hover));
                sdf.box(1.0, 1.0, self.rect_size.x - 2.0, self.rect_size.y - 2.0, 8.0);
                sdf.stroke(mix((BORDER), (ACCENT), self.hover), 1.5);
                return sdf.result;
            }
        }
    }

    pub PredictScreen = {{PredictScreen}} {
        width: Fill, height: Fill
        flow: Down
        align: {x: 0.5}
        padding: {left: 40, right: 40, top: 32, bottom: 24}
        spacing: 20

        heading = <PageTitle> {
            text: "Object Detection"
        }

        content = <View> {
            width: 560, height: Fit
            flow: Down
            spacing: 16

            drop_zone = <DropZone> {
                // Shown while nothing is selected
                upload_prompt = <View> {
                    width: Fill, height: Fit
                    flow: Down
                    align: {x: 0.5}
                    spacing: 10

                    <BodyText> {
                        width: Fit
                        text: "Drag and drop an image here"
                    }
                    <HintText> {
                        width: Fit
                        text: "or"
                    }
                    browse_btn = <PrimaryButton> {
                        text: "Browse files"
                    }
                }

                // Shown once an image is selected
                preview_section = <View> {
                    visible: false
                    width: Fill, height: Fill
                    flow: Down
                    align: {x: 0.5, y: 0.5}
                    padding: 12
                    spacing: 8

                    preview_image = <Image> {
                        width: Fill, height: Fill
                        fit: Smallest
                    }
                    preview_placeholder = <HintText> {
                        visible: false
                        width: Fit
                        text: "No preview available for this file"
                    }
                    preview_name = <HintText> {
                        width: Fit
                        text: ""
                    }
                }
            }

            actions_row = <View> {
                width: Fill, height: Fit
                flow: Right
                align: {y: 0.5}
                spacing: 12

                remove_btn = <SecondaryButton> {
                    visible: false
                    text: "Remove"
                }

                status_label = <HintText> {
                    width: Fit
                    text: ""
                }
            }

            prediction_label = <Label> {
                visible: false
                draw_text: {
                    color: (ACCENT)
                    text_style: <FONT_SEMIBOLD>{ font_size: 18.0 }
                }
                text: ""
            }
        }

        <View> { width: Fill, height: Fill } // Spacer

        footer = <View> {
            width: 560, height: Fit
            flow: Down
            spacing: 6

            <View> {
                width: Fill, height: 1
                show_bg: true
                draw_bg: { color: (BORDER) }
            }

            footer_note = <HintText> {
                text: "NOTE: This model only works with sports images from its 7 supported classes. If an image of something that is not one of these sports is uploaded, the predicted class will be incorrect."
            }
        }
    }
}
