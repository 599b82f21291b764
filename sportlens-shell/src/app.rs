use makepad_widgets::*;

use sportlens_data::Store;
use sportlens_predict::PredictApp;
use sportlens_widgets::{AppRegistry, LensApp, PageRouter};

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;
    use sportlens_widgets::theme::*;
    use sportlens_widgets::components::*;

    // Import screen widgets from app crates
    use sportlens_predict::screen::design::*;

    App = {{App}} {
        ui: <Window> {
            window: { title: "SportLens", inner_size: vec2(900, 760) }
            pass: {
                clear_color: (PAGE_BG)
            }

            body = <View> {
                width: Fill, height: Fill
                flow: Down
                show_bg: true
                draw_bg: {
                    color: (PAGE_BG)
                }

                // Header
                header = <View> {
                    width: Fill, height: 56
                    flow: Right
                    align: {y: 0.5}
                    padding: {left: 24, right: 24}
                    spacing: 24
                    show_bg: true
                    draw_bg: {
                        color: (WHITE)
                    }

                    <Label> {
                        draw_text: {
                            color: (TEXT_PRIMARY)
                            text_style: <FONT_SEMIBOLD>{ font_size: 16.0 }
                        }
                        text: "SportLens"
                    }

                    <View> { width: Fill, height: 1 }

                    home_nav = <LinkButton> {
                        text: "Home"
                    }
                    predict_nav = <LinkButton> {
                        text: "Predict"
                    }
                }

                <View> {
                    width: Fill, height: 1
                    show_bg: true
                    draw_bg: { color: (BORDER) }
                }

                pages = <View> {
                    width: Fill, height: Fill
                    flow: Overlay

                    home_page = <View> {
                        width: Fill, height: Fill
                        flow: Down
                        align: {x: 0.5, y: 0.4}
                        spacing: 16

                        <PageTitle> {
                            text: "Welcome to Object Detection App"
                        }
                        <BodyText> {
                            width: Fit
                            text: "Upload an image and predict its class."
                        }
                        predict_link = <PrimaryButton> {
                            text: "Predict"
                        }
                    }

                    predict_page = <View> {
                        visible: false
                        width: Fill, height: Fill
                        flow: Down
                        padding: {left: 24, top: 12}

                        back_link = <LinkButton> {
                            text: "← Home"
                        }

                        predict_screen = <PredictScreen> {}
                    }
                }
            }
        }
    }
}

#[derive(Live)]
pub struct App {
    #[live]
    ui: WidgetRef,
    #[rust]
    store: Store,
    #[rust]
    router: PageRouter,
    #[rust]
    registry: AppRegistry,
    #[rust]
    initialized: bool,
}

impl LiveHook for App {
    fn after_new_from_doc(&mut self, _cx: &mut Cx) {
        if !self.initialized {
            // Load preferences and build the classifier client
            self.store = Store::load();

            self.registry.register(<PredictApp as LensApp>::info());
            self.router = PageRouter::new(live_id!(home_page), self.registry.page_ids());

            self.initialized = true;
            ::log::info!("App initialized with {} screen(s)", self.registry.len());
        }
    }
}

impl LiveRegister for App {
    fn live_register(cx: &mut Cx) {
        makepad_widgets::live_design(cx);
        sportlens_widgets::live_design(cx);
        // Register screen widgets from app crates via LensApp trait
        <PredictApp as LensApp>::live_design(cx);
    }
}

impl MatchEvent for App {
    fn handle_startup(&mut self, cx: &mut Cx) {
        let current = self.router.current_page();
        let hidden = self.router.pages_to_hide();
        self.apply_pages(cx, current, &hidden);
    }

    fn handle_actions(&mut self, cx: &mut Cx, actions: &Actions) {
        let predict_page = <PredictApp as LensApp>::info().page_id;

        if self.ui.button(ids!(body.pages.home_page.predict_link)).clicked(&actions)
            || self.ui.button(ids!(body.header.predict_nav)).clicked(&actions)
        {
            self.navigate_to(cx, predict_page);
        }

        if self.ui.button(ids!(body.pages.predict_page.back_link)).clicked(&actions) {
            self.navigate_back(cx);
        }

        if self.ui.button(ids!(body.header.home_nav)).clicked(&actions) {
            self.navigate_to(cx, live_id!(home_page));
        }
    }
}

impl AppMain for App {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event) {
        // Pass Store to child widgets via Scope.
        // ui.handle_event must run before match_event so that the actions it
        // produces are visible to handle_actions.
        let scope = &mut Scope::with_data(&mut self.store);
        self.ui.handle_event(cx, event, scope);

        self.match_event(cx, event);
    }
}

impl App {
    fn navigate_to(&mut self, cx: &mut Cx, page: LiveId) {
        ::log::info!("navigate_to: current={:?}, target={:?}", self.router.current_page(), page);
        if let Some(hidden) = self.router.navigate_to(page) {
            self.apply_pages(cx, page, &hidden);
        }
    }

    fn navigate_back(&mut self, cx: &mut Cx) {
        match self.router.navigate_back() {
            Some((shown, hidden)) => self.apply_pages(cx, shown, &hidden),
            // Opened directly on a page with no history
            None => self.navigate_to(cx, live_id!(home_page)),
        }
    }

    fn apply_pages(&mut self, cx: &mut Cx, shown: LiveId, hidden: &[LiveId]) {
        let predict_page = <PredictApp as LensApp>::info().page_id;
        let visible = |page: LiveId| page == shown && !hidden.contains(&page);

        self.ui.widget(ids!(body.pages.home_page)).set_visible(cx, visible(live_id!(home_page)));
        self.ui.widget(ids!(body.pages.predict_page)).set_visible(cx, visible(predict_page));
        self.ui.redraw(cx);
    }
}

app_main!(App);
