mod contact;
mod footer;
mod header;
mod hero;
mod projects;
mod skills;

use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener, use_window};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::content::PROFILE;
use crate::sections::{Rect, SectionLayout, SectionTracker};
use crate::site::{SiteState, Theme, ACCENT};

use contact::Contact;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;

pub use contact::send_contact_message;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// Reads section geometry from the live DOM.
struct DocumentLayout;

impl SectionLayout for DocumentLayout {
    fn bounds(&self, name: &str) -> Option<Rect> {
        let rect = document().get_element_by_id(name)?.get_bounding_client_rect();
        Some(Rect::new(rect.top(), rect.bottom()))
    }
}

fn scroll_to_section(id: &str) -> bool {
    let Some(el) = document().get_element_by_id(id) else {
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

#[component]
fn Portfolio() -> impl IntoView {
    let site = RwSignal::new(SiteState::default());
    let tracker = RwSignal::new(SectionTracker::new());

    let theme = Memo::new(move |_| site.with(|s| s.theme));
    let menu_open = Memo::new(move |_| site.with(|s| s.menu_open));
    let active = Memo::new(move |_| tracker.with(SectionTracker::active));

    let refresh_active = move || {
        tracker.update(|t| {
            t.on_scroll(&DocumentLayout);
        })
    };
    let _ = use_event_listener(use_window(), ev::scroll, move |_| refresh_active());
    // page may be restored mid-scroll
    Effect::new(move |_| refresh_active());

    let on_toggle_theme = Callback::new(move |_: ()| {
        site.update(|s| {
            let theme = s.toggle_theme();
            log::debug!("theme switched to {theme:?}");
        })
    });
    let on_toggle_menu = Callback::new(move |_: ()| {
        site.update(|s| {
            s.toggle_menu();
        })
    });
    let on_navigate = Callback::new(move |id: &'static str| {
        if scroll_to_section(id) {
            site.update(SiteState::close_menu);
        }
    });

    view! {
        <Title text="Portfolio" />
        <div
            class=move || {
                format!("min-h-screen transition-colors duration-300 {}", theme.get().text_class())
            }
            style:background=move || theme.get().background()
        >
            <Backdrop theme />
            <div class="relative max-w-6xl mx-auto px-4 py-6 z-10">
                <Header theme menu_open active on_toggle_theme on_toggle_menu on_navigate />
                <Hero theme on_navigate />
                <Skills />
                <Projects />
                <Contact />
                <Footer />
            </div>
        </div>
    }
}

#[component]
fn Backdrop(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none">
            <div class="absolute -inset-10 opacity-10">
                <div
                    class="absolute top-1/4 left-1/4 w-64 h-64 rounded-full blur-xl"
                    style:background=ACCENT
                ></div>
                <div
                    class="absolute bottom-1/4 right-1/4 w-96 h-96 rounded-full blur-xl"
                    style:background=move || theme.get().glow()
                ></div>
            </div>
        </div>
    }
}
