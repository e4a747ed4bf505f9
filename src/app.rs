mod about;
mod contact;
mod footer;
mod hero;
mod icons;
mod nav;
mod projects;

use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::listeners::ViewportListeners;
use crate::profile::PROFILE;
use crate::visual::{is_scrolled, PointerOffset};

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use nav::NavBar;
use projects::Projects;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
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
        <Meta name="description" content=PROFILE.tagline.clone() />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// The whole site: owns the scroll, menu and pointer state and wires the window listeners.
#[component]
fn PortfolioPage() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);
    let (pointer, set_pointer) = signal(PointerOffset::default());

    // effects only run in the browser, so nothing is attached during SSR
    Effect::new(move |_| {
        let mut listeners = attach_listeners(set_scrolled, set_pointer);
        log::debug!("viewport listeners attached");
        on_cleanup(move || {
            if listeners.is_attached() {
                listeners.detach();
                log::debug!("viewport listeners detached");
            }
        });
    });

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-black text-gray-100">
            <NavBar scrolled menu_open set_menu_open />
            <Hero pointer />
            <About />
            <Projects />
            <Contact />
            <Footer />
        </div>
    }
}

fn attach_listeners(
    set_scrolled: WriteSignal<bool>,
    set_pointer: WriteSignal<PointerOffset>,
) -> ViewportListeners {
    let scroll = window_event_listener(ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        set_scrolled.set(is_scrolled(scroll_y));
    });
    let pointer = window_event_listener(ev::mousemove, move |ev| {
        let win = window();
        let width = win
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        let height = win
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        set_pointer.set(PointerOffset::from_viewport(
            ev.client_x() as f64,
            ev.client_y() as f64,
            width,
            height,
        ));
    });
    ViewportListeners::new(scroll, pointer)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::visual::{MENU_CLOSED, NAV_TRANSPARENT};

    fn render_page() -> String {
        let owner = Owner::new();
        owner.set();
        provide_meta_context();
        view! { <PortfolioPage /> }.to_html()
    }

    #[test]
    fn test_page_renders_fixed_grids() {
        let html = render_page();

        // skill and project cards both carry hover-glow
        assert_eq!(html.matches("hover-glow").count(), 7);
        assert_eq!(html.matches("p-6 bg-black/50").count(), 4);
        assert_eq!(html.matches("<img").count(), 3);

        let positions: Vec<usize> = PROFILE
            .skills
            .iter()
            .map(|s| s.title.as_str())
            .chain(PROFILE.projects.iter().map(|p| p.title.as_str()))
            .map(|t| html.find(t).expect("every entry should render"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_initial_render_state() {
        let html = render_page();
        assert!(html.contains(NAV_TRANSPARENT));
        assert!(html.contains(MENU_CLOSED));
        assert!(html.contains("translate(0px, 0px)"));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn test_section_landmarks() {
        let html = render_page();
        for id in ["about", "projects", "contact"] {
            assert!(html.contains(&format!("id=\"{id}\"")));
            assert!(html.contains(&format!("href=\"#{id}\"")));
        }
    }

    #[test]
    fn test_form_has_no_query_fields() {
        let html = render_page();
        assert!(html.contains("Send Message"));
        assert!(!html.contains("name=\"email\""));
        assert!(!html.contains("name=\"message\""));
    }
}
