mod about;
mod contact;
mod footer;
mod hero;
mod loading;
mod navbar;
mod projects;
mod skills;
mod viewport;

use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener, use_window};

use crate::content::{check_anchors, Icon, NAV_ITEMS, SECTION_ANCHORS};
use crate::scroll::{active_section, ScrollHub};
use crate::site;

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use loading::LoadingScreen;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;
use viewport::{measure_sections, read_metrics};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/npm/lucide-static@0.460.0/font/lucide.css"
                />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@v2.16.0/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-dark-950 text-dark-100 antialiased">
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
        <Title formatter=|title| format!("{} - {title}", site::owner_name()) />
        <Meta
            name="description"
            content="Portfolio of an IT support specialist and software engineer in training."
        />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// Shows the splash until it reports completion, then mounts the page.
#[component]
fn Portfolio() -> impl IntoView {
    let (loaded, set_loaded) = signal(false);
    let on_complete = Callback::new(move |_| set_loaded.set(true));

    view! {
        <Title text="Portfolio" />
        <Show when=move || loaded.get() fallback=move || view! { <LoadingScreen on_complete /> }>
            <Page />
        </Show>
    }
}

#[component]
fn Page() -> impl IntoView {
    if let Err(e) = check_anchors(NAV_ITEMS, SECTION_ANCHORS) {
        log::error!("navigation is out of sync with the page sections: {e}");
    }

    let hub = ScrollHub::new();
    provide_context(hub.clone());

    let (active, set_active) = signal(SECTION_ANCHORS[0]);
    let tracker = hub.subscribe(move |metrics| {
        let bounds = measure_sections(SECTION_ANCHORS);
        if let Some(id) = active_section(&metrics, &bounds) {
            if id != active.get_untracked() {
                log::debug!("active section: {id}");
                set_active.set(id);
            }
        }
    });
    on_cleanup(move || drop(tracker));

    let publish = {
        let hub = hub.clone();
        move || hub.publish(read_metrics())
    };
    let _ = use_event_listener(use_window(), ev::scroll, {
        let publish = publish.clone();
        move |_| publish()
    });
    let _ = use_event_listener(use_window(), ev::resize, {
        let publish = publish.clone();
        move |_| publish()
    });
    // sections are mounted by the time effects run
    Effect::new(move |_| publish());

    view! {
        <Navbar active />
        <main class="overflow-x-hidden">
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Contact />
        </main>
        <Footer />
    }
}

#[component]
fn Glyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {class}", icon.class()) aria-hidden="true"></i> }
}

/// Centered section title with an accented second word and underline bar.
#[component]
fn SectionHeading(
    title: &'static str,
    accent: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16 reveal">
            <h2 class="text-4xl md:text-5xl font-bold mb-4 hover-grow">
                {title} " " <span class="text-accent-400">{accent}</span>
            </h2>
            {subtitle
                .map(|s| {
                    view! { <p class="text-xl text-dark-400 max-w-3xl mx-auto">{s}</p> }
                })}
            <div class="w-24 h-1 bg-gradient-to-r from-accent-400 to-accent-600 mx-auto rounded-full mt-4 grow-x"></div>
        </div>
    }
}
