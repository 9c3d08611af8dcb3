use leptos::{either::Either, prelude::*};

use crate::content::{Icon, HOME, NAV_ITEMS};
use crate::nav::MenuState;
use crate::scroll::{ScrollHub, ScrollMetrics};
use crate::site::OWNER_INITIALS;

use super::viewport::scroll_to_section;
use super::Glyph;

#[component]
pub fn Navbar(#[prop(into)] active: Signal<&'static str>) -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let (metrics, set_metrics) = signal(ScrollMetrics::default());

    if let Some(hub) = use_context::<ScrollHub>() {
        let sub = hub.subscribe(move |m| set_metrics.set(m));
        on_cleanup(move || drop(sub));
    } else {
        log::warn!("navbar mounted without a scroll hub");
    }

    let navigate = move |id: &'static str| {
        scroll_to_section(id);
        menu.update(|m| m.close());
    };

    let link_class = move |id: &'static str| {
        if active.get() == id {
            "relative px-4 py-2 text-sm font-medium text-accent-400 transition-colors"
        } else {
            "relative px-4 py-2 text-sm font-medium text-dark-300 hover:text-white transition-colors"
        }
    };

    view! {
        <nav class=move || {
            if metrics.get().is_scrolled() {
                "fixed top-0 inset-x-0 z-50 bg-dark-950/90 backdrop-blur-md shadow-lg transition-all duration-300"
            } else {
                "fixed top-0 inset-x-0 z-50 bg-transparent transition-all duration-300"
            }
        }>
            <div
                class="absolute top-0 left-0 h-0.5 bg-gradient-to-r from-accent-400 to-secondary-500"
                style:width=move || format!("{:.1}%", metrics.get().progress())
            ></div>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        class="text-2xl font-bold text-gradient hover:scale-110 transition-transform"
                        on:click=move |_| navigate(HOME)
                    >
                        {OWNER_INITIALS}
                    </button>
                    <ul class="hidden md:flex items-center space-x-1">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <li>
                                        <button class=move || link_class(id) on:click=move |_| navigate(id)>
                                            <Glyph icon=item.icon class="mr-1.5" />
                                            {item.label}
                                            <Show when=move || active.get() == id>
                                                <span class="absolute left-4 right-4 -bottom-0.5 h-0.5 bg-accent-400 rounded-full"></span>
                                            </Show>
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <button
                        class="md:hidden p-2 text-dark-300 hover:text-white"
                        aria-label="Toggle menu"
                        on:click=move |_| menu.update(|m| m.toggle())
                    >
                        {move || {
                            if menu.get().is_open() {
                                Either::Left(view! { <Glyph icon=Icon::X class="text-2xl" /> })
                            } else {
                                Either::Right(view! { <Glyph icon=Icon::Menu class="text-2xl" /> })
                            }
                        }}
                    </button>
                </div>
            </div>
            <Show when=move || menu.get().is_open()>
                <ul class="md:hidden bg-dark-900/95 backdrop-blur-md border-t border-dark-800 px-4 py-3 space-y-1">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let id = item.id;
                            view! {
                                <li>
                                    <button
                                        class=move || format!("flex w-full items-center {}", link_class(id))
                                        on:click=move |_| navigate(id)
                                    >
                                        <Glyph icon=item.icon class="mr-3" />
                                        {item.label}
                                        <Show when=move || active.get() == id>
                                            <span class="ml-auto w-2 h-2 rounded-full bg-accent-400"></span>
                                        </Show>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </nav>
    }
}
