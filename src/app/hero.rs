use leptos::prelude::*;
use leptos_use::{use_mouse, use_window_size, UseMouseReturn, UseWindowSizeReturn};

use crate::content::{Icon, ABOUT, HOME};
use crate::motion::{first_name_hover_color, hero_tilt, particle_field, stagger_delay};
use crate::site::{LOCATION, OWNER_FIRST_NAME, OWNER_LAST_NAME, ROLES};

use super::viewport::scroll_to_section;
use super::Glyph;

const FLOATING_ICONS: &[(Icon, &str, &str)] = &[
    (Icon::Code, "15%", "20%"),
    (Icon::Server, "80%", "25%"),
    (Icon::Shield, "10%", "70%"),
    (Icon::Zap, "85%", "65%"),
];

#[component]
pub fn Hero() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();
    let UseWindowSizeReturn { width, .. } = use_window_size();
    let tilt = move || hero_tilt(x.get(), width.get());

    view! {
        <section id=HOME class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-br from-dark-950 via-dark-900 to-dark-950"></div>
            <div class="absolute inset-0 bg-grid opacity-10"></div>
            <div
                class="pointer-events-none fixed w-96 h-96 rounded-full bg-accent-500/10 blur-3xl -translate-x-1/2 -translate-y-1/2 transition-transform duration-300"
                style:left=move || format!("{}px", x.get())
                style:top=move || format!("{}px", y.get())
            ></div>
            {particle_field(20)
                .into_iter()
                .map(|p| {
                    view! {
                        <span
                            class="absolute w-1 h-1 rounded-full bg-accent-400/40 animate-drift"
                            style=format!(
                                "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s; --drift: {:.1}px",
                                p.left_pct,
                                p.top_pct,
                                p.duration_secs,
                                p.delay_secs,
                                p.drift_px,
                            )
                        ></span>
                    }
                })
                .collect_view()}
            {FLOATING_ICONS
                .iter()
                .enumerate()
                .map(|(i, &(icon, left, top))| {
                    view! {
                        <div
                            class="absolute hidden md:block text-4xl text-accent-400/20 animate-float"
                            style:left=left
                            style:top=top
                            style:animation-delay=stagger_delay(i, 0.5)
                        >
                            <Glyph icon />
                        </div>
                    }
                })
                .collect_view()}
            <div
                class="relative z-10 text-center px-4 transition-transform duration-200 ease-out"
                style:transform=move || format!("perspective(1000px) rotateY({:.2}deg)", tilt())
            >
                <h1 class="text-5xl md:text-7xl lg:text-8xl font-black mb-6 tracking-tight">
                    <span class="inline-block">
                        {OWNER_FIRST_NAME
                            .chars()
                            .enumerate()
                            .map(|(i, ch)| {
                                view! {
                                    <span
                                        class="inline-block animate-wave hover-letter cursor-default"
                                        style=format!(
                                            "animation-delay: {}; --hover-color: {}",
                                            stagger_delay(i, 0.1),
                                            first_name_hover_color(i),
                                        )
                                    >
                                        {ch}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </span>
                    " "
                    <span class="inline-block text-gradient">
                        {OWNER_LAST_NAME
                            .chars()
                            .enumerate()
                            .map(|(i, ch)| {
                                view! {
                                    <span
                                        class="inline-block animate-wave"
                                        style:animation-delay=stagger_delay(i + OWNER_FIRST_NAME.len(), 0.1)
                                    >
                                        {ch}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </span>
                </h1>
                <p class="text-xl md:text-2xl text-dark-300 mb-4">{ROLES.join(" & ")}</p>
                <p class="flex items-center justify-center gap-2 text-dark-400 mb-10">
                    <Glyph icon=Icon::MapPin />
                    {LOCATION}
                </p>
                <button
                    class="group inline-flex items-center gap-2 px-8 py-4 rounded-full bg-gradient-to-r from-accent-500 to-secondary-500 text-white font-semibold shadow-lg hover:shadow-accent-500/40 hover:scale-105 transition-all"
                    on:click=move |_| scroll_to_section(ABOUT)
                >
                    "View My Work"
                    <Glyph icon=Icon::ChevronDown class="group-hover:translate-y-1 transition-transform" />
                </button>
            </div>
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 text-dark-500 animate-bounce">
                <Glyph icon=Icon::ChevronDown class="text-2xl" />
            </div>
        </section>
    }
}
