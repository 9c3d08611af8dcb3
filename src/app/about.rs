use leptos::prelude::*;

use crate::content::{Icon, ABOUT, INFO_CARDS};
use crate::motion::stagger_delay;
use crate::site::{owner_name, PORTRAIT};

use super::{Glyph, SectionHeading};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=ABOUT class="section-padding bg-dark-900/50 relative overflow-hidden">
            <div class="absolute -top-24 -right-24 w-72 h-72 rounded-full border border-accent-500/10 animate-spin-slow"></div>
            <div class="absolute -bottom-24 -left-24 w-96 h-96 rounded-full border border-secondary-500/10 animate-spin-slow-reverse"></div>
            <div class="max-w-6xl mx-auto relative z-10">
                <SectionHeading title="About" accent="Me" />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="flex justify-center">
                        <div class="relative group">
                            <div class="w-72 h-72 rounded-full p-1 bg-gradient-to-br from-accent-400 to-secondary-500 group-hover:scale-105 group-hover:rotate-3 transition-transform duration-300">
                                <div class="w-full h-full rounded-full overflow-hidden bg-dark-800">
                                    <img
                                        src=PORTRAIT
                                        alt=owner_name()
                                        class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-300"
                                    />
                                </div>
                            </div>
                            <div class="absolute -top-4 -right-4 w-8 h-8 rounded-full bg-accent-400/60 animate-pulse"></div>
                            <div class="absolute -bottom-6 -left-6 w-12 h-12 rounded-full bg-secondary-500/50 animate-pulse"></div>
                        </div>
                    </div>
                    <div class="space-y-6">
                        <p class="text-lg text-dark-300 leading-relaxed">
                            "I am a motivated "
                            <span class="text-accent-400 font-semibold">"IT Support Specialist"</span>
                            " and "
                            <span class="text-secondary-400 font-semibold">
                                "Software Engineering student"
                            </span> " at İstanbul Topkapı Üniversitesi."
                        </p>
                        <p class="text-lg text-dark-300 leading-relaxed">
                            "I have completed the "
                            <span class="text-accent-400 font-semibold">
                                "Google IT Support Professional Certificate"
                            </span>
                            " and have hands-on experience with customer service, networking, system administration, and security on "
                            <span class="text-secondary-400 font-semibold">"Windows & Linux"</span>
                            " systems."
                        </p>
                        <p class="text-lg text-dark-300 leading-relaxed">
                            "I am passionate about learning and helping people solve their technical problems. My goal is to bridge the gap between complex technology and user-friendly solutions."
                        </p>
                        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                            {INFO_CARDS
                                .iter()
                                .enumerate()
                                .map(|(i, card)| {
                                    view! {
                                        <div
                                            class=format!(
                                                "p-[1px] rounded-lg bg-gradient-to-br {} hover:scale-105 transition-transform reveal",
                                                card.color,
                                            )
                                            style:animation-delay=stagger_delay(i, 0.1)
                                        >
                                            <div class="bg-dark-800 p-4 rounded-lg text-center h-full">
                                                <div class=format!(
                                                    "w-10 h-10 mx-auto mb-2 rounded-full flex items-center justify-center bg-gradient-to-br {}",
                                                    card.color,
                                                )>
                                                    <Glyph icon=card.icon class="text-white" />
                                                </div>
                                                <p class="text-dark-400 text-xs mb-1">{card.label}</p>
                                                <p class="text-dark-200 font-medium text-sm">{card.value}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex items-center gap-2">
                            <Glyph icon=Icon::Heart class="text-red-400 animate-pulse" />
                            <span class="text-dark-400 text-sm">
                                "Passionate about technology and problem-solving"
                            </span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
