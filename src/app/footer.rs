use leptos::prelude::*;

use crate::content::Icon;
use crate::site::{build_year, owner_name, LOCATION};

use super::viewport::scroll_to_top;
use super::Glyph;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative bg-dark-950 border-t border-dark-800 py-8">
            <div class="max-w-6xl mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-4">
                <div class="text-center md:text-left">
                    <p class="text-dark-400 text-sm flex items-center gap-1 justify-center md:justify-start">
                        {format!("© {} {}. Built with", build_year(), owner_name())}
                        <Glyph icon=Icon::Heart class="text-red-400 animate-pulse" />
                        <span class="text-accent-400">"Rust & Leptos"</span>
                    </p>
                    <p class="text-dark-500 text-xs mt-1">
                        {format!("Designed and developed with passion in {LOCATION}")}
                    </p>
                </div>
                <button
                    class="group flex items-center gap-2 px-4 py-2 rounded-full bg-dark-800 text-dark-300 hover:bg-accent-500 hover:text-dark-950 transition-colors"
                    aria-label="Back to top"
                    on:click=move |_| scroll_to_top()
                >
                    <Glyph icon=Icon::ChevronDown class="rotate-180 group-hover:-translate-y-0.5 transition-transform" />
                    "Back to top"
                </button>
            </div>
        </footer>
    }
}
