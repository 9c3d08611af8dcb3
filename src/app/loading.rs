use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::loading::{LoadingSequence, Tick, STEP_INTERVAL_MS};
use crate::motion::splash_letters;

/// Full-screen splash. Calls `on_complete` once the sequence reaches `Done`.
#[component]
pub fn LoadingScreen(on_complete: Callback<()>) -> impl IntoView {
    let sequence = RwSignal::new(LoadingSequence::new());

    let _ = use_interval_fn(
        move || {
            let tick = sequence
                .try_update(|s| s.tick())
                .unwrap_or(Tick::Idle);
            match tick {
                Tick::Advanced(step) => log::debug!("splash step: {step:?}"),
                Tick::Finished => on_complete.run(()),
                Tick::Idle => {}
            }
        },
        STEP_INTERVAL_MS,
    );

    let step = move || sequence.get().step();

    view! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center bg-dark-950 overflow-hidden">
            <div class="absolute inset-0 bg-grid opacity-20"></div>
            {splash_letters()
                .into_iter()
                .map(|l| {
                    view! {
                        <span
                            class="absolute text-6xl md:text-8xl font-black opacity-20 animate-float select-none"
                            style:color=l.color
                            style:left=format!("{}%", l.left_pct)
                            style:top=format!("{}%", l.top_pct)
                            style:animation-delay=format!("{}s", l.delay_secs)
                        >
                            {l.ch}
                        </span>
                    }
                })
                .collect_view()}
            <div class="relative z-10 flex flex-col items-center gap-6">
                <div class="relative w-24 h-24">
                    <div class="absolute inset-0 rounded-full border-4 border-accent-500/20"></div>
                    <div class="absolute inset-0 rounded-full border-4 border-transparent border-t-accent-400 animate-spin"></div>
                    <div class="absolute inset-0 flex items-center justify-center text-2xl font-bold text-gradient">
                        {crate::site::OWNER_INITIALS}
                    </div>
                </div>
                <p class="text-lg text-dark-300 font-medium tracking-wide">
                    {move || step().label()}
                </p>
                <div class="w-64 h-1.5 bg-dark-800 rounded-full overflow-hidden">
                    <div
                        class="h-full bg-gradient-to-r from-accent-400 to-secondary-500 transition-all duration-300"
                        style:width=move || format!("{}%", step().percent())
                    ></div>
                </div>
            </div>
        </div>
    }
}
