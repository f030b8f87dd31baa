use std::time::Duration;

use dioxus::{logger::tracing::debug, prelude::*};

use crate::transition::{Stage, TransitionClasses, TransitionTiming};

async fn sleep(d: Duration) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(d).await;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(d).await;
}

/// Tracks the transition stage for a `show` flag.
///
/// Each change of `show` bumps a generation counter; timers spawned for an
/// older generation stop without touching the stage, so a toggle mid-flight
/// takes over from wherever the previous transition left off.
pub fn use_transition(show: bool, timing: TransitionTiming) -> Signal<Stage> {
    let mut stage = use_signal(|| Stage::initial(show));
    let mut generation = use_signal(|| 0u64);

    use_effect(use_reactive((&show,), move |(show,)| {
        let current = *stage.peek();
        let Some(next) = current.toggle(show) else {
            return;
        };
        let ticket = *generation.peek() + 1;
        generation.set(ticket);
        debug!("transition {current:?} -> {next:?}");
        stage.set(next);

        spawn(async move {
            let mut current = next;
            while let Some(hold) = current.hold(timing) {
                sleep(hold).await;
                if *generation.peek() != ticket {
                    return;
                }
                let Some(after) = current.advance() else { break };
                debug!("transition {current:?} -> {after:?}");
                stage.set(after);
                current = after;
            }
        });
    }));

    stage
}

/// Mounts `children` while shown or animating out, with stage classes on a wrapper div.
#[component]
pub fn Transition(
    show: bool,
    classes: TransitionClasses,
    timing: TransitionTiming,
    children: Element,
) -> Element {
    let stage = use_transition(show, timing);
    let stage = stage();
    if !stage.is_mounted() {
        return rsx! {};
    }
    let class = stage.class(&classes);
    rsx! {
        div { class: "{class}", {children} }
    }
}
