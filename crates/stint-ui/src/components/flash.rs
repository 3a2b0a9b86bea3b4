//! Flash message host with timed fade-and-remove.
//!
//! A flash stays fully visible for [`FLASH_VISIBLE_MS`], then carries the
//! `leaving` class for [`FLASH_FADE_MS`] while the stylesheet runs the fade
//! transition, and is removed when the fade is over.

use crate::logic::{FLASH_FADE_MS, FLASH_VISIBLE_MS};
use crate::models::Flash;
use gloo_timers::callback::Timeout;
use std::collections::BTreeSet;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FlashHostProps {
    pub flashes: Vec<Flash>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(FlashHost)]
pub(crate) fn flash_host(props: &FlashHostProps) -> Html {
    let fading = use_state(BTreeSet::<u64>::new);

    // Visible phase: after the full lifetime, mark the flash as leaving.
    {
        let fading = fading.clone();
        use_effect_with_deps(
            move |list: &Vec<Flash>| {
                let mut handles = Vec::new();
                for flash in list {
                    let id = flash.id;
                    let fading = fading.clone();
                    handles.push(Timeout::new(FLASH_VISIBLE_MS, move || {
                        let mut next = (*fading).clone();
                        next.insert(id);
                        fading.set(next);
                    }));
                }
                move || drop(handles)
            },
            props.flashes.clone(),
        );
    }

    // Fade phase: once leaving, remove after the transition has run.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |ids: &BTreeSet<u64>| {
                let mut handles = Vec::new();
                for id in ids {
                    let id = *id;
                    let on_dismiss = on_dismiss.clone();
                    handles.push(Timeout::new(FLASH_FADE_MS, move || on_dismiss.emit(id)));
                }
                move || drop(handles)
            },
            (*fading).clone(),
        );
    }

    html! {
        <div class="flash-stack" aria-live="polite" aria-atomic="true">
            {for props.flashes.iter().map(|flash| {
                let leaving = fading.contains(&flash.id);
                let id = flash.id;
                let on_close = {
                    let on_dismiss = props.on_dismiss.clone();
                    Callback::from(move |_| on_dismiss.emit(id))
                };
                html! {
                    <div
                        class={classes!(
                            "flash-message",
                            flash.kind.as_class(),
                            leaving.then_some("leaving")
                        )}
                        role="status">
                        <span>{flash.message.clone()}</span>
                        <button class="ghost" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
                    </div>
                }
            })}
        </div>
    }
}
