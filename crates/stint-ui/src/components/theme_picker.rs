//! Theme selector controls for the topbar.
//!
//! # Design
//! - Presentation only; the shell owns the active theme and persistence.
//! - Exactly the control whose identifier equals the active theme carries the
//!   active class; an unknown active identifier marks none.

use crate::theme::THEMES;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ThemePickerProps {
    /// Active theme identifier.
    pub active: String,
    pub on_select: Callback<String>,
}

#[function_component(ThemePicker)]
pub(crate) fn theme_picker(props: &ThemePickerProps) -> Html {
    html! {
        <div class="theme-picker" role="group" aria-label="Theme">
            {for THEMES.iter().map(|theme| {
                let id = theme.id;
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_| on_select.emit(id.to_string()));
                html! {
                    <button
                        type="button"
                        class={classes!(
                            "theme-btn",
                            (props.active == id).then_some("active")
                        )}
                        data-theme={id}
                        title={theme.label}
                        onclick={onclick}>
                        <span class="swatch"></span>
                        <span class="theme-label">{theme.label}</span>
                    </button>
                }
            })}
        </div>
    }
}
