//! Page chrome: topbar with brand, search, and theme picker.

use crate::components::search_bar::SearchBar;
use crate::components::theme_picker::ThemePicker;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PageShellProps {
    pub children: Children,
    /// Active theme identifier, used to mark the picker control.
    pub theme: String,
    pub on_select_theme: Callback<String>,
}

#[function_component(PageShell)]
pub(crate) fn page_shell(props: &PageShellProps) -> Html {
    html! {
        <div class="page">
            <header class="topbar">
                <div class="brand">
                    <span class="iconify lucide--briefcase size-5"></span>
                    <strong>{"Stint"}</strong>
                    <span class="muted">{"Internship Tracker"}</span>
                </div>
                <SearchBar />
                <ThemePicker active={props.theme.clone()} on_select={props.on_select_theme.clone()} />
            </header>
            <main class="content">
                {for props.children.iter()}
            </main>
        </div>
    }
}
