//! Topbar search form; Enter in the input submits it.

use crate::logic::{SEARCH_ACTION, submits_search};
use web_sys::HtmlFormElement;
use yew::prelude::*;

#[function_component(SearchBar)]
pub(crate) fn search_bar() -> Html {
    let form_ref = use_node_ref();

    let onkeydown = {
        let form_ref = form_ref.clone();
        Callback::from(move |event: KeyboardEvent| {
            if submits_search(&event.key()) {
                event.prevent_default();
                if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                    let _ = form.submit();
                }
            }
        })
    };

    html! {
        <form ref={form_ref} class="search-box" action={SEARCH_ACTION} method="get">
            <span class="iconify lucide--search size-3.5"></span>
            <input
                type="search"
                name="search"
                placeholder="Search company, title, tags"
                aria-label="Search applications"
                onkeydown={onkeydown}
            />
        </form>
    }
}
