//! Contact list with the contacted-flag toggle and a confirmed delete form.

use crate::components::delete_form::DeleteForm;
use crate::logic::contact_delete_path;
use crate::state::{ContactId, ContactRow};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ContactListProps {
    pub rows: Vec<ContactRow>,
    pub on_toggle: Callback<ContactId>,
}

#[function_component(ContactList)]
pub(crate) fn contact_list(props: &ContactListProps) -> Html {
    if props.rows.is_empty() {
        return html! {};
    }

    html! {
        <section class="contacts">
            <h2>{"Contacts"}</h2>
            <ul class="contact-list">
                {for props.rows.iter().map(|row| render_row(row, &props.on_toggle))}
            </ul>
        </section>
    }
}

fn render_row(row: &ContactRow, on_toggle: &Callback<ContactId>) -> Html {
    let id = row.id;
    let onclick = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(id))
    };
    let toggle_icon = if row.contacted {
        "iconify lucide--check-circle size-4"
    } else {
        "iconify lucide--circle size-4"
    };

    html! {
        <li class={classes!("contact", row.contacted.then_some("contacted"))}>
            <button
                type="button"
                class="ghost contact-toggle"
                aria-pressed={row.contacted.to_string()}
                aria-label="Toggle contacted"
                onclick={onclick}>
                <span class={toggle_icon}></span>
            </button>
            <div class="contact-details">
                <span class="contact-name">{row.name.clone()}</span>
                {if row.title.is_empty() { html!{} } else {
                    html! { <span class="muted">{row.title.clone()}</span> }
                }}
                {if row.email.is_empty() { html!{} } else {
                    html! { <a href={format!("mailto:{}", row.email)}>{row.email.clone()}</a> }
                }}
            </div>
            <DeleteForm action={contact_delete_path(row.id)}>
                <button type="submit" class="ghost danger" aria-label="Delete contact">
                    <span class="iconify lucide--trash-2 size-4"></span>
                </button>
            </DeleteForm>
        </li>
    }
}
