//! Form wrapper gating destructive submissions behind a confirmation.

use gloo::dialogs::confirm;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DeleteFormProps {
    /// Endpoint the form posts to when the user confirms.
    pub action: String,
    /// The submit control rendered inside the form.
    pub children: Children,
}

#[function_component(DeleteForm)]
pub(crate) fn delete_form(props: &DeleteFormProps) -> Html {
    let onsubmit = Callback::from(|event: SubmitEvent| {
        if !confirm("Are you sure you want to delete this?") {
            event.prevent_default();
        }
    });

    html! {
        <form class="delete-form" action={props.action.clone()} method="post" onsubmit={onsubmit}>
            {for props.children.iter()}
        </form>
    }
}
