//! Status dropdown for an application row.
//!
//! # Design
//! - Open/closed state lives in the shared store, keyed by application id, so
//!   the at-most-one-open rule is enforced in one place.
//! - Menu items emit callbacks only; the shell owns the network side effects.

use crate::app::AppStore;
use crate::state::ApplicationId;
use stint_api_models::ApplicationStatus;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub(crate) struct StatusMenuProps {
    /// Application the menu belongs to.
    pub app_id: ApplicationId,
    /// Current status string, used to mark the active item.
    pub current: String,
    pub on_select: Callback<(ApplicationId, ApplicationStatus)>,
}

#[function_component(StatusMenu)]
pub(crate) fn status_menu(props: &StatusMenuProps) -> Html {
    let (store, dispatch) = use_store::<AppStore>();
    let open = store.menus.is_open(props.app_id);

    let toggle = {
        let id = props.app_id;
        Callback::from(move |_| dispatch.reduce_mut(|store| store.menus.toggle(id)))
    };

    html! {
        <div class="status-dropdown">
            <button
                type="button"
                class="status-trigger"
                aria-haspopup="menu"
                aria-expanded={open.to_string()}
                onclick={toggle}>
                <span class={classes!("status-badge", props.current.clone())}>
                    {badge_label(&props.current)}
                </span>
                <span class="iconify lucide--chevron-down size-3.5"></span>
            </button>
            <ul class={classes!("status-menu", open.then_some("show"))} role="menu">
                {for ApplicationStatus::ALL.iter().map(|status| {
                    let status = *status;
                    let id = props.app_id;
                    let on_select = props.on_select.clone();
                    let onclick = Callback::from(move |_| on_select.emit((id, status)));
                    html! {
                        <li role="none">
                            <button
                                type="button"
                                role="menuitem"
                                class={classes!(
                                    "status-option",
                                    (props.current == status.as_str()).then_some("current")
                                )}
                                onclick={onclick}>
                                {status.label()}
                            </button>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

fn badge_label(status: &str) -> String {
    ApplicationStatus::parse(status).map_or_else(|| status.to_string(), |known| known.label().to_string())
}
