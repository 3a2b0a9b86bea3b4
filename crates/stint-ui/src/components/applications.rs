//! Applications table: one row per tracked application, with the status
//! dropdown and a confirmed delete form.

use crate::components::delete_form::DeleteForm;
use crate::components::status_menu::StatusMenu;
use crate::logic::application_delete_path;
use crate::state::{ApplicationId, ApplicationRow};
use stint_api_models::ApplicationStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ApplicationsTableProps {
    pub rows: Vec<ApplicationRow>,
    pub on_select_status: Callback<(ApplicationId, ApplicationStatus)>,
}

#[function_component(ApplicationsTable)]
pub(crate) fn applications_table(props: &ApplicationsTableProps) -> Html {
    if props.rows.is_empty() {
        return html! {
            <section class="applications empty">
                <p class="muted">{"No applications yet. Add one to get started."}</p>
            </section>
        };
    }

    html! {
        <section class="applications">
            <table>
                <thead>
                    <tr>
                        <th>{"Company"}</th>
                        <th>{"Role"}</th>
                        <th>{"Location"}</th>
                        <th>{"Deadline"}</th>
                        <th>{"Tags"}</th>
                        <th>{"Status"}</th>
                        <th aria-label="Actions"></th>
                    </tr>
                </thead>
                <tbody>
                    {for props.rows.iter().map(|row| render_row(row, &props.on_select_status))}
                </tbody>
            </table>
        </section>
    }
}

fn render_row(
    row: &ApplicationRow,
    on_select_status: &Callback<(ApplicationId, ApplicationStatus)>,
) -> Html {
    html! {
        <tr>
            <td class="company">{row.company.clone()}</td>
            <td>{row.job_title.clone()}</td>
            <td>{row.location.clone()}</td>
            <td>{row.deadline.clone().unwrap_or_else(|| "–".to_string())}</td>
            <td class="tags">
                {for row.tags.iter().map(|tag| html! {
                    <span class="pill subtle">{tag.clone()}</span>
                })}
            </td>
            <td>
                <StatusMenu
                    app_id={row.id}
                    current={row.status.clone()}
                    on_select={on_select_status.clone()}
                />
            </td>
            <td>
                <DeleteForm action={application_delete_path(row.id)}>
                    <button type="submit" class="ghost danger" aria-label="Delete application">
                        <span class="iconify lucide--trash-2 size-4"></span>
                    </button>
                </DeleteForm>
            </td>
        </tr>
    }
}
