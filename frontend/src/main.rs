use shared::{MonthlyReport, Selection, StatusMessage};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod components;
mod services;

use components::config_panel::ConfigPanel;
use components::month_picker::{device_selection, MonthPicker};
use components::report_table::ReportTable;
use components::status_bar::StatusBar;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();

    // Module-level state: the current selection, the last rendered report,
    // the single status slot, and the config panel's visibility.
    let selection = use_state(device_selection);
    let report = use_state(|| Option::<MonthlyReport>::None);
    let status = use_state(|| Option::<StatusMessage>::None);
    let config_open = use_state(|| false);

    let notify = {
        let status = status.clone();
        Callback::from(move |message: StatusMessage| status.set(Some(message)))
    };

    // Query the report for the current selection. Single attempt, no retry,
    // no in-flight guard: a second click issues a second request and the
    // last response to resolve wins.
    let fetch_report = {
        let selection = selection.clone();
        let report = report.clone();
        let status = status.clone();
        let api_client = api_client.clone();
        Callback::from(move |_: ()| {
            let Selection { year, month } = *selection;
            let report = report.clone();
            let status = status.clone();
            let api_client = api_client.clone();

            status.set(Some(StatusMessage::info("Loading...")));
            spawn_local(async move {
                match api_client.monthly_report(year, month).await {
                    Ok(data) => {
                        report.set(Some(data));
                        status.set(Some(StatusMessage::info(format!(
                            "Loaded report for {}/{}",
                            year, month
                        ))));
                    }
                    Err(e) => {
                        gloo::console::error!(format!("report fetch failed: {}", e));
                        // The previously rendered table stays on screen.
                        status.set(Some(StatusMessage::error(e.to_string())));
                    }
                }
            });
        })
    };

    // Fetch the device month once on startup.
    {
        let fetch_report = fetch_report.clone();
        use_effect_with((), move |_| {
            fetch_report.emit(());
            || ()
        });
    }

    let on_selection_change = {
        let selection = selection.clone();
        Callback::from(move |next: Selection| selection.set(next))
    };

    let on_query = {
        let fetch_report = fetch_report.clone();
        Callback::from(move |_: MouseEvent| fetch_report.emit(()))
    };

    // Hand the export URL to the browser; the response is a file stream and
    // is never read here.
    let on_export = {
        let selection = selection.clone();
        let api_client = api_client.clone();
        Callback::from(move |_: MouseEvent| {
            let Selection { year, month } = *selection;
            let url = api_client.export_url(year, month);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&url);
            }
        })
    };

    let toggle_config = {
        let config_open = config_open.clone();
        Callback::from(move |_: MouseEvent| config_open.set(!*config_open))
    };

    html! {
        <main class="container">
            <header class="header">
                <h1>{"Monthly Attendance Report"}</h1>
            </header>

            <section class="toolbar">
                <MonthPicker selection={*selection} on_change={on_selection_change} />
                <button class="btn btn-primary" onclick={on_query}>{"Query"}</button>
                <button class="btn" onclick={on_export}>{"Export"}</button>
                <button class="btn" onclick={toggle_config}>
                    { if *config_open { "Hide config" } else { "Edit config" } }
                </button>
            </section>

            <StatusBar message={(*status).clone()} />

            <section class="report-section">
                { if let Some(report) = (*report).clone() {
                    html! { <ReportTable report={report} /> }
                } else {
                    html! {}
                } }
            </section>

            <ConfigPanel
                is_open={*config_open}
                api_client={api_client}
                on_status={notify}
            />
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
