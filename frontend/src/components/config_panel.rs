use serde_json::Value;
use shared::StatusMessage;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::services::api::{ApiClient, ApiError};

/// Status shown when the buffer fails local JSON validation; in that case
/// no request is made at all.
pub const INVALID_JSON_MESSAGE: &str = "Config is not valid JSON; fix the text before saving";
const CONFIG_SAVED_MESSAGE: &str = "Config saved";

/// Parse the operator's buffer before any network traffic.
pub fn parse_config_text(text: &str) -> Result<Value, ApiError> {
    serde_json::from_str(text).map_err(|_| ApiError::InvalidInput(INVALID_JSON_MESSAGE.to_string()))
}

/// Stable pretty-printed form shown in the editor buffer.
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[derive(Properties, PartialEq)]
pub struct ConfigPanelProps {
    pub is_open: bool,
    pub api_client: ApiClient,
    pub on_status: Callback<StatusMessage>,
}

/// Editor for the backend's report-rules config, treated as an opaque JSON
/// document.
///
/// Each hidden-to-visible transition fetches the config fresh; hiding the
/// panel fetches nothing. A successful save replaces the buffer with the
/// server's canonical echo, which may differ from what was sent.
#[function_component(ConfigPanel)]
pub fn config_panel(props: &ConfigPanelProps) -> Html {
    let buffer = use_state(String::new);

    let load = {
        let buffer = buffer.clone();
        let api_client = props.api_client.clone();
        let on_status = props.on_status.clone();
        Callback::from(move |_: ()| {
            let buffer = buffer.clone();
            let api_client = api_client.clone();
            let on_status = on_status.clone();
            spawn_local(async move {
                match api_client.load_config().await {
                    Ok(config) => buffer.set(pretty(&config)),
                    // Buffer keeps its previous contents on failure.
                    Err(e) => on_status.emit(StatusMessage::error(e.to_string())),
                }
            });
        })
    };

    // Exactly one load per reveal; none when hiding.
    {
        let load = load.clone();
        use_effect_with(props.is_open, move |is_open| {
            if *is_open {
                load.emit(());
            }
            || ()
        });
    }

    let on_buffer_change = {
        let buffer = buffer.clone();
        Callback::from(move |e: Event| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            buffer.set(area.value());
        })
    };

    let on_reload = {
        let load = load.clone();
        Callback::from(move |_: MouseEvent| load.emit(()))
    };

    let on_save = {
        let buffer = buffer.clone();
        let api_client = props.api_client.clone();
        let on_status = props.on_status.clone();
        Callback::from(move |_: MouseEvent| {
            let payload = match parse_config_text(&buffer) {
                Ok(value) => value,
                Err(e) => {
                    on_status.emit(StatusMessage::error(e.to_string()));
                    return;
                }
            };

            let buffer = buffer.clone();
            let api_client = api_client.clone();
            let on_status = on_status.clone();
            spawn_local(async move {
                match api_client.save_config(&payload).await {
                    Ok(canonical) => {
                        buffer.set(pretty(&canonical));
                        on_status.emit(StatusMessage::info(CONFIG_SAVED_MESSAGE));
                    }
                    Err(e) => on_status.emit(StatusMessage::error(e.to_string())),
                }
            });
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <section class="config-panel">
            <h2>{"Report rules"}</h2>
            <textarea
                class="config-text"
                rows="16"
                value={(*buffer).clone()}
                onchange={on_buffer_change}
            />
            <div class="config-actions">
                <button class="btn" onclick={on_reload}>{"Reload"}</button>
                <button class="btn btn-primary" onclick={on_save}>{"Save"}</button>
            </div>
        </section>
    }
}
