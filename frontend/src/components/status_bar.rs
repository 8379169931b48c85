use shared::{Severity, StatusMessage};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBarProps {
    /// The single status slot. Each write overwrites the previous message
    /// unconditionally; there is no queue and no auto-dismiss.
    pub message: Option<StatusMessage>,
}

/// The one-line status display shared by every component that reports
/// progress or failure.
#[function_component(StatusBar)]
pub fn status_bar(props: &StatusBarProps) -> Html {
    match &props.message {
        Some(message) => {
            let class = match message.severity {
                Severity::Info => "status-line info",
                Severity::Error => "status-line error",
            };
            html! { <p class={class}>{ &message.text }</p> }
        }
        None => html! { <p class="status-line"></p> },
    }
}
