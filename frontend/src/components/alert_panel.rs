use yew::prelude::*;

use crate::alerts::AlertRecord;
use crate::controller::state::AlertSlot;

#[derive(Properties, PartialEq)]
pub struct AlertPanelProps {
    pub alert: Option<(AlertRecord, AlertSlot)>,
}

#[function_component(AlertPanel)]
pub fn alert_panel(props: &AlertPanelProps) -> Html {
    let item = match &props.alert {
        Some((record, slot)) => {
            let style = if slot.revealed {
                "transition: all 0.3s ease; opacity: 1; transform: translateX(0);"
            } else {
                "opacity: 0; transform: translateX(100%);"
            };
            html! {
                <div class="alert-item" key={slot.serial.to_string()} {style}>
                    <div class={classes!("alert-icon", record.severity.css_class())}>
                        <i class={record.icon}></i>
                    </div>
                    <div class="alert-content">
                        <h4>{ record.title }</h4>
                        <p>{ record.message }</p>
                        <span class="alert-time">{ record.time }</span>
                    </div>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <div class="alerts-panel">
            <h3><i class="fas fa-bell"></i>{" Live Alerts"}</h3>
            { item }
        </div>
    }
}
