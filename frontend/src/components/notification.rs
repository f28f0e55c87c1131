use stylist::yew::styled_component;
use yew::prelude::*;

use crate::controller::state::{Notification, NotificationKind, NotificationPhase};

#[derive(Properties, PartialEq)]
pub struct NotificationStackProps {
    pub notifications: Vec<Notification>,
}

fn toast_style(notification: &Notification, slot: usize) -> String {
    let background = match notification.kind {
        NotificationKind::Success => "var(--success-color)",
        NotificationKind::Info => "var(--primary-color)",
    };
    let offset = match notification.phase {
        NotificationPhase::Shown => "0",
        NotificationPhase::Entering | NotificationPhase::Leaving => "calc(100% + 20px)",
    };
    format!(
        "top: {}px; background: {}; transform: translateX({});",
        20 + slot * 64,
        background,
        offset
    )
}

/// Toasts pinned to the top right. Each one slides in, waits, slides out.
#[styled_component(NotificationStack)]
pub fn notification_stack(props: &NotificationStackProps) -> Html {
    let toast = css!(
        r#"
        position: fixed;
        right: 20px;
        padding: 1rem 1.5rem;
        border-radius: 8px;
        color: white;
        font-weight: 600;
        z-index: 10000;
        transition: transform 0.3s ease;
        box-shadow: 0 5px 15px rgba(0, 0, 0, 0.3);
        "#
    );

    html! {
        <>
            { for props.notifications.iter().enumerate().map(|(slot, notification)| html! {
                <div
                    key={notification.id.to_string()}
                    class={classes!(toast.clone(), "notification", notification.kind.css_class())}
                    style={toast_style(notification, slot)}
                >
                    { notification.message.clone() }
                </div>
            }) }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(kind: NotificationKind, phase: NotificationPhase) -> Notification {
        Notification {
            id: 1,
            message: "+10 Green Points!".into(),
            kind,
            phase,
        }
    }

    #[test]
    fn toast_slides_in_only_when_shown() {
        let shown = toast_style(&toast(NotificationKind::Success, NotificationPhase::Shown), 0);
        assert!(shown.contains("translateX(0)"));
        assert!(shown.contains("--success-color"));

        let leaving = toast_style(&toast(NotificationKind::Info, NotificationPhase::Leaving), 2);
        assert!(leaving.contains("calc(100% + 20px)"));
        assert!(leaving.contains("top: 148px"));
        assert!(leaving.contains("--primary-color"));
    }
}
