use yew::prelude::*;

use crate::content::NAV_ENTRIES;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Option<String>,
    pub scrolled: bool,
    pub show_menu_button: bool,
    pub menu_open: bool,
    /// `href` of the clicked link.
    pub on_anchor: Callback<String>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        active,
        scrolled,
        show_menu_button,
        menu_open,
        on_anchor,
        on_toggle_menu,
    } = props;

    let navbar_style = if *scrolled {
        "background: rgba(10, 14, 39, 0.98); box-shadow: 0 2px 20px rgba(0, 212, 255, 0.1);"
    } else {
        "background: rgba(10, 14, 39, 0.95); box-shadow: none;"
    };

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let brand_click = {
        let on_anchor = on_anchor.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_anchor.emit("#home".to_string());
        })
    };

    html! {
        <nav class="navbar" style={navbar_style}>
            <div class="nav-container">
                <a href="#home" class="nav-logo" onclick={brand_click}>
                    <i class="fas fa-globe-americas"></i>
                    {" ClimateAI"}
                </a>
                <ul class={classes!("nav-menu", menu_open.then(|| "active"))}>
                    { for NAV_ENTRIES.iter().map(|entry| {
                        let onclick = {
                            let on_anchor = on_anchor.clone();
                            let href = format!("#{}", entry.target);
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_anchor.emit(href.clone());
                            })
                        };
                        let is_active = active.as_deref() == Some(entry.target);
                        html! {
                            <li>
                                <a
                                    href={format!("#{}", entry.target)}
                                    class={classes!("nav-link", is_active.then(|| "active"))}
                                    {onclick}
                                >
                                    {entry.label}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                {
                    if *show_menu_button {
                        html! {
                            <button class="mobile-menu-btn" onclick={toggle_menu}>
                                <i class="fas fa-bars"></i>
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </nav>
    }
}
