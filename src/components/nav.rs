use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::scroll::use_scroll_watch;
use crate::state::{PageAction, PageView};

const NAV_LINKS: [(&str, &str); 4] = [
    ("Product", "#features"),
    ("How It Works", "#steps"),
    ("Performance", "#performance"),
    ("Pricing", "#footer"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub view: UseReducerHandle<PageView>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let view = props.view.clone();

    {
        let view = view.clone();
        use_scroll_watch(Callback::from(move |past| {
            view.dispatch(PageAction::SetScrolled(past));
        }));
    }

    let toggle_menu = {
        let view = view.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            view.dispatch(PageAction::ToggleMobileMenu);
        })
    };

    // Picking a destination always closes the menu.
    let close_menu = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            view.dispatch(PageAction::CloseMobileMenu);
        })
    };

    html! {
        <nav class={classes!("top-nav", view.is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#top" class="nav-logo">
                    <span class="nav-logo-mark">{"🖥"}</span>
                    <span class="nav-logo-text">{"SkyDC"}</span>
                </a>

                <div class="nav-links">
                    {
                        NAV_LINKS.iter().map(|&(name, href)| html! {
                            <a key={name} href={href} class="nav-link">{name}</a>
                        }).collect::<Html>()
                    }
                </div>

                <div class="nav-actions">
                    <button class="nav-signin">{"Sign In"}</button>
                    <button class="nav-cta shimmer-btn">{"Get Started"}</button>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if view.mobile_menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            {
                if view.mobile_menu_open {
                    html! {
                        <div class="mobile-menu">
                            {
                                NAV_LINKS.iter().map(|&(name, href)| html! {
                                    <a
                                        key={name}
                                        href={href}
                                        class="mobile-link"
                                        onclick={close_menu.clone()}
                                    >
                                        {name}
                                    </a>
                                }).collect::<Html>()
                            }
                            <hr class="mobile-divider" />
                            <button class="mobile-cta" onclick={close_menu.clone()}>
                                {"Get Started"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
