use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod meta;
mod components {
    pub mod form_field;
}
mod pages {
    pub mod gift_cards;
    pub mod spark_fluencer;
}

use pages::{
    gift_cards::GiftCards,
    spark_fluencer::SparkFluencer,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    GiftCards,
    #[at("/spark-fluencer")]
    SparkFluencer,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::GiftCards => {
            info!("Rendering Gift Cards page");
            html! { <GiftCards /> }
        },
        Route::SparkFluencer => {
            info!("Rendering Spark-fluencer page");
            html! { <SparkFluencer /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(scroll_top > 40);
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::GiftCards} classes="nav-logo">
                    {"Sparkorama"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::GiftCards} classes="nav-link">
                            {"Gift Cards"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::SparkFluencer} classes="nav-link">
                            {"Spark-fluencer Program"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    background: rgba(255, 255, 255, 0.95);
                    z-index: 100;
                    transition: box-shadow 0.3s ease;
                }

                .top-nav.scrolled {
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: #1f2937;
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    color: #4b5563;
                    text-decoration: none;
                    font-size: 1rem;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #1f2937;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 4px;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #1f2937;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        flex-direction: column;
                        gap: 0;
                        background: #ffffff;
                        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.08);
                        padding: 1rem 0;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                    }

                    .nav-right .nav-link {
                        display: block;
                        padding: 0.75rem 2rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
