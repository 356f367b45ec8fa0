//! TopHeader component - application top navigation bar.
//!
//! Sidebar toggle, application title, signed-in user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth_state = use_auth();

    let user_label = move || {
        auth_state.with(|state| {
            state
                .user_info
                .as_ref()
                .map(|u| format!("{} ({})", u.display_name(), u.role.label()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if ctx.left_open.get() { icon("chevron-left") } else { icon("chevron-right") }}
                </button>
                <span class="top-header__title">"AquaBill"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("users")}
                    <span>{user_label}</span>
                </div>
                <button class="top-header__icon-btn" on:click=move |_| do_logout(auth_state) title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
