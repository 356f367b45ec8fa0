//! Sidebar: one item per section available to the signed-in role

use crate::layout::global_context::{sections_for_role, AppGlobalContext};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth_state = use_auth();

    let sections = move || {
        auth_state
            .with(|state| state.user_info.as_ref().map(|u| u.role))
            .map(sections_for_role)
            .unwrap_or_default()
    };

    view! {
        <div class="app-sidebar__content">
            {move || sections().into_iter().map(|section| view! {
                <div
                    class="app-sidebar__item"
                    class:app-sidebar__item--active=move || ctx.active.get() == section
                    style:padding-left="12px"
                    on:click=move |_| ctx.open(section)
                >
                    <div class="app-sidebar__item-content">
                        {icon(section.icon())}
                        <span>{section.label()}</span>
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}
