//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::routes::Route;

const INVALID_LOGIN: &str = "Invalid username or password";

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let cannot_submit = move || loading.get() || username.get().trim().is_empty() || password.get().is_empty();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if cannot_submit() {
            return;
        }
        set_error.set(String::new());
        set_loading.set(true);
        let user = username.get_untracked();
        let pass = password.get_untracked();

        spawn_local(async move {
            match ctx.api().login(user.trim(), &pass).await {
                Ok(token) if ctx.sign_in(&token) => ctx.navigate(Route::Dashboard),
                Ok(_) => {
                    log::error!("login returned a token that could not be decoded");
                    let _ = set_error.try_set(INVALID_LOGIN.to_string());
                }
                Err(e) => {
                    log::warn!("login failed for {}: {}", user.trim(), e);
                    let _ = set_error.try_set(INVALID_LOGIN.to_string());
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-screen bg-gradient-to-br from-blue-100 via-blue-50 to-indigo-100">
            <div class="w-full max-w-md px-6">
                <form class="bg-white shadow-2xl rounded-2xl p-8 border border-gray-100" on:submit=on_submit>
                    <div class="text-center mb-8">
                        <h1 class="text-4xl font-bold text-blue-600 mb-2">"MMIS"</h1>
                        <h2 class="text-2xl font-semibold text-gray-800 mb-1">"Welcome Back"</h2>
                        <p class="text-gray-500 text-sm">"Sign in to access your inventory management system"</p>
                    </div>

                    <div class="mb-5">
                        <label class="block text-sm font-medium text-gray-700 mb-2">"Username"</label>
                        <input
                            type="text"
                            class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500"
                            placeholder="Enter your username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="mb-6">
                        <label class="block text-sm font-medium text-gray-700 mb-2">"Password"</label>
                        <input
                            type="password"
                            class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500"
                            placeholder="Enter your password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <Show when=move || !error.get().is_empty()>
                        <div class="mb-4 p-3 bg-red-50 border border-red-200 rounded-lg text-red-600 text-sm">
                            {move || error.get()}
                        </div>
                    </Show>

                    <button
                        type="submit"
                        class="w-full py-3 bg-blue-600 text-white font-semibold rounded-lg hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=cannot_submit
                    >
                        {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
