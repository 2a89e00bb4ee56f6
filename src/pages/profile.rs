//! Profile and Change Password

use leptos::prelude::*;
use leptos::task::spawn_local;
use mmis_core::validation::{validate_password_change, PasswordErrors};
use mmis_core::{initials, Employee, Role};

use crate::api::ApiError;
use crate::components::{Loading, PageShell};
use crate::context::use_app_context;
use crate::notify;
use crate::routes::Route;

fn or_na(value: &Option<String>) -> String {
    value.clone().filter(|v| !v.is_empty()).unwrap_or_else(|| "N/A".to_string())
}

#[component]
fn Detail(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <label class="text-sm font-medium text-gray-500">{label}</label>
            <p class="text-lg text-gray-800">{value}</p>
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let (employee, set_employee) = signal::<Option<Employee>>(None);
    let (failed, set_failed) = signal(false);

    Effect::new(move |_| {
        let Some(employee_id) = ctx.employee_id() else { return };
        spawn_local(async move {
            match ctx.api().get_employee(employee_id).await {
                Ok(loaded) => {
                    let _ = set_employee.try_set(Some(loaded));
                }
                Err(e) => {
                    let _ = set_failed.try_set(true);
                    ctx.report_error("Failed to load profile data", &e);
                }
            }
        });
    });

    view! {
        <PageShell title="My Profile" width="max-w-4xl">
            {move || match (employee.get(), failed.get()) {
                (Some(employee), _) => view! { <ProfileCard employee=employee /> }.into_any(),
                (None, true) => view! {
                    <div class="text-center">
                        <p class="text-red-500 mb-4">"Failed to load profile data"</p>
                        <button
                            class="px-6 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                            on:click=move |_| ctx.navigate(Route::Dashboard)
                        >
                            "Back to Dashboard"
                        </button>
                    </div>
                }
                .into_any(),
                (None, false) => view! { <Loading /> }.into_any(),
            }}
        </PageShell>
    }
}

#[component]
fn ProfileCard(employee: Employee) -> impl IntoView {
    let ctx = use_app_context();
    let role = Role::parse(&employee.employee_access_level);
    let badge_class = if role.is_admin() {
        "px-3 py-1 rounded-full text-sm font-semibold bg-purple-100 text-purple-800"
    } else {
        "px-3 py-1 rounded-full text-sm font-semibold bg-blue-100 text-blue-800"
    };

    view! {
        <div class="bg-white border rounded-xl shadow p-8">
            <div class="flex items-center gap-6 mb-8">
                <div class="w-24 h-24 rounded-full bg-blue-600 text-white flex items-center justify-center text-3xl font-bold">
                    {initials(&employee.employee_name)}
                </div>
                <div>
                    <h2 class="text-3xl font-bold text-gray-800 mb-2">{employee.employee_name.clone()}</h2>
                    <p class="text-gray-500 text-lg">{or_na(&employee.employee_designation)}</p>
                </div>
            </div>

            <div class="grid grid-cols-2 gap-8">
                <div class="space-y-4">
                    <h3 class="text-xl font-semibold text-gray-800 border-b pb-2">"Personal Information"</h3>
                    <Detail label="Employee ID" value=employee.employee_id.to_string() />
                    <Detail label="Badge Number" value=or_na(&employee.employee_badge_number) />
                    <Detail label="Full Name" value=employee.employee_name.clone() />
                    <Detail label="Designation" value=or_na(&employee.employee_designation) />
                </div>
                <div class="space-y-4">
                    <h3 class="text-xl font-semibold text-gray-800 border-b pb-2">"Work Information"</h3>
                    <div>
                        <label class="text-sm font-medium text-gray-500">"Access Level"</label>
                        <p class="text-lg"><span class=badge_class>{employee.employee_access_level.clone()}</span></p>
                    </div>
                    <Detail label="Shift" value=or_na(&employee.employee_shift) />
                    <Detail label="Username" value=or_na(&employee.employee_username) />
                    <Detail label="Email" value=or_na(&employee.employee_email) />
                </div>
            </div>

            <div class="flex justify-center gap-4 mt-10">
                <button
                    class="px-6 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 shadow"
                    on:click=move |_| ctx.navigate(Route::ChangePassword)
                >
                    "🔒 Change Password"
                </button>
                <button
                    class="px-6 py-2 bg-gray-300 rounded hover:bg-gray-400 shadow"
                    on:click=move |_| ctx.navigate(Route::Dashboard)
                >
                    "Back"
                </button>
                <button
                    class="px-6 py-2 bg-red-600 text-white rounded hover:bg-red-700 shadow"
                    on:click=move |_| ctx.sign_out()
                >
                    "Sign Out"
                </button>
            </div>
        </div>
    }
}

#[component]
fn PasswordField(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    error: Signal<Option<&'static str>>,
    on_edit: Callback<()>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-semibold text-gray-700 mb-2">{label}</label>
            <input
                type="password"
                class=move || if error.get().is_some() {
                    "w-full p-3 border rounded border-red-500"
                } else {
                    "w-full p-3 border rounded border-gray-300"
                }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    on_edit.run(());
                }
            />
            {move || error.get().map(|message| view! { <p class="text-red-500 text-sm mt-1">{message}</p> })}
        </div>
    }
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let ctx = use_app_context();
    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(PasswordErrors::default());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (current_value, new_value) = (current.get_untracked(), new.get_untracked());
        let found = validate_password_change(&current_value, &new_value, &confirm.get_untracked());
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        let Some(employee_id) = ctx.employee_id() else {
            notify::alert("Error: Employee ID not found. Please log in again.");
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match ctx.api().change_password(employee_id, &current_value, &new_value).await {
                Ok(_) => {
                    log::info!("password changed for employee {}", employee_id);
                    notify::alert("Password changed successfully! Please log in again.");
                    ctx.sign_out();
                }
                Err(e @ ApiError::Status { status: 400, .. }) => {
                    log::warn!("password change rejected: {}", e);
                    notify::alert(e.detail_or("Failed to change password. Please check your current password."));
                }
                Err(e) => ctx.report_error("Failed to change password. Please try again.", &e),
            }
            let _ = set_loading.try_set(false);
        });
    };

    view! {
        <PageShell title="Change Password" width="max-w-md">
            <form class="bg-white border rounded-xl shadow p-8 space-y-6" on:submit=on_submit>
                <PasswordField
                    label="Current Password"
                    placeholder="Enter your current password"
                    value=current
                    error=Signal::derive(move || errors.with(|e| e.current))
                    on_edit=Callback::new(move |_| errors.update(|e| e.current = None))
                />
                <PasswordField
                    label="New Password"
                    placeholder="Enter new password (min 6 characters)"
                    value=new
                    error=Signal::derive(move || errors.with(|e| e.new))
                    on_edit=Callback::new(move |_| errors.update(|e| e.new = None))
                />
                <PasswordField
                    label="Confirm New Password"
                    placeholder="Confirm your new password"
                    value=confirm
                    error=Signal::derive(move || errors.with(|e| e.confirm))
                    on_edit=Callback::new(move |_| errors.update(|e| e.confirm = None))
                />
                <div class="flex gap-4">
                    <button
                        type="button"
                        class="flex-1 px-6 py-3 bg-gray-300 rounded hover:bg-gray-400"
                        on:click=move |_| ctx.navigate(Route::Profile)
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="flex-1 px-6 py-3 bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
                        disabled=move || loading.get()
                    >
                        {move || if loading.get() { "Changing..." } else { "Change Password" }}
                    </button>
                </div>
            </form>
        </PageShell>
    }
}
