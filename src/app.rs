//! MMIS App Shell
//!
//! Owns the route and session signals, applies the role guard and renders
//! the page for the current route.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AccessDenied, Loading};
use crate::config::AppConfig;
use crate::context::{current_location_route, AppContext};
use crate::pages::*;
use crate::routes::{Guard, Route};
use crate::session;
use crate::store::AppState;

fn page(route: Route) -> AnyView {
    match route {
        Route::Login => view! { <LoginPage /> }.into_any(),
        Route::Dashboard | Route::NotFound => view! { <DashboardPage /> }.into_any(),
        Route::RequestProject => view! { <RequestProjectPage /> }.into_any(),
        Route::RequestTestArea { project } => view! { <RequestTestAreaPage project=project /> }.into_any(),
        Route::RequestSearch { project, test_area } => {
            view! { <RequestSearchPage project=project test_area=test_area /> }.into_any()
        }
        Route::RequestItem { item_id, project, test_area } => {
            view! { <ItemRequestPage item_id=item_id project=project test_area=test_area /> }.into_any()
        }
        Route::ReturnList => view! { <ReturnListPage /> }.into_any(),
        Route::ReturnItem { transaction_id } => view! { <ReturnItemPage transaction_id=transaction_id /> }.into_any(),
        Route::Alerts => view! { <AlertsPage /> }.into_any(),
        Route::Activity => view! { <ActivityPage /> }.into_any(),
        Route::Profile => view! { <ProfilePage /> }.into_any(),
        Route::ChangePassword => view! { <ChangePasswordPage /> }.into_any(),
        Route::RestockProject => view! { <RestockProjectPage /> }.into_any(),
        Route::RestockTestArea { project } => view! { <RestockTestAreaPage project=project /> }.into_any(),
        Route::RestockItems { project, test_area } => {
            view! { <RestockItemsPage project=project test_area=test_area /> }.into_any()
        }
        Route::RestockEdit { item_id, project, test_area } => {
            view! { <RestockEditPage item_id=item_id project=project test_area=test_area /> }.into_any()
        }
        Route::AddNew => view! { <AddNewPage /> }.into_any(),
        Route::AddNewStock { project } => view! { <NewStockPage project=project /> }.into_any(),
        Route::AddNewFixture => view! { <NewFixturePage /> }.into_any(),
        Route::EditFixture { fixture_id } => view! { <EditFixturePage fixture_id=fixture_id /> }.into_any(),
        Route::Reports => view! { <ReportsPage /> }.into_any(),
        Route::CurrentInventory => view! { <CurrentInventoryPage /> }.into_any(),
        Route::LowStockReport => view! { <LowStockReportPage /> }.into_any(),
        Route::SpendingReport => view! { <SpendingReportPage /> }.into_any(),
        Route::CustomizedReport => view! { <CustomizedReportPage /> }.into_any(),
        Route::Transfer { source_item_id, dest_item_id } => {
            view! { <TransferPage source_item_id=source_item_id dest_item_id=dest_item_id /> }.into_any()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("MMIS front end starting, API at {}", config.api_base_url);

    let route = signal(current_location_route());
    let session = signal(session::load_session());
    let ctx = AppContext::new(route, session, config);

    provide_context(ctx);
    provide_context(Store::new(AppState::new()));

    // Back/forward buttons
    let _ = window_event_listener(ev::popstate, move |_| ctx.sync_from_location());

    let guard = Memo::new(move |_| {
        let (signed_in, admin) = ctx
            .session
            .with(|s| (s.is_some(), s.as_ref().is_some_and(|s| s.is_admin())));
        ctx.route.with(|route| route.guard(signed_in, admin))
    });

    Effect::new(move |_| match guard.get() {
        Guard::SignIn => ctx.redirect(Route::Login),
        Guard::Home => ctx.redirect(Route::Dashboard),
        Guard::Allow | Guard::Deny(_) => {}
    });

    view! {
        {move || match guard.get() {
            Guard::Allow => page(ctx.route.get()),
            Guard::Deny(feature) => view! { <AccessDenied feature=feature /> }.into_any(),
            Guard::SignIn | Guard::Home => view! { <Loading /> }.into_any(),
        }}
    }
}
