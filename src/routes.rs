//! Routes
//!
//! Path <-> page mapping and the role each page requires.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone in query values (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Any signed-in user
    Member,
    Admin,
}

/// What the app shell does with a route for the current user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Allow,
    /// Not signed in: go to the login page
    SignIn,
    /// Signed in but the route has nothing to show here: go to the dashboard
    Home,
    /// Signed in without the required role
    Deny(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    RequestProject,
    RequestTestArea { project: String },
    RequestSearch { project: String, test_area: String },
    RequestItem { item_id: u32, project: String, test_area: String },
    ReturnList,
    ReturnItem { transaction_id: u32 },
    Alerts,
    Activity,
    Profile,
    ChangePassword,
    RestockProject,
    RestockTestArea { project: String },
    RestockItems { project: String, test_area: String },
    RestockEdit { item_id: u32, project: String, test_area: String },
    AddNew,
    AddNewStock { project: String },
    AddNewFixture,
    EditFixture { fixture_id: u32 },
    Reports,
    CurrentInventory,
    LowStockReport,
    SpendingReport,
    CustomizedReport,
    Transfer { source_item_id: Option<u32>, dest_item_id: Option<u32> },
    NotFound,
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(raw: &str) -> String {
    percent_decode_str(&raw.replace('+', " ")).decode_utf8_lossy().into_owned()
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// `path?key=value&...`, skipping empty values
fn with_query<V: AsRef<str>>(path: &str, pairs: &[(&str, V)]) -> String {
    let query: Vec<String> = pairs
        .iter()
        .filter(|(_, value)| !value.as_ref().is_empty())
        .map(|(key, value)| format!("{}={}", key, encode(value.as_ref())))
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

impl Route {
    pub fn parse(path: &str, query: &str) -> Self {
        let params = parse_query(query);
        let param = |name: &str| {
            params
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
                .unwrap_or_default()
        };
        let id_param = |name: &str| param(name).trim().parse::<u32>().ok();

        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Login,
            ["dashboard"] => Route::Dashboard,
            ["dashboard", "request"] => Route::RequestProject,
            ["dashboard", "request", "test-area"] => Route::RequestTestArea { project: param("project") },
            ["dashboard", "request", "search"] => Route::RequestSearch {
                project: param("project"),
                test_area: param("test_area"),
            },
            ["dashboard", "request", "item", id] => match id.parse() {
                Ok(item_id) => Route::RequestItem {
                    item_id,
                    project: param("project"),
                    test_area: param("test_area"),
                },
                Err(_) => Route::NotFound,
            },
            ["dashboard", "return"] => Route::ReturnList,
            ["dashboard", "return", "item", id] => id
                .parse()
                .map(|transaction_id| Route::ReturnItem { transaction_id })
                .unwrap_or(Route::NotFound),
            ["dashboard", "alerts"] => Route::Alerts,
            ["dashboard", "activity"] => Route::Activity,
            ["dashboard", "profile"] => Route::Profile,
            ["dashboard", "change-password"] => Route::ChangePassword,
            ["dashboard", "restock"] | ["dashboard", "restock", "project"] => Route::RestockProject,
            ["dashboard", "restock", "test-area"] => Route::RestockTestArea { project: param("project") },
            ["dashboard", "restock", "items"] => Route::RestockItems {
                project: param("project"),
                test_area: param("test_area"),
            },
            ["dashboard", "restock", "item", id, "edit"] => match id.parse() {
                Ok(item_id) => Route::RestockEdit {
                    item_id,
                    project: param("project"),
                    test_area: param("test_area"),
                },
                Err(_) => Route::NotFound,
            },
            ["dashboard", "restock", "project", "add-new"] => Route::AddNew,
            ["dashboard", "restock", "project", "add-new-stock"] => Route::AddNewStock { project: param("project") },
            ["dashboard", "restock", "project", "add-new-fixture"] => Route::AddNewFixture,
            ["dashboard", "restock", "fixture", id, "edit"] => id
                .parse()
                .map(|fixture_id| Route::EditFixture { fixture_id })
                .unwrap_or(Route::NotFound),
            ["dashboard", "reports"] => Route::Reports,
            ["dashboard", "reports", "current-inventory"] => Route::CurrentInventory,
            ["dashboard", "reports", "low-stock"] => Route::LowStockReport,
            ["dashboard", "reports", "spending"] => Route::SpendingReport,
            ["dashboard", "reports", "customized"] => Route::CustomizedReport,
            ["dashboard", "transfer"] => Route::Transfer {
                source_item_id: id_param("source_item_id"),
                dest_item_id: id_param("dest_item_id"),
            },
            _ => Route::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Dashboard | Route::NotFound => "/dashboard".to_string(),
            Route::RequestProject => "/dashboard/request".to_string(),
            Route::RequestTestArea { project } => with_query("/dashboard/request/test-area", &[("project", project)]),
            Route::RequestSearch { project, test_area } => with_query(
                "/dashboard/request/search",
                &[("project", project), ("test_area", test_area)],
            ),
            Route::RequestItem { item_id, project, test_area } => with_query(
                &format!("/dashboard/request/item/{}", item_id),
                &[("project", project), ("test_area", test_area)],
            ),
            Route::ReturnList => "/dashboard/return".to_string(),
            Route::ReturnItem { transaction_id } => format!("/dashboard/return/item/{}", transaction_id),
            Route::Alerts => "/dashboard/alerts".to_string(),
            Route::Activity => "/dashboard/activity".to_string(),
            Route::Profile => "/dashboard/profile".to_string(),
            Route::ChangePassword => "/dashboard/change-password".to_string(),
            Route::RestockProject => "/dashboard/restock/project".to_string(),
            Route::RestockTestArea { project } => with_query("/dashboard/restock/test-area", &[("project", project)]),
            Route::RestockItems { project, test_area } => with_query(
                "/dashboard/restock/items",
                &[("project", project), ("test_area", test_area)],
            ),
            Route::RestockEdit { item_id, project, test_area } => with_query(
                &format!("/dashboard/restock/item/{}/edit", item_id),
                &[("project", project), ("test_area", test_area)],
            ),
            Route::AddNew => "/dashboard/restock/project/add-new".to_string(),
            Route::AddNewStock { project } => {
                with_query("/dashboard/restock/project/add-new-stock", &[("project", project)])
            }
            Route::AddNewFixture => "/dashboard/restock/project/add-new-fixture".to_string(),
            Route::EditFixture { fixture_id } => format!("/dashboard/restock/fixture/{}/edit", fixture_id),
            Route::Reports => "/dashboard/reports".to_string(),
            Route::CurrentInventory => "/dashboard/reports/current-inventory".to_string(),
            Route::LowStockReport => "/dashboard/reports/low-stock".to_string(),
            Route::SpendingReport => "/dashboard/reports/spending".to_string(),
            Route::CustomizedReport => "/dashboard/reports/customized".to_string(),
            Route::Transfer { source_item_id, dest_item_id } => {
                let source = source_item_id.map(|id| id.to_string()).unwrap_or_default();
                let dest = dest_item_id.map(|id| id.to_string()).unwrap_or_default();
                with_query("/dashboard/transfer", &[("source_item_id", &source), ("dest_item_id", &dest)])
            }
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Login => Access::Public,
            Route::RestockProject
            | Route::RestockTestArea { .. }
            | Route::RestockItems { .. }
            | Route::RestockEdit { .. }
            | Route::AddNew
            | Route::AddNewStock { .. }
            | Route::AddNewFixture
            | Route::EditFixture { .. }
            | Route::Reports
            | Route::CurrentInventory
            | Route::LowStockReport
            | Route::SpendingReport
            | Route::CustomizedReport
            | Route::Transfer { .. } => Access::Admin,
            _ => Access::Member,
        }
    }

    pub fn guard(&self, signed_in: bool, admin: bool) -> Guard {
        match (self.access(), signed_in) {
            (Access::Public, true) => Guard::Home,
            (Access::Public, false) => Guard::Allow,
            (_, false) => Guard::SignIn,
            _ if *self == Route::NotFound => Guard::Home,
            (Access::Admin, true) if !admin => Guard::Deny(self.feature_name()),
            _ => Guard::Allow,
        }
    }

    /// Name shown on the Access Denied screen
    pub fn feature_name(&self) -> &'static str {
        match self {
            Route::Reports
            | Route::CurrentInventory
            | Route::LowStockReport
            | Route::SpendingReport
            | Route::CustomizedReport => "the Reports feature",
            Route::Transfer { .. } => "the Transfer feature",
            _ => "the Restock feature",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_paths() {
        assert_eq!(Route::parse("/", ""), Route::Login);
        assert_eq!(Route::parse("/dashboard/", ""), Route::Dashboard);
        assert_eq!(Route::parse("/dashboard/restock", ""), Route::RestockProject);
        assert_eq!(Route::parse("/dashboard/restock/project", ""), Route::RestockProject);
        assert_eq!(Route::parse("/dashboard/reports/low-stock", ""), Route::LowStockReport);
        assert_eq!(Route::parse("/nowhere", ""), Route::NotFound);
        assert_eq!(Route::parse("/dashboard/return/item/abc", ""), Route::NotFound);
    }

    #[test]
    fn test_query_values_are_decoded() {
        let route = Route::parse("/dashboard/request/search", "?project=Bondi%20Beach&test_area=ICT_Mobo");
        assert_eq!(
            route,
            Route::RequestSearch {
                project: "Bondi Beach".to_string(),
                test_area: "ICT_Mobo".to_string()
            }
        );
        let route = Route::parse("/dashboard/request/test-area", "project=Hi-Lo+Lab");
        assert_eq!(route, Route::RequestTestArea { project: "Hi-Lo Lab".to_string() });
    }

    #[test]
    fn test_to_path_encodes_and_round_trips() {
        let route = Route::RestockEdit {
            item_id: 17,
            project: "Bondi Beach".to_string(),
            test_area: "TOOLS".to_string(),
        };
        let href = route.to_path();
        assert_eq!(href, "/dashboard/restock/item/17/edit?project=Bondi%20Beach&test_area=TOOLS");
        let (path, query) = href.split_once('?').unwrap();
        assert_eq!(Route::parse(path, query), route);
    }

    #[test]
    fn test_transfer_params() {
        let route = Route::parse("/dashboard/transfer", "?source_item_id=4&dest_item_id=x");
        assert_eq!(
            route,
            Route::Transfer {
                source_item_id: Some(4),
                dest_item_id: None
            }
        );
        assert_eq!(route.to_path(), "/dashboard/transfer?source_item_id=4");
    }

    #[test]
    fn test_access_levels() {
        assert_eq!(Route::Login.access(), Access::Public);
        assert_eq!(Route::Alerts.access(), Access::Member);
        assert_eq!(Route::ReturnItem { transaction_id: 1 }.access(), Access::Member);
        assert_eq!(Route::AddNewFixture.access(), Access::Admin);
        assert_eq!(Route::SpendingReport.access(), Access::Admin);
        assert_eq!(Route::SpendingReport.feature_name(), "the Reports feature");
        assert_eq!(Route::EditFixture { fixture_id: 2 }.feature_name(), "the Restock feature");
    }

    #[test]
    fn test_guard() {
        assert_eq!(Route::Login.guard(false, false), Guard::Allow);
        assert_eq!(Route::Login.guard(true, false), Guard::Home);
        assert_eq!(Route::Dashboard.guard(false, false), Guard::SignIn);
        assert_eq!(Route::NotFound.guard(false, false), Guard::SignIn);
        assert_eq!(Route::NotFound.guard(true, true), Guard::Home);
        assert_eq!(Route::Reports.guard(true, false), Guard::Deny("the Reports feature"));
        assert_eq!(Route::Reports.guard(true, true), Guard::Allow);
        assert_eq!(Route::Profile.guard(true, false), Guard::Allow);
    }
}
