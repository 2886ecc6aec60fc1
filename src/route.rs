//! Client Routes
//!
//! Path parsing and formatting for the promotion pages, plus the
//! history-backed navigate capability used on wasm. Unknown paths and
//! unknown service keys fall back to the home route.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use crate::services::ServiceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Service selection grid, `/promotion`
    Home,
    /// Interview wizard, `/promotion/<service>/interview`
    Interview(ServiceKind),
    /// Shared result view, `/promotion/result?service=<key>`
    Result(ServiceKind),
}

impl Route {
    /// Parse a location `pathname` and `search` string. `search` may be
    /// passed with or without the leading `?`.
    pub fn parse(path: &str, query: &str) -> Route {
        let path = path.trim_end_matches('/');
        match path {
            "" | "/promotion" => Route::Home,
            "/promotion/result" => query_service(query)
                .map(Route::Result)
                .unwrap_or(Route::Home),
            _ => parse_interview(path).unwrap_or(Route::Home),
        }
    }

    pub fn to_href(&self) -> String {
        match self {
            Route::Home => "/promotion".to_string(),
            Route::Interview(kind) => kind.descriptor().path.to_string(),
            Route::Result(kind) => format!(
                "/promotion/result?service={}",
                utf8_percent_encode(kind.as_str(), NON_ALPHANUMERIC)
            ),
        }
    }
}

fn parse_interview(path: &str) -> Option<Route> {
    let rest = path.strip_prefix("/promotion/")?;
    let (key, tail) = rest.split_once('/')?;
    if tail != "interview" {
        return None;
    }
    ServiceKind::from_str(key).map(Route::Interview)
}

/// Extract and decode the `service` query parameter
fn query_service(query: &str) -> Option<ServiceKind> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        if name == "service" {
            let decoded = percent_decode_str(value).decode_utf8().ok()?;
            return ServiceKind::from_str(&decoded);
        }
    }
    None
}

/// Read the route out of the current browser location
#[cfg(target_arch = "wasm32")]
pub fn from_location() -> Route {
    let Some(window) = web_sys::window() else {
        return Route::Home;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let query = location.search().unwrap_or_default();
    Route::parse(&path, &query)
}

/// Push the route onto the history stack. Best-effort: a failing history
/// API only costs the address-bar update, the in-app view still switches.
#[cfg(target_arch = "wasm32")]
pub fn push_history(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.push_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&route.to_href()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_home() {
        assert_eq!(Route::parse("/promotion", ""), Route::Home);
        assert_eq!(Route::parse("/promotion/", ""), Route::Home);
        assert_eq!(Route::parse("", ""), Route::Home);
    }

    #[test]
    fn test_parse_interview_routes() {
        for kind in ServiceKind::ALL {
            let path = format!("/promotion/{}/interview", kind.as_str());
            assert_eq!(Route::parse(&path, ""), Route::Interview(kind));
        }
    }

    #[test]
    fn test_parse_result_route() {
        assert_eq!(
            Route::parse("/promotion/result", "?service=poster"),
            Route::Result(ServiceKind::Poster)
        );
        assert_eq!(
            Route::parse("/promotion/result", "service=aicut"),
            Route::Result(ServiceKind::Aicut)
        );
        // other params may precede it
        assert_eq!(
            Route::parse("/promotion/result", "?tab=1&service=icon"),
            Route::Result(ServiceKind::Icon)
        );
    }

    #[test]
    fn test_unknown_paths_fall_back_to_home() {
        assert_eq!(Route::parse("/promotion/banner/interview", ""), Route::Home);
        assert_eq!(Route::parse("/promotion/icon", ""), Route::Home);
        assert_eq!(Route::parse("/somewhere/else", ""), Route::Home);
        assert_eq!(Route::parse("/promotion/result", "?service=banner"), Route::Home);
        assert_eq!(Route::parse("/promotion/result", ""), Route::Home);
    }

    #[test]
    fn test_href_round_trip() {
        let routes = [
            Route::Home,
            Route::Interview(ServiceKind::Staging),
            Route::Result(ServiceKind::Poster),
        ];
        for route in routes {
            let href = route.to_href();
            let (path, query) = href.split_once('?').unwrap_or((href.as_str(), ""));
            assert_eq!(Route::parse(path, query), route);
        }
    }

    #[test]
    fn test_percent_decoding_in_service_param() {
        assert_eq!(
            Route::parse("/promotion/result", "?service=post%65r"),
            Route::Result(ServiceKind::Poster)
        );
    }
}
