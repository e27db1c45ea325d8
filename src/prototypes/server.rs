use std::io::Read as _;

use rouille::{Request, Response};

use crate::foundation::error::{StudioError, StudioResult};
use crate::prototypes::store::PrototypeStore;

/// Path the endpoint is mounted on.
pub const ROUTE: &str = "/api/prototypes";

/// Body returned after a successful save.
pub const SAVED: &str = r#"{"ok":true}"#;

/// Route one request against `store`.
///
/// GET serves the file, POST overwrites it with the raw body, other methods get an empty 405 and
/// other paths a 404.
pub fn handle(request: &Request, store: &PrototypeStore) -> Response {
    if request.url() != ROUTE {
        return Response::empty_404();
    }
    match request.method() {
        "GET" => Response::from_data("application/json", store.read()),
        "POST" => match save(request, store) {
            Ok(()) => Response::from_data("application/json", SAVED),
            Err(e) => {
                tracing::warn!(error = %e, "saving prototypes failed");
                Response::text(e.to_string()).with_status_code(500)
            }
        },
        _ => Response::empty_404().with_status_code(405),
    }
}

fn save(request: &Request, store: &PrototypeStore) -> StudioResult<()> {
    let mut body = Vec::new();
    request
        .data()
        .ok_or_else(|| StudioError::validation("request body already consumed"))?
        .read_to_end(&mut body)?;
    store.write(&body)
}

/// Bind the endpoint on `addr`; call `run` on the result to serve.
pub fn bind(
    addr: &str,
    store: PrototypeStore,
) -> StudioResult<rouille::Server<impl Fn(&Request) -> Response + Send + Sync + 'static>> {
    let server = rouille::Server::new(addr, move |request| {
        let response = handle(request, &store);
        tracing::debug!(
            method = request.method(),
            url = %request.url(),
            status = response.status_code,
            "prototypes request"
        );
        response
    })
    .map_err(|e| StudioError::Io(std::io::Error::other(format!("bind '{addr}': {e}"))))?;
    tracing::info!(addr = %server.server_addr(), route = ROUTE, "prototypes endpoint listening");
    Ok(server)
}

#[cfg(test)]
#[path = "../../tests/unit/prototypes/server.rs"]
mod tests;
