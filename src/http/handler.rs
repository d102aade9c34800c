use std::path::Path;

use tokio::fs;
use tracing::{debug, info, warn};

use crate::http::mime;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode, CONTENT_TYPE};
use crate::http::route::{classify, Decision, Filesystem};
use crate::site::Site;

/// Turns a parsed request into exactly one response.
///
/// Never fails: anything that goes wrong while serving becomes a status code.
#[derive(Debug, Clone)]
pub struct Handler {
    site: Site,
}

impl Handler {
    pub fn new(site: Site) -> Self {
        Self { site }
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub async fn respond(&self, request: &Request) -> Response {
        let decision = classify(&request.method, &request.target, &self.site, &Filesystem);

        if self.site.debug {
            debug!(
                root = %self.site.root.path().display(),
                target = %request.target,
                normalized = ?self.site.root.join(&request.target),
                "Routing decision: {:?}",
                decision
            );
        }

        let response = match decision {
            Decision::BadRequest => Response::bad_request(),
            Decision::MethodNotAllowed => Response::method_not_allowed(),
            Decision::Redirect(location) => Response::moved_permanently(location),
            Decision::NotFound => Response::not_found(),
            Decision::ServeFile(path) | Decision::ServeIndex(path) => self.serve(&path).await,
        };

        info!(
            "{} {} -> {}",
            request.method,
            request.target,
            response.status.as_u16()
        );
        response
    }

    async fn serve(&self, path: &Path) -> Response {
        // Read as text; a file that is not UTF-8 is a read failure
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return Response::internal_error();
            }
        };

        let mut builder = ResponseBuilder::new(StatusCode::Ok);
        if self.site.debug {
            builder = builder.header("Cache-Control", "no-cache");
        }
        if let Some(content_type) = mime::content_type_for(path) {
            builder = builder.header(CONTENT_TYPE, content_type);
        }

        builder.body(content.into_bytes()).build()
    }
}
