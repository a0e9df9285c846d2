//! Server-rendered viewer pages and the embedded static assets they use.
//!
//! Two pages exist: `/viewer` lists the active streams, and
//! `/viewer/gate/{stream_id}` plays one of them with hls.js. The stylesheet
//! and the player bootstrap script are compiled into the binary and served
//! from `/static`.

use crate::config::AppConfig;
use crate::db;
use actix_web::web::{self, get, scope};
use actix_web::{HttpResponse, Responder, Scope};
use common::model::stream::Stream;
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");

const HLS_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/hls.js@1";

pub fn configure_routes() -> Scope {
    scope("/viewer")
        .route("", get().to(index))
        .route("/gate/{stream_id}", get().to(gate))
}

pub fn static_routes() -> Scope {
    scope("/static").route("/{path:.*}", get().to(serve_static))
}

async fn serve_static(path: web::Path<String>) -> HttpResponse {
    match STATIC_DIR.get_file(path.as_str()) {
        Some(file) => HttpResponse::Ok()
            .content_type(from_path(path.as_str()).first_or_octet_stream().as_ref())
            .body(file.contents().to_vec()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

/// The stream index: every active stream with a link to its gate page.
async fn index(config: web::Data<AppConfig>) -> impl Responder {
    let conn = match db::open(&config.db_path) {
        Ok(conn) => conn,
        Err(e) => {
            return HttpResponse::InternalServerError().body(format!("Error: {}", e));
        }
    };
    match db::queries::streams::list_active(&conn) {
        Ok(streams) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(render_index(&streams)),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}

/// The gate page: an hls.js player bound to one active stream.
async fn gate(config: web::Data<AppConfig>, stream_id: web::Path<i64>) -> impl Responder {
    let conn = match db::open(&config.db_path) {
        Ok(conn) => conn,
        Err(e) => {
            return HttpResponse::InternalServerError().body(format!("Error: {}", e));
        }
    };
    match db::queries::streams::get(&conn, *stream_id) {
        Ok(Some(stream)) if stream.is_active => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(render_gate(&stream)),
        Ok(_) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(render_not_found()),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}

fn render_index(streams: &[Stream]) -> String {
    let mut items = String::new();
    for stream in streams {
        let description = stream
            .description
            .as_deref()
            .map(|d| format!("<p class=\"description\">{}</p>", escape_html(d)))
            .unwrap_or_default();
        items.push_str(&format!(
            "<li><a href=\"/viewer/gate/{}\">{}</a>{}</li>\n",
            stream.id,
            escape_html(&stream.name),
            description
        ));
    }
    if items.is_empty() {
        items = "<li class=\"empty\">No active streams.</li>".to_string();
    }
    page(
        "Gate Cameras",
        &format!("<h1>Gate Cameras</h1>\n<ul class=\"streams\">\n{}</ul>", items),
        "",
    )
}

fn render_gate(stream: &Stream) -> String {
    let body = format!(
        "<h1>{name}</h1>\n\
         <video id=\"gate-video\" controls autoplay muted data-src=\"{url}\"></video>\n\
         <p><a href=\"/viewer\">Back to all cameras</a></p>",
        name = escape_html(&stream.name),
        url = escape_html(&stream.url),
    );
    let scripts = format!(
        "<script src=\"{}\"></script>\n<script src=\"/static/player.js\"></script>",
        HLS_JS_CDN
    );
    page(&stream.name, &body, &scripts)
}

fn render_not_found() -> String {
    page(
        "Not Found",
        "<h1>Stream not found</h1>\n<p><a href=\"/viewer\">Back to all cameras</a></p>",
        "",
    )
}

fn page(title: &str, body: &str, scripts: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"/static/viewer.css\">\n\
         </head>\n<body>\n<main>\n{body}\n</main>\n{scripts}\n</body>\n</html>",
        title = escape_html(title),
        body = body,
        scripts = scripts,
    )
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn index_links_active_streams() {
        let streams = vec![Stream {
            id: 7,
            name: "North Gate".to_string(),
            url: "https://cams.example/north.m3u8".to_string(),
            description: None,
            is_active: true,
            created_at: Utc::now(),
        }];
        let html = render_index(&streams);
        assert!(html.contains("/viewer/gate/7"));
        assert!(html.contains("North Gate"));
    }

    #[test]
    fn gate_page_embeds_the_stream_url() {
        let stream = Stream {
            id: 1,
            name: "South Gate".to_string(),
            url: "https://cams.example/south.m3u8".to_string(),
            description: None,
            is_active: true,
            created_at: Utc::now(),
        };
        let html = render_gate(&stream);
        assert!(html.contains("data-src=\"https://cams.example/south.m3u8\""));
        assert!(html.contains("player.js"));
    }

    #[test]
    fn html_is_escaped() {
        assert_eq!(escape_html("<b>&\"x\""), "&lt;b&gt;&amp;&quot;x&quot;");
    }
}
