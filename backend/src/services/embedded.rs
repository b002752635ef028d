//! Serves the compiled console bundle embedded at build time.
//!
//! Unknown paths fall back to `index.html` so client-side routes resolve;
//! `404` only when the bundle itself is missing.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    respond(&STATIC_DIR, req.path())
}

fn respond(bundle: &Dir<'_>, request_path: &str) -> HttpResponse {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    match bundle.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match bundle.get_file(INDEX) {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use include_dir::{DirEntry, File};

    static ENTRIES: [DirEntry<'static>; 2] = [
        DirEntry::File(File::new("index.html", b"<html></html>")),
        DirEntry::File(File::new("styles.css", b"body {}")),
    ];
    static BUNDLE: Dir<'static> = Dir::new("", &ENTRIES);
    static EMPTY: Dir<'static> = Dir::new("", &[]);

    #[test]
    fn serves_files_with_guessed_mime() {
        let response = respond(&BUNDLE, "/styles.css");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/css"
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_index() {
        let response = respond(&BUNDLE, "/records/alice");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn missing_bundle_is_not_found() {
        assert_eq!(respond(&EMPTY, "/").status(), StatusCode::NOT_FOUND);
    }
}
