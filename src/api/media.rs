use super::AppState;
use ntex::web;
use ntex_files::NamedFile;

/// Serves the configured sample media file as raw bytes.
/// A missing file surfaces as the framework's io-error response.
#[web::get("/media")]
pub async fn serve_media(
    state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    Ok(NamedFile::open(&state.config.media_file_path)?)
}
