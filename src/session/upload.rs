//! Image ingestion for image slots.
//!
//! Uploaded bytes are sniffed and decoded once to make sure they are a real
//! image, then encoded as a `data:` URL so the reference can be embedded in
//! rendered pages without any further storage.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, info};

use super::SharedSession;
use crate::document::ElementId;
use crate::error::StencilError;

/// Turn uploaded bytes into a displayable image reference.
pub fn ingest_image(bytes: &[u8]) -> Result<String, StencilError> {
    if bytes.is_empty() {
        return Err(StencilError::Image("empty upload".into()));
    }
    let format = image::guess_format(bytes)
        .map_err(|e| StencilError::Image(format!("Unrecognized image format: {}", e)))?;
    let img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| StencilError::Image(format!("Failed to decode image: {}", e)))?;
    debug!(
        format = ?format,
        width = img.width(),
        height = img.height(),
        "image decoded"
    );

    Ok(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(bytes)
    ))
}

/// Decode `bytes` off the async executor, then merge the result into the
/// element's image slot.
///
/// Returns `Ok(false)` when the element disappeared (or has no image slot)
/// while the image was decoding; the result is discarded in that case.
pub async fn load_image(
    session: SharedSession,
    id: ElementId,
    bytes: Vec<u8>,
) -> Result<bool, StencilError> {
    let reference = tokio::task::spawn_blocking(move || ingest_image(&bytes))
        .await
        .map_err(|e| StencilError::Image(format!("Decode task failed: {}", e)))??;

    let applied = session.write().await.complete_image_load(&id, &reference);
    if applied {
        info!(id = %id, bytes = reference.len(), "image attached");
    }
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ElementKind;
    use crate::session::Session;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_bytes() -> Vec<u8> {
        let img = RgbImage::from_pixel(2, 2, Rgb([200, 10, 10]));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_ingest_png() {
        let reference = ingest_image(&png_bytes()).unwrap();
        assert!(reference.starts_with("data:image/png;base64,iVBOR"));
    }

    #[test]
    fn test_ingest_rejects_garbage() {
        assert!(ingest_image(b"").is_err());
        assert!(ingest_image(b"definitely not an image").is_err());
    }

    #[tokio::test]
    async fn test_load_into_main_header() {
        let mut session = Session::new();
        let id = session.add_element(ElementKind::MainHeader);
        let session = session.into_shared();

        assert!(load_image(session.clone(), id.clone(), png_bytes()).await.unwrap());
        let guard = session.read().await;
        let props = guard.template().get(&id).unwrap().props().to_value();
        assert!(props["logo_url"].as_str().unwrap().starts_with("data:image/png"));
    }

    #[tokio::test]
    async fn test_load_after_removal_is_discarded() {
        let mut session = Session::new();
        let id = session.add_element(ElementKind::MainHeader);
        session.remove_element(&id);
        let session = session.into_shared();

        assert!(!load_image(session.clone(), id, png_bytes()).await.unwrap());
        assert!(session.read().await.template().is_empty());
    }
}
