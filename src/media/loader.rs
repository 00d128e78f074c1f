/// Album photo loader
///
/// Reads a photo off disk, decodes it, scales it down to something the page
/// can display comfortably, and hands back an iced image handle. Decoding
/// runs on a blocking worker so the UI thread never stalls on a large file.

use iced::widget::image::Handle;
use image::imageops::FilterType;
use tokio::task;

/// Longest edge a page photo keeps; anything larger is downscaled.
const MAX_DIMENSION: u32 = 1600;

/// Load one album photo.
///
/// # Arguments
/// * `path` - Path to the photo file
///
/// # Returns
/// * `Ok(handle)` - Decoded RGBA handle ready for the image widget
/// * `Err(String)` - Error message if reading or decoding fails
pub async fn load_image(path: String) -> Result<Handle, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path, e))?;

    // Decoding and resizing are CPU-bound; keep them off the UI thread
    let decoded = task::spawn_blocking(move || decode_photo(&bytes))
        .await
        .map_err(|e| format!("Task join error: {}", e))?;

    let (handle, width, height) = decoded?;
    println!("🖼️  Loaded {} ({}x{})", path, width, height);
    Ok(handle)
}

/// Blocking decode + downscale.
fn decode_photo(bytes: &[u8]) -> Result<(Handle, u32, u32), String> {
    let photo = image::load_from_memory(bytes)
        .map_err(|e| format!("Failed to decode photo: {}", e))?;

    let photo = if photo.width() > MAX_DIMENSION || photo.height() > MAX_DIMENSION {
        photo.resize(MAX_DIMENSION, MAX_DIMENSION, FilterType::Lanczos3)
    } else {
        photo
    };

    let rgba = photo.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok((Handle::from_rgba(width, height, rgba.into_raw()), width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let result = load_image("/nonexistent/photo.jpg".to_string()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_undecodable_bytes_are_an_error() {
        let path = std::env::temp_dir().join("flip-book-not-a-photo.jpg");
        std::fs::write(&path, b"definitely not a JPEG").unwrap();

        let result = load_image(path.to_string_lossy().to_string()).await;
        assert!(result.is_err());

        let _ = std::fs::remove_file(&path);
    }
}
