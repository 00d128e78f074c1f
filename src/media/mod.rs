/// Photo handling module
///
/// This module handles:
/// - Loading album photos from disk without blocking the UI
/// - Decoding and downscaling them into displayable handles

pub mod loader;
