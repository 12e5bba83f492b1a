// Default audio lookup and the text shown on the audio controls.

/// Bundled audio names, tried in order. If every one fails the app runs
/// without default audio and waits for an upload.
pub const DEFAULT_AUDIO_CANDIDATES: [&str; 2] = [
    "Polyphia _ G.O.A.T. (Official Music Video).mp3",
    "default-audio.mp3",
];

#[inline]
pub fn is_audio_mime(mime: &str) -> bool {
    mime.starts_with("audio/")
}

pub fn upload_label(source_name: Option<&str>) -> String {
    match source_name {
        Some(name) => format!("📁 {}", name),
        None => "📁 Upload MP3".to_string(),
    }
}

#[inline]
pub fn stop_label(playing: bool) -> &'static str {
    if playing {
        "⏹ Stop"
    } else {
        "⏹ Stopped"
    }
}
