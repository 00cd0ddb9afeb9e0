//! Links to the remote streaming service.

const STREAM_REDIRECT_TEMPLATE: &str =
    "http://api.jamendo.com/get2/stream/track/redirect/?album_id={album_id}&streamencoding={encoding}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEncoding {
    Mp3,
    Ogg,
}

impl AudioEncoding {
    pub fn param(&self) -> &'static str {
        match self {
            AudioEncoding::Mp3 => "mp31",
            AudioEncoding::Ogg => "ogg2",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            AudioEncoding::Mp3 => "audio/mpeg",
            AudioEncoding::Ogg => "audio/ogg",
        }
    }
}

/// Redirect URL streaming every track of the album with the remote id.
pub fn stream_url(album_uid: i32, encoding: AudioEncoding) -> String {
    STREAM_REDIRECT_TEMPLATE
        .replace("{album_id}", &album_uid.to_string())
        .replace("{encoding}", encoding.param())
}
