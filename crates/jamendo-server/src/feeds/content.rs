//! HTML fragments embedded as entry content.

use jamendo_db::entities::{album, artist};

use super::atom::escape;
use crate::routes::tag_path;

fn image_tag(image: Option<&str>, alt: &str) -> String {
    match image.filter(|src| !src.is_empty()) {
        Some(src) => format!(
            "<img src=\"{}\" alt=\"{}\"/>",
            escape(src),
            escape(alt)
        ),
        None => String::new(),
    }
}

/// `m:ss`, or `h:mm:ss` from one hour up.
pub fn format_duration(seconds: i32) -> String {
    let seconds = seconds.max(0);
    let (hours, minutes, secs) = (seconds / 3600, (seconds / 60) % 60, seconds % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Tag links, or nothing for an untagged record.
fn tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let links: Vec<String> = tags
        .iter()
        .map(|name| format!("<a href=\"{}\">{}</a>", escape(&tag_path(name)), escape(name)))
        .collect();
    format!("<p class=\"tags\">{}</p>", links.join(", "))
}

pub fn artist_content(artist: &artist::Model, permalink: &str, tags: &[String]) -> String {
    format!(
        "<div class=\"artist\">{}<p><a href=\"{}\">{}</a></p>{}<p><a href=\"{}\">Jamendo</a></p></div>",
        image_tag(artist.image.as_deref(), &artist.name),
        escape(permalink),
        escape(&artist.name),
        tag_list(tags),
        escape(&artist.url),
    )
}

pub fn album_content(
    album: &album::Model,
    artist_name: &str,
    permalink: &str,
    tags: &[String],
) -> String {
    let released = album
        .release_date
        .map(|date| format!("<p>Released {}</p>", date.format("%Y-%m-%d")))
        .unwrap_or_default();
    format!(
        "<div class=\"album\">{}<p><a href=\"{}\">{}</a> by {}</p>{}<p>{} tracks, {}</p>{}<p><a href=\"{}\">Jamendo</a></p></div>",
        image_tag(album.image.as_deref(), &album.name),
        escape(permalink),
        escape(&album.name),
        escape(artist_name),
        released,
        album.track_count,
        format_duration(album.duration),
        tag_list(tags),
        escape(&album.url),
    )
}
