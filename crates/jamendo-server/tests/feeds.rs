mod common;

use axum::http::StatusCode;
use common::*;
use jamendo_db::entities::tagged_item::TaggableKind;

fn entry_titles(xml: &str) -> Vec<String> {
    xml.split("<entry>")
        .skip(1)
        .filter_map(|entry| {
            let start = entry.find("<title>")? + "<title>".len();
            let end = entry.find("</title>")?;
            Some(entry[start..end].to_string())
        })
        .collect()
}

#[tokio::test]
async fn test_empty_feed_uses_fallback_updated() {
    let app = test_app(test_db().await);

    let (status, xml) = get(&app, "/feeds/artists/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(xml.contains("<feed xmlns=\"http://www.w3.org/2005/Atom\">"));
    assert!(xml.contains("<updated>2009-01-01T00:00:00Z</updated>"));
    assert!(!xml.contains("<entry>"));
}

#[tokio::test]
async fn test_artists_feed_is_capped_to_most_recent() {
    let db = test_db().await;
    for i in 0..25 {
        insert_artist(&db, i, &format!("Artist {i:02}"), day(i as i64)).await;
    }
    let app = test_app(db);

    let (_, xml) = get(&app, "/feeds/artists/").await;
    let titles = entry_titles(&xml);
    assert_eq!(titles.len(), 20);
    assert_eq!(titles[0], "Artist 24");
    assert_eq!(titles[19], "Artist 05");
    assert!(xml.contains("<id>http://localhost:8080/feeds/artists/</id>"));
    assert!(xml.contains("<title>Artists in Jamendo mirror</title>"));
    assert!(xml.contains("rel=\"self\""));
    assert!(xml.contains("href=\"http://www.jamendo.com/en/artists/\" rel=\"related\""));
}

#[tokio::test]
async fn test_albums_feed_is_capped_to_most_recent() {
    let db = test_db().await;
    let artist = insert_artist(&db, 1, "Zodiac", day(0)).await;
    for i in 0..25 {
        insert_album(&db, artist.id, 100 + i, &format!("Album {i:02}"), day(i as i64)).await;
    }
    let app = test_app(db);

    let (status, xml) = get(&app, "/feeds/albums/").await;
    assert_eq!(status, StatusCode::OK);
    let titles = entry_titles(&xml);
    assert_eq!(titles.len(), 20);
    assert_eq!(titles[0], "Album 24 - Zodiac");
    assert_eq!(titles[19], "Album 05 - Zodiac");
    for i in 0..5 {
        let title = format!("Album {i:02} - Zodiac");
        assert!(!titles.contains(&title), "{title} should be excluded");
    }
}

#[tokio::test]
async fn test_artists_feed_categories_are_artist_tags() {
    let db = test_db().await;
    let artist = insert_artist(&db, 1, "Zodiac", day(0)).await;
    tag(&db, TaggableKind::Artist, artist.id, &["rock"]).await;
    let app = test_app(db);

    let (_, xml) = get(&app, "/feeds/artists/").await;
    assert!(xml.contains("<category term=\"rock\"/>"));
    assert!(xml.contains("<author><name>Zodiac</name></author>"));
    assert!(xml.contains("<published>2010-01-01T00:00:00Z</published>"));
}

#[tokio::test]
async fn test_albums_feed_categories_come_from_tracks() {
    let db = test_db().await;
    let artist = insert_artist(&db, 1, "Zodiac", day(0)).await;
    let album = insert_album(&db, artist.id, 12345, "Night Drive", day(0)).await;
    let first = insert_track(&db, &album, "First", 1).await;
    let second = insert_track(&db, &album, "Second", 2).await;
    tag(&db, TaggableKind::Track, first.id, &["synth"]).await;
    tag(&db, TaggableKind::Track, second.id, &["night", "synth"]).await;
    tag(&db, TaggableKind::Album, album.id, &["album-only"]).await;
    let app = test_app(db);

    let (status, xml) = get(&app, "/feeds/albums/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(entry_titles(&xml), ["Night Drive - Zodiac"]);
    assert!(xml.contains("<category term=\"night\"/>"));
    assert_eq!(xml.matches("<category term=\"synth\"/>").count(), 1);
    assert!(!xml.contains("album-only"));
    assert!(xml.contains(
        "<link href=\"http://api.jamendo.com/get2/stream/track/redirect/?album_id=12345&amp;streamencoding=mp31\" rel=\"enclosure\" type=\"audio/mpeg\"/>"
    ));
}

#[tokio::test]
async fn test_albums_for_artist_feed() {
    let db = test_db().await;
    let zodiac = insert_artist(&db, 1, "Zodiac", day(0)).await;
    let other = insert_artist(&db, 2, "Ambre", day(0)).await;
    insert_album(&db, zodiac.id, 10, "Night Drive", day(2)).await;
    insert_album(&db, zodiac.id, 11, "Aurora", day(1)).await;
    insert_album(&db, other.id, 12, "Elsewhere", day(3)).await;
    tag(&db, TaggableKind::Artist, zodiac.id, &["electro"]).await;
    let app = test_app(db);

    let (status, xml) = get(&app, &format!("/feeds/albumsfor/{}/", zodiac.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        entry_titles(&xml),
        ["Aurora - Zodiac", "Night Drive - Zodiac"]
    );
    assert_eq!(xml.matches("<category term=\"electro\"/>").count(), 2);
    assert!(xml.contains("<title>Zodiac: albums in Jamendo mirror</title>"));
    assert!(!xml.contains("rel=\"enclosure\""));
}

#[tokio::test]
async fn test_albums_for_missing_artist() {
    let app = test_app(test_db().await);

    let (status, body) = get(&app, "/feeds/albumsfor/999/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!body.contains("<feed"));

    let (status, _) = get(&app, "/feeds/albumsfor/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_feed_is_not_found() {
    let app = test_app(test_db().await);

    let (status, _) = get(&app, "/feeds/playlists/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
