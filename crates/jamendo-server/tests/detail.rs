mod common;

use axum::http::StatusCode;
use common::*;
use jamendo_db::entities::tagged_item::TaggableKind;
use jamendo_db::entities::{album, artist};
use jamendo_db::sea_orm::{ActiveModelTrait, IntoActiveModel, Set};

#[tokio::test]
async fn test_album_by_juid_and_pk_are_the_same_record() {
    let db = test_db().await;
    let artist = insert_artist(&db, 1, "Zodiac", day(0)).await;
    let album = insert_album(&db, artist.id, 12345, "Night Drive", day(0)).await;
    let app = test_app(db);

    let (status, by_juid) = get_json(&app, "/albums/juid/12345/").await;
    assert_eq!(status, StatusCode::OK);
    let (_, by_pk) = get_json(&app, &format!("/albums/{}/", album.id)).await;

    assert_eq!(by_juid["object"]["id"], album.id);
    assert_eq!(by_juid, by_pk);
    assert_eq!(by_pk["template"], "jamendo/album_detail.html");
    assert_eq!(by_pk["artist"]["name"], "Zodiac");
}

#[tokio::test]
async fn test_artist_by_mbgid() {
    let db = test_db().await;
    let zodiac = insert_artist(&db, 1, "Zodiac", day(0)).await;
    let mut active: artist::ActiveModel = zodiac.clone().into_active_model();
    active.mbgid = Set(Some("5b11f4ce-a62d-471e-81fc-a69a8278c7da".to_string()));
    active.update(&db).await.unwrap();
    let app = test_app(db);

    let (status, page) =
        get_json(&app, "/artists/mbgid/5b11f4ce-a62d-471e-81fc-a69a8278c7da/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["object"]["id"], zodiac.id);
}

#[tokio::test]
async fn test_unmatched_identifiers_are_not_found() {
    let db = test_db().await;
    insert_artist(&db, 1, "Zodiac", day(0)).await;
    let app = test_app(db);

    let (status, body) = get_json(&app, "/artists/999/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("pk=999"));

    let (status, _) = get_json(&app, "/artists/juid/999/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_json(&app, "/artists/abc/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_json(&app, "/tags/nothing/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_artist_detail_context() {
    let db = test_db().await;
    insert_country(&db, "FRA", 250, "France").await;
    let paris = insert_city(&db, "FRA", Some(7), "Paris").await;
    let zodiac = insert_artist(&db, 1, "Zodiac", day(0)).await;
    let mut active: artist::ActiveModel = zodiac.clone().into_active_model();
    active.city_id = Set(Some(paris.id));
    active.update(&db).await.unwrap();

    let older = insert_album(&db, zodiac.id, 10, "Older", day(0)).await;
    let newer = insert_album(&db, zodiac.id, 11, "Newer", day(1)).await;
    for (model, date) in [(older, day(0)), (newer, day(300))] {
        let mut active: album::ActiveModel = model.into_active_model();
        active.release_date = Set(Some(date));
        active.update(&db).await.unwrap();
    }
    tag(&db, TaggableKind::Artist, zodiac.id, &["rock", "electro"]).await;
    let app = test_app(db);

    let (_, page) = get_json(&app, &format!("/artists/{}/", zodiac.id)).await;
    assert_eq!(page["city"]["name"], "Paris");
    assert_eq!(page["albums"][0]["name"], "Newer");
    assert_eq!(page["albums"][1]["name"], "Older");
    assert_eq!(page["tags"], serde_json::json!(["electro", "rock"]));
}

#[tokio::test]
async fn test_album_detail_tracks_and_tags() {
    let db = test_db().await;
    let artist = insert_artist(&db, 1, "Zodiac", day(0)).await;
    let album = insert_album(&db, artist.id, 10, "Night Drive", day(0)).await;
    let second = insert_track(&db, &album, "Second", 2).await;
    let first = insert_track(&db, &album, "First", 1).await;
    tag(&db, TaggableKind::Track, first.id, &["synth"]).await;
    tag(&db, TaggableKind::Track, second.id, &["synth", "night"]).await;
    tag(&db, TaggableKind::Album, album.id, &["ignored"]).await;
    let app = test_app(db);

    let (_, page) = get_json(&app, &format!("/albums/{}/", album.id)).await;
    assert_eq!(page["tracks"][0]["name"], "First");
    assert_eq!(page["tracks"][1]["name"], "Second");
    assert_eq!(page["tags"], serde_json::json!(["night", "synth"]));
}

#[tokio::test]
async fn test_country_detail_lists_its_artists_once() {
    let db = test_db().await;
    insert_country(&db, "FRA", 250, "France").await;
    insert_country(&db, "BEL", 56, "Belgium").await;
    let paris = insert_city(&db, "FRA", None, "Paris").await;
    let lyon = insert_city(&db, "FRA", None, "Lyon").await;
    let brussels = insert_city(&db, "BEL", None, "Brussels").await;

    for (uid, name, city) in [
        (1, "Zodiac", paris.id),
        (2, "Ambre", lyon.id),
        (3, "Plume", brussels.id),
    ] {
        let artist = insert_artist(&db, uid, name, day(0)).await;
        let mut active: artist::ActiveModel = artist.into_active_model();
        active.city_id = Set(Some(city));
        active.update(&db).await.unwrap();
    }
    let app = test_app(db);

    let (status, page) = get_json(&app, "/countries/FRA/").await;
    assert_eq!(status, StatusCode::OK);
    let artists: Vec<&str> = page["artists"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(artists, ["Ambre", "Zodiac"]);

    let (_, by_numcode) = get_json(&app, "/countries/juid/250/").await;
    assert_eq!(by_numcode["object"]["code"], "FRA");
}

#[tokio::test]
async fn test_city_and_license_detail() {
    let db = test_db().await;
    insert_country(&db, "FRA", 250, "France").await;
    let paris = insert_city(&db, "FRA", Some(42), "Paris").await;
    let license = insert_license(&db, 5, "CC BY-SA").await;
    let artist = insert_artist(&db, 1, "Zodiac", day(0)).await;
    let album = insert_album(&db, artist.id, 10, "Night Drive", day(0)).await;
    let mut active: album::ActiveModel = album.into_active_model();
    active.license_id = Set(Some(license.id));
    active.update(&db).await.unwrap();
    let app = test_app(db);

    let (status, page) = get_json(&app, "/cities/juid/42/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["object"]["id"], paris.id);
    assert_eq!(page["state"]["country_code"], "FRA");

    let (_, page) = get_json(&app, "/licenses/juid/5/").await;
    assert_eq!(page["template"], "jamendo/license_detail.html");
    assert_eq!(page["albums"][0]["name"], "Night Drive");
}

#[tokio::test]
async fn test_tag_detail_derives_albums_from_tracks() {
    let db = test_db().await;
    let artist = insert_artist(&db, 1, "Zodiac", day(0)).await;
    let album = insert_album(&db, artist.id, 10, "Night Drive", day(0)).await;
    let track = insert_track(&db, &album, "First", 1).await;
    tag(&db, TaggableKind::Artist, artist.id, &["hip hop"]).await;
    tag(&db, TaggableKind::Track, track.id, &["hip hop"]).await;
    let app = test_app(db);

    let (status, page) = get_json(&app, "/tags/hip%20hop/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["object"]["name"], "hip hop");
    assert_eq!(page["artists"][0]["name"], "Zodiac");
    assert_eq!(page["tracks"][0]["name"], "First");
    assert_eq!(page["albums"][0]["name"], "Night Drive");
    assert!(page["info"].is_null());
}
