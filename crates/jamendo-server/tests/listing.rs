mod common;

use axum::http::StatusCode;
use common::*;
use jamendo_db::entities::tagged_item::TaggableKind;

#[tokio::test]
async fn test_artist_list_is_ordered_by_name() {
    let db = test_db().await;
    insert_artist(&db, 1, "Zodiac", day(0)).await;
    insert_artist(&db, 2, "Ambre", day(1)).await;
    insert_artist(&db, 3, "Mogwai Jr", day(2)).await;
    let app = test_app(db);

    let (status, page) = get_json(&app, "/artists/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["template"], "jamendo/artist_list.html");
    assert_eq!(page["ITEMS_PER_PAGE"], 20);
    assert_eq!(page["TAGS_PER_PAGE"], 200);
    assert_eq!(names(&page), ["Ambre", "Mogwai Jr", "Zodiac"]);
}

#[tokio::test]
async fn test_name_filter_is_case_insensitive_substring() {
    let db = test_db().await;
    insert_artist(&db, 1, "Zodiac", day(0)).await;
    insert_artist(&db, 2, "The Zodiac Kids", day(0)).await;
    insert_artist(&db, 3, "Ambre", day(0)).await;
    let app = test_app(db);

    let (_, page) = get_json(&app, "/artists/?name=zod").await;
    assert_eq!(names(&page), ["The Zodiac Kids", "Zodiac"]);
    assert_eq!(page["name"], "zod");

    let (status, page) = get_json(&app, "/artists/?name=xyz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(names(&page).is_empty());
}

#[tokio::test]
async fn test_name_filter_matches_wildcards_literally() {
    let db = test_db().await;
    insert_artist(&db, 1, "100% Live", day(0)).await;
    insert_artist(&db, 2, "1000 Lives", day(0)).await;
    let app = test_app(db);

    let (_, page) = get_json(&app, "/artists/?name=100%25").await;
    assert_eq!(names(&page), ["100% Live"]);
}

#[tokio::test]
async fn test_album_list_filter() {
    let db = test_db().await;
    let artist = insert_artist(&db, 1, "Zodiac", day(0)).await;
    insert_album(&db, artist.id, 10, "Night Drive", day(0)).await;
    insert_album(&db, artist.id, 11, "Daylight", day(1)).await;
    insert_album(&db, artist.id, 12, "Midnight", day(2)).await;
    let app = test_app(db);

    let (_, page) = get_json(&app, "/albums/?name=NIGHT").await;
    assert_eq!(page["template"], "jamendo/album_list.html");
    assert_eq!(names(&page), ["Midnight", "Night Drive"]);
}

#[tokio::test]
async fn test_country_list_hides_unknown_country() {
    let db = test_db().await;
    insert_country(&db, "", 0, "Unknown").await;
    insert_country(&db, "FRA", 250, "France").await;
    insert_country(&db, "BEL", 56, "Belgium").await;
    let app = test_app(db);

    let (_, page) = get_json(&app, "/countries/").await;
    let codes: Vec<&str> = page["object_list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["BEL", "FRA"]);
}

#[tokio::test]
async fn test_city_and_license_lists() {
    let db = test_db().await;
    insert_country(&db, "FRA", 250, "France").await;
    insert_city(&db, "FRA", Some(1), "Paris").await;
    insert_city(&db, "FRA", Some(2), "Lyon").await;
    insert_license(&db, 1, "CC BY-SA").await;
    insert_license(&db, 2, "CC BY").await;
    let app = test_app(db);

    let (_, page) = get_json(&app, "/cities/").await;
    assert_eq!(names(&page), ["Lyon", "Paris"]);

    let (_, page) = get_json(&app, "/licenses/?name=sa").await;
    assert_eq!(names(&page), ["CC BY-SA"]);
}

#[tokio::test]
async fn test_tag_cloud() {
    let db = test_db().await;
    let a = insert_artist(&db, 1, "Zodiac", day(0)).await;
    let b = insert_artist(&db, 2, "Ambre", day(0)).await;
    tag(&db, TaggableKind::Artist, a.id, &["rock", "electro"]).await;
    tag(&db, TaggableKind::Artist, b.id, &["rock"]).await;
    let app = test_app(db);

    let (status, page) = get_json(&app, "/tags_cloud/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["kind"], "artist");
    assert_eq!(names(&page), ["electro", "rock"]);
    assert_eq!(page["object_list"][1]["count"], 2);

    let (_, page) = get_json(&app, "/tags_cloud/?kind=track").await;
    assert!(names(&page).is_empty());

    let (status, _) = get_json(&app, "/tags_cloud/?kind=album").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_name_filter_matches_non_ascii_names() {
    let db = test_db().await;
    insert_artist(&db, 1, "Émile Zola Band", day(0)).await;
    insert_artist(&db, 2, "Zodiac", day(0)).await;
    insert_country(&db, "ISL", 352, "Ísland").await;
    let app = test_app(db);

    // "Émile" exactly, then case-folded, then fully upper-cased.
    for query in ["%C3%89mile", "%C3%A9mile", "%C3%89MILE"] {
        let (status, page) = get_json(&app, &format!("/artists/?name={query}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&page), ["Émile Zola Band"], "name={query}");
    }

    let (_, page) = get_json(&app, "/artists/?name=ZOD").await;
    assert_eq!(names(&page), ["Zodiac"]);

    let (_, page) = get_json(&app, "/countries/?name=%C3%ADsl").await;
    assert_eq!(names(&page), ["ÍSLAND"]);
}
