use super::*;

pub mod prelude {

    use crate::web::{self, api, sqlite};

    pub use crate::web::tests::prelude::*;

    pub fn setup() -> (Client, sqlite::Connections) {
        web::tests::rocket_test_setup(vec![("/", api::routes())])
    }

    pub fn test_json(r: &LocalResponse) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub fn login(client: &Client, email: &str, pw: &str) {
        let res = client
            .post("/login")
            .header(ContentType::JSON)
            .body(format!(r#"{{"email":"{email}","password":"{pw}"}}"#))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
    }

    pub fn seed_toilet(db: &sqlite::Connections, id: &str, lat: f64, lng: f64) {
        db.exclusive()
            .unwrap()
            .create_toilet(&Toilet::build().id(id).pos(lat, lng).finish())
            .unwrap();
    }
}

use self::prelude::*;

#[test]
fn get_api_index() {
    let (client, _) = setup();
    let res = client.get("/").dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let body_str = res.into_string().unwrap();
    let info: json::ApiInfo = serde_json::from_str(&body_str).unwrap();
    assert_eq!(info.name, "openloodb");
    assert_eq!(info.version, DUMMY_VERSION);
    assert!(info.endpoints.iter().any(|e| e == "/api/toilets/nearby"));
}

#[test]
fn create_toilet_requires_authentication() {
    let (client, db) = setup();
    let res = client
        .post("/toilets")
        .header(ContentType::JSON)
        .body(r#"{"latitude":48.85,"longitude":2.35}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
    assert_eq!(
        0,
        db.shared().unwrap().count_toilets(&Default::default()).unwrap()
    );
}

#[test]
fn create_a_new_toilet() {
    let (client, db) = setup();
    register_user(&db, "foo", "foo@bar.com", "secret1");
    login(&client, "foo@bar.com", "secret1");

    let res = client
        .post("/toilets")
        .header(ContentType::JSON)
        .body(r#"{"latitude":48.8566,"longitude":2.3522,"is_free":true}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    test_json(&res);
    let body_str = res.into_string().unwrap();
    let toilet: json::Toilet = serde_json::from_str(&body_str).unwrap();
    assert!(toilet.is_free);
    // New entries are never verified on creation
    assert!(!toilet.is_verified);
    let stored = db.shared().unwrap().get_toilet(&toilet.id).unwrap();
    assert_eq!((48.8566, 2.3522), stored.pos.to_lat_lng_deg());
}

#[test]
fn create_toilet_with_invalid_position() {
    let (client, db) = setup();
    register_user(&db, "foo", "foo@bar.com", "secret1");
    login(&client, "foo@bar.com", "secret1");

    let res = client
        .post("/toilets")
        .header(ContentType::JSON)
        .body(r#"{"latitude":200.0,"longitude":2.3522}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn update_toilet_does_not_touch_the_verified_flag() {
    let (client, db) = setup();
    register_user(&db, "foo", "foo@bar.com", "secret1");
    login(&client, "foo@bar.com", "secret1");
    db.exclusive()
        .unwrap()
        .create_toilet(
            &Toilet::build()
                .id("t")
                .pos(48.0, 2.0)
                .verified(true)
                .finish(),
        )
        .unwrap();

    let res = client
        .put("/toilets/t")
        .header(ContentType::JSON)
        .body(r#"{"is_free":true,"latitude":49.0}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let toilet: json::Toilet = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(toilet.is_free);
    assert!(toilet.is_verified);
    assert_eq!(49.0, toilet.latitude);
}

#[test]
fn delete_toilet_softly() {
    let (client, db) = setup();
    register_user(&db, "foo", "foo@bar.com", "secret1");
    login(&client, "foo@bar.com", "secret1");
    seed_toilet(&db, "gone", 48.0, 2.0);

    let res = client.delete("/toilets/gone").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let res = client.get("/toilets/gone").dispatch();
    assert_eq!(res.status(), Status::NotFound);
    let res = client.get("/toilets").dispatch();
    let body_str = res.into_string().unwrap();
    assert!(!body_str.contains("\"gone\""));
    // Deleting twice is a 404, not an internal error
    let res = client.delete("/toilets/gone").dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn nearby_toilets_sorted_by_distance() {
    let (client, db) = setup();
    seed_toilet(&db, "near", 48.8567, 2.3523);
    seed_toilet(&db, "close", 48.86, 2.36);
    seed_toilet(&db, "far", 48.9, 2.5);
    // Toulouse is ~590 km away from Paris and must never show up
    seed_toilet(&db, "toulouse", 43.6043, 1.4437);

    let res = client
        .get("/toilets/nearby?latitude=48.8566&longitude=2.3522&radius=20&limit=10")
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let body_str = res.into_string().unwrap();
    assert!(body_str.contains("\"radiusKm\":20.0"));
    let response: json::NearbyResponse = serde_json::from_str(&body_str).unwrap();
    let ids: Vec<_> = response.data.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(vec!["near", "close", "far"], ids);
    let distances: Vec<_> = response
        .data
        .iter()
        .map(|t| t.distance.unwrap())
        .collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    assert!(distances.iter().all(|d| *d <= 20.0));
    assert_eq!(3, response.meta.total);
    assert_eq!(48.8566, response.meta.latitude);
}

#[test]
fn nearby_toilets_with_default_radius() {
    let (client, db) = setup();
    seed_toilet(&db, "paris", 48.8567, 2.3523);
    seed_toilet(&db, "toulouse", 43.6043, 1.4437);

    let res = client
        .get("/toilets/nearby?latitude=48.8566&longitude=2.3522")
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let response: json::NearbyResponse =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(1, response.data.len());
    assert_eq!("paris", response.data[0].id);
    assert_eq!(5.0, response.meta.radius_km);
}

#[test]
fn nearby_toilets_with_attribute_filter() {
    let (client, db) = setup();
    db.exclusive()
        .unwrap()
        .create_toilet(
            &Toilet::build()
                .id("free")
                .pos(48.857, 2.353)
                .free(true)
                .finish(),
        )
        .unwrap();
    seed_toilet(&db, "paid", 48.858, 2.354);

    let res = client
        .get("/toilets/nearby?latitude=48.8566&longitude=2.3522&is_free=true")
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body_str = res.into_string().unwrap();
    assert!(body_str.contains("\"free\""));
    assert!(!body_str.contains("\"paid\""));
}

#[test]
fn nearby_toilets_with_invalid_coordinates() {
    let (client, _) = setup();
    let res = client
        .get("/toilets/nearby?latitude=200&longitude=2.3522")
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    let res = client
        .get("/toilets/nearby?latitude=48.8566&longitude=abc")
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    let res = client.get("/toilets/nearby?latitude=48.8566").dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn create_review_only_once() {
    let (client, db) = setup();
    register_user(&db, "foo", "foo@bar.com", "secret1");
    login(&client, "foo@bar.com", "secret1");
    seed_toilet(&db, "t", 48.0, 2.0);

    let res = client
        .post("/reviews")
        .header(ContentType::JSON)
        .body(r#"{"toilet_id":"t","rating":4,"comment":"clean"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let review: json::Review = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(4, review.rating);
    assert_eq!("t", review.toilet_id);

    // A second review for the same toilet is rejected
    let res = client
        .post("/reviews")
        .header(ContentType::JSON)
        .body(r#"{"toilet_id":"t","rating":2}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn create_review_with_invalid_rating() {
    let (client, db) = setup();
    register_user(&db, "foo", "foo@bar.com", "secret1");
    login(&client, "foo@bar.com", "secret1");
    seed_toilet(&db, "t", 48.0, 2.0);

    for rating in [0, 6] {
        let res = client
            .post("/reviews")
            .header(ContentType::JSON)
            .body(format!(r#"{{"toilet_id":"t","rating":{rating}}}"#))
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
    }
}

#[test]
fn create_review_for_unknown_toilet() {
    let (client, db) = setup();
    register_user(&db, "foo", "foo@bar.com", "secret1");
    login(&client, "foo@bar.com", "secret1");

    let res = client
        .post("/reviews")
        .header(ContentType::JSON)
        .body(r#"{"toilet_id":"unknown","rating":4}"#)
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn get_toilet_details_with_reviews_and_pictures() {
    let (client, db) = setup();
    let user = register_user(&db, "rev", "rev@bar.com", "secret1");
    login(&client, "rev@bar.com", "secret1");
    seed_toilet(&db, "t", 48.0, 2.0);
    {
        let conn = db.exclusive().unwrap();
        conn.create_picture(&Picture::build().id("p").toilet_id("t").finish())
            .unwrap();
        conn.create_review(
            &Review::build()
                .id("r")
                .toilet_id("t")
                .user_id(user.id.as_str())
                .rating(5)
                .comment("spotless")
                .finish(),
        )
        .unwrap();
    }

    let res = client.get("/toilets/t").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let details: json::ToiletDetails =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(Some(5.0), details.avg_rating);
    assert_eq!(1, details.review_count);
    assert_eq!(1, details.pictures.len());
    assert_eq!(1, details.reviews.len());
    assert_eq!(
        Some("rev"),
        details.reviews[0].user.as_ref().map(|u| u.name.as_str())
    );
}

#[test]
fn filter_reviews_by_toilet_and_rating() {
    let (client, db) = setup();
    seed_toilet(&db, "a", 48.0, 2.0);
    seed_toilet(&db, "b", 48.1, 2.1);
    {
        let conn = db.exclusive().unwrap();
        conn.create_review(&Review::build().toilet_id("a").rating(5).finish())
            .unwrap();
        conn.create_review(&Review::build().toilet_id("a").rating(2).finish())
            .unwrap();
        conn.create_review(&Review::build().toilet_id("b").rating(4).finish())
            .unwrap();
    }

    let res = client.get("/reviews?toilet_id=a").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let page: json::Paged<json::Review> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(2, page.meta.total);

    let res = client.get("/reviews?toilet_id=a&min_rating=3").dispatch();
    let page: json::Paged<json::Review> =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(1, page.data.len());
    assert_eq!(5, page.data[0].rating);
}

#[test]
fn verify_toilet_requires_admin() {
    let (client, db) = setup();
    seed_toilet(&db, "t", 48.0, 2.0);

    // Anonymous
    let res = client.post("/toilets/t/verify").dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    // Regular users are rejected as well
    register_user(&db, "foo", "foo@bar.com", "secret1");
    login(&client, "foo@bar.com", "secret1");
    let res = client.post("/toilets/t/verify").dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn verify_and_unverify_toilet_as_admin() {
    let (client, db) = setup();
    seed_toilet(&db, "t", 48.0, 2.0);
    register_admin(&db, "admin", "admin@bar.com", "secret1");
    login(&client, "admin@bar.com", "secret1");

    let res = client.post("/toilets/t/verify").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let response: json::VerifyResponse =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(response.toilet.is_verified);
    assert_eq!("Toilet verified successfully", response.message);

    // Verifying twice is not an error
    let res = client.post("/toilets/t/verify").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let response: json::VerifyResponse =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!("Toilet is already verified", response.message);

    let res = client.post("/toilets/t/unverify").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let response: json::VerifyResponse =
        serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert!(!response.toilet.is_verified);
}

#[test]
fn login_logout_and_current_user() {
    let (client, db) = setup();
    register_user(&db, "foo", "foo@bar.com", "secret1");

    // Before login
    let res = client
        .get("/users/current")
        .header(ContentType::JSON)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    // Wrong password
    let res = client
        .post("/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"foo@bar.com","password":"wrong1"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    // Login
    login(&client, "foo@bar.com", "secret1");

    // After login
    let res = client
        .get("/users/current")
        .header(ContentType::JSON)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let current_user: json::User = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!("foo@bar.com", current_user.email);
    assert_eq!(json::UserRole::User, current_user.role);

    // Logout
    let res = client
        .post("/logout")
        .header(ContentType::JSON)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let res = client
        .get("/users/current")
        .header(ContentType::JSON)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn register_a_new_user() {
    let (client, db) = setup();
    let res = client
        .post("/users")
        .header(ContentType::JSON)
        .body(r#"{"name":"foo","email":"foo@bar.com","password":"foo bar"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Created);
    let u = db
        .shared()
        .unwrap()
        .try_get_user_by_email(&"foo@bar.com".parse().unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(u.email.as_str(), "foo@bar.com");
    assert!(u.password.verify("foo bar"));

    // Duplicate registration is rejected
    let res = client
        .post("/users")
        .header(ContentType::JSON)
        .body(r#"{"name":"foo","email":"foo@bar.com","password":"foo bar"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn list_users_requires_admin() {
    let (client, db) = setup();
    register_user(&db, "foo", "foo@bar.com", "secret1");
    login(&client, "foo@bar.com", "secret1");
    let res = client.get("/users").dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn promote_and_demote_a_user() {
    let (client, db) = setup();
    let user = register_user(&db, "foo", "foo@bar.com", "secret1");
    register_admin(&db, "admin", "admin@bar.com", "secret1");
    login(&client, "admin@bar.com", "secret1");

    let res = client
        .post("/users/promote")
        .header(ContentType::JSON)
        .body(format!(r#"{{"id":"{}"}}"#, user.id))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let promoted: json::User = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(json::UserRole::Admin, promoted.role);

    let res = client
        .post("/users/demote")
        .header(ContentType::JSON)
        .body(format!(r#"{{"id":"{}"}}"#, user.id))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let demoted: json::User = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(json::UserRole::User, demoted.role);

    // Unknown users cannot be promoted
    let res = client
        .post("/users/promote")
        .header(ContentType::JSON)
        .body(r#"{"id":"unknown"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn gather_stats() {
    let (client, db) = setup();
    {
        let conn = db.exclusive().unwrap();
        conn.create_toilet(&Toilet::build().id("a").free(true).verified(true).finish())
            .unwrap();
        conn.create_toilet(&Toilet::build().id("b").finish()).unwrap();
        conn.create_review(&Review::build().toilet_id("a").rating(5).finish())
            .unwrap();
        conn.create_review(&Review::build().toilet_id("b").rating(2).finish())
            .unwrap();
    }

    let res = client.get("/stats").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let stats: json::Stats = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(2, stats.total_toilets);
    assert_eq!(1, stats.verified_toilets);
    assert_eq!(2, stats.total_reviews);
    assert_eq!(Some(3.5), stats.avg_rating);
    assert_eq!("a", stats.top_rated[0].toilet.id);
}

#[test]
fn search_toilets_by_coordinates() {
    let (client, db) = setup();
    seed_toilet(&db, "inside", 48.857, 2.353);
    seed_toilet(&db, "outside", 48.9, 2.5);

    let res = client.get("/search?q=48.8566,2.3522").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body_str = res.into_string().unwrap();
    assert!(body_str.contains("\"inside\""));
    assert!(!body_str.contains("\"outside\""));

    // Missing query
    let res = client.get("/search").dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}
