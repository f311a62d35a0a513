use loodb_core::repositories::*;

use super::{prelude as flows, sqlite, usecases, *};

fn setup_connections() -> sqlite::Connections {
    let connections = sqlite::Connections::init(":memory:", 1).unwrap();
    loodb_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
    connections
}

fn default_new_toilet() -> usecases::NewToilet {
    usecases::NewToilet {
        latitude: 48.8566,
        longitude: 2.3522,
        free: true,
        ..Default::default()
    }
}

fn register_default_user(connections: &sqlite::Connections) -> User {
    flows::register_user(
        connections,
        usecases::NewUser {
            name: "foo".into(),
            email: "foo@bar.com".parse().unwrap(),
            password: "secret1".into(),
            image: None,
        },
    )
    .unwrap()
}

#[test]
fn create_and_load_toilet() {
    let connections = setup_connections();
    let toilet = flows::create_toilet(&connections, default_new_toilet()).unwrap();
    let loaded = connections
        .shared()
        .unwrap()
        .get_toilet(toilet.id.as_str())
        .unwrap();
    assert_eq!(toilet, loaded);
}

#[test]
fn delete_toilet_hides_it_from_reads() {
    let connections = setup_connections();
    let toilet = flows::create_toilet(&connections, default_new_toilet()).unwrap();
    flows::delete_toilet(&connections, &toilet.id).unwrap();
    assert!(matches!(
        connections.shared().unwrap().get_toilet(toilet.id.as_str()),
        Err(Error::NotFound)
    ));
    assert_eq!(
        0,
        connections
            .shared()
            .unwrap()
            .count_toilets(&Default::default())
            .unwrap()
    );
}

#[test]
fn verify_toilet_is_idempotent() {
    let connections = setup_connections();
    let toilet = flows::create_toilet(&connections, default_new_toilet()).unwrap();
    let outcome = flows::verify_toilet(&connections, &toilet.id).unwrap();
    assert!(outcome.changed);
    let outcome = flows::verify_toilet(&connections, &toilet.id).unwrap();
    assert!(!outcome.changed);
    assert!(outcome.toilet.verified);
}

#[test]
fn rollback_update_of_unknown_toilet() {
    let connections = setup_connections();
    let update = usecases::UpdateToilet {
        latitude: Some(1.0),
        ..Default::default()
    };
    assert!(flows::update_toilet(&connections, &"unknown".into(), update).is_err());
}

#[test]
fn create_review_only_once_per_user() {
    let connections = setup_connections();
    let toilet = flows::create_toilet(&connections, default_new_toilet()).unwrap();
    let user = register_default_user(&connections);

    let new_review = usecases::NewReview {
        toilet_id: toilet.id.clone(),
        user_id: user.id.clone(),
        rating: 4,
        comment: Some("clean".into()),
    };
    let review = flows::create_review(&connections, new_review.clone()).unwrap();
    assert_eq!(
        vec![review],
        connections
            .shared()
            .unwrap()
            .all_reviews(
                &ReviewFilter {
                    toilet_id: Some(toilet.id.clone()),
                    ..Default::default()
                },
                &Pagination::default()
            )
            .unwrap()
    );

    // The second review of the same user for the same toilet
    // must be rejected.
    assert!(flows::create_review(&connections, new_review).is_err());
    assert_eq!(
        1,
        connections
            .shared()
            .unwrap()
            .count_reviews(&Default::default())
            .unwrap()
    );
}

#[test]
fn promote_and_demote_user() {
    let connections = setup_connections();
    let user = register_default_user(&connections);
    let admin = User::build().role(Role::Admin).finish();

    let promoted = flows::change_user_role(&connections, &admin, &user.id, Role::Admin).unwrap();
    assert_eq!(Role::Admin, promoted.role);

    let demoted = flows::change_user_role(&connections, &admin, &user.id, Role::User).unwrap();
    assert_eq!(Role::User, demoted.role);
}
