use super::*;

#[get("/")]
pub fn get_api(version: &State<Version>) -> Json<json::ApiInfo> {
    Json(json::ApiInfo {
        name: "openloodb".into(),
        version: version.0.into(),
        description: "API for finding and reviewing public toilets".into(),
        endpoints: vec![
            "/api/toilets".into(),
            "/api/toilets/<id>".into(),
            "/api/toilets/nearby".into(),
            "/api/toilets/<id>/verify".into(),
            "/api/toilets/<id>/unverify".into(),
            "/api/reviews".into(),
            "/api/reviews/<id>".into(),
            "/api/pictures".into(),
            "/api/pictures/<id>".into(),
            "/api/users".into(),
            "/api/users/<id>".into(),
            "/api/search".into(),
            "/api/stats".into(),
        ],
    })
}
