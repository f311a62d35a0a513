use super::*;

#[get("/pictures?<toilet_id>&<limit>&<offset>")]
pub fn get_pictures(
    db: sqlite::Connections,
    toilet_id: Option<String>,
    limit: Option<u64>,
    offset: Option<u64>,
) -> Result<json::Paged<json::Picture>> {
    let filter = PictureFilter {
        toilet_id: toilet_id.map(Into::into),
    };
    let pagination = pagination(offset, limit);
    let db = db.shared()?;
    let total = db.count_pictures(&filter)?;
    let data = db
        .all_pictures(&filter, &pagination)?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(json::Paged {
        data,
        meta: page_meta(total, &pagination),
    }))
}

#[get("/pictures/<id>")]
pub fn get_picture(db: sqlite::Connections, id: String) -> Result<json::Picture> {
    let db = db.shared()?;
    Ok(Json(db.get_picture(&id)?.into()))
}

#[post("/pictures", format = "application/json", data = "<new_picture>")]
pub fn post_picture(
    db: sqlite::Connections,
    _account: Account,
    new_picture: JsonResult<json::NewPicture>,
) -> CreatedResult<json::Picture> {
    let new_picture = from_json::new_picture(new_picture?.into_inner());
    let picture = flows::create_picture(&db, new_picture)?;
    let location = format!("/pictures/{}", picture.id);
    Ok(Created::new(location).body(Json(picture.into())))
}

#[delete("/pictures/<id>")]
pub fn delete_picture(db: sqlite::Connections, _account: Account, id: String) -> Result<()> {
    flows::delete_picture(&db, &id.into())?;
    Ok(Json(()))
}
