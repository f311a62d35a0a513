use std::{fmt::Display, result};

use rocket::{
    self, delete, get,
    http::{Cookie, CookieJar, Status},
    post, put,
    response::{self, status::Created, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use loodb_application::{error::AppError, prelude as flows};
use loodb_boundary::Error as JsonErrorResponse;
use loodb_core::{
    entities::*,
    repositories::{
        Pagination, PictureFilter, PictureRepo, ReviewFilter, ReviewRepo, ToiletFilter, ToiletRepo,
        UserFilter, UserRepo,
    },
    usecases,
};

use super::{guards::*, sqlite};
use crate::adapters::json::{self, from_json, to_json};

mod error;
mod pictures;
mod reviews;
mod search;
mod stats;
mod toilets;
mod users;
mod util;

pub use self::error::{Error as ApiError, ParameterError, RepoError};

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type CreatedResult<T> = result::Result<Created<Json<T>>, ApiError>;

// Default page size of paginated collection responses.
const DEFAULT_LIMIT: u64 = 10;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   toilets   --- //
        toilets::get_toilets,
        toilets::get_toilets_nearby,
        toilets::get_toilet,
        toilets::post_toilet,
        toilets::put_toilet,
        toilets::delete_toilet,
        toilets::post_toilet_verify,
        toilets::post_toilet_unverify,
        // ---   reviews   --- //
        reviews::get_reviews,
        reviews::get_review,
        reviews::post_review,
        reviews::delete_review,
        // ---   pictures   --- //
        pictures::get_pictures,
        pictures::get_picture,
        pictures::post_picture,
        pictures::delete_picture,
        // ---   users   --- //
        users::post_login,
        users::post_logout,
        users::post_user,
        users::get_current_user,
        users::get_users,
        users::get_user,
        users::post_promote_user,
        users::post_demote_user,
        users::delete_user,
        // ---   misc   --- //
        search::get_search,
        stats::get_stats,
        util::get_api,
    ]
}

fn pagination(offset: Option<u64>, limit: Option<u64>) -> Pagination {
    Pagination {
        offset,
        limit: Some(limit.unwrap_or(DEFAULT_LIMIT)),
    }
}

fn page_meta(total: u64, pagination: &Pagination) -> json::PageMeta {
    json::PageMeta {
        total,
        offset: pagination.offset.unwrap_or(0),
        limit: pagination.limit.unwrap_or(DEFAULT_LIMIT),
    }
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
