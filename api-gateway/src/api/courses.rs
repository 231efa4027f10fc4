//! Static course listings served for compatibility with existing clients.
//! None of these read their input or keep state.

use axum::{extract::Path, Json};

/// List courses
#[utoipa::path(get, path = "/courses", responses((status = 200, description = "Fixed course list", body = Vec<String>)), tag = "courses")]
pub async fn list_courses() -> Json<Vec<&'static str>> {
    Json(vec!["Curso 1:", "Curso 2:", "Curso 3:", "Curso 4:"])
}

/// Create a course
#[utoipa::path(post, path = "/courses", responses((status = 200, description = "Fixed course list", body = Vec<String>)), tag = "courses")]
pub async fn create_course() -> Json<Vec<&'static str>> {
    Json(vec!["Curso 1:", "Curso 2:", "Curso 3:", "Curso 4:", "Curso 5:"])
}

/// Replace a course
#[utoipa::path(
    put,
    path = "/courses/{id}",
    params(("id" = String, Path, description = "Course ID")),
    responses((status = 200, description = "Fixed course list", body = Vec<String>)),
    tag = "courses"
)]
pub async fn replace_course(Path(_id): Path<String>) -> Json<Vec<&'static str>> {
    Json(vec!["Curso 6:", "Curso 2:", "Curso 3:", "Curso 4:", "Curso 5:"])
}

/// Patch a course
#[utoipa::path(
    patch,
    path = "/courses/{id}",
    params(("id" = String, Path, description = "Course ID")),
    responses((status = 200, description = "Fixed course list", body = Vec<String>)),
    tag = "courses"
)]
pub async fn patch_course(Path(_id): Path<String>) -> Json<Vec<&'static str>> {
    Json(vec!["Curso 6:", "Curso 7:", "Curso 3:", "Curso 4:", "Curso 5:"])
}

/// Delete a course
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(("id" = String, Path, description = "Course ID")),
    responses((status = 200, description = "Fixed course list", body = Vec<String>)),
    tag = "courses"
)]
pub async fn delete_course(Path(_id): Path<String>) -> Json<Vec<&'static str>> {
    Json(vec!["Curso 6:", "Curso 2:", "Curso 4:", "Curso 5:"])
}
