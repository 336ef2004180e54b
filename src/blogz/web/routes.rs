use super::error::WebError;
use super::forms::PostForm;
use super::pages::Pages;
use crate::api::DynBlogApi;
use rocket::form::Form;
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::{get, post, routes, uri, Route, State};
use tracing::debug;

pub fn routes() -> Vec<Route> {
    routes![index, add_form, add, delete, update_form, update]
}

#[get("/")]
pub fn index(api: &State<DynBlogApi>, pages: &State<Pages>) -> Result<RawHtml<String>, WebError> {
    let result = api.list_posts()?;
    Ok(RawHtml(pages.index(&result.listed_posts)?))
}

#[get("/add")]
pub fn add_form(pages: &State<Pages>) -> Result<RawHtml<String>, WebError> {
    Ok(RawHtml(pages.add()?))
}

#[post("/add", data = "<form>")]
pub fn add(form: Form<PostForm>, api: &State<DynBlogApi>) -> Result<Redirect, WebError> {
    api.create_post(form.into_inner().into())?;
    Ok(Redirect::to(uri!(index)))
}

#[get("/delete/<id>")]
pub fn delete(id: u64, api: &State<DynBlogApi>) -> Result<Redirect, WebError> {
    api.delete_post(id)?;
    Ok(Redirect::to(uri!(index)))
}

#[get("/update/<id>")]
pub fn update_form(
    id: u64,
    api: &State<DynBlogApi>,
    pages: &State<Pages>,
) -> Result<RawHtml<String>, WebError> {
    let post = api.get_post(id)?;
    debug!(id, "rendering update form");
    Ok(RawHtml(pages.update(&post)?))
}

#[post("/update/<id>", data = "<form>")]
pub fn update(
    id: u64,
    form: Form<PostForm>,
    api: &State<DynBlogApi>,
) -> Result<Redirect, WebError> {
    api.update_post(id, form.into_inner().into())?;
    Ok(Redirect::to(uri!(index)))
}
