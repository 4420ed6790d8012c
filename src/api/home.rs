use actix_web::{get, web, HttpResponse};

use super::error::AppError;
use crate::views::{render, HomeView};

#[get("/")]
async fn home() -> Result<HttpResponse, AppError> {
    render(HomeView)
}

pub fn home_config(config: &mut web::ServiceConfig) {
    config.service(home);
}
